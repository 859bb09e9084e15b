//! 单元导入上下文
//!
//! 封装"我正在把第几个单元导入到哪个教学周期"这一信息

use std::fmt::Display;

/// 单元导入上下文
#[derive(Debug, Clone)]
pub struct ImportCtx {
    /// 目标教学周期ID
    pub teaching_period_id: u64,

    /// 在队列中的索引（从1开始，仅用于日志显示）
    pub index: usize,

    /// 队列长度
    pub total: usize,
}

impl ImportCtx {
    pub fn new(teaching_period_id: u64, index: usize, total: usize) -> Self {
        Self {
            teaching_period_id,
            index,
            total,
        }
    }
}

impl Display for ImportCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[单元 {}/{}]", self.index, self.total)
    }
}
