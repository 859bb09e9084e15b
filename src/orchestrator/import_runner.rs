//! 顺序导入执行器 - 编排层
//!
//! ## 职责
//!
//! 按插入顺序逐个处理导入队列，一个单元完全结束（成功或失败）后才开始下一个。
//!
//! ## 核心功能
//!
//! 1. **顺序执行**：同一时间只有一个 rollover 请求
//! 2. **失败继续**：某个单元失败不影响后续单元，不重试、不回滚
//! 3. **结果记录**：每个候选项的结果只写一次
//! 4. **后台任务**：负责人分配在后台进行，收集句柄供调用方等待

use crate::models::{ImportOutcome, TeachingPeriod};
use crate::services::{ImportQueue, UnitOperations};
use crate::utils::logging::log_entry_start;
use crate::workflow::{ConvenorAssignment, ImportCtx, RolloverFlow};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// 导入汇总
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub pending: usize,
}

impl ImportSummary {
    /// 从队列中各行的结果统计
    pub fn from_queue(queue: &ImportQueue) -> Self {
        let mut summary = Self {
            total: queue.len(),
            ..Default::default()
        };
        for candidate in queue.entries() {
            match candidate.outcome() {
                ImportOutcome::Succeeded => summary.succeeded += 1,
                ImportOutcome::Failed => summary.failed += 1,
                ImportOutcome::Pending => summary.pending += 1,
            }
        }
        summary
    }
}

/// 负责人分配统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvenorStats {
    pub assigned: usize,
    pub failed: usize,
}

/// 一次执行的结果
#[derive(Debug)]
pub struct RunReport {
    pub summary: ImportSummary,
    /// (单元代码, 后台负责人分配任务)
    pub convenor_tasks: Vec<(String, JoinHandle<ConvenorAssignment>)>,
}

/// 顺序导入执行器
pub struct ImportRunner<S> {
    flow: RolloverFlow<S>,
}

impl<S> ImportRunner<S>
where
    S: UnitOperations + Send + Sync + 'static,
{
    pub fn new(flow: RolloverFlow<S>) -> Self {
        Self { flow }
    }

    /// 处理整个队列
    ///
    /// 已有结果的候选项会被跳过，所以重复执行只会处理剩下的 Pending 项
    pub async fn run(&self, queue: &mut ImportQueue, period: &TeachingPeriod) -> RunReport {
        let total = queue.len();
        let mut convenor_tasks = Vec::new();

        for index in 0..total {
            let ctx = ImportCtx::new(period.id, index + 1, total);

            let result = {
                let candidate = &queue.entries()[index];
                if !candidate.is_pending() {
                    debug!("{} {} 已处理，跳过", ctx, candidate.code);
                    continue;
                }
                log_entry_start(ctx.index, total, &candidate.code);
                self.flow.run(candidate, &ctx).await
            };

            let Some(candidate) = queue.entry_mut(index) else {
                break;
            };
            if let Err(e) = candidate.resolve(result.outcome) {
                warn!("{} {}", ctx, e);
            }
            if let Some(task) = result.convenor_task {
                convenor_tasks.push((candidate.code.clone(), task));
            }
        }

        RunReport {
            summary: ImportSummary::from_queue(queue),
            convenor_tasks,
        }
    }
}

/// 等待所有后台负责人分配结束
pub async fn wait_for_convenors(
    tasks: Vec<(String, JoinHandle<ConvenorAssignment>)>,
) -> ConvenorStats {
    let (codes, handles): (Vec<String>, Vec<_>) = tasks.into_iter().unzip();
    let results = futures::future::join_all(handles).await;

    let mut stats = ConvenorStats::default();
    for (code, result) in codes.iter().zip(results) {
        match result {
            Ok(ConvenorAssignment::Assigned) => stats.assigned += 1,
            Ok(_) => stats.failed += 1,
            Err(e) => {
                error!("[{}] 负责人分配任务执行失败: {}", code, e);
                stats.failed += 1;
            }
        }
    }
    stats
}
