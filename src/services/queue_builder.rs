//! 导入队列构建 - 业务能力层
//!
//! 把用户输入的逗号分隔代码转成导入候选队列，并为每个代码推测源单元和负责人

use crate::error::ImportError;
use crate::models::{ImportCandidate, RelatedUnit, Unit, UserRef};
use tracing::debug;

/// 导入队列
///
/// 按插入顺序保存候选项，代码唯一（先到先得）
#[derive(Debug, Clone, Default)]
pub struct ImportQueue {
    entries: Vec<ImportCandidate>,
}

impl ImportQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ImportCandidate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&ImportCandidate> {
        self.entries.iter().find(|c| c.code == code)
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> Option<&mut ImportCandidate> {
        self.entries.get_mut(index)
    }

    fn get_mut(&mut self, code: &str) -> Result<&mut ImportCandidate, ImportError> {
        self.entries
            .iter_mut()
            .find(|c| c.code == code)
            .ok_or_else(|| ImportError::UnknownCode {
                code: code.to_string(),
            })
    }

    /// 按逗号分隔的代码添加候选项
    ///
    /// # 参数
    /// - `input`: 用户输入，如 `"COS10001, COS20007"`
    /// - `catalog`: 可导入的单元目录
    ///
    /// # 返回
    /// 本次新增的候选项数量（已存在的代码会被忽略）
    pub fn add_codes(&mut self, input: &str, catalog: &[Unit]) -> usize {
        let mut added = 0;

        for code in input.split(',').map(str::trim) {
            if code.is_empty() {
                continue;
            }
            if self.get(code).is_some() {
                debug!("代码 {} 已在队列中，跳过", code);
                continue;
            }

            let candidate_matches = related_units(code, catalog);
            let source_unit = candidate_matches.first().map(|m| m.unit.clone());
            let convenor = source_unit.as_ref().and_then(convenor_for);

            debug!(
                "添加 {}: 匹配 {} 个单元, 源单元 {:?}",
                code,
                candidate_matches.len(),
                source_unit.as_ref().map(|u| u.code.as_str())
            );

            self.entries.push(ImportCandidate::new(
                code,
                source_unit,
                convenor,
                candidate_matches,
            ));
            added += 1;
        }

        added
    }

    /// 从队列中移除一个候选项
    pub fn remove(&mut self, code: &str) -> Option<ImportCandidate> {
        let index = self.entries.iter().position(|c| c.code == code)?;
        Some(self.entries.remove(index))
    }

    /// 手动选择源单元（`candidate_matches` 中的索引），同时重新推测负责人
    pub fn select_source_unit(&mut self, code: &str, match_index: usize) -> Result<(), ImportError> {
        let candidate = self.get_mut(code)?;
        let unit = candidate
            .candidate_matches
            .get(match_index)
            .map(|m| m.unit.clone())
            .ok_or_else(|| ImportError::MatchOutOfRange {
                code: code.to_string(),
                index: match_index,
                len: candidate.candidate_matches.len(),
            })?;

        candidate.convenor = convenor_for(&unit);
        candidate.set_source_unit(unit);
        Ok(())
    }

    /// 手动指定负责人
    pub fn set_convenor(&mut self, code: &str, convenor: Option<UserRef>) -> Result<(), ImportError> {
        self.get_mut(code)?.convenor = convenor;
        Ok(())
    }
}

/// 查找与代码相关的单元
///
/// 单元代码包含输入代码，或输入代码包含单元代码，都算匹配
/// （例如 `COS10001` 与 `COS10001_2024`）。结果按开始日期从新到旧排列。
pub fn related_units(code: &str, catalog: &[Unit]) -> Vec<RelatedUnit> {
    let mut matches: Vec<&Unit> = catalog
        .iter()
        .filter(|u| u.code.contains(code) || code.contains(u.code.as_str()))
        .collect();

    // sort_by 是稳定排序，同一天开始的单元保持目录顺序
    matches.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    matches.into_iter().cloned().map(RelatedUnit::new).collect()
}

/// 从源单元推测负责人：优先指定的主负责人角色，其次记录的主负责人用户
pub fn convenor_for(unit: &Unit) -> Option<UserRef> {
    unit.current_convenor().cloned()
}
