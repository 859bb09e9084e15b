//! 导入状态推导
//!
//! 纯函数：根据候选项、整个队列和目标周期得出显示状态。
//! 结果检查必须排在结构检查之前，已完成的重复项显示 Done。

use crate::models::{ImportCandidate, ImportOutcome, ImportStatus, TeachingPeriod};

/// 计算单个候选项的状态
pub fn candidate_status(
    candidate: &ImportCandidate,
    queue: &[ImportCandidate],
    period: &TeachingPeriod,
) -> ImportStatus {
    match candidate.outcome() {
        ImportOutcome::Succeeded => return ImportStatus::Done,
        ImportOutcome::Failed => return ImportStatus::Error,
        ImportOutcome::Pending => {}
    }

    let Some(source) = candidate.source_unit() else {
        return ImportStatus::CreateNew;
    };

    if period.has_unit_like(source) {
        return ImportStatus::AlreadyPresent;
    }

    let same_source = queue
        .iter()
        .filter(|c| c.source_unit().is_some_and(|u| u.code == source.code))
        .count();
    if same_source > 1 {
        return ImportStatus::Duplicate;
    }

    ImportStatus::Awaiting
}
