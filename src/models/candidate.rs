//! 导入候选项
//!
//! 队列中的一行：用户输入的单元代码 + 推测的源单元 + 建议的负责人

use crate::error::ImportError;
use crate::models::unit::Unit;
use crate::models::user::UserRef;
use std::fmt;

/// 滚动导入的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportOutcome {
    /// 尚未处理
    #[default]
    Pending,
    /// 导入成功
    Succeeded,
    /// 导入失败
    Failed,
}

/// 可供选择的源单元
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedUnit {
    pub unit: Unit,
    pub label: String,
}

impl RelatedUnit {
    pub fn new(unit: Unit) -> Self {
        let label = unit.code_and_period();
        Self { unit, label }
    }
}

/// 导入候选项
#[derive(Debug, Clone, PartialEq)]
pub struct ImportCandidate {
    /// 用户输入的代码（队列内唯一）
    pub code: String,
    /// 源单元，None 表示在目标周期新建单元（只能来自单元目录）
    source_unit: Option<Unit>,
    /// 建议的负责人
    pub convenor: Option<UserRef>,
    /// 所有匹配的源单元，开始日期从新到旧
    pub candidate_matches: Vec<RelatedUnit>,
    outcome: ImportOutcome,
}

impl ImportCandidate {
    pub fn new(
        code: impl Into<String>,
        source_unit: Option<Unit>,
        convenor: Option<UserRef>,
        candidate_matches: Vec<RelatedUnit>,
    ) -> Self {
        Self {
            code: code.into(),
            source_unit,
            convenor,
            candidate_matches,
            outcome: ImportOutcome::Pending,
        }
    }

    /// 源单元，None 表示在目标周期新建单元
    pub fn source_unit(&self) -> Option<&Unit> {
        self.source_unit.as_ref()
    }

    /// 只由队列在 `candidate_matches` 中选择后调用
    pub(crate) fn set_source_unit(&mut self, unit: Unit) {
        self.source_unit = Some(unit);
    }

    pub fn outcome(&self) -> ImportOutcome {
        self.outcome
    }

    pub fn is_pending(&self) -> bool {
        self.outcome == ImportOutcome::Pending
    }

    /// 记录导入结果，只允许从 Pending 转出一次
    pub fn resolve(&mut self, outcome: ImportOutcome) -> Result<(), ImportError> {
        if outcome == ImportOutcome::Pending {
            return Err(ImportError::InvalidTransition {
                code: self.code.clone(),
            });
        }
        if !self.is_pending() {
            return Err(ImportError::AlreadyResolved {
                code: self.code.clone(),
            });
        }
        self.outcome = outcome;
        Ok(())
    }
}

/// 导入状态（显示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Done,
    Error,
    CreateNew,
    AlreadyPresent,
    Duplicate,
    Awaiting,
}

impl ImportStatus {
    pub fn label(self) -> &'static str {
        match self {
            ImportStatus::Done => "Done",
            ImportStatus::Error => "Error — check log",
            ImportStatus::CreateNew => "Create new unit",
            ImportStatus::AlreadyPresent => "Skip — already present",
            ImportStatus::Duplicate => "Duplicate — source unit appears twice",
            ImportStatus::Awaiting => "Awaiting import",
        }
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
