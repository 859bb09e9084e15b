//! 负责人候选服务
//!
//! 只负责"哪些员工可以担任负责人"，不关心导入流程

use crate::models::UserRef;

/// 负责人下拉选项
#[derive(Debug, Clone, PartialEq)]
pub struct StaffOption {
    pub value: UserRef,
    pub text: String,
}

/// 负责人候选服务
#[derive(Debug, Default)]
pub struct StaffService;

impl StaffService {
    pub fn new() -> Self {
        Self
    }

    /// 过滤出系统角色为 Convenor / Admin 的员工
    pub fn convenor_options(&self, tutors: &[UserRef]) -> Vec<StaffOption> {
        tutors
            .iter()
            .filter(|s| s.system_role.can_convene())
            .map(|s| StaffOption {
                value: s.clone(),
                text: s.name.clone(),
            })
            .collect()
    }
}
