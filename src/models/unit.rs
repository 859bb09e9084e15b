use crate::models::user::UserRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 单元中的员工角色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRole {
    pub id: u64,
    pub user: UserRef,
    #[serde(default)]
    pub role: String,
}

/// 教学单元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u64,
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// 所属教学周期（独立日期的单元为 None）
    #[serde(default)]
    pub teaching_period_id: Option<u64>,
    pub start_date: NaiveDate,
    /// 指定的主负责人角色
    #[serde(default)]
    pub main_convenor: Option<UnitRole>,
    /// 记录的主负责人用户
    #[serde(default)]
    pub main_convenor_user: Option<UserRef>,
}

impl Unit {
    /// 代码 + 周期的显示文本
    pub fn code_and_period(&self) -> String {
        match self.teaching_period_id {
            Some(period_id) => format!("{} - TP{} ({})", self.code, period_id, self.start_date),
            None => format!("{} - {}", self.code, self.start_date),
        }
    }

    /// 当前主负责人用户
    pub fn current_convenor(&self) -> Option<&UserRef> {
        self.main_convenor
            .as_ref()
            .map(|role| &role.user)
            .or(self.main_convenor_user.as_ref())
    }
}
