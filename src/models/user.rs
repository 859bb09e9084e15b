use serde::{Deserialize, Deserializer, Serialize};

/// 系统角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum SystemRole {
    /// 学生
    #[default]
    Student,
    /// 助教
    Tutor,
    /// 课程负责人
    Convenor,
    /// 管理员
    Admin,
}

impl SystemRole {
    /// 获取 API 使用的名称
    pub fn name(self) -> &'static str {
        match self {
            SystemRole::Student => "Student",
            SystemRole::Tutor => "Tutor",
            SystemRole::Convenor => "Convenor",
            SystemRole::Admin => "Admin",
        }
    }

    /// 从 API 名称解析角色，无法识别时视为学生
    pub fn from_api_name(s: &str) -> Self {
        match s.trim() {
            "Tutor" => SystemRole::Tutor,
            "Convenor" => SystemRole::Convenor,
            "Admin" => SystemRole::Admin,
            _ => SystemRole::Student,
        }
    }

    /// 是否可以担任单元负责人
    pub fn can_convene(self) -> bool {
        matches!(self, SystemRole::Convenor | SystemRole::Admin)
    }
}

impl<'de> Deserialize<'de> for SystemRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SystemRole::from_api_name(&s))
    }
}

/// 用户引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub system_role: SystemRole,
}

impl UserRef {
    pub fn new(id: u64, name: impl Into<String>, system_role: SystemRole) -> Self {
        Self {
            id,
            name: name.into(),
            system_role,
        }
    }

    /// 按 id 判断是否为同一用户
    pub fn same_user(&self, other: &UserRef) -> bool {
        self.id == other.id
    }
}
