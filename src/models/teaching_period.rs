use crate::models::unit::Unit;
use serde::{Deserialize, Serialize};

/// 教学周期
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachingPeriod {
    pub id: u64,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub year: i32,
    /// 周期内已有的单元
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl TeachingPeriod {
    pub fn new(id: u64, period: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            period: period.into(),
            year,
            units: Vec::new(),
        }
    }

    /// 周期内是否已有与给定单元同代码的单元
    pub fn has_unit_like(&self, unit: &Unit) -> bool {
        self.units.iter().any(|u| u.code == unit.code)
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.period, self.year)
    }
}
