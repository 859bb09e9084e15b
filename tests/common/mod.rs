//! 测试用的内存服务端

#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use unit_rollover_import::error::{
    CatalogLoadError, ConvenorChangeError, RolloverError, StaffAssignError,
};
use unit_rollover_import::models::{SystemRole, TeachingPeriod, Unit, UnitRole, UserRef};
use unit_rollover_import::services::{CatalogLookup, PeriodLookup, StaffDirectory, UnitOperations};
use unit_rollover_import::Config;

pub fn unit(id: u64, code: &str, year: i32) -> Unit {
    Unit {
        id,
        code: code.to_string(),
        name: format!("Unit {}", code),
        teaching_period_id: None,
        start_date: NaiveDate::from_ymd_opt(year, 3, 1).unwrap(),
        main_convenor: None,
        main_convenor_user: None,
    }
}

pub fn convenor(id: u64, name: &str) -> UserRef {
    UserRef::new(id, name, SystemRole::Convenor)
}

/// 指向临时目录的配置
pub fn test_config(name: &str) -> Config {
    let dir = std::env::temp_dir();
    Config {
        output_log_file: dir
            .join(format!("{}_{}_output.txt", name, std::process::id()))
            .to_string_lossy()
            .to_string(),
        import_log_file: dir
            .join(format!("{}_{}_errors.txt", name, std::process::id()))
            .to_string_lossy()
            .to_string(),
        ..Config::default()
    }
}

/// 内存服务端
#[derive(Default)]
pub struct FakeServer {
    pub catalog: Vec<Unit>,
    pub tutors: Vec<UserRef>,
    pub period: Option<TeachingPeriod>,
    pub fail_catalog: bool,
    pub fail_rollover: HashSet<String>,
    pub fail_add_staff: bool,
    pub fail_change_convenor: bool,
    /// 新单元沿用源单元记录的负责人
    pub carry_convenor: bool,
    pub calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    next_id: AtomicU64,
}

impl FakeServer {
    pub fn new(catalog: Vec<Unit>) -> Self {
        Self {
            catalog,
            period: Some(TeachingPeriod::new(99, "T1", 2026)),
            next_id: AtomicU64::new(1000),
            ..Default::default()
        }
    }

    pub fn failing_rollover(mut self, code: &str) -> Self {
        self.fail_rollover.insert(code.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn slow_call(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    fn new_unit(&self, code: &str, teaching_period_id: u64, convenor: Option<UserRef>) -> Unit {
        Unit {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            code: code.to_string(),
            name: format!("Unit {}", code),
            teaching_period_id: Some(teaching_period_id),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            main_convenor: None,
            main_convenor_user: convenor,
        }
    }
}

impl CatalogLookup for FakeServer {
    async fn all_units(&self) -> Result<Vec<Unit>, CatalogLoadError> {
        if self.fail_catalog {
            return Err(CatalogLoadError {
                message: "503 Service Unavailable".to_string(),
            });
        }
        Ok(self.catalog.clone())
    }
}

impl StaffDirectory for FakeServer {
    async fn tutors(&self) -> Result<Vec<UserRef>, CatalogLoadError> {
        Ok(self.tutors.clone())
    }
}

impl PeriodLookup for FakeServer {
    async fn teaching_period(&self, teaching_period_id: u64) -> Result<TeachingPeriod, CatalogLoadError> {
        self.period
            .clone()
            .filter(|p| p.id == teaching_period_id)
            .ok_or_else(|| CatalogLoadError {
                message: format!("teaching period {} not found", teaching_period_id),
            })
    }
}

impl UnitOperations for FakeServer {
    async fn rollover_to(&self, unit: &Unit, teaching_period_id: u64) -> Result<Unit, RolloverError> {
        self.record(format!("rollover:{}", unit.code));
        self.slow_call().await;

        if self.fail_rollover.contains(&unit.code) {
            return Err(RolloverError {
                code: unit.code.clone(),
                teaching_period_id,
                message: "422 Unprocessable Entity".to_string(),
            });
        }

        let carried = if self.carry_convenor {
            unit.main_convenor_user.clone()
        } else {
            None
        };
        Ok(self.new_unit(&unit.code, teaching_period_id, carried))
    }

    async fn create_unit(&self, code: &str, teaching_period_id: u64) -> Result<Unit, RolloverError> {
        self.record(format!("create:{}", code));
        self.slow_call().await;

        if self.fail_rollover.contains(code) {
            return Err(RolloverError {
                code: code.to_string(),
                teaching_period_id,
                message: "422 Unprocessable Entity".to_string(),
            });
        }
        Ok(self.new_unit(code, teaching_period_id, None))
    }

    async fn add_staff(&self, unit: &Unit, user: &UserRef, role: &str) -> Result<UnitRole, StaffAssignError> {
        self.record(format!("add_staff:{}:{}", unit.code, user.id));
        if self.fail_add_staff {
            return Err(StaffAssignError {
                code: unit.code.clone(),
                user: user.name.clone(),
                message: "403 Forbidden".to_string(),
            });
        }
        Ok(UnitRole {
            id: user.id + 500,
            user: user.clone(),
            role: role.to_string(),
        })
    }

    async fn change_main_convenor(&self, unit: &Unit, staff_role: &UnitRole) -> Result<(), ConvenorChangeError> {
        self.record(format!("change_convenor:{}:{}", unit.code, staff_role.id));
        if self.fail_change_convenor {
            return Err(ConvenorChangeError {
                code: unit.code.clone(),
                user: staff_role.user.name.clone(),
                message: "500 Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}
