//! 外部能力接口
//!
//! 导入流程只通过这些 trait 访问服务端，具体实现见 `clients::DoubtfireClient`，
//! 测试中使用内存实现。

use crate::error::{CatalogLoadError, ConvenorChangeError, RolloverError, StaffAssignError};
use crate::models::{TeachingPeriod, Unit, UnitRole, UserRef};
use std::future::Future;

/// 单元目录
pub trait CatalogLookup {
    /// 全部可导入的单元（包括非活跃单元）
    fn all_units(&self) -> impl Future<Output = Result<Vec<Unit>, CatalogLoadError>> + Send;
}

/// 员工目录
pub trait StaffDirectory {
    /// 全部教学员工
    fn tutors(&self) -> impl Future<Output = Result<Vec<UserRef>, CatalogLoadError>> + Send;
}

/// 教学周期查询
pub trait PeriodLookup {
    fn teaching_period(
        &self,
        teaching_period_id: u64,
    ) -> impl Future<Output = Result<TeachingPeriod, CatalogLoadError>> + Send;
}

/// 单元操作（有副作用）
pub trait UnitOperations {
    /// 将源单元滚动到目标教学周期，返回新单元
    fn rollover_to(
        &self,
        unit: &Unit,
        teaching_period_id: u64,
    ) -> impl Future<Output = Result<Unit, RolloverError>> + Send;

    /// 在目标教学周期中新建单元
    fn create_unit(
        &self,
        code: &str,
        teaching_period_id: u64,
    ) -> impl Future<Output = Result<Unit, RolloverError>> + Send;

    /// 将用户以指定角色加入单元
    fn add_staff(
        &self,
        unit: &Unit,
        user: &UserRef,
        role: &str,
    ) -> impl Future<Output = Result<UnitRole, StaffAssignError>> + Send;

    /// 设置单元的主负责人
    fn change_main_convenor(
        &self,
        unit: &Unit,
        staff_role: &UnitRole,
    ) -> impl Future<Output = Result<(), ConvenorChangeError>> + Send;
}
