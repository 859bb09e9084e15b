//! 单元滚动流程 - 流程层
//!
//! 核心职责：定义"一个单元"的完整导入流程
//!
//! 流程顺序：
//! 1. rollover（没有源单元时新建）→ 记录结果
//! 2. 成功且需要换负责人时：add_staff → change_main_convenor（后台任务，不阻塞队列）

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::models::{ImportCandidate, ImportOutcome, Unit, UserRef};
use crate::services::{ImportLogWriter, UnitOperations};
use crate::workflow::import_ctx::ImportCtx;

/// 负责人分配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvenorAssignment {
    /// 已设为主负责人
    Assigned,
    /// 添加员工失败
    StaffFailed,
    /// 已加入单元，但设置主负责人失败
    ConvenorFailed,
}

/// 单个单元的处理结果
#[derive(Debug)]
pub struct FlowResult {
    pub outcome: ImportOutcome,
    /// 后台进行中的负责人分配
    pub convenor_task: Option<JoinHandle<ConvenorAssignment>>,
}

/// 单元滚动流程
///
/// - 编排单个单元的滚动和负责人分配
/// - 不持有队列
/// - 只依赖业务能力（services）
pub struct RolloverFlow<S> {
    ops: Arc<S>,
    log_writer: ImportLogWriter,
}

impl<S> RolloverFlow<S>
where
    S: UnitOperations + Send + Sync + 'static,
{
    pub fn new(ops: Arc<S>, log_writer: ImportLogWriter) -> Self {
        Self { ops, log_writer }
    }

    pub async fn run(&self, candidate: &ImportCandidate, ctx: &ImportCtx) -> FlowResult {
        let result = match candidate.source_unit() {
            Some(source) => {
                info!(
                    "{} 🔄 {} 滚动到教学周期 {}...",
                    ctx,
                    source.code,
                    ctx.teaching_period_id
                );
                self.ops.rollover_to(source, ctx.teaching_period_id).await
            }
            None => {
                info!("{} 🆕 未找到源单元，新建 {}...", ctx, candidate.code);
                self.ops
                    .create_unit(&candidate.code, ctx.teaching_period_id)
                    .await
            }
        };

        let new_unit = match result {
            Ok(unit) => unit,
            Err(e) => {
                error!("{} ❌ {}", ctx, e);
                self.record_failure(&candidate.code, "rollover", &e.to_string());
                return FlowResult {
                    outcome: ImportOutcome::Failed,
                    convenor_task: None,
                };
            }
        };

        info!("{} ✓ 已创建 {} (id: {})", ctx, new_unit.code, new_unit.id);

        let convenor_task = match candidate.convenor.as_ref() {
            Some(convenor) if needs_convenor_change(&new_unit, convenor) => {
                let ops = Arc::clone(&self.ops);
                let log_writer = self.log_writer.clone();
                let convenor = convenor.clone();
                Some(tokio::spawn(assign_convenor(
                    ops, new_unit, convenor, log_writer,
                )))
            }
            _ => None,
        };

        FlowResult {
            outcome: ImportOutcome::Succeeded,
            convenor_task,
        }
    }

    fn record_failure(&self, code: &str, step: &str, message: &str) {
        if let Err(e) = self.log_writer.write(code, step, message) {
            warn!("无法写入失败记录 {}: {}", self.log_writer.path(), e);
        }
    }
}

/// 新单元当前的主负责人不是建议人选时才需要更换
fn needs_convenor_change(new_unit: &Unit, convenor: &UserRef) -> bool {
    new_unit
        .current_convenor()
        .map_or(true, |current| !current.same_user(convenor))
}

/// 把用户加入新单元并设为主负责人
///
/// 失败只记录日志，不重试，也不影响单元的导入结果
async fn assign_convenor<S>(
    ops: Arc<S>,
    unit: Unit,
    convenor: UserRef,
    log_writer: ImportLogWriter,
) -> ConvenorAssignment
where
    S: UnitOperations + Send + Sync + 'static,
{
    let role = match ops.add_staff(&unit, &convenor, "Convenor").await {
        Ok(role) => role,
        Err(e) => {
            error!("❌ {}", e);
            if let Err(write_err) = log_writer.write(&unit.code, "add_staff", &e.to_string()) {
                warn!("无法写入失败记录: {}", write_err);
            }
            return ConvenorAssignment::StaffFailed;
        }
    };
    info!("👤 已将 {} 加入 {}", convenor.name, unit.code);

    match ops.change_main_convenor(&unit, &role).await {
        Ok(()) => {
            info!("👤 已将 {} 设为 {} 的主负责人", convenor.name, unit.code);
            ConvenorAssignment::Assigned
        }
        Err(e) => {
            error!("❌ {}", e);
            if let Err(write_err) =
                log_writer.write(&unit.code, "change_convenor", &e.to_string())
            {
                warn!("无法写入失败记录: {}", write_err);
            }
            ConvenorAssignment::ConvenorFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SystemRole, UnitRole};
    use chrono::NaiveDate;

    fn unit_with_convenor(convenor: Option<UserRef>) -> Unit {
        Unit {
            id: 1,
            code: "A101".to_string(),
            name: String::new(),
            teaching_period_id: Some(3),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            main_convenor: convenor.map(|user| UnitRole {
                id: 50,
                user,
                role: "Convenor".to_string(),
            }),
            main_convenor_user: None,
        }
    }

    #[test]
    fn test_needs_convenor_change() {
        let alice = UserRef::new(1, "Alice", SystemRole::Convenor);
        let bob = UserRef::new(2, "Bob", SystemRole::Convenor);

        assert!(needs_convenor_change(&unit_with_convenor(None), &alice));
        assert!(needs_convenor_change(
            &unit_with_convenor(Some(bob.clone())),
            &alice
        ));
        assert!(!needs_convenor_change(
            &unit_with_convenor(Some(alice.clone())),
            &alice
        ));
    }
}
