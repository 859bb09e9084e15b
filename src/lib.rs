//! # Unit Rollover Import
//!
//! 把若干教学单元滚动导入到一个教学周期的工具库
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 服务端 REST API 的 HTTP 实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `ImportQueue` - 解析代码、匹配源单元、推测负责人
//! - `candidate_status` - 推导每行的显示状态
//! - `StaffService` - 负责人候选
//! - `ImportLogWriter` - 写失败记录
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个单元"的完整导入流程
//! - `ImportCtx` - 上下文封装（目标周期 + 队列位置）
//! - `RolloverFlow` - 流程编排（rollover → add_staff → change_main_convenor）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/session` - 导入会话，加载数据并对外提供入口
//! - `orchestrator/import_runner` - 顺序遍历队列
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::DoubtfireClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ImportCandidate, ImportOutcome, ImportStatus, TeachingPeriod, Unit, UserRef};
pub use orchestrator::{ImportRunner, ImportSession, ImportSummary};
pub use services::{candidate_status, ImportQueue};
pub use workflow::{ImportCtx, RolloverFlow};
