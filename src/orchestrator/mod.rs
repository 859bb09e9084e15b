//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `session` - 导入会话
//! - 加载教学周期、员工、单元目录
//! - 构建队列、查询状态
//! - 输出全局统计信息
//!
//! ### `import_runner` - 顺序导入执行器
//! - 按顺序遍历队列（同一时间只有一个 rollover）
//! - 记录每个候选项的结果
//! - 收集后台负责人分配任务
//!
//! ## 层次关系
//!
//! ```text
//! session (一次导入会话)
//!     ↓
//! import_runner (遍历 ImportQueue)
//!     ↓
//! workflow::RolloverFlow (处理单个候选项)
//!     ↓
//! services (能力层：队列构建 / 状态 / 失败记录 / 外部接口)
//!     ↓
//! clients (HTTP 实现)
//! ```

pub mod import_runner;
pub mod session;

pub use import_runner::{wait_for_convenors, ConvenorStats, ImportRunner, ImportSummary, RunReport};
pub use session::ImportSession;
