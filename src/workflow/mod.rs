pub mod import_ctx;
pub mod rollover_flow;

pub use import_ctx::ImportCtx;
pub use rollover_flow::{ConvenorAssignment, FlowResult, RolloverFlow};
