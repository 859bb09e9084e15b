use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use unit_rollover_import::models::load_import_plan;
use unit_rollover_import::utils::logging;
use unit_rollover_import::{Config, DoubtfireClient, ImportSession};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 加载导入计划
    let plan = load_import_plan(Path::new(&config.import_plan_file)).await?;

    // 初始化会话并执行导入
    let client = Arc::new(DoubtfireClient::new(&config)?);
    let mut session = ImportSession::initialize(config, client, plan.teaching_period_id).await?;
    session.run_import(&plan.codes).await;

    for (code, status) in session.statuses() {
        info!("{:<16} {}", code, status);
    }

    Ok(())
}
