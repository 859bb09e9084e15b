//! 导入会话 - 编排层
//!
//! ## 职责
//!
//! 一次导入会话对应"把若干单元导入到一个教学周期"，是外部调用的入口。
//!
//! ## 核心功能
//!
//! 1. **会话初始化**：加载目标周期、员工列表和单元目录
//! 2. **构建队列**：委托 `ImportQueue` 解析代码
//! 3. **执行导入**：委托 `ImportRunner` 顺序处理
//! 4. **状态查询**：委托 `candidate_status` 推导每行状态
//! 5. **全局统计**：汇总成功/失败数量
//!
//! 单元目录和员工列表加载失败只记录日志，候选项会显示为 "Create new unit"。

use crate::config::Config;
use crate::models::{ImportCandidate, ImportStatus, TeachingPeriod, Unit};
use crate::orchestrator::import_runner::{wait_for_convenors, ImportRunner, ImportSummary};
use crate::services::{
    candidate_status, CatalogLookup, ImportLogWriter, ImportQueue, PeriodLookup, StaffDirectory,
    StaffOption, StaffService, UnitOperations,
};
use crate::utils::logging::{init_log_file, log_import_start, print_final_stats};
use crate::workflow::RolloverFlow;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info, warn};

/// 导入会话
pub struct ImportSession<C> {
    config: Config,
    client: Arc<C>,
    period: TeachingPeriod,
    catalog: Vec<Unit>,
    convenor_options: Vec<StaffOption>,
    queue: ImportQueue,
}

impl<C> ImportSession<C>
where
    C: CatalogLookup + StaffDirectory + PeriodLookup + UnitOperations + Send + Sync + 'static,
{
    /// 初始化会话
    pub async fn initialize(config: Config, client: Arc<C>, teaching_period_id: u64) -> Result<Self> {
        if let Err(e) = init_log_file(&config.output_log_file) {
            warn!("无法初始化日志文件 {}: {}", config.output_log_file, e);
        }

        let period = client
            .teaching_period(teaching_period_id)
            .await
            .with_context(|| format!("无法加载教学周期 {}", teaching_period_id))?;
        info!("📅 目标教学周期: {} (已有 {} 个单元)", period.name(), period.units.len());

        let convenor_options = match client.tutors().await {
            Ok(tutors) => StaffService::new().convenor_options(&tutors),
            Err(e) => {
                error!("⚠️ {}", e);
                Vec::new()
            }
        };

        let catalog = match client.all_units().await {
            Ok(units) => {
                info!("✓ 已加载 {} 个可导入单元", units.len());
                units
            }
            Err(e) => {
                error!("⚠️ {}，所有单元都将新建", e);
                Vec::new()
            }
        };

        Ok(Self::with_catalog(config, client, period, catalog, convenor_options))
    }

    /// 使用已加载的数据创建会话
    pub fn with_catalog(
        config: Config,
        client: Arc<C>,
        period: TeachingPeriod,
        catalog: Vec<Unit>,
        convenor_options: Vec<StaffOption>,
    ) -> Self {
        Self {
            config,
            client,
            period,
            catalog,
            convenor_options,
            queue: ImportQueue::new(),
        }
    }

    pub fn period(&self) -> &TeachingPeriod {
        &self.period
    }

    pub fn catalog(&self) -> &[Unit] {
        &self.catalog
    }

    pub fn convenor_options(&self) -> &[StaffOption] {
        &self.convenor_options
    }

    pub fn queue(&self) -> &ImportQueue {
        &self.queue
    }

    /// 用于手动调整源单元或负责人
    pub fn queue_mut(&mut self) -> &mut ImportQueue {
        &mut self.queue
    }

    /// 添加逗号分隔的代码，返回新增数量
    pub fn add_codes(&mut self, codes: &str) -> usize {
        self.queue.add_codes(codes, &self.catalog)
    }

    /// 单个候选项的显示状态
    pub fn candidate_status(&self, candidate: &ImportCandidate) -> ImportStatus {
        candidate_status(candidate, self.queue.entries(), &self.period)
    }

    /// 队列中每一行的 (代码, 状态)
    pub fn statuses(&self) -> Vec<(String, ImportStatus)> {
        self.queue
            .entries()
            .iter()
            .map(|c| (c.code.clone(), self.candidate_status(c)))
            .collect()
    }

    /// 顺序导入队列中所有待处理的单元
    pub async fn do_import(&mut self) -> ImportSummary {
        log_import_start(&self.period.name(), self.queue.len());

        let log_writer = ImportLogWriter::with_path(self.config.import_log_file.clone());
        let runner = ImportRunner::new(RolloverFlow::new(Arc::clone(&self.client), log_writer));

        let report = runner.run(&mut self.queue, &self.period).await;

        // 队列已经走完，这里只是等后台的负责人分配收尾
        let convenors = wait_for_convenors(report.convenor_tasks).await;
        if convenors.assigned + convenors.failed > 0 {
            info!(
                "👤 负责人分配: 成功 {}, 失败 {}",
                convenors.assigned, convenors.failed
            );
        }

        let summary = report.summary;
        print_final_stats(
            summary.succeeded,
            summary.failed,
            summary.total,
            &self.config.import_log_file,
        );
        summary
    }

    /// 构建队列并执行导入
    pub async fn run_import(&mut self, codes: &str) -> ImportSummary {
        let added = self.add_codes(codes);
        info!("✓ 新增 {} 个待导入单元", added);
        self.do_import().await
    }
}
