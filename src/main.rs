// ==========================================
// 车间流程挖掘系统 - 命令行主入口
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 2. 组件 (CLI)
// 职责: 参数解析 + 流水编排 + KPI 摘要输出
// 红线: 配置全部在此层持有,核心只接收显式参数
// ==========================================

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use workshop_flow_miner::api::MiningApi;
use workshop_flow_miner::config::{AnalysisThresholds, SimulationConfig};
use workshop_flow_miner::domain::operation::OperationChain;
use workshop_flow_miner::domain::types::Severity;
use workshop_flow_miner::logging;

/// 车间流程挖掘系统 - 瓶颈分析与优化决策支持
#[derive(Parser, Debug)]
#[command(name = "workshop-flow-miner", version)]
struct Cli {
    /// 仿真案例数
    #[arg(long, default_value_t = 500)]
    cases: usize,

    /// 随机种子（相同种子产出逐位一致的事件日志）
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// 输出目录（事件日志 CSV 与分析报告 JSON）
    #[arg(long, default_value = "reports")]
    output_dir: PathBuf,

    /// 分析既有事件日志 CSV,跳过仿真
    #[arg(long)]
    input_log: Option<PathBuf>,
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", workshop_flow_miner::APP_NAME);
    tracing::info!("系统版本: {}", workshop_flow_miner::VERSION);
    tracing::info!("==================================================");

    let cli = Cli::parse();
    fs::create_dir_all(&cli.output_dir)?;

    let api = MiningApi::new();
    let chain = OperationChain::standard();
    let thresholds = AnalysisThresholds::default();

    // ==========================================
    // 第一步: 获取事件日志 (仿真或回读)
    // ==========================================
    let log = match &cli.input_log {
        Some(path) => {
            tracing::info!("回读外部事件日志: {}", path.display());
            api.import_event_log(path)?
        }
        None => {
            let config = SimulationConfig::new(cli.cases, cli.seed);
            tracing::info!("仿真 {} 个案例 (seed={})", config.case_count, config.seed);
            let log = api.run_simulation(&chain, &config)?;

            let log_path = cli.output_dir.join("event_log.csv");
            api.export_event_log(&log, &log_path)?;
            log
        }
    };

    // ==========================================
    // 第二步: 全量分析
    // ==========================================
    let report = api.analyze(&log, &chain, &thresholds)?;

    let report_path = cli.output_dir.join("analysis_report.json");
    api.export_report_json(&report, &report_path)?;

    // ==========================================
    // 第三步: KPI 摘要
    // ==========================================
    let metrics = &report.flow.metrics;
    tracing::info!("---------------- KPI 摘要 ----------------");
    tracing::info!(
        "案例 {} 个 / 事件 {} 条 / 返工率 {:.1}%",
        metrics.total_cases,
        metrics.total_events,
        metrics.rework_rate_pct
    );
    tracing::info!(
        "平均生产周期 {:.2} 小时, 标准路径符合率 {:.1}%, 过程效率 {:.1}%",
        metrics.mean_lead_time_hours,
        report.flow.compliance_pct,
        metrics.process_efficiency_pct
    );

    let critical: Vec<&str> = report
        .bottlenecks
        .iter()
        .filter(|b| b.severity == Severity::Critical)
        .map(|b| b.operation_id.as_str())
        .collect();
    if !critical.is_empty() {
        tracing::warn!("严重瓶颈: {}", critical.join(", "));
    }

    tracing::info!(
        "预估改善: 周期 {:.2}h -> {:.2}h (ΔLead Time -{:.1}%, ΔWIP -{:.1}%)",
        report.gain.lead_time_before_hours,
        report.gain.lead_time_after_hours,
        report.gain.delta_lead_time_pct,
        report.gain.delta_wip_pct
    );
    for (rank, action) in report.top_actions.iter().enumerate() {
        tracing::info!(
            "优先行动 {}: [{}] {} (预估降幅 {:.1}%, 置信度 {})",
            rank + 1,
            action.category,
            action.action,
            action.estimated_reduction_pct,
            action.confidence
        );
    }

    tracing::info!("工件输出目录: {}", cli.output_dir.display());
    Ok(())
}
