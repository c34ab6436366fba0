// ==========================================
// 车间流程挖掘系统 - 流程挖掘 API
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 2. 组件 (API facade)
// ==========================================
// 职责: 面向外层 (CLI / 报表生成器) 的薄编排层
// 红线: 不含格式化/绘图/自然语言生成逻辑,
//       只交付结构化结果与 CSV/JSON 工件
// ==========================================

use crate::api::error::ApiError;
use crate::config::{AnalysisThresholds, SimulationConfig};
use crate::domain::analysis::{
    BottleneckRecord, FlowAnalysis, GainEstimate, Recommendation, ReworkRecord,
};
use crate::domain::event::EventLog;
use crate::domain::operation::OperationChain;
use crate::engine::{
    BottleneckDetector, EventLogSimulator, FlowAnalyzer, RecommendationEngine, ReworkAnalyzer,
};
use crate::logfile::{EventLogReader, EventLogWriter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// AnalysisReport - 完整分析报告
// ==========================================
// 外部报表生成器消费的结构化结果全集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub report_id: String,                    // 报告ID
    pub generated_at: NaiveDateTime,          // 生成时刻
    pub flow: FlowAnalysis,                   // 流量分析
    pub bottlenecks: Vec<BottleneckRecord>,   // 瓶颈判定
    pub rework: Vec<ReworkRecord>,            // 返工损耗
    pub recommendations: Vec<Recommendation>, // 排序后的建议全集
    pub top_actions: Vec<Recommendation>,     // 前 3 优先行动
    pub gain: GainEstimate,                   // 收益估算
}

// ==========================================
// MiningApi - 流程挖掘 API
// ==========================================
pub struct MiningApi {
    // 无状态编排层,引擎按需构造
}

impl MiningApi {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 MiningApi 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 仿真
    // ==========================================

    /// 运行仿真,产出事件日志
    #[instrument(skip(self, chain, config), fields(case_count = config.case_count, seed = config.seed))]
    pub fn run_simulation(
        &self,
        chain: &OperationChain,
        config: &SimulationConfig,
    ) -> Result<EventLog, ApiError> {
        let log = EventLogSimulator::new().generate(chain, config)?;
        Ok(log)
    }

    // ==========================================
    // 分析
    // ==========================================

    /// 对完成日志执行全量分析
    ///
    /// 流水: FlowAnalyzer -> BottleneckDetector -> ReworkAnalyzer
    ///       -> RecommendationEngine
    #[instrument(skip(self, log, chain, thresholds), fields(events = log.len()))]
    pub fn analyze(
        &self,
        log: &EventLog,
        chain: &OperationChain,
        thresholds: &AnalysisThresholds,
    ) -> Result<AnalysisReport, ApiError> {
        let flow = FlowAnalyzer::new().analyze(log, chain)?;
        let bottlenecks = BottleneckDetector::new().detect(&flow.operation_stats, chain, thresholds);
        let rework = ReworkAnalyzer::new().analyze(log, chain)?;
        let gain_report =
            RecommendationEngine::new().recommend(&flow, &bottlenecks, &rework, chain, thresholds);

        info!(
            recommendations = gain_report.recommendations.len(),
            delta_lead_time_pct = gain_report.gain.delta_lead_time_pct,
            "分析完成"
        );

        Ok(AnalysisReport {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().naive_utc(),
            flow,
            bottlenecks,
            rework,
            recommendations: gain_report.recommendations,
            top_actions: gain_report.top_actions,
            gain: gain_report.gain,
        })
    }

    /// 仿真 + 分析一体化流水
    pub fn mine(
        &self,
        chain: &OperationChain,
        config: &SimulationConfig,
        thresholds: &AnalysisThresholds,
    ) -> Result<(EventLog, AnalysisReport), ApiError> {
        let log = self.run_simulation(chain, config)?;
        let report = self.analyze(&log, chain, thresholds)?;
        Ok((log, report))
    }

    // ==========================================
    // 工件读写
    // ==========================================

    /// 事件日志写出为 CSV (唯一对外交换工件)
    pub fn export_event_log(&self, log: &EventLog, path: &Path) -> Result<(), ApiError> {
        EventLogWriter::write(log, path)?;
        Ok(())
    }

    /// 从外部 CSV 回读事件日志
    pub fn import_event_log(&self, path: &Path) -> Result<EventLog, ApiError> {
        let log = EventLogReader::read(path)?;
        Ok(log)
    }

    /// 分析报告写出为 JSON,供外部报表生成器消费
    pub fn export_report_json(&self, report: &AnalysisReport, path: &Path) -> Result<(), ApiError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), report)?;
        info!(path = %path.display(), "分析报告已写出");
        Ok(())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for MiningApi {
    fn default() -> Self {
        Self::new()
    }
}
