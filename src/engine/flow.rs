// ==========================================
// 车间流程挖掘系统 - 流量分析引擎
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4.2 FlowAnalyzer
// ==========================================
// 职责: 按工序分组统计流量与时间指标,计算案例周期与路径符合率
// 输入: EventLog + OperationChain
// 输出: FlowAnalysis (只读派生视图)
// ==========================================
// 分组语义: 以工序链顺序为键序的有序分组,键不重复;
//           空分组贡献零计数,不是错误
// ==========================================

use crate::domain::analysis::{CaseLeadTime, FlowAnalysis, FlowStatistics, ProcessMetrics};
use crate::domain::event::{Event, EventLog};
use crate::domain::operation::OperationChain;
use crate::engine::error::AnalysisError;
use std::collections::HashSet;
use tracing::{debug, instrument};

// ==========================================
// FlowAnalyzer - 流量分析引擎
// ==========================================
pub struct FlowAnalyzer {
    // 无状态引擎,不需要注入依赖
}

impl FlowAnalyzer {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 FlowAnalyzer 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 完整流量分析
    ///
    /// # 参数
    /// - `log`: 已完成的事件日志（只读）
    /// - `chain`: 标准工序链
    ///
    /// # 返回
    /// FlowAnalysis; 日志含链外工序ID时整体中止
    #[instrument(skip(self, log, chain), fields(events = log.len()))]
    pub fn analyze(
        &self,
        log: &EventLog,
        chain: &OperationChain,
    ) -> Result<FlowAnalysis, AnalysisError> {
        if chain.is_empty() {
            return Err(AnalysisError::EmptyChain);
        }

        let operation_stats = self.operation_statistics(log, chain)?;
        let case_lead_times = self.case_lead_times(log);
        let compliance_pct = self.compliance_pct(log, chain);
        let metrics = self.process_metrics(log, chain, &operation_stats, &case_lead_times);

        debug!(
            cases = case_lead_times.len(),
            compliance_pct, "流量分析完成"
        );

        Ok(FlowAnalysis {
            operation_stats,
            case_lead_times,
            compliance_pct,
            metrics,
        })
    }

    // ==========================================
    // 单工序统计
    // ==========================================

    /// 按工序链顺序分组并统计
    pub fn operation_statistics(
        &self,
        log: &EventLog,
        chain: &OperationChain,
    ) -> Result<Vec<FlowStatistics>, AnalysisError> {
        // 链外工序ID视为数据错误,整个日志中止分析
        for event in log.events() {
            if chain.index_of(&event.operation_id).is_none() {
                return Err(AnalysisError::UnknownOperation(event.operation_id.clone()));
            }
        }

        // 有序分组: 下标即工序链顺序
        let mut groups: Vec<Vec<&Event>> = vec![Vec::new(); chain.len()];
        for event in log.events() {
            if let Some(index) = chain.index_of(&event.operation_id) {
                groups[index].push(event);
            }
        }

        let stats = chain
            .operations()
            .iter()
            .zip(groups.iter())
            .map(|(op, events)| self.statistics_for_group(&op.id, &op.name, events))
            .collect();

        Ok(stats)
    }

    /// 单个工序分组的统计量; 空分组全部记零
    fn statistics_for_group(
        &self,
        operation_id: &str,
        operation_name: &str,
        events: &[&Event],
    ) -> FlowStatistics {
        let total_events = events.len();
        let unique_cases = events
            .iter()
            .map(|e| e.case_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        let rework_events = events.iter().filter(|e| e.is_rework).count();

        let total_wait: f64 = events.iter().map(|e| e.wait_time_minutes).sum();
        let total_cycle: f64 = events.iter().map(|e| e.cycle_time_minutes).sum();
        let max_wait = events
            .iter()
            .map(|e| e.wait_time_minutes)
            .fold(0.0_f64, f64::max);

        let (mean_wait, mean_cycle) = if total_events > 0 {
            (
                total_wait / total_events as f64,
                total_cycle / total_events as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let span_minutes = match (
            events.iter().map(|e| e.timestamp_start).min(),
            events.iter().map(|e| e.timestamp_end).max(),
        ) {
            (Some(first), Some(last)) => (last - first).num_milliseconds() as f64 / 60_000.0,
            _ => 0.0,
        };

        FlowStatistics {
            operation_id: operation_id.to_string(),
            operation_name: operation_name.to_string(),
            total_events,
            unique_cases,
            rework_events,
            mean_wait_minutes: mean_wait,
            max_wait_minutes: max_wait,
            mean_cycle_minutes: mean_cycle,
            total_cycle_minutes: total_cycle,
            span_minutes,
        }
    }

    // ==========================================
    // 案例周期
    // ==========================================

    /// 每案例的生产周期与累计指标（按案例ID升序）
    pub fn case_lead_times(&self, log: &EventLog) -> Vec<CaseLeadTime> {
        log.by_case()
            .into_iter()
            .map(|(case_id, events)| {
                // 规范排序下组内按开始时间排列
                let start_time = events
                    .iter()
                    .map(|e| e.timestamp_start)
                    .min()
                    .unwrap_or_default();
                let end_time = events
                    .iter()
                    .map(|e| e.timestamp_end)
                    .max()
                    .unwrap_or_default();

                CaseLeadTime {
                    case_id: case_id.to_string(),
                    start_time,
                    end_time,
                    lead_time_minutes: (end_time - start_time).num_milliseconds() as f64
                        / 60_000.0,
                    total_events: events.len(),
                    total_reworks: events.iter().filter(|e| e.is_rework).count(),
                    total_wait_minutes: events.iter().map(|e| e.wait_time_minutes).sum(),
                    total_cycle_minutes: events.iter().map(|e| e.cycle_time_minutes).sum(),
                }
            })
            .collect()
    }

    // ==========================================
    // 路径符合率
    // ==========================================

    /// 忽略返工事件后,活动序列与标准顺序完全一致的案例占比 (%)
    ///
    /// 空日志按 100% 处理（无案例即无偏离,不触发 Flow 建议）
    pub fn compliance_pct(&self, log: &EventLog, chain: &OperationChain) -> f64 {
        let groups = log.by_case();
        if groups.is_empty() {
            return 100.0;
        }

        let canonical = chain.sequence();
        let compliant = groups
            .values()
            .filter(|events| {
                let trace: Vec<&str> = events
                    .iter()
                    .filter(|e| !e.is_rework)
                    .map(|e| e.operation_id.as_str())
                    .collect();
                trace == canonical
            })
            .count();

        compliant as f64 / groups.len() as f64 * 100.0
    }

    // ==========================================
    // 整体指标
    // ==========================================

    /// 整体过程指标; 所有除法显式防零
    fn process_metrics(
        &self,
        log: &EventLog,
        chain: &OperationChain,
        stats: &[FlowStatistics],
        lead_times: &[CaseLeadTime],
    ) -> ProcessMetrics {
        let total_cases = lead_times.len();
        let total_events = log.len();
        let total_rework_events = log.events().iter().filter(|e| e.is_rework).count();

        let rework_rate_pct = if total_events > 0 {
            total_rework_events as f64 / total_events as f64 * 100.0
        } else {
            0.0
        };

        let mean_lead_minutes = if total_cases > 0 {
            lead_times.iter().map(|c| c.lead_time_minutes).sum::<f64>() / total_cases as f64
        } else {
            0.0
        };
        let max_lead_minutes = lead_times
            .iter()
            .map(|c| c.lead_time_minutes)
            .fold(0.0_f64, f64::max);

        let total_wait_hours = log
            .events()
            .iter()
            .map(|e| e.wait_time_minutes)
            .sum::<f64>()
            / 60.0;

        // 过程效率 = 各工序平均加工之和 / 平均周期
        let value_add_minutes: f64 = stats.iter().map(|s| s.mean_cycle_minutes).sum();
        let process_efficiency_pct = if mean_lead_minutes > 0.0 {
            value_add_minutes / mean_lead_minutes * 100.0
        } else {
            0.0
        };

        ProcessMetrics {
            total_cases,
            total_events,
            total_rework_events,
            rework_rate_pct,
            mean_lead_time_hours: mean_lead_minutes / 60.0,
            max_lead_time_hours: max_lead_minutes / 60.0,
            total_wait_hours,
            process_efficiency_pct,
            theoretical_min_minutes: chain.theoretical_lead_time_minutes(),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for FlowAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
