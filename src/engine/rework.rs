// ==========================================
// 车间流程挖掘系统 - 返工损耗分析引擎
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4.4 ReworkAnalyzer
// ==========================================
// 职责: 对比预期缺陷率与实际返工率,折算损耗工时
// 输入: EventLog + OperationChain
// 输出: ReworkRecord 列表 (与工序链同序)
// ==========================================
// 非负性: 零返工事件 => 实际返工率与损耗工时均为 0
// ==========================================

use crate::domain::analysis::ReworkRecord;
use crate::domain::event::EventLog;
use crate::domain::operation::OperationChain;
use crate::engine::error::AnalysisError;
use tracing::{debug, instrument};

// ==========================================
// ReworkAnalyzer - 返工损耗分析引擎
// ==========================================
pub struct ReworkAnalyzer {
    // 无状态引擎,不需要注入依赖
}

impl ReworkAnalyzer {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 ReworkAnalyzer 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按工序量化返工损耗
    ///
    /// actual_rate = 返工事件数 / 事件总数 (总数为 0 时记 0)
    /// time_lost_hours = 返工事件数 x 平均加工时长 / 60
    ///
    /// # 参数
    /// - `log`: 已完成的事件日志
    /// - `chain`: 标准工序链 (提供预期缺陷率)
    ///
    /// # 返回
    /// ReworkRecord 列表,与工序链同序
    #[instrument(skip(self, log, chain), fields(events = log.len()))]
    pub fn analyze(
        &self,
        log: &EventLog,
        chain: &OperationChain,
    ) -> Result<Vec<ReworkRecord>, AnalysisError> {
        if chain.is_empty() {
            return Err(AnalysisError::EmptyChain);
        }
        for event in log.events() {
            if chain.index_of(&event.operation_id).is_none() {
                return Err(AnalysisError::UnknownOperation(event.operation_id.clone()));
            }
        }

        let records: Vec<ReworkRecord> = chain
            .operations()
            .iter()
            .map(|op| {
                let mut total_events = 0usize;
                let mut rework_events = 0usize;
                let mut total_cycle = 0.0f64;
                for event in log.events().iter().filter(|e| e.operation_id == op.id) {
                    total_events += 1;
                    total_cycle += event.cycle_time_minutes;
                    if event.is_rework {
                        rework_events += 1;
                    }
                }

                let (actual_rework_rate, mean_cycle) = if total_events > 0 {
                    (
                        rework_events as f64 / total_events as f64,
                        total_cycle / total_events as f64,
                    )
                } else {
                    (0.0, 0.0)
                };

                ReworkRecord {
                    operation_id: op.id.clone(),
                    operation_name: op.name.clone(),
                    expected_defect_rate: op.expected_defect_rate,
                    actual_rework_rate,
                    rework_events,
                    total_events,
                    time_lost_hours: rework_events as f64 * mean_cycle / 60.0,
                }
            })
            .collect();

        let total_lost: f64 = records.iter().map(|r| r.time_lost_hours).sum();
        debug!(total_lost_hours = total_lost, "返工损耗分析完成");

        Ok(records)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ReworkAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
