// ==========================================
// 车间流程挖掘系统 - 瓶颈判定引擎
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4.3 BottleneckDetector
// 红线: 所有判定必须输出 reason; 除零显式防护,不崩溃
// ==========================================
// 职责: 按等待/加工比、持续积压、利用率判定瓶颈严重度
// 输入: FlowAnalyzer 输出 + 工序链 + 阈值配置
// 输出: BottleneckRecord 列表 (与工序链同序)
// ==========================================
// 判定规则:
//   Critical: ratio > 1.0 或 max_wait > 3x平均加工 或 利用率 > 0.85 (严格大于)
//   Moderate: 任一指标达到 Critical 阈值的 80%
//   原因串固定顺序: 等待超过加工 -> 持续积压 -> 高利用率
// ==========================================

use crate::config::AnalysisThresholds;
use crate::domain::analysis::{BottleneckRecord, FlowStatistics};
use crate::domain::operation::OperationChain;
use crate::domain::types::Severity;
use tracing::{debug, instrument};

// ==========================================
// BottleneckDetector - 瓶颈判定引擎
// ==========================================
pub struct BottleneckDetector {
    // 无状态引擎,不需要注入依赖
}

impl BottleneckDetector {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 BottleneckDetector 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 判定全部工序的瓶颈严重度
    ///
    /// # 参数
    /// - `stats`: FlowAnalyzer 产出的单工序统计 (与工序链同序)
    /// - `chain`: 标准工序链 (提供工作站数量)
    /// - `thresholds`: 判定阈值
    ///
    /// # 返回
    /// BottleneckRecord 列表,与输入统计同序
    #[instrument(skip(self, stats, chain, thresholds), fields(operations = stats.len()))]
    pub fn detect(
        &self,
        stats: &[FlowStatistics],
        chain: &OperationChain,
        thresholds: &AnalysisThresholds,
    ) -> Vec<BottleneckRecord> {
        let records: Vec<BottleneckRecord> = stats
            .iter()
            .map(|s| self.classify(s, chain, thresholds))
            .collect();

        let critical = records
            .iter()
            .filter(|r| r.severity == Severity::Critical)
            .count();
        debug!(critical, total = records.len(), "瓶颈判定完成");

        records
    }

    /// 单工序判定
    fn classify(
        &self,
        stats: &FlowStatistics,
        chain: &OperationChain,
        thresholds: &AnalysisThresholds,
    ) -> BottleneckRecord {
        let station_count = chain
            .get(&stats.operation_id)
            .map(|op| op.station_count)
            .unwrap_or(1);

        // 等待/加工比: 加工为 0 时视为未定义,记 0,不参与触发
        let ratio = if stats.mean_cycle_minutes > 0.0 {
            stats.mean_wait_minutes / stats.mean_cycle_minutes
        } else {
            0.0
        };
        let utilization = self.utilization(stats, station_count);

        // Critical 条件 (严格大于; ratio 恰为 1.0 不触发)
        let critical_ratio = ratio > thresholds.wait_cycle_ratio_critical;
        let critical_queue =
            stats.max_wait_minutes > thresholds.max_wait_cycle_factor * stats.mean_cycle_minutes;
        let critical_util = utilization > thresholds.utilization_critical;

        // Moderate 判定带: 达到 Critical 阈值的 moderate_band 比例
        let band = thresholds.moderate_band;
        let moderate_ratio = ratio > band * thresholds.wait_cycle_ratio_critical;
        let moderate_queue = stats.max_wait_minutes
            > band * thresholds.max_wait_cycle_factor * stats.mean_cycle_minutes
            && stats.max_wait_minutes > 0.0;
        let moderate_util = utilization > band * thresholds.utilization_critical;

        let mut causes = Vec::new();
        let severity = if critical_ratio || critical_queue || critical_util {
            // 原因串按固定顺序拼装
            if critical_ratio {
                causes.push(format!(
                    "等待时间({:.1}分)超过加工时间({:.1}分), 等待/加工比 {:.2}",
                    stats.mean_wait_minutes, stats.mean_cycle_minutes, ratio
                ));
            }
            if critical_queue {
                causes.push(format!(
                    "最大等待({:.1}分)超过平均加工的{:.0}倍, 队列持续积压",
                    stats.max_wait_minutes, thresholds.max_wait_cycle_factor
                ));
            }
            if critical_util {
                causes.push(format!("工作站利用率过高({:.1}%)", utilization * 100.0));
            }
            Severity::Critical
        } else if moderate_ratio || moderate_queue || moderate_util {
            if moderate_ratio {
                causes.push(format!("等待/加工比({:.2})接近阈值", ratio));
            }
            if moderate_queue {
                causes.push(format!(
                    "最大等待({:.1}分)接近持续积压阈值",
                    stats.max_wait_minutes
                ));
            }
            if moderate_util {
                causes.push(format!("工作站利用率({:.1}%)接近上限", utilization * 100.0));
            }
            Severity::Moderate
        } else {
            Severity::None
        };

        BottleneckRecord {
            operation_id: stats.operation_id.clone(),
            operation_name: stats.operation_name.clone(),
            station_count,
            wait_cycle_ratio: ratio,
            utilization,
            mean_wait_minutes: stats.mean_wait_minutes,
            max_wait_minutes: stats.max_wait_minutes,
            mean_cycle_minutes: stats.mean_cycle_minutes,
            severity,
            causes,
        }
    }

    // ==========================================
    // 指标计算
    // ==========================================

    /// 工作站利用率 = 累计加工时长 / (观察区间 x 工作站数), 截断到 [0, 1]
    ///
    /// 观察区间为该工序最早开始到最晚结束; 区间为 0 时利用率记 0
    fn utilization(&self, stats: &FlowStatistics, station_count: usize) -> f64 {
        if stats.span_minutes <= 0.0 || station_count == 0 {
            return 0.0;
        }
        (stats.total_cycle_minutes / (stats.span_minutes * station_count as f64)).clamp(0.0, 1.0)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for BottleneckDetector {
    fn default() -> Self {
        Self::new()
    }
}
