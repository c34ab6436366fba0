// ==========================================
// 车间流程挖掘系统 - 优化建议引擎
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4.5 RecommendationEngine / GainEstimator
// ==========================================
// 职责: 由瓶颈/返工/流量结论推导排序后的优化建议与收益估算
// 输入: FlowAnalysis + BottleneckRecord + ReworkRecord + 工序链 + 阈值
// 输出: GainReport (建议全集 + 前3优先行动 + 收益KPI)
// ==========================================
// 排序规则: estimated_reduction_pct 降序;
//           并列按类别优先级 Capacity > Quality > Flow > Efficiency
// 恒等式: delta_wip_pct == delta_lead_time_pct (到达率恒定假设)
// ==========================================

use crate::config::AnalysisThresholds;
use crate::domain::analysis::{
    BottleneckRecord, FlowAnalysis, GainEstimate, ProcessMetrics, Recommendation, ReworkRecord,
};
use crate::domain::operation::OperationChain;
use crate::domain::types::{Confidence, RecommendationCategory, Severity};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

// ==========================================
// GainReport - 建议引擎汇总输出
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainReport {
    pub recommendations: Vec<Recommendation>, // 排序后的建议全集
    pub top_actions: Vec<Recommendation>,     // 前 3 优先行动
    pub gain: GainEstimate,                   // 收益估算
}

// ==========================================
// RecommendationEngine - 优化建议引擎
// ==========================================
pub struct RecommendationEngine {
    // 无状态引擎,不需要注入依赖
}

impl RecommendationEngine {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 RecommendationEngine 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成排序后的建议与收益估算
    ///
    /// # 参数
    /// - `flow`: 流量分析结果
    /// - `bottlenecks`: 瓶颈判定记录
    /// - `rework`: 返工损耗记录
    /// - `chain`: 标准工序链 (提供中文名与工作站数)
    /// - `thresholds`: 建议生成阈值
    ///
    /// # 返回
    /// GainReport
    #[instrument(skip_all, fields(bottlenecks = bottlenecks.len(), rework = rework.len()))]
    pub fn recommend(
        &self,
        flow: &FlowAnalysis,
        bottlenecks: &[BottleneckRecord],
        rework: &[ReworkRecord],
        chain: &OperationChain,
        thresholds: &AnalysisThresholds,
    ) -> GainReport {
        let mut recommendations = Vec::new();
        recommendations.extend(self.capacity_recommendations(flow, bottlenecks, chain));
        recommendations.extend(self.quality_recommendations(flow, rework, chain, thresholds));
        if let Some(rec) = self.flow_recommendation(flow, thresholds) {
            recommendations.push(rec);
        }
        if let Some(rec) = self.efficiency_recommendation(flow, thresholds) {
            recommendations.push(rec);
        }

        // 降幅降序,并列按类别优先级
        recommendations.sort_by(|a, b| {
            b.estimated_reduction_pct
                .partial_cmp(&a.estimated_reduction_pct)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.priority().cmp(&b.category.priority()))
        });

        let top_actions: Vec<Recommendation> = recommendations.iter().take(3).cloned().collect();
        let gain = self.estimate_gain(&recommendations, &flow.metrics, thresholds);

        debug!(
            recommendations = recommendations.len(),
            delta_lead_time_pct = gain.delta_lead_time_pct,
            "建议生成完成"
        );

        GainReport {
            recommendations,
            top_actions,
            gain,
        }
    }

    // ==========================================
    // 建议生成 (按类别)
    // ==========================================

    /// Capacity: 每个 Critical 瓶颈一条,置信度 High
    ///
    /// 增加 1 个工作站,等待按容量比例收缩 1/n -> 1/(n+1),
    /// 降幅 = (平均等待/(n+1)) / 平均周期
    fn capacity_recommendations(
        &self,
        flow: &FlowAnalysis,
        bottlenecks: &[BottleneckRecord],
        chain: &OperationChain,
    ) -> Vec<Recommendation> {
        let mean_lead_minutes = flow.metrics.mean_lead_time_hours * 60.0;

        bottlenecks
            .iter()
            .filter(|b| b.severity == Severity::Critical)
            .map(|b| {
                let saved_wait = b.mean_wait_minutes / (b.station_count + 1) as f64;
                let reduction_pct = if mean_lead_minutes > 0.0 {
                    saved_wait / mean_lead_minutes * 100.0
                } else {
                    0.0
                };

                Recommendation {
                    category: RecommendationCategory::Capacity,
                    operation_id: Some(b.operation_id.clone()),
                    operation_name: b.operation_name.clone(),
                    problem: format!(
                        "{} 为严重瓶颈: 利用率 {:.0}%, 等待/加工比 {:.2}",
                        self.display_name(chain, &b.operation_id),
                        b.utilization * 100.0,
                        b.wait_cycle_ratio
                    ),
                    action: format!(
                        "为 {} 增加 1 个工作站 ({} -> {})",
                        self.display_name(chain, &b.operation_id),
                        b.station_count,
                        b.station_count + 1
                    ),
                    estimated_reduction_pct: reduction_pct,
                    confidence: Confidence::High,
                }
            })
            .collect()
    }

    /// Quality: 实际返工率超预期且损耗超门槛的工序,置信度 Medium
    ///
    /// 降幅 = 损耗工时 x 可挽回比例,摊到单案例后相对平均周期
    fn quality_recommendations(
        &self,
        flow: &FlowAnalysis,
        rework: &[ReworkRecord],
        chain: &OperationChain,
        thresholds: &AnalysisThresholds,
    ) -> Vec<Recommendation> {
        let total_cases = flow.metrics.total_cases;
        let mean_lead_hours = flow.metrics.mean_lead_time_hours;

        rework
            .iter()
            .filter(|r| {
                r.actual_rework_rate > r.expected_defect_rate
                    && r.time_lost_hours > thresholds.quality_min_time_lost_hours
            })
            .map(|r| {
                let reduction_pct = if total_cases > 0 && mean_lead_hours > 0.0 {
                    r.time_lost_hours * thresholds.quality_recovery_factor
                        / total_cases as f64
                        / mean_lead_hours
                        * 100.0
                } else {
                    0.0
                };

                Recommendation {
                    category: RecommendationCategory::Quality,
                    operation_id: Some(r.operation_id.clone()),
                    operation_name: r.operation_name.clone(),
                    problem: format!(
                        "{} 返工率 {:.1}% 超出预期 {:.1}%, 损耗 {:.1} 小时",
                        self.display_name(chain, &r.operation_id),
                        r.actual_rework_rate * 100.0,
                        r.expected_defect_rate * 100.0,
                        r.time_lost_hours
                    ),
                    action: format!(
                        "在 {} 实施防错装置 (poka-yoke) 与首件检验",
                        self.display_name(chain, &r.operation_id)
                    ),
                    estimated_reduction_pct: reduction_pct,
                    confidence: Confidence::Medium,
                }
            })
            .collect()
    }

    /// Flow: 符合率低于阈值时的单条全流程建议,置信度 Low
    fn flow_recommendation(
        &self,
        flow: &FlowAnalysis,
        thresholds: &AnalysisThresholds,
    ) -> Option<Recommendation> {
        if flow.compliance_pct >= thresholds.compliance_min_pct {
            return None;
        }
        Some(Recommendation {
            category: RecommendationCategory::Flow,
            operation_id: None,
            operation_name: "全流程".to_string(),
            problem: format!(
                "标准路径符合率偏低 ({:.1}%), 流程存在偏离",
                flow.compliance_pct
            ),
            action: "推行标准作业指导书与操作培训".to_string(),
            estimated_reduction_pct: thresholds.flow_reduction_pct,
            confidence: Confidence::Low,
        })
    }

    /// Efficiency: 过程效率低于阈值时的单条全流程建议,置信度 Medium
    fn efficiency_recommendation(
        &self,
        flow: &FlowAnalysis,
        thresholds: &AnalysisThresholds,
    ) -> Option<Recommendation> {
        if flow.metrics.process_efficiency_pct >= thresholds.efficiency_min_pct {
            return None;
        }
        Some(Recommendation {
            category: RecommendationCategory::Efficiency,
            operation_id: None,
            operation_name: "全流程".to_string(),
            problem: format!(
                "过程效率偏低 ({:.1}%), 等待时间占比过大",
                flow.metrics.process_efficiency_pct
            ),
            action: "推行精益改善 (5S, SMED) 压缩非增值时间".to_string(),
            estimated_reduction_pct: thresholds.efficiency_reduction_pct,
            confidence: Confidence::Medium,
        })
    }

    // ==========================================
    // 收益估算
    // ==========================================

    /// 叠加全部建议降幅并截断,保证改善后周期恒为正
    ///
    /// delta_wip_pct 恒等于 delta_lead_time_pct (Little 定律,到达率恒定)
    fn estimate_gain(
        &self,
        recommendations: &[Recommendation],
        metrics: &ProcessMetrics,
        thresholds: &AnalysisThresholds,
    ) -> GainEstimate {
        let total_pct: f64 = recommendations
            .iter()
            .map(|r| r.estimated_reduction_pct)
            .sum::<f64>()
            .clamp(0.0, thresholds.max_total_reduction_pct);

        let before_hours = metrics.mean_lead_time_hours;
        let after_hours = before_hours * (1.0 - total_pct / 100.0);
        let theoretical_hours = metrics.theoretical_min_minutes / 60.0;

        let gap_pct = |lead_hours: f64| {
            if theoretical_hours > 0.0 {
                (lead_hours - theoretical_hours) / theoretical_hours * 100.0
            } else {
                0.0
            }
        };

        GainEstimate {
            lead_time_before_hours: before_hours,
            lead_time_after_hours: after_hours,
            delta_lead_time_pct: total_pct,
            delta_wip_pct: total_pct,
            theoretical_min_hours: theoretical_hours,
            gap_to_theoretical_before_pct: gap_pct(before_hours),
            gap_to_theoretical_after_pct: gap_pct(after_hours),
        }
    }

    /// 中文显示名,链外工序回退到ID
    fn display_name<'a>(&self, chain: &'a OperationChain, operation_id: &'a str) -> &'a str {
        chain
            .get(operation_id)
            .map(|op| op.name_cn.as_str())
            .unwrap_or(operation_id)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
