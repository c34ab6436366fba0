// ==========================================
// 车间流程挖掘系统 - 分析结果领域模型
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 3. 数据模型 (分析实体)
// 红线: 全部为只读派生视图,构造后不可变更
// ==========================================

use crate::domain::types::{Confidence, RecommendationCategory, Severity};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// FlowStatistics - 单工序流量统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStatistics {
    pub operation_id: String,       // 工序ID
    pub operation_name: String,     // 工序名称
    pub total_events: usize,        // 事件总数
    pub unique_cases: usize,        // 唯一案例数
    pub rework_events: usize,       // 返工事件数
    pub mean_wait_minutes: f64,     // 平均等待 (分钟)
    pub max_wait_minutes: f64,      // 最大等待 (分钟)
    pub mean_cycle_minutes: f64,    // 平均加工 (分钟)
    pub total_cycle_minutes: f64,   // 累计加工时长 (分钟, 即工作站占用)
    pub span_minutes: f64,          // 观察区间 (该工序最早开始到最晚结束, 分钟)
}

// ==========================================
// CaseLeadTime - 单案例生产周期
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseLeadTime {
    pub case_id: String,            // 案例ID
    pub start_time: NaiveDateTime,  // 首工序开始
    pub end_time: NaiveDateTime,    // 末工序结束
    pub lead_time_minutes: f64,     // 生产周期 (分钟)
    pub total_events: usize,        // 事件数
    pub total_reworks: usize,       // 返工事件数
    pub total_wait_minutes: f64,    // 累计等待 (分钟)
    pub total_cycle_minutes: f64,   // 累计加工 (分钟)
}

impl CaseLeadTime {
    pub fn lead_time_hours(&self) -> f64 {
        self.lead_time_minutes / 60.0
    }
}

// ==========================================
// ProcessMetrics - 整体过程指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub total_cases: usize,              // 案例总数
    pub total_events: usize,             // 事件总数
    pub total_rework_events: usize,      // 返工事件总数
    pub rework_rate_pct: f64,            // 返工事件占比 (%)
    pub mean_lead_time_hours: f64,       // 平均生产周期 (小时)
    pub max_lead_time_hours: f64,        // 最大生产周期 (小时)
    pub total_wait_hours: f64,           // 累计等待 (小时)
    pub process_efficiency_pct: f64,     // 过程效率 (各工序平均加工之和 / 平均周期, %)
    pub theoretical_min_minutes: f64,    // 理论最小周期 (分钟)
}

// ==========================================
// FlowAnalysis - 流量分析汇总结果
// ==========================================
// FlowAnalyzer 的完整输出,供下游引擎与外部报表消费
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowAnalysis {
    pub operation_stats: Vec<FlowStatistics>, // 按标准顺序排列
    pub case_lead_times: Vec<CaseLeadTime>,   // 按案例ID排列
    pub compliance_pct: f64,                  // 标准路径符合率 (%)
    pub metrics: ProcessMetrics,              // 整体指标
}

// ==========================================
// BottleneckRecord - 瓶颈判定记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleneckRecord {
    pub operation_id: String,       // 工序ID
    pub operation_name: String,     // 工序名称
    pub station_count: usize,       // 工作站数量
    pub wait_cycle_ratio: f64,      // 等待/加工比 (加工为 0 时记 0)
    pub utilization: f64,           // 工作站利用率 (0~1)
    pub mean_wait_minutes: f64,     // 平均等待 (分钟)
    pub max_wait_minutes: f64,      // 最大等待 (分钟)
    pub mean_cycle_minutes: f64,    // 平均加工 (分钟)
    pub severity: Severity,         // 严重度
    pub causes: Vec<String>,        // 判定原因 (固定顺序)
}

// ==========================================
// ReworkRecord - 返工损耗记录
// ==========================================
// 非负性由构造保证: 零返工 => 零比率、零损耗
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReworkRecord {
    pub operation_id: String,         // 工序ID
    pub operation_name: String,       // 工序名称
    pub expected_defect_rate: f64,    // 预期缺陷率 (0~1)
    pub actual_rework_rate: f64,      // 实际返工率 (返工事件/事件总数)
    pub rework_events: usize,         // 返工事件数
    pub total_events: usize,          // 事件总数
    pub time_lost_hours: f64,         // 损耗工时 (小时)
}

// ==========================================
// GainEstimate - 改善收益估算
// ==========================================
// 恒等式: delta_wip_pct == delta_lead_time_pct (到达率恒定假设)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainEstimate {
    pub lead_time_before_hours: f64,      // 当前平均周期 (小时)
    pub lead_time_after_hours: f64,       // 估算改善后周期 (小时)
    pub delta_lead_time_pct: f64,         // 周期降幅 (%)
    pub delta_wip_pct: f64,               // 在制品降幅 (%)
    pub theoretical_min_hours: f64,       // 理论最小周期 (小时)
    pub gap_to_theoretical_before_pct: f64, // 改善前与理论差距 (%)
    pub gap_to_theoretical_after_pct: f64,  // 改善后与理论差距 (%)
}

// ==========================================
// Recommendation - 优化建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,  // 类别
    pub operation_id: Option<String>,      // 目标工序 (None = 全流程)
    pub operation_name: String,            // 目标工序名称 ("全流程" 表示整体)
    pub problem: String,                   // 问题描述
    pub action: String,                    // 建议措施
    pub estimated_reduction_pct: f64,      // 估算周期降幅 (%)
    pub confidence: Confidence,            // 置信度
}
