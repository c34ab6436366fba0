// ==========================================
// 车间流程挖掘系统 - 分析阈值配置
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4.3 / 4.5
// ==========================================

use serde::{Deserialize, Serialize};

/// 瓶颈判定与建议生成的阈值全集
///
/// 全部阈值集中于此,引擎内不得散落硬编码判定常数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisThresholds {
    /// 等待/加工比 Critical 阈值（严格大于）
    #[serde(default = "default_ratio_critical")]
    pub wait_cycle_ratio_critical: f64,

    /// 最大等待相对平均加工的倍数 Critical 阈值（严格大于）
    #[serde(default = "default_max_wait_factor")]
    pub max_wait_cycle_factor: f64,

    /// 利用率 Critical 阈值（严格大于, 0~1）
    #[serde(default = "default_utilization_critical")]
    pub utilization_critical: f64,

    /// Moderate 判定带: 任一指标达到其 Critical 阈值的该比例即为 Moderate
    #[serde(default = "default_moderate_band")]
    pub moderate_band: f64,

    /// 标准路径符合率下限 (%), 低于则产生 Flow 建议
    #[serde(default = "default_compliance_min")]
    pub compliance_min_pct: f64,

    /// 过程效率下限 (%), 低于则产生 Efficiency 建议
    #[serde(default = "default_efficiency_min")]
    pub efficiency_min_pct: f64,

    /// Quality 建议的最小损耗工时门槛 (小时)
    #[serde(default = "default_quality_min_time_lost")]
    pub quality_min_time_lost_hours: f64,

    /// Quality 建议假定可挽回的损耗比例 (0~1)
    #[serde(default = "default_quality_recovery")]
    pub quality_recovery_factor: f64,

    /// Flow 建议的固定周期降幅 (%)
    #[serde(default = "default_flow_reduction")]
    pub flow_reduction_pct: f64,

    /// Efficiency 建议的固定周期降幅 (%)
    #[serde(default = "default_efficiency_reduction")]
    pub efficiency_reduction_pct: f64,

    /// 全部建议叠加降幅的上限 (%), 保证改善后周期恒为正
    #[serde(default = "default_max_total_reduction")]
    pub max_total_reduction_pct: f64,
}

fn default_ratio_critical() -> f64 {
    1.0
}

fn default_max_wait_factor() -> f64 {
    3.0
}

fn default_utilization_critical() -> f64 {
    0.85
}

fn default_moderate_band() -> f64 {
    0.8
}

fn default_compliance_min() -> f64 {
    90.0
}

fn default_efficiency_min() -> f64 {
    60.0
}

fn default_quality_min_time_lost() -> f64 {
    1.0
}

fn default_quality_recovery() -> f64 {
    0.5
}

fn default_flow_reduction() -> f64 {
    2.0
}

fn default_efficiency_reduction() -> f64 {
    5.0
}

fn default_max_total_reduction() -> f64 {
    95.0
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        Self {
            wait_cycle_ratio_critical: default_ratio_critical(),
            max_wait_cycle_factor: default_max_wait_factor(),
            utilization_critical: default_utilization_critical(),
            moderate_band: default_moderate_band(),
            compliance_min_pct: default_compliance_min(),
            efficiency_min_pct: default_efficiency_min(),
            quality_min_time_lost_hours: default_quality_min_time_lost(),
            quality_recovery_factor: default_quality_recovery(),
            flow_reduction_pct: default_flow_reduction(),
            efficiency_reduction_pct: default_efficiency_reduction(),
            max_total_reduction_pct: default_max_total_reduction(),
        }
    }
}
