// ==========================================
// 车间流程挖掘系统 - 仿真配置
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 9. 配置
// 红线: 一次构造,仿真期间只读; 核心不持有全局配置状态
// ==========================================

use crate::domain::types::{CaseArrival, ReworkPolicy};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 仿真配置
///
/// 同一 (seed, 配置, 工序链) 必须产生逐位一致的事件日志
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 仿真案例数 (> 0)
    pub case_count: usize,

    /// 随机种子（仿真器独占的随机流,不使用任何全局随机状态）
    pub seed: u64,

    /// 仿真起始时刻
    #[serde(default = "default_start_time")]
    pub start_time: NaiveDateTime,

    /// 案例到达模型
    #[serde(default)]
    pub arrival: CaseArrival,

    /// 加工时长下限 (分钟, > 0); 正态抽样结果低于此值时截断
    #[serde(default = "default_min_cycle_minutes")]
    pub min_cycle_minutes: f64,

    /// 返工去向策略
    #[serde(default)]
    pub rework_policy: ReworkPolicy,

    /// 单案例单工序最大返工次数; 超限为仿真错误而非静默丢弃
    #[serde(default = "default_max_rework")]
    pub max_rework_per_operation: u32,
}

fn default_start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default()
}

fn default_min_cycle_minutes() -> f64 {
    5.0
}

fn default_max_rework() -> u32 {
    5
}

impl SimulationConfig {
    /// 以给定案例数与种子构造,其余取默认值
    pub fn new(case_count: usize, seed: u64) -> Self {
        Self {
            case_count,
            seed,
            ..Default::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            case_count: 500,
            seed: 42,
            start_time: default_start_time(),
            arrival: CaseArrival::default(),
            min_cycle_minutes: default_min_cycle_minutes(),
            rework_policy: ReworkPolicy::default(),
            max_rework_per_operation: default_max_rework(),
        }
    }
}
