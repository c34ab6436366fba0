// ==========================================
// 车间流程挖掘系统 - 配置层
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 9. 配置
// ==========================================
// 职责: 固定形状、serde 可反序列化的配置记录
// 红线: 配置由外层 CLI 持有并显式传入,核心无进程级配置状态
// ==========================================

pub mod simulation;
pub mod thresholds;

// 重导出核心配置
pub use simulation::SimulationConfig;
pub use thresholds::AnalysisThresholds;
