// ==========================================
// 车间流程挖掘系统 - 引擎层
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4. 组件契约
// ==========================================
// 职责: 仿真与分析的业务规则引擎
// 红线: 所有判定必须输出 reason; 分析引擎对完成日志只读
// ==========================================

pub mod bottleneck;
pub mod error;
pub mod flow;
pub mod recommendation;
pub mod rework;
pub mod simulator;

// 重导出核心引擎
pub use bottleneck::BottleneckDetector;
pub use error::{AnalysisError, ConfigError, SimulationError};
pub use flow::FlowAnalyzer;
pub use recommendation::{GainReport, RecommendationEngine};
pub use rework::ReworkAnalyzer;
pub use simulator::EventLogSimulator;
