// ==========================================
// 车间流程挖掘系统 - 领域模型层
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 3. 数据模型
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含仿真逻辑,不含分析逻辑
// ==========================================

pub mod analysis;
pub mod event;
pub mod operation;
pub mod types;

// 重导出核心类型
pub use analysis::{
    BottleneckRecord, CaseLeadTime, FlowAnalysis, FlowStatistics, GainEstimate, ProcessMetrics,
    Recommendation, ReworkRecord,
};
pub use event::{Event, EventLog};
pub use operation::{OperationChain, OperationDefinition};
pub use types::{CaseArrival, Confidence, RecommendationCategory, ReworkPolicy, Severity};
