// ==========================================
// 车间流程挖掘系统 - 核心库
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md
// 技术栈: Rust + CSV 事件日志
// 系统定位: 仿真 + 分析的演示/报告引擎 (非生产调度器)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 仿真与分析
pub mod engine;

// 事件日志文件层 - CSV 读写
pub mod logfile;

// 配置层 - 仿真与阈值配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CaseArrival, Confidence, RecommendationCategory, ReworkPolicy, Severity};

// 领域实体
pub use domain::{
    BottleneckRecord, CaseLeadTime, Event, EventLog, FlowAnalysis, FlowStatistics, GainEstimate,
    OperationChain, OperationDefinition, ProcessMetrics, Recommendation, ReworkRecord,
};

// 配置
pub use config::{AnalysisThresholds, SimulationConfig};

// 引擎
pub use engine::{
    BottleneckDetector, EventLogSimulator, FlowAnalyzer, GainReport, RecommendationEngine,
    ReworkAnalyzer,
};

// API
pub use api::{AnalysisReport, MiningApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "车间流程挖掘系统";

// ==========================================
// 预编译检查
// ==========================================
