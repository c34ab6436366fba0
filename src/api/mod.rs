// ==========================================
// 车间流程挖掘系统 - API 层
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 2. 组件
// ==========================================
// 职责: 对外业务接口,编排引擎与文件层
// ==========================================

pub mod error;
pub mod mining_api;

// 重导出
pub use error::ApiError;
pub use mining_api::{AnalysisReport, MiningApi};
