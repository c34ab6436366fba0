// ==========================================
// 车间流程挖掘系统 - API层错误类型
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 7. 错误处理
// 职责: 汇聚引擎/文件层错误,转换为调用方可读的错误消息
// 红线: 所有错误信息必须包含显式原因 (可解释性)
// ==========================================

use crate::engine::error::{AnalysisError, ConfigError, SimulationError};
use crate::logfile::error::LogFileError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 配置与仿真 =====
    #[error("配置校验失败: {0}")]
    Config(#[from] ConfigError),

    #[error("仿真执行失败: {0}")]
    Simulation(#[from] SimulationError),

    // ===== 分析 =====
    #[error("日志分析失败: {0}")]
    Analysis(#[from] AnalysisError),

    // ===== 文件与序列化 =====
    #[error("事件日志文件错误: {0}")]
    LogFile(#[from] LogFileError),

    #[error("报告序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    // ===== 其他 =====
    #[error("内部错误: {0}")]
    Other(#[from] anyhow::Error),
}
