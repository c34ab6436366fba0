// ==========================================
// 车间流程挖掘系统 - 事件日志文件错误类型
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 7. 错误处理
// 工具: thiserror 派生宏
// 红线: 格式错误导致整个日志中止,绝不输出部分统计
// ==========================================

use thiserror::Error;

/// 事件日志文件读写错误
#[derive(Error, Debug)]
pub enum LogFileError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),

    // ===== 格式错误 =====
    #[error("缺少必需列: {0}")]
    MissingColumn(String),

    #[error("字段解析失败 (行 {row}, 列 {column}): {value}")]
    FieldParse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("时间戳解析失败 (行 {row}, 列 {column}): 期望 YYYY-MM-DD HH:MM:SS[.fff], 实际 {value}")]
    TimestampParse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("时间戳倒置 (行 {row}): timestamp_end 早于 timestamp_start")]
    EndBeforeStart { row: usize },
}
