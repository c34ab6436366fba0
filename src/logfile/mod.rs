// ==========================================
// 车间流程挖掘系统 - 事件日志文件层
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 6. 外部接口
// ==========================================
// 职责: 事件日志的 CSV 持久化与回读
// 约定: 唯一对外交换工件; 列序固定
// ==========================================

pub mod error;
pub mod reader;
pub mod writer;

// 重导出
pub use error::LogFileError;
pub use reader::EventLogReader;
pub use writer::EventLogWriter;

/// 固定列序 (依据 Process_Mining_Spec 6)
pub const COLUMNS: [&str; 10] = [
    "case_id",
    "activity",
    "operation_id",
    "timestamp_start",
    "timestamp_end",
    "resource",
    "is_rework",
    "rework_count",
    "wait_time_minutes",
    "cycle_time_minutes",
];

/// 时间戳写出格式 (毫秒精度)
pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
