// ==========================================
// 车间流程挖掘系统 - 事件日志 CSV 写出
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 6. 外部接口
// 格式: UTF-8, 表头 + 每事件一行, 列序固定,
//       行按 case_id + timestamp_start 规范排序
// ==========================================

use crate::domain::event::EventLog;
use crate::logfile::error::LogFileError;
use crate::logfile::{COLUMNS, TS_FORMAT};
use csv::WriterBuilder;
use std::path::Path;
use tracing::info;

// ==========================================
// EventLogWriter - CSV 写出
// ==========================================
pub struct EventLogWriter;

impl EventLogWriter {
    /// 将事件日志写出为 CSV 文件
    ///
    /// 浮点列以完整精度写出,保证写出-回读后统计结果逐位一致
    ///
    /// # 参数
    /// - `log`: 事件日志 (已规范排序)
    /// - `path`: 目标文件路径
    pub fn write(log: &EventLog, path: &Path) -> Result<(), LogFileError> {
        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

        writer.write_record(COLUMNS)?;
        for event in log.events() {
            let row = [
                event.case_id.clone(),
                event.activity.clone(),
                event.operation_id.clone(),
                event.timestamp_start.format(TS_FORMAT).to_string(),
                event.timestamp_end.format(TS_FORMAT).to_string(),
                event.resource.clone(),
                event.is_rework.to_string(),
                event.rework_count.to_string(),
                event.wait_time_minutes.to_string(),
                event.cycle_time_minutes.to_string(),
            ];
            writer.write_record(&row)?;
        }
        writer.flush()?;

        info!(path = %path.display(), events = log.len(), "事件日志已写出");
        Ok(())
    }
}
