// ==========================================
// 车间流程挖掘系统 - 事件日志 CSV 回读
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 6. 外部接口 / 7. 错误处理
// 红线: 缺列、无法解析、时间戳倒置 => 整个日志中止,
//       绝不静默输出降级统计
// ==========================================

use crate::domain::event::{Event, EventLog};
use crate::logfile::error::LogFileError;
use crate::logfile::{COLUMNS, TS_FORMAT};
use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

// 兼容不带毫秒的时间戳
const TS_FORMAT_FLEX: &str = "%Y-%m-%d %H:%M:%S%.f";

// ==========================================
// EventLogReader - CSV 回读
// ==========================================
pub struct EventLogReader;

impl EventLogReader {
    /// 从 CSV 文件回读事件日志
    ///
    /// 校验必需列齐全、每行可解析、timestamp_end >= timestamp_start;
    /// 回读结果按规范顺序重排
    ///
    /// # 参数
    /// - `path`: 源文件路径
    ///
    /// # 返回
    /// 规范排序的 EventLog
    pub fn read(path: &Path) -> Result<EventLog, LogFileError> {
        if !path.exists() {
            return Err(LogFileError::FileNotFound(path.display().to_string()));
        }

        let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

        // 表头映射: 列名 -> 下标
        let header_index: HashMap<String, usize> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .collect();
        for column in COLUMNS {
            if !header_index.contains_key(column) {
                return Err(LogFileError::MissingColumn(column.to_string()));
            }
        }

        let mut events = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row = row_idx + 1;
            let record = result?;

            let timestamp_start = Self::parse_timestamp(
                Self::field(&record, &header_index, "timestamp_start"),
                row,
                "timestamp_start",
            )?;
            let timestamp_end = Self::parse_timestamp(
                Self::field(&record, &header_index, "timestamp_end"),
                row,
                "timestamp_end",
            )?;
            if timestamp_end < timestamp_start {
                return Err(LogFileError::EndBeforeStart { row });
            }

            events.push(Event {
                case_id: Self::field(&record, &header_index, "case_id").to_string(),
                activity: Self::field(&record, &header_index, "activity").to_string(),
                operation_id: Self::field(&record, &header_index, "operation_id").to_string(),
                timestamp_start,
                timestamp_end,
                resource: Self::field(&record, &header_index, "resource").to_string(),
                is_rework: Self::parse_bool(
                    Self::field(&record, &header_index, "is_rework"),
                    row,
                    "is_rework",
                )?,
                rework_count: Self::parse_u32(
                    Self::field(&record, &header_index, "rework_count"),
                    row,
                    "rework_count",
                )?,
                wait_time_minutes: Self::parse_f64(
                    Self::field(&record, &header_index, "wait_time_minutes"),
                    row,
                    "wait_time_minutes",
                )?,
                cycle_time_minutes: Self::parse_f64(
                    Self::field(&record, &header_index, "cycle_time_minutes"),
                    row,
                    "cycle_time_minutes",
                )?,
            });
        }

        info!(path = %path.display(), events = events.len(), "事件日志已回读");
        Ok(EventLog::new(events))
    }

    // ==========================================
    // 字段解析
    // ==========================================

    /// 按列名取字段值 (去除首尾空白; 行短缺列时记空串)
    fn field<'r>(
        record: &'r csv::StringRecord,
        header_index: &HashMap<String, usize>,
        column: &str,
    ) -> &'r str {
        header_index
            .get(column)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
            .trim()
    }

    fn parse_timestamp(
        value: &str,
        row: usize,
        column: &str,
    ) -> Result<NaiveDateTime, LogFileError> {
        NaiveDateTime::parse_from_str(value, TS_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(value, TS_FORMAT_FLEX))
            .map_err(|_| LogFileError::TimestampParse {
                row,
                column: column.to_string(),
                value: value.to_string(),
            })
    }

    fn parse_bool(value: &str, row: usize, column: &str) -> Result<bool, LogFileError> {
        match value.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(LogFileError::FieldParse {
                row,
                column: column.to_string(),
                value: value.to_string(),
            }),
        }
    }

    fn parse_u32(value: &str, row: usize, column: &str) -> Result<u32, LogFileError> {
        value.parse::<u32>().map_err(|_| LogFileError::FieldParse {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
    }

    fn parse_f64(value: &str, row: usize, column: &str) -> Result<f64, LogFileError> {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LogFileError::FieldParse {
                row,
                column: column.to_string(),
                value: value.to_string(),
            })
    }
}
