// ==========================================
// 车间流程挖掘系统 - 事件日志领域模型
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 3. 数据模型 (Event / EventLog)
// 红线: 事件一经产出不可变更; 日志按 case_id + timestamp_start 规范排序
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Event - 单次工序执行事件
// ==========================================
// 不变量:
//   timestamp_end >= timestamp_start
//   cycle_time_minutes == timestamp_end - timestamp_start (精确到毫秒)
//   wait_time_minutes == timestamp_start - 就绪时刻
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub case_id: String,              // 案例ID (CASE-0001)
    pub activity: String,             // 活动名称 (工序英文名)
    pub operation_id: String,         // 工序ID
    pub timestamp_start: NaiveDateTime, // 开始时刻
    pub timestamp_end: NaiveDateTime,   // 结束时刻
    pub resource: String,             // 工作站 (OP1_WS2)
    pub is_rework: bool,              // 是否返工执行
    pub rework_count: u32,            // 该案例在该工序的第几次执行 (1 起)
    pub wait_time_minutes: f64,       // 排队等待时长 (分钟)
    pub cycle_time_minutes: f64,      // 加工时长 (分钟)
}

impl Event {
    /// 由时间戳重新推导的加工时长 (分钟)
    pub fn derived_cycle_minutes(&self) -> f64 {
        (self.timestamp_end - self.timestamp_start).num_milliseconds() as f64 / 60_000.0
    }
}

// ==========================================
// EventLog - 事件日志
// ==========================================
// 仿真与分析之间的契约边界
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// 构造日志并执行规范排序 (case_id 升序, 同案例内按 timestamp_start)
    pub fn new(mut events: Vec<Event>) -> Self {
        events.sort_by(|a, b| {
            a.case_id
                .cmp(&b.case_id)
                .then(a.timestamp_start.cmp(&b.timestamp_start))
        });
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 唯一案例数
    pub fn case_count(&self) -> usize {
        self.by_case().len()
    }

    /// 按案例分组（有序映射; 规范排序下每组内部已按时间排列）
    pub fn by_case(&self) -> BTreeMap<&str, Vec<&Event>> {
        let mut groups: BTreeMap<&str, Vec<&Event>> = BTreeMap::new();
        for event in &self.events {
            groups.entry(event.case_id.as_str()).or_default().push(event);
        }
        groups
    }

    /// 日志覆盖的时间范围 (最早开始, 最晚结束); 空日志为 None
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first_start = self.events.iter().map(|e| e.timestamp_start).min()?;
        let last_end = self.events.iter().map(|e| e.timestamp_end).max()?;
        Some((first_start, last_end))
    }
}
