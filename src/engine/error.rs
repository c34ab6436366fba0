// ==========================================
// 车间流程挖掘系统 - 引擎层错误类型
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 7. 错误处理
// 工具: thiserror 派生宏
// 红线: 配置错误在仿真启动前拦截,不产出部分日志
// ==========================================

use thiserror::Error;

/// 配置校验错误
///
/// 全部在仿真启动前检出; 任一错误即中止,不进入事件生成
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("案例数必须大于 0")]
    InvalidCaseCount,

    #[error("工序链为空")]
    EmptyChain,

    #[error("工序ID重复: {0}")]
    DuplicateOperationId(String),

    #[error("工序 {operation_id} 平均时长非法: {value} (必须为有限正数)")]
    InvalidDuration { operation_id: String, value: f64 },

    #[error("工序 {operation_id} 时长标准差非法: {value} (必须为有限非负数)")]
    InvalidStdDev { operation_id: String, value: f64 },

    #[error("工序 {operation_id} 工作站数量非法: {value} (必须 >= 1)")]
    InvalidStationCount { operation_id: String, value: usize },

    #[error("工序 {operation_id} 缺陷率非法: {value} (必须位于 [0, 1])")]
    InvalidDefectRate { operation_id: String, value: f64 },

    #[error("加工时长下限非法: {0} (必须为有限正数)")]
    InvalidMinCycle(f64),

    #[error("到达间隔均值非法: {0} (必须为有限正数)")]
    InvalidArrivalMean(f64),

    #[error("返工路由目标工序不存在: {from} -> {to}")]
    UnknownReworkRoute { from: String, to: String },
}

/// 仿真执行错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("配置校验失败: {0}")]
    Config(#[from] ConfigError),

    /// 逻辑错误: 超出返工上限,向调用方显式上抛,不静默丢弃
    #[error("返工超限: case={case_id}, operation={operation_id}, 上限={bound}")]
    ReworkBoundExceeded {
        case_id: String,
        operation_id: String,
        bound: u32,
    },
}

/// 分析错误
///
/// 整个日志的分析一次性中止,不输出降级/部分统计
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("日志中出现工序链外的工序ID: {0}")]
    UnknownOperation(String),

    #[error("工序链为空,无法分析")]
    EmptyChain,
}
