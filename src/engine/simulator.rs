// ==========================================
// 车间流程挖掘系统 - 事件日志仿真引擎
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4.1 EventLogSimulator
// 红线: 同一 (seed, 配置, 工序链) 必须产出逐位一致的事件日志
// 红线: 随机流由仿真器实例独占,绝不使用全局随机状态
// ==========================================
// 职责: 有限容量排队 + 随机时长 + 返工回路的离散事件仿真
// 输入: OperationChain + SimulationConfig
// 输出: EventLog
// ==========================================

mod core;
mod sampling;
mod station;

#[cfg(test)]
mod tests;

pub use self::core::EventLogSimulator;
