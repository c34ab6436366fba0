// ==========================================
// 车间流程挖掘系统 - 仿真引擎核心
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4.1 EventLogSimulator
// ==========================================
// 时间表示: 自 start_time 起的 i64 毫秒偏移,
//           保证 cycle_time_minutes == 结束 - 开始 精确成立
// 因果约束: 同案例事件时间单调不减;
//           工作站可用时刻严格按调度顺序更新
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::event::{Event, EventLog};
use crate::domain::operation::OperationChain;
use crate::domain::types::{CaseArrival, ReworkPolicy};
use crate::engine::error::{ConfigError, SimulationError};
use crate::engine::simulator::sampling::SamplerSet;
use crate::engine::simulator::station::StationPool;
use chrono::Duration;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tracing::{info, instrument};

// ==========================================
// EventLogSimulator - 事件日志仿真引擎
// ==========================================
pub struct EventLogSimulator {
    // 无状态引擎,不需要注入依赖
}

impl EventLogSimulator {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 EventLogSimulator 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成事件日志
    ///
    /// 每个案例沿标准工序顺序加工; 每道工序:
    /// 1) 就绪时刻 = 上一事件结束 (首工序为案例到达时刻)
    /// 2) 贪心取最早可用工作站,等待 = max(0, 可用 - 就绪)
    /// 3) 时长 ~ Normal(mean, std) 下限截断
    /// 4) 按缺陷率抽取返工,按 ReworkPolicy 重新排队,次数有上限
    ///
    /// # 参数
    /// - `chain`: 标准工序链
    /// - `config`: 仿真配置
    ///
    /// # 返回
    /// 规范排序的 EventLog; 配置非法或返工超限时返回错误,不产出部分日志
    #[instrument(skip(self, chain, config), fields(
        case_count = config.case_count,
        seed = config.seed,
        operations = chain.len()
    ))]
    pub fn generate(
        &self,
        chain: &OperationChain,
        config: &SimulationConfig,
    ) -> Result<EventLog, SimulationError> {
        Self::validate(chain, config)?;

        let samplers = SamplerSet::new(chain, config)?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut pools: Vec<StationPool> = chain
            .operations()
            .iter()
            .map(|op| StationPool::new(op.station_count))
            .collect();

        let mut events = Vec::new();
        let mut arrival_ms: i64 = 0;

        for case_num in 1..=config.case_count {
            let case_id = format!("CASE-{:04}", case_num);
            arrival_ms += samplers.arrival_gap_ms(&mut rng);
            self.run_case(
                &case_id, arrival_ms, chain, config, &samplers, &mut pools, &mut rng, &mut events,
            )?;
        }

        let log = EventLog::new(events);
        info!(
            events = log.len(),
            cases = config.case_count,
            "事件日志生成完成"
        );
        Ok(log)
    }

    /// 单案例仿真: 沿工序链推进游标,缺陷触发时按策略回退
    #[allow(clippy::too_many_arguments)]
    fn run_case(
        &self,
        case_id: &str,
        arrival_ms: i64,
        chain: &OperationChain,
        config: &SimulationConfig,
        samplers: &SamplerSet,
        pools: &mut [StationPool],
        rng: &mut StdRng,
        events: &mut Vec<Event>,
    ) -> Result<(), SimulationError> {
        let mut exec_counts = vec![0u32; chain.len()];
        let mut index = 0;
        let mut ready_ms = arrival_ms;

        while index < chain.len() {
            let op = &chain.operations()[index];
            exec_counts[index] += 1;
            let count = exec_counts[index];

            // 抽样顺序固定: 先时长,后缺陷
            let duration_ms = samplers.duration_ms(index, rng);
            let assignment = pools[index].assign(ready_ms, duration_ms);

            events.push(Event {
                case_id: case_id.to_string(),
                activity: op.name.clone(),
                operation_id: op.id.clone(),
                timestamp_start: config.start_time + Duration::milliseconds(assignment.start_ms),
                timestamp_end: config.start_time + Duration::milliseconds(assignment.end_ms),
                resource: format!("{}_WS{}", op.id, assignment.station_index + 1),
                is_rework: count > 1,
                rework_count: count,
                wait_time_minutes: assignment.wait_ms as f64 / 60_000.0,
                cycle_time_minutes: duration_ms as f64 / 60_000.0,
            });
            ready_ms = assignment.end_ms;

            if samplers.defect(op.expected_defect_rate, rng) {
                // 已完成 count-1 次返工,再排一次将达到 count 次
                if count > config.max_rework_per_operation {
                    return Err(SimulationError::ReworkBoundExceeded {
                        case_id: case_id.to_string(),
                        operation_id: op.id.clone(),
                        bound: config.max_rework_per_operation,
                    });
                }
                index = self.rework_target(index, &op.id, chain, &config.rework_policy);
            } else {
                index += 1;
            }
        }

        Ok(())
    }

    /// 缺陷触发后的下一工序下标
    fn rework_target(
        &self,
        current_index: usize,
        operation_id: &str,
        chain: &OperationChain,
        policy: &ReworkPolicy,
    ) -> usize {
        match policy {
            ReworkPolicy::SameOperation => current_index,
            ReworkPolicy::Upstream(routes) => routes
                .get(operation_id)
                .and_then(|target| chain.index_of(target))
                .unwrap_or(current_index),
        }
    }

    // ==========================================
    // 配置校验 (依据 Process_Mining_Spec 4.1 失败条件)
    // ==========================================

    /// 仿真启动前的全量校验; 任一失败即中止
    pub fn validate(chain: &OperationChain, config: &SimulationConfig) -> Result<(), ConfigError> {
        if config.case_count == 0 {
            return Err(ConfigError::InvalidCaseCount);
        }
        if chain.is_empty() {
            return Err(ConfigError::EmptyChain);
        }

        let mut seen = HashSet::new();
        for op in chain.operations() {
            if !seen.insert(op.id.as_str()) {
                return Err(ConfigError::DuplicateOperationId(op.id.clone()));
            }
            if !op.mean_duration_minutes.is_finite() || op.mean_duration_minutes <= 0.0 {
                return Err(ConfigError::InvalidDuration {
                    operation_id: op.id.clone(),
                    value: op.mean_duration_minutes,
                });
            }
            if !op.std_dev_minutes.is_finite() || op.std_dev_minutes < 0.0 {
                return Err(ConfigError::InvalidStdDev {
                    operation_id: op.id.clone(),
                    value: op.std_dev_minutes,
                });
            }
            if op.station_count < 1 {
                return Err(ConfigError::InvalidStationCount {
                    operation_id: op.id.clone(),
                    value: op.station_count,
                });
            }
            if !op.expected_defect_rate.is_finite()
                || op.expected_defect_rate < 0.0
                || op.expected_defect_rate > 1.0
            {
                return Err(ConfigError::InvalidDefectRate {
                    operation_id: op.id.clone(),
                    value: op.expected_defect_rate,
                });
            }
        }

        if !config.min_cycle_minutes.is_finite() || config.min_cycle_minutes <= 0.0 {
            return Err(ConfigError::InvalidMinCycle(config.min_cycle_minutes));
        }
        if let CaseArrival::Exponential { mean_minutes } = config.arrival {
            if !mean_minutes.is_finite() || mean_minutes <= 0.0 {
                return Err(ConfigError::InvalidArrivalMean(mean_minutes));
            }
        }
        if let ReworkPolicy::Upstream(routes) = &config.rework_policy {
            for (from, to) in routes {
                if chain.index_of(to).is_none() {
                    return Err(ConfigError::UnknownReworkRoute {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for EventLogSimulator {
    fn default() -> Self {
        Self::new()
    }
}
