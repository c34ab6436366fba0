// ==========================================
// 仿真引擎单元测试
// ==========================================
// 场景: 工作站贪心分配 / 确定性 / 返工上限 / 配置校验
// ==========================================

use super::core::EventLogSimulator;
use super::station::StationPool;
use crate::config::SimulationConfig;
use crate::domain::operation::{OperationChain, OperationDefinition};
use crate::engine::error::{ConfigError, SimulationError};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建单工序测试链
fn single_op_chain(defect_rate: f64) -> OperationChain {
    OperationChain::new(vec![OperationDefinition::new(
        "OP1", "Test Op", "测试工序", 10.0, 0.0, 1, defect_rate,
    )])
}

// ==========================================
// 工作站池测试
// ==========================================

#[test]
fn test_station_pool_greedy_assignment() {
    let mut pool = StationPool::new(2);

    // 两站均在 t=0 可用,并列取最小下标
    let a1 = pool.assign(0, 10);
    assert_eq!(a1.station_index, 0);
    assert_eq!(a1.wait_ms, 0);
    assert_eq!(a1.start_ms, 0);
    assert_eq!(a1.end_ms, 10);

    // 站0已占用至 10,取站1
    let a2 = pool.assign(0, 10);
    assert_eq!(a2.station_index, 1);
    assert_eq!(a2.wait_ms, 0);

    // 两站都忙,取最早释放的站0,产生等待
    let a3 = pool.assign(5, 10);
    assert_eq!(a3.station_index, 0);
    assert_eq!(a3.wait_ms, 5);
    assert_eq!(a3.start_ms, 10);
    assert_eq!(a3.end_ms, 20);
}

#[test]
fn test_station_pool_no_wait_after_release() {
    let mut pool = StationPool::new(1);
    pool.assign(0, 10);

    // 就绪晚于释放,不产生等待
    let a = pool.assign(30, 10);
    assert_eq!(a.wait_ms, 0);
    assert_eq!(a.start_ms, 30);
}

// ==========================================
// 确定性测试
// ==========================================

#[test]
fn test_same_seed_reproduces_identical_log() {
    let simulator = EventLogSimulator::new();
    let chain = OperationChain::standard();
    let config = SimulationConfig::new(50, 42);

    let log_a = simulator.generate(&chain, &config).unwrap();
    let log_b = simulator.generate(&chain, &config).unwrap();

    assert_eq!(log_a, log_b);
    assert!(log_a.len() >= 50 * chain.len());
}

#[test]
fn test_different_seed_diverges() {
    let simulator = EventLogSimulator::new();
    let chain = OperationChain::standard();

    let log_a = simulator
        .generate(&chain, &SimulationConfig::new(50, 1))
        .unwrap();
    let log_b = simulator
        .generate(&chain, &SimulationConfig::new(50, 2))
        .unwrap();

    assert_ne!(log_a, log_b);
}

// ==========================================
// 返工上限测试
// ==========================================

#[test]
fn test_rework_bound_exceeded_is_surfaced() {
    let simulator = EventLogSimulator::new();
    // 缺陷率 1.0: 首案例必然在首工序耗尽返工上限
    let chain = single_op_chain(1.0);
    let config = SimulationConfig::new(10, 42);

    let result = simulator.generate(&chain, &config);
    match result {
        Err(SimulationError::ReworkBoundExceeded {
            case_id,
            operation_id,
            bound,
        }) => {
            assert_eq!(case_id, "CASE-0001");
            assert_eq!(operation_id, "OP1");
            assert_eq!(bound, config.max_rework_per_operation);
        }
        other => panic!("期望返工超限错误, 实际: {:?}", other),
    }
}

#[test]
fn test_zero_defect_rate_never_reworks() {
    let simulator = EventLogSimulator::new();
    let chain = single_op_chain(0.0);
    let config = SimulationConfig::new(20, 42);

    let log = simulator.generate(&chain, &config).unwrap();
    assert_eq!(log.len(), 20);
    assert!(log.events().iter().all(|e| !e.is_rework && e.rework_count == 1));
}

// ==========================================
// 配置校验测试
// ==========================================

#[test]
fn test_validate_rejects_zero_cases() {
    let chain = OperationChain::standard();
    let config = SimulationConfig::new(0, 42);
    assert_eq!(
        EventLogSimulator::validate(&chain, &config),
        Err(ConfigError::InvalidCaseCount)
    );
}

#[test]
fn test_validate_rejects_empty_chain() {
    let chain = OperationChain::new(vec![]);
    let config = SimulationConfig::new(10, 42);
    assert_eq!(
        EventLogSimulator::validate(&chain, &config),
        Err(ConfigError::EmptyChain)
    );
}

#[test]
fn test_validate_rejects_non_positive_duration() {
    let chain = OperationChain::new(vec![OperationDefinition::new(
        "OP1", "Bad", "坏配置", 0.0, 1.0, 1, 0.0,
    )]);
    let config = SimulationConfig::new(10, 42);
    assert!(matches!(
        EventLogSimulator::validate(&chain, &config),
        Err(ConfigError::InvalidDuration { .. })
    ));
}

#[test]
fn test_validate_rejects_zero_stations() {
    let chain = OperationChain::new(vec![OperationDefinition::new(
        "OP1", "Bad", "坏配置", 10.0, 1.0, 0, 0.0,
    )]);
    let config = SimulationConfig::new(10, 42);
    assert!(matches!(
        EventLogSimulator::validate(&chain, &config),
        Err(ConfigError::InvalidStationCount { .. })
    ));
}

#[test]
fn test_validate_rejects_defect_rate_out_of_range() {
    let chain = OperationChain::new(vec![OperationDefinition::new(
        "OP1", "Bad", "坏配置", 10.0, 1.0, 1, 1.5,
    )]);
    let config = SimulationConfig::new(10, 42);
    assert!(matches!(
        EventLogSimulator::validate(&chain, &config),
        Err(ConfigError::InvalidDefectRate { .. })
    ));
}

#[test]
fn test_validate_rejects_duplicate_operation_id() {
    let chain = OperationChain::new(vec![
        OperationDefinition::new("OP1", "A", "甲", 10.0, 1.0, 1, 0.0),
        OperationDefinition::new("OP1", "B", "乙", 10.0, 1.0, 1, 0.0),
    ]);
    let config = SimulationConfig::new(10, 42);
    assert_eq!(
        EventLogSimulator::validate(&chain, &config),
        Err(ConfigError::DuplicateOperationId("OP1".to_string()))
    );
}
