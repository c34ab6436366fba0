// ==========================================
// BottleneckDetector 引擎集成测试
// ==========================================
// 测试目标: 验证严重度判定与原因串
// 覆盖范围: 三类触发条件、边界值、利用率截断、空分组
// ==========================================


use test_helpers::{build_log, create_test_event, single_op_chain};
use workshop_flow_miner::config::AnalysisThresholds;
use workshop_flow_miner::domain::types::Severity;
use workshop_flow_miner::engine::{BottleneckDetector, FlowAnalyzer};

// ==========================================
// 测试辅助函数
// ==========================================

/// 对单工序日志执行 流量统计 -> 瓶颈判定
fn detect_single_op(
    events: Vec<workshop_flow_miner::domain::event::Event>,
    station_count: usize,
) -> workshop_flow_miner::domain::analysis::BottleneckRecord {
    let chain = single_op_chain("OP1", station_count, 0.0);
    let log = build_log(events);
    let stats = FlowAnalyzer::new()
        .operation_statistics(&log, &chain)
        .unwrap();
    let records =
        BottleneckDetector::new().detect(&stats, &chain, &AnalysisThresholds::default());
    records.into_iter().next().unwrap()
}

// ==========================================
// 边界值测试 (依据 Process_Mining_Spec 4.3)
// ==========================================

#[test]
fn test_scenario_01_ratio_exactly_one_is_not_critical() {
    // 场景1: 等待/加工比恰为 1.0 单独出现时不触发 Critical (严格大于)
    // 两事件拉开间距,压低利用率与持续积压条件
    let record = detect_single_op(
        vec![
            create_test_event("CASE-0001", "OP1", 0.0, 10.0, 10.0, false, 1),
            create_test_event("CASE-0002", "OP1", 100.0, 10.0, 10.0, false, 1),
        ],
        2,
    );

    assert_eq!(record.wait_cycle_ratio, 1.0);
    assert!(record.max_wait_minutes <= 3.0 * record.mean_cycle_minutes);
    assert!(record.utilization <= 0.85);
    // 1.0 > 0.8 落入 Moderate 判定带
    assert_eq!(record.severity, Severity::Moderate);
    assert!(!record.causes.is_empty());
}

#[test]
fn test_scenario_02_ratio_above_one_is_critical() {
    // 场景2: 等待/加工比超过 1.0 => Critical
    let record = detect_single_op(
        vec![
            create_test_event("CASE-0001", "OP1", 0.0, 10.0, 11.0, false, 1),
            create_test_event("CASE-0002", "OP1", 100.0, 10.0, 11.0, false, 1),
        ],
        2,
    );

    assert_eq!(record.severity, Severity::Critical);
    assert_eq!(record.causes.len(), 1);
    assert!(record.causes[0].contains("超过加工时间"));
}

#[test]
fn test_scenario_03_persistent_queue_triggers_critical() {
    // 场景3: 最大等待超过平均加工 3 倍 => Critical (比率与利用率均未触发)
    let record = detect_single_op(
        vec![
            create_test_event("CASE-0001", "OP1", 0.0, 10.0, 0.0, false, 1),
            create_test_event("CASE-0002", "OP1", 100.0, 10.0, 0.0, false, 1),
            create_test_event("CASE-0003", "OP1", 200.0, 10.0, 0.0, false, 1),
            create_test_event("CASE-0004", "OP1", 300.0, 10.0, 0.0, false, 1),
            create_test_event("CASE-0005", "OP1", 400.0, 10.0, 35.0, false, 1),
        ],
        1,
    );

    // mean_wait = 7, ratio = 0.7 (低于 Moderate 判定带)
    assert!(record.wait_cycle_ratio < 0.8);
    assert!(record.max_wait_minutes > 3.0 * record.mean_cycle_minutes);
    assert_eq!(record.severity, Severity::Critical);
    assert_eq!(record.causes.len(), 1);
    assert!(record.causes[0].contains("持续积压"));
}

#[test]
fn test_scenario_04_high_utilization_triggers_critical() {
    // 场景4: 单站连续加工,利用率 1.0 => Critical
    let record = detect_single_op(
        vec![
            create_test_event("CASE-0001", "OP1", 0.0, 10.0, 0.0, false, 1),
            create_test_event("CASE-0002", "OP1", 10.0, 10.0, 0.0, false, 1),
            create_test_event("CASE-0003", "OP1", 20.0, 10.0, 0.0, false, 1),
        ],
        1,
    );

    assert_eq!(record.wait_cycle_ratio, 0.0);
    assert_eq!(record.utilization, 1.0);
    assert_eq!(record.severity, Severity::Critical);
    assert_eq!(record.causes.len(), 1);
    assert!(record.causes[0].contains("利用率"));
}

#[test]
fn test_scenario_05_all_conditions_causes_in_fixed_order() {
    // 场景5: 三条件同时触发,原因串按固定顺序拼装
    let record = detect_single_op(
        vec![
            create_test_event("CASE-0001", "OP1", 0.0, 10.0, 20.0, false, 1),
            create_test_event("CASE-0002", "OP1", 10.0, 10.0, 20.0, false, 1),
            create_test_event("CASE-0003", "OP1", 20.0, 10.0, 100.0, false, 1),
        ],
        1,
    );

    assert_eq!(record.severity, Severity::Critical);
    assert_eq!(record.causes.len(), 3);
    assert!(record.causes[0].contains("超过加工时间"));
    assert!(record.causes[1].contains("持续积压"));
    assert!(record.causes[2].contains("利用率"));
}

// ==========================================
// 利用率与空分组
// ==========================================

#[test]
fn test_scenario_06_utilization_clamped_to_one() {
    // 场景6: 外部日志中事件重叠,原始利用率 > 1 时截断到 1
    let record = detect_single_op(
        vec![
            create_test_event("CASE-0001", "OP1", 0.0, 20.0, 0.0, false, 1),
            create_test_event("CASE-0002", "OP1", 0.0, 20.0, 0.0, false, 1),
        ],
        1,
    );

    assert_eq!(record.utilization, 1.0);
}

#[test]
fn test_scenario_07_empty_group_is_none() {
    // 场景7: 空分组 => ratio 0, 利用率 0, 严重度 None, 无原因
    let record = detect_single_op(vec![], 1);

    assert_eq!(record.wait_cycle_ratio, 0.0);
    assert_eq!(record.utilization, 0.0);
    assert_eq!(record.severity, Severity::None);
    assert!(record.causes.is_empty());
}

#[test]
fn test_scenario_08_quiet_operation_is_none() {
    // 场景8: 低负载工序 => None
    let record = detect_single_op(
        vec![
            create_test_event("CASE-0001", "OP1", 0.0, 10.0, 0.0, false, 1),
            create_test_event("CASE-0002", "OP1", 100.0, 10.0, 1.0, false, 1),
        ],
        2,
    );

    assert_eq!(record.severity, Severity::None);
    assert!(record.causes.is_empty());
}
