// ==========================================
// 车间流程挖掘系统 - 工序链领域模型
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 3. 数据模型 (OperationDefinition / OperationChain)
// 数据来源: 数字孪生车间的 6 道标准工序
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// OperationDefinition - 工序定义
// ==========================================
// 红线: 配置期一次构造,此后只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDefinition {
    pub id: String,                   // 工序ID (如 OP1)
    pub name: String,                 // 工序名称 (英文)
    pub name_cn: String,              // 工序名称 (中文)
    pub mean_duration_minutes: f64,   // 平均加工时长 (分钟, > 0)
    pub std_dev_minutes: f64,         // 时长标准差 (分钟, >= 0)
    pub station_count: usize,         // 工作站数量 (>= 1)
    pub expected_defect_rate: f64,    // 预期缺陷率 (0~1)
}

impl OperationDefinition {
    pub fn new(
        id: &str,
        name: &str,
        name_cn: &str,
        mean_duration_minutes: f64,
        std_dev_minutes: f64,
        station_count: usize,
        expected_defect_rate: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            name_cn: name_cn.to_string(),
            mean_duration_minutes,
            std_dev_minutes,
            station_count,
            expected_defect_rate,
        }
    }
}

// ==========================================
// OperationChain - 标准工序链
// ==========================================
// 用途: 定义标准加工顺序,所有下游引擎的静态输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationChain {
    operations: Vec<OperationDefinition>,
}

impl OperationChain {
    /// 构造工序链（顺序即标准加工顺序）
    ///
    /// 校验由 EventLogSimulator 在仿真启动前统一执行
    pub fn new(operations: Vec<OperationDefinition>) -> Self {
        Self { operations }
    }

    /// 数字孪生车间的标准 6 道工序链
    pub fn standard() -> Self {
        Self::new(vec![
            OperationDefinition::new(
                "OP1",
                "Raw Material Preparation",
                "原料准备",
                15.0,
                3.0,
                2,
                0.02,
            ),
            OperationDefinition::new("OP2", "CNC Machining", "数控加工", 45.0, 8.0, 3, 0.05),
            OperationDefinition::new("OP3", "Heat Treatment", "热处理", 90.0, 10.0, 1, 0.03),
            OperationDefinition::new("OP4", "Surface Finishing", "表面精整", 30.0, 5.0, 2, 0.04),
            // 质检工序本身不产生缺陷
            OperationDefinition::new("OP5", "Quality Control", "质量检验", 20.0, 4.0, 2, 0.0),
            OperationDefinition::new(
                "OP6",
                "Assembly & Packaging",
                "装配包装",
                25.0,
                5.0,
                2,
                0.02,
            ),
        ])
    }

    pub fn operations(&self) -> &[OperationDefinition] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// 按工序ID查找
    pub fn get(&self, operation_id: &str) -> Option<&OperationDefinition> {
        self.operations.iter().find(|op| op.id == operation_id)
    }

    /// 工序在标准顺序中的下标
    pub fn index_of(&self, operation_id: &str) -> Option<usize> {
        self.operations.iter().position(|op| op.id == operation_id)
    }

    /// 标准顺序的工序ID序列
    pub fn sequence(&self) -> Vec<&str> {
        self.operations.iter().map(|op| op.id.as_str()).collect()
    }

    /// 理论最小生产周期 (分钟): 无排队、无返工时的加工时长之和
    pub fn theoretical_lead_time_minutes(&self) -> f64 {
        self.operations
            .iter()
            .map(|op| op.mean_duration_minutes)
            .sum()
    }
}
