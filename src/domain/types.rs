// ==========================================
// 车间流程挖掘系统 - 领域类型定义
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 3. 数据模型
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// 瓶颈严重度 (Bottleneck Severity)
// ==========================================
// 红线: 等级制,不是评分制
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,     // 无瓶颈
    Moderate, // 接近阈值
    Critical, // 超过阈值
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::None => write!(f, "None"),
            Severity::Moderate => write!(f, "Moderate"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

// ==========================================
// 建议类别 (Recommendation Category)
// ==========================================
// 排序并列时按类别优先级: Capacity > Quality > Flow > Efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Capacity,   // 产能扩充
    Quality,    // 质量防错
    Flow,       // 流程规范
    Efficiency, // 整体效率
}

impl RecommendationCategory {
    /// 类别优先级（数值越小优先级越高，用于并列打破）
    pub fn priority(&self) -> u8 {
        match self {
            RecommendationCategory::Capacity => 0,
            RecommendationCategory::Quality => 1,
            RecommendationCategory::Flow => 2,
            RecommendationCategory::Efficiency => 3,
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationCategory::Capacity => write!(f, "Capacity"),
            RecommendationCategory::Quality => write!(f, "Quality"),
            RecommendationCategory::Flow => write!(f, "Flow"),
            RecommendationCategory::Efficiency => write!(f, "Efficiency"),
        }
    }
}

// ==========================================
// 建议置信度 (Confidence)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,    // 低
    Medium, // 中
    High,   // 高
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "Low"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::High => write!(f, "High"),
        }
    }
}

// ==========================================
// 返工去向策略 (Rework Policy)
// ==========================================
// 缺陷触发返工时,案例重新排队的目标工序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReworkPolicy {
    /// 在当前工序原地重做（默认）
    SameOperation,
    /// 按路由表跳回上游工序,再沿标准顺序向后重新加工
    /// 键: 触发缺陷的工序ID; 值: 返工目标工序ID（表中缺失时原地重做）
    Upstream(HashMap<String, String>),
}

impl Default for ReworkPolicy {
    fn default() -> Self {
        ReworkPolicy::SameOperation
    }
}

// ==========================================
// 案例到达模型 (Case Arrival)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CaseArrival {
    /// 全部案例在 t=0 同时就绪（默认,首事件等待自 0 起算）
    Simultaneous,
    /// 指数分布到达间隔（均值,分钟）
    Exponential { mean_minutes: f64 },
}

impl Default for CaseArrival {
    fn default() -> Self {
        CaseArrival::Simultaneous
    }
}
