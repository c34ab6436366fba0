// ==========================================
// 车间流程挖掘系统 - 随机抽样
// ==========================================
// 依据: Process_Mining_Spec_v1.0.md - 4.1 (时长分布 / 到达模型)
// 分布约定: 加工时长 ~ Normal(mean, std), 下限截断, 取整到毫秒;
//           到达间隔 ~ Exp(1/mean) (可选)
// 抽样顺序固定: 每案例先抽到达间隔(如启用),
//               每次工序执行先抽时长、再抽缺陷
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::operation::OperationChain;
use crate::domain::types::CaseArrival;
use crate::engine::error::ConfigError;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};

/// 案例到达间隔抽样器
enum ArrivalSampler {
    Simultaneous,
    Exponential(Exp<f64>),
}

/// 仿真抽样器集合（随配置一次构造,仿真期间只读）
pub(crate) struct SamplerSet {
    durations: Vec<Normal<f64>>, // 与工序链同序
    arrival: ArrivalSampler,
    min_cycle_minutes: f64,
}

impl SamplerSet {
    pub fn new(chain: &OperationChain, config: &SimulationConfig) -> Result<Self, ConfigError> {
        let mut durations = Vec::with_capacity(chain.len());
        for op in chain.operations() {
            let normal = Normal::new(op.mean_duration_minutes, op.std_dev_minutes).map_err(
                |_| ConfigError::InvalidStdDev {
                    operation_id: op.id.clone(),
                    value: op.std_dev_minutes,
                },
            )?;
            durations.push(normal);
        }

        let arrival = match config.arrival {
            CaseArrival::Simultaneous => ArrivalSampler::Simultaneous,
            CaseArrival::Exponential { mean_minutes } => {
                let exp = Exp::new(1.0 / mean_minutes)
                    .map_err(|_| ConfigError::InvalidArrivalMean(mean_minutes))?;
                ArrivalSampler::Exponential(exp)
            }
        };

        Ok(Self {
            durations,
            arrival,
            min_cycle_minutes: config.min_cycle_minutes,
        })
    }

    /// 抽取一次加工时长（毫秒,恒为正）
    pub fn duration_ms(&self, operation_index: usize, rng: &mut StdRng) -> i64 {
        let minutes = self.durations[operation_index]
            .sample(rng)
            .max(self.min_cycle_minutes);
        (minutes * 60_000.0).round() as i64
    }

    /// 抽取下一案例的到达间隔（毫秒; 同时到达模型恒为 0,不消耗随机流）
    pub fn arrival_gap_ms(&self, rng: &mut StdRng) -> i64 {
        match &self.arrival {
            ArrivalSampler::Simultaneous => 0,
            ArrivalSampler::Exponential(exp) => (exp.sample(rng) * 60_000.0).round() as i64,
        }
    }

    /// 抽取一次缺陷判定
    pub fn defect(&self, defect_rate: f64, rng: &mut StdRng) -> bool {
        rng.gen::<f64>() < defect_rate
    }
}
