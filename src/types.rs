use serde::{Deserialize, Serialize};

/// 설계 기준이 되는 대기 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Env {
    /// 공기 밀도 [kg/m³]
    pub air_density: f64,
    /// 설계(정격) 풍속 [m/s]
    pub wind_speed: f64,
}

/// 지원하는 발전기 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorType {
    Brushed,
    Brushless,
}

impl GeneratorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorType::Brushed => "Brushed",
            GeneratorType::Brushless => "Brushless",
        }
    }
}

/// 사용자가 지정하는 기계적 제약 조건.
///
/// `blade_radius`는 한 번의 설계 계산 동안 고정이며 최적화 대상이 아니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// 블레이드 반경 [m]
    pub blade_radius: f64,
    /// 블레이드 수 (통상 2~5)
    pub num_blades: u8,
    /// 발전기 종류
    pub generator_type: GeneratorType,
}

/// 솔버에 전달되는 완전한 터빈 설계 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbineConfig {
    /// 목표 전기 출력 [W]
    pub target_wattage: f64,
    pub env: Env,
    pub constraints: Constraints,
}
