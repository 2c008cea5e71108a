use serde::Serialize;

use crate::aero;
use crate::types::{GeneratorType, TurbineConfig};

/// 컷인 풍속 [m/s]. 범용 소형 발전기/블레이드 조합의 고정 상수.
pub const CUT_IN_M_PER_S: f64 = 2.5;
/// 컷아웃 풍속 [m/s].
pub const CUT_OUT_M_PER_S: f64 = 25.0;

/// 목표 출력 대비 허용 절대 오차 비율.
const POWER_TOL_FRACTION: f64 = 1e-4;
/// 이분법 최대 반복 횟수.
const MAX_BISECTION_ITERATIONS: usize = 100;

/// 발전기 종류별 정격(효율 구간) 축 회전수 [rpm].
pub fn nominal_generator_rpm(generator_type: GeneratorType) -> f64 {
    match generator_type {
        GeneratorType::Brushed => 3000.0,
        GeneratorType::Brushless => 1500.0,
    }
}

/// 설계 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignError {
    /// 입력값이 잘못된 경우. 문제가 된 필드 이름을 담는다.
    InvalidInput(&'static str),
    /// 주어진 반경/풍속에서 목표 출력에 도달할 수 없는 경우.
    /// 달성 가능한 최대 출력 [W]을 함께 보고한다.
    Infeasible { max_power_w: f64 },
    /// 반복 횟수 내에 허용 오차로 수렴하지 못한 경우.
    NoConvergence,
}

impl std::fmt::Display for DesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignError::InvalidInput(field) => {
                write!(f, "잘못된 입력 값: {field}은(는) 허용 범위를 벗어났습니다.")
            }
            DesignError::Infeasible { max_power_w } => write!(
                f,
                "이 반경/풍속에서 목표 출력에 도달할 수 없습니다. 최대 출력: {max_power_w:.2} W"
            ),
            DesignError::NoConvergence => {
                write!(f, "반복 한도 내에 목표 출력으로 수렴하지 못했습니다.")
            }
        }
    }
}

impl std::error::Error for DesignError {}

/// 모든 프론트엔드가 소비하는 설계 결과. 생성 후 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignSummary {
    /// 로터 회전면적 [m²]
    pub rotor_area: f64,
    /// 블레이드 길이 [m] (= 반경)
    pub blade_length: f64,
    /// 해를 구한 주속비
    pub tsr: f64,
    /// 발전기 축 회전수 [rpm]
    pub rpm: f64,
    /// 감속/증속비 (축 rpm / 발전기 정격 rpm)
    pub gear_ratio: f64,
    /// 발전기 종류
    pub generator_type: GeneratorType,
    /// 컷인 풍속 [m/s]
    pub cut_in: f64,
    /// 컷아웃 풍속 [m/s]
    pub cut_out: f64,
}

/// 터빈 설계 입력으로부터 설계 요약을 계산한다.
///
/// 1) 입력 검증 → 2) 최대 출력 대비 실현 가능성 판정 →
/// 3) Cp 상승 구간에서 목표 출력을 만족하는 주속비 탐색 → 4) 요약 조립.
pub fn solve(cfg: &TurbineConfig) -> Result<DesignSummary, DesignError> {
    validate(cfg)?;

    let area = aero::rotor_area(cfg.constraints.blade_radius);

    // Cp 최대점에서의 출력이 이 반경/풍속에서 달성 가능한 상한이다.
    let tsr_opt = aero::peak_cp_tsr();
    let max_power_w = aero::available_power(tsr_opt, &cfg.env, area);
    if cfg.target_wattage > max_power_w {
        return Err(DesignError::Infeasible { max_power_w });
    }

    let tsr = solve_tsr(cfg, area, tsr_opt)?;
    let rpm = aero::shaft_rpm(tsr, cfg.env.wind_speed, cfg.constraints.blade_radius);
    let gear_ratio = rpm / nominal_generator_rpm(cfg.constraints.generator_type);

    Ok(DesignSummary {
        rotor_area: area,
        blade_length: cfg.constraints.blade_radius,
        tsr,
        rpm,
        gear_ratio,
        generator_type: cfg.constraints.generator_type,
        cut_in: CUT_IN_M_PER_S,
        cut_out: CUT_OUT_M_PER_S,
    })
}

/// 수치 탐색에 앞서 입력값을 검증한다. 첫 위반에서 즉시 반환.
fn validate(cfg: &TurbineConfig) -> Result<(), DesignError> {
    if !(cfg.env.air_density > 0.0) || !cfg.env.air_density.is_finite() {
        return Err(DesignError::InvalidInput("air_density"));
    }
    if !(cfg.env.wind_speed > 0.0) || !cfg.env.wind_speed.is_finite() {
        return Err(DesignError::InvalidInput("wind_speed"));
    }
    if !(cfg.constraints.blade_radius > 0.0) || !cfg.constraints.blade_radius.is_finite() {
        return Err(DesignError::InvalidInput("blade_radius"));
    }
    if cfg.constraints.num_blades < 1 {
        return Err(DesignError::InvalidInput("num_blades"));
    }
    if !(cfg.target_wattage > 0.0) || !cfg.target_wattage.is_finite() {
        return Err(DesignError::InvalidInput("target_wattage"));
    }
    Ok(())
}

/// Cp 곡선의 상승 구간 [TSR_MIN, tsr_opt]에서 목표 출력과 일치하는
/// 주속비를 이분법으로 찾는다. 이 구간에서 출력은 단조 증가하므로 해는 유일하다.
fn solve_tsr(cfg: &TurbineConfig, area: f64, tsr_opt: f64) -> Result<f64, DesignError> {
    let target = cfg.target_wattage;
    let tolerance = POWER_TOL_FRACTION * target;

    // 하한에서도 목표를 넘는다면 괄호 안에 근이 없다.
    // 허용 대역의 가장 느린 운전점을 그대로 반환한다.
    if aero::available_power(aero::TSR_MIN, &cfg.env, area) >= target {
        return Ok(aero::TSR_MIN);
    }

    let mut lo = aero::TSR_MIN;
    let mut hi = tsr_opt;

    for _ in 0..MAX_BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        let err = aero::available_power(mid, &cfg.env, area) - target;
        if err.abs() <= tolerance {
            return Ok(mid);
        }
        if err < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    // 반복 한도 도달: 마지막 중간점이 허용 오차 내일 때만 수용한다.
    let mid = 0.5 * (lo + hi);
    let err = aero::available_power(mid, &cfg.env, area) - target;
    if err.abs() <= tolerance {
        Ok(mid)
    } else {
        Err(DesignError::NoConvergence)
    }
}
