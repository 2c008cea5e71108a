use crate::aero;
use crate::types::Env;

/// 파워 커브 생성을 위한 단순화 입력. 전체 설계 요약이 아니라
/// 곡선에 필요한 값만 받는다.
#[derive(Debug, Clone, Copy)]
pub struct PowerCurveInput {
    /// 블레이드 반경 [m]
    pub blade_radius: f64,
    /// 공기 밀도 [kg/m³]
    pub air_density: f64,
    /// 컷인 풍속 [m/s]
    pub cut_in: f64,
    /// 컷아웃 풍속 [m/s]
    pub cut_out: f64,
}

/// 풍속-출력 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCurvePoint {
    pub wind_speed_m_per_s: f64,
    pub power_w: f64,
}

/// 주속비-파워계수 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpCurvePoint {
    pub tsr: f64,
    pub cp: f64,
}

/// 풍속-회전수 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RpmCurvePoint {
    pub wind_speed_m_per_s: f64,
    pub rpm: f64,
}

/// 예시용 풍속-출력 곡선을 샘플링한다.
///
/// 솔버와 동일한 Cp 모델을 사용하며, 최적 주속비에서 운전한다고 가정한다.
/// 컷인 미만/컷아웃 초과 구간의 출력은 0이다.
pub fn power_curve(
    input: &PowerCurveInput,
    min_wind: f64,
    max_wind: f64,
    steps: usize,
) -> Vec<PowerCurvePoint> {
    let steps = steps.max(2);
    let area = aero::rotor_area(input.blade_radius);
    let tsr_opt = aero::peak_cp_tsr();

    (0..steps)
        .map(|i| {
            let v = min_wind + (max_wind - min_wind) * i as f64 / (steps - 1) as f64;
            let power_w = if v < input.cut_in || v > input.cut_out {
                0.0
            } else {
                let env = Env {
                    air_density: input.air_density,
                    wind_speed: v,
                };
                aero::available_power(tsr_opt, &env, area)
            };
            PowerCurvePoint {
                wind_speed_m_per_s: v,
                power_w,
            }
        })
        .collect()
}

/// 지원 구간 [TSR_MIN, TSR_MAX]에서 Cp 곡선을 샘플링한다.
pub fn cp_curve(steps: usize) -> Vec<CpCurvePoint> {
    let steps = steps.max(2);
    (0..steps)
        .map(|i| {
            let tsr = aero::TSR_MIN
                + (aero::TSR_MAX - aero::TSR_MIN) * i as f64 / (steps - 1) as f64;
            CpCurvePoint {
                tsr,
                cp: aero::power_coefficient(tsr),
            }
        })
        .collect()
}

/// 고정 주속비 운전을 가정한 풍속-축 회전수 곡선을 샘플링한다.
pub fn rpm_curve(
    tsr: f64,
    blade_radius: f64,
    min_wind: f64,
    max_wind: f64,
    steps: usize,
) -> Vec<RpmCurvePoint> {
    let steps = steps.max(2);
    (0..steps)
        .map(|i| {
            let v = min_wind + (max_wind - min_wind) * i as f64 / (steps - 1) as f64;
            RpmCurvePoint {
                wind_speed_m_per_s: v,
                rpm: aero::shaft_rpm(tsr, v, blade_radius),
            }
        })
        .collect()
}
