use std::f64::consts::PI;

use crate::types::Env;

/// 지원하는 주속비(TSR) 하한.
pub const TSR_MIN: f64 = 1.0;
/// 지원하는 주속비(TSR) 상한.
pub const TSR_MAX: f64 = 15.0;
/// Betz 한계 (16/27 ≈ 0.593). Cp의 물리적 상한.
pub const BETZ_LIMIT: f64 = 16.0 / 27.0;

// Heier 형태 Cp(λ) 근사식의 계수 (피치각 0° 고정).
const CP_C1: f64 = 0.60;
const CP_C2: f64 = 116.0;
const CP_C3: f64 = 5.0;
const CP_C4: f64 = 21.0;
const CP_C5: f64 = 0.0068;
const CP_LAMBDA_I_OFFSET: f64 = 0.035;

/// 로터 회전면적 A = πr² [m²].
pub fn rotor_area(blade_radius: f64) -> f64 {
    PI * blade_radius * blade_radius
}

/// 주속비 λ에서의 파워계수 Cp를 계산한다.
///
/// [TSR_MIN, TSR_MAX] 구간에서 단봉(unimodal) 곡선: λ≈8 부근에서
/// 최대 Cp≈0.55를 가지며, 구간 끝에서 0으로 떨어진다(음수는 0으로 클램프).
pub fn power_coefficient(tsr: f64) -> f64 {
    // 1/λi = 1/λ − 0.035 (피치각 0°)
    let inv_lambda_i = 1.0 / tsr - CP_LAMBDA_I_OFFSET;
    let cp = CP_C1 * (CP_C2 * inv_lambda_i - CP_C3) * (-CP_C4 * inv_lambda_i).exp()
        + CP_C5 * tsr;
    cp.max(0.0)
}

/// 주속비 λ에서 로터가 회수하는 출력 P = Cp · ½ρAv³ [W].
pub fn available_power(tsr: f64, env: &Env, area: f64) -> f64 {
    power_coefficient(tsr) * 0.5 * env.air_density * area * env.wind_speed.powi(3)
}

/// 발전기 축 회전수 [rpm]. ω = λv/r [rad/s], rpm = ω·60/2π.
///
/// 전제: `blade_radius > 0` (솔버 검증 단계에서 보장).
pub fn shaft_rpm(tsr: f64, wind_speed: f64, blade_radius: f64) -> f64 {
    let omega = tsr * wind_speed / blade_radius;
    omega * 60.0 / (2.0 * PI)
}

/// Cp가 최대가 되는 주속비를 황금분할 탐색으로 구한다.
///
/// Cp 곡선이 단봉이므로 [TSR_MIN, TSR_MAX] 전 구간 탐색으로 충분하다.
/// 반복 횟수가 고정되어 있어 항상 유한 시간에 종료한다.
pub fn peak_cp_tsr() -> f64 {
    const INV_PHI: f64 = 0.618_033_988_749_894_9;
    const ITERATIONS: usize = 100;
    const WIDTH_TOL: f64 = 1e-9;

    let mut lo = TSR_MIN;
    let mut hi = TSR_MAX;
    let mut a = hi - INV_PHI * (hi - lo);
    let mut b = lo + INV_PHI * (hi - lo);
    let mut cp_a = power_coefficient(a);
    let mut cp_b = power_coefficient(b);

    for _ in 0..ITERATIONS {
        if hi - lo < WIDTH_TOL {
            break;
        }
        if cp_a > cp_b {
            hi = b;
            b = a;
            cp_b = cp_a;
            a = hi - INV_PHI * (hi - lo);
            cp_a = power_coefficient(a);
        } else {
            lo = a;
            a = b;
            cp_a = cp_b;
            b = lo + INV_PHI * (hi - lo);
            cp_b = power_coefficient(b);
        }
    }
    0.5 * (lo + hi)
}
