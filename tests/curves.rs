use wind_turbine_toolbox::{aero, curves, solver};

#[test]
fn cp_is_bounded_and_nonnegative_on_domain() {
    for point in curves::cp_curve(300) {
        assert!(point.cp >= 0.0, "Cp<0 at tsr={}", point.tsr);
        assert!(point.cp < aero::BETZ_LIMIT, "Cp above Betz at tsr={}", point.tsr);
    }
}

#[test]
fn cp_curve_is_single_peaked() {
    let points = curves::cp_curve(300);
    let peak_index = points
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.cp.total_cmp(&b.cp))
        .map(|(i, _)| i)
        .unwrap();

    // 최대점은 내부에 있고, 그 앞은 비감소·뒤는 비증가여야 한다.
    assert!(peak_index > 0 && peak_index < points.len() - 1);
    for pair in points[..=peak_index].windows(2) {
        assert!(pair[1].cp >= pair[0].cp, "rising branch dips at tsr={}", pair[1].tsr);
    }
    for pair in points[peak_index..].windows(2) {
        assert!(pair[1].cp <= pair[0].cp, "falling branch rises at tsr={}", pair[1].tsr);
    }
}

#[test]
fn peak_search_agrees_with_sampled_maximum() {
    let tsr_opt = aero::peak_cp_tsr();
    let cp_opt = aero::power_coefficient(tsr_opt);
    for point in curves::cp_curve(500) {
        assert!(point.cp <= cp_opt + 1e-9);
    }
}

#[test]
fn power_curve_respects_operating_envelope() {
    let input = curves::PowerCurveInput {
        blade_radius: 0.5,
        air_density: 1.225,
        cut_in: solver::CUT_IN_M_PER_S,
        cut_out: solver::CUT_OUT_M_PER_S,
    };
    let points = curves::power_curve(&input, 0.0, 30.0, 400);
    for p in points {
        if p.wind_speed_m_per_s < input.cut_in || p.wind_speed_m_per_s > input.cut_out {
            assert_eq!(p.power_w, 0.0);
        } else {
            assert!(p.power_w > 0.0);
            assert!(p.power_w.is_finite());
        }
    }
}

#[test]
fn power_curve_grows_with_wind_inside_envelope() {
    let input = curves::PowerCurveInput {
        blade_radius: 0.5,
        air_density: 1.225,
        cut_in: solver::CUT_IN_M_PER_S,
        cut_out: solver::CUT_OUT_M_PER_S,
    };
    let points = curves::power_curve(&input, input.cut_in, input.cut_out, 100);
    for pair in points.windows(2) {
        assert!(pair[1].power_w > pair[0].power_w);
    }
}

#[test]
fn shaft_rpm_spot_value() {
    // λ=7, v=6 m/s, r=0.5 m → ω=84 rad/s → 약 802.1 rpm
    let rpm = aero::shaft_rpm(7.0, 6.0, 0.5);
    assert!((rpm - 84.0 * 60.0 / (2.0 * std::f64::consts::PI)).abs() < 1e-9);
    assert!((rpm - 802.14).abs() < 0.01);
}

#[test]
fn rpm_curve_scales_linearly_with_wind() {
    let points = curves::rpm_curve(7.0, 0.5, 2.0, 20.0, 50);
    for pair in points.windows(2) {
        assert!(pair[1].rpm > pair[0].rpm);
    }
    // rpm ∝ v이므로 v가 두 배면 rpm도 두 배.
    let first = &points[0];
    let rpm_at_double = curves::rpm_curve(7.0, 0.5, 4.0, 4.0, 2)[0].rpm;
    assert!((rpm_at_double - 2.0 * first.rpm).abs() < 1e-9);
}
