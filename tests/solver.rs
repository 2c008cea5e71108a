use wind_turbine_toolbox::{
    aero,
    solver::{self, DesignError},
    Constraints, Env, GeneratorType, TurbineConfig,
};

fn reference_config(target_wattage: f64) -> TurbineConfig {
    TurbineConfig {
        target_wattage,
        env: Env {
            air_density: 1.225,
            wind_speed: 6.0,
        },
        constraints: Constraints {
            blade_radius: 0.5,
            num_blades: 3,
            generator_type: GeneratorType::Brushless,
        },
    }
}

#[test]
fn reference_scenario_succeeds() {
    let summary = solver::solve(&reference_config(50.0)).expect("50W design");
    assert!((summary.rotor_area - 0.785).abs() < 1e-3);
    assert_eq!(summary.blade_length, 0.5);
    assert!(summary.tsr > 0.0);
    assert!(summary.rpm > 0.0);
    assert!(summary.gear_ratio > 0.0);
    assert_eq!(summary.generator_type, GeneratorType::Brushless);
    assert_eq!(summary.cut_in, 2.5);
    assert_eq!(summary.cut_out, 25.0);
}

#[test]
fn unreachable_target_is_infeasible() {
    let err = solver::solve(&reference_config(1_000_000.0)).unwrap_err();
    match err {
        DesignError::Infeasible { max_power_w } => {
            assert!(max_power_w > 0.0);
            assert!(max_power_w < 1_000_000.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_nonpositive_air_density() {
    let mut cfg = reference_config(50.0);
    cfg.env.air_density = 0.0;
    assert_eq!(
        solver::solve(&cfg).unwrap_err(),
        DesignError::InvalidInput("air_density")
    );
}

#[test]
fn rejects_negative_wind_speed() {
    let mut cfg = reference_config(50.0);
    cfg.env.wind_speed = -1.0;
    assert_eq!(
        solver::solve(&cfg).unwrap_err(),
        DesignError::InvalidInput("wind_speed")
    );
}

#[test]
fn rejects_zero_blade_radius() {
    let mut cfg = reference_config(50.0);
    cfg.constraints.blade_radius = 0.0;
    assert_eq!(
        solver::solve(&cfg).unwrap_err(),
        DesignError::InvalidInput("blade_radius")
    );
}

#[test]
fn rejects_zero_blades() {
    let mut cfg = reference_config(50.0);
    cfg.constraints.num_blades = 0;
    assert_eq!(
        solver::solve(&cfg).unwrap_err(),
        DesignError::InvalidInput("num_blades")
    );
}

#[test]
fn rejects_zero_target_wattage() {
    assert_eq!(
        solver::solve(&reference_config(0.0)).unwrap_err(),
        DesignError::InvalidInput("target_wattage")
    );
}

#[test]
fn geometry_invariant_holds() {
    for radius in [0.3, 0.5, 1.0, 2.5] {
        let mut cfg = reference_config(10.0);
        cfg.constraints.blade_radius = radius;
        let summary = solver::solve(&cfg).expect("feasible design");
        assert!((summary.rotor_area - std::f64::consts::PI * radius * radius).abs() < 1e-12);
        assert_eq!(summary.blade_length, radius);
        assert!(summary.cut_in < summary.cut_out);
    }
}

#[test]
fn all_outputs_are_finite() {
    let summary = solver::solve(&reference_config(50.0)).expect("50W design");
    for value in [
        summary.rotor_area,
        summary.blade_length,
        summary.tsr,
        summary.rpm,
        summary.gear_ratio,
        summary.cut_in,
        summary.cut_out,
    ] {
        assert!(value.is_finite());
    }
}

#[test]
fn feasibility_boundary_is_sharp() {
    let max_power_w = match solver::solve(&reference_config(1.0e9)).unwrap_err() {
        DesignError::Infeasible { max_power_w } => max_power_w,
        other => panic!("unexpected error: {other:?}"),
    };

    // 상한 바로 아래는 성공하고, 해는 Cp 최대점보다 낮은 주속비에 놓인다.
    let summary = solver::solve(&reference_config(0.999 * max_power_w)).expect("just feasible");
    assert!(summary.tsr < aero::peak_cp_tsr());

    // 상한 바로 위는 실현 불가.
    let err = solver::solve(&reference_config(1.001 * max_power_w)).unwrap_err();
    assert!(matches!(err, DesignError::Infeasible { .. }));
}

#[test]
fn tsr_and_rpm_grow_with_target() {
    let mut prev_tsr = 0.0;
    let mut prev_rpm = 0.0;
    for target in [5.0, 10.0, 20.0, 30.0, 40.0, 50.0] {
        let summary = solver::solve(&reference_config(target)).expect("feasible design");
        assert!(summary.tsr >= prev_tsr, "tsr regressed at target={target}");
        assert!(summary.rpm >= prev_rpm, "rpm regressed at target={target}");
        prev_tsr = summary.tsr;
        prev_rpm = summary.rpm;
    }
}

#[test]
fn repeated_solves_are_identical() {
    let cfg = reference_config(42.0);
    let first = solver::solve(&cfg).expect("design");
    let second = solver::solve(&cfg).expect("design");
    assert_eq!(first, second);
}

#[test]
fn tiny_target_settles_on_slowest_operating_point() {
    let summary = solver::solve(&reference_config(0.1)).expect("tiny target");
    assert_eq!(summary.tsr, aero::TSR_MIN);
}

#[test]
fn gear_ratio_reflects_generator_type() {
    let brushless = solver::solve(&reference_config(50.0)).expect("brushless design");
    let mut cfg = reference_config(50.0);
    cfg.constraints.generator_type = GeneratorType::Brushed;
    let brushed = solver::solve(&cfg).expect("brushed design");

    // 같은 축 회전수에서 정격 rpm이 두 배인 Brushed의 기어비는 절반이다.
    assert!((brushless.rpm - brushed.rpm).abs() < 1e-9);
    assert!((brushed.gear_ratio - brushless.gear_ratio / 2.0).abs() < 1e-9);
}

#[test]
fn solved_power_matches_target_within_tolerance() {
    let cfg = reference_config(50.0);
    let summary = solver::solve(&cfg).expect("50W design");
    let power = aero::available_power(summary.tsr, &cfg.env, summary.rotor_area);
    assert!((power - 50.0).abs() <= 1e-4 * 50.0);
}
