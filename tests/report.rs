use std::fs;
use std::path::Path;

use wind_turbine_toolbox::{
    report, solver, Constraints, Env, GeneratorType, TurbineConfig,
};

fn sample_summary() -> solver::DesignSummary {
    let cfg = TurbineConfig {
        target_wattage: 50.0,
        env: Env {
            air_density: 1.225,
            wind_speed: 6.0,
        },
        constraints: Constraints {
            blade_radius: 0.5,
            num_blades: 3,
            generator_type: GeneratorType::Brushless,
        },
    };
    solver::solve(&cfg).expect("reference design")
}

#[test]
fn json_artifact_has_exactly_the_summary_fields() {
    let summary = sample_summary();
    let path = std::env::temp_dir().join("wtt_report_test_summary.json");
    report::write_summary_json(&path, &summary).expect("write json");

    let content = fs::read_to_string(&path).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("parse json");
    let object = value.as_object().expect("json object");

    let expected = [
        "rotor_area",
        "blade_length",
        "tsr",
        "rpm",
        "gear_ratio",
        "generator_type",
        "cut_in",
        "cut_out",
    ];
    assert_eq!(object.len(), expected.len());
    for field in expected {
        assert!(object.contains_key(field), "missing field {field}");
    }
    assert_eq!(object["generator_type"], "Brushless");
    assert_eq!(object["cut_in"], 2.5);
    assert_eq!(object["cut_out"], 25.0);

    fs::remove_file(&path).ok();
}

#[test]
fn csv_artifact_is_single_row_with_stable_header() {
    let summary = sample_summary();
    let path = std::env::temp_dir().join("wtt_report_test_summary.csv");
    report::write_summary_csv(&path, &summary).expect("write csv");

    let content = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "rotor_area,blade_length,tsr,rpm,gear_ratio,generator_type,cut_in,cut_out"
    );
    let row: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(row.len(), 8);
    assert_eq!(row[5], "Brushless");

    fs::remove_file(&path).ok();
}

#[test]
fn csv_path_sits_next_to_json_path() {
    let csv = report::csv_sibling_path(Path::new("out/summary.json"));
    assert_eq!(csv, Path::new("out/summary.csv"));
}

#[test]
fn curve_csv_files_have_headers() {
    use wind_turbine_toolbox::{aero, curves};

    let input = curves::PowerCurveInput {
        blade_radius: 0.5,
        air_density: 1.225,
        cut_in: solver::CUT_IN_M_PER_S,
        cut_out: solver::CUT_OUT_M_PER_S,
    };
    let power = curves::power_curve(&input, 0.0, 25.0, 50);
    let cp = curves::cp_curve(50);

    let power_path = std::env::temp_dir().join("wtt_report_test_power_curve.csv");
    let cp_path = std::env::temp_dir().join("wtt_report_test_cp_curve.csv");
    report::write_power_curve_csv(&power_path, &power).expect("write power csv");
    report::write_cp_curve_csv(&cp_path, &cp).expect("write cp csv");

    let power_content = fs::read_to_string(&power_path).expect("read power csv");
    assert!(power_content.starts_with("wind_speed,power\n"));
    assert_eq!(power_content.lines().count(), 51);

    let cp_content = fs::read_to_string(&cp_path).expect("read cp csv");
    assert!(cp_content.starts_with("tsr,cp\n"));
    assert_eq!(cp_content.lines().count(), 51);

    // CLI `curve`가 기록하는 회전수 곡선: 최적 주속비 운전 가정.
    let rpm = curves::rpm_curve(
        aero::peak_cp_tsr(),
        input.blade_radius,
        input.cut_in,
        input.cut_out,
        50,
    );
    let rpm_path = std::env::temp_dir().join("wtt_report_test_rpm_curve.csv");
    report::write_rpm_curve_csv(&rpm_path, &rpm).expect("write rpm csv");

    let rpm_content = fs::read_to_string(&rpm_path).expect("read rpm csv");
    assert!(rpm_content.starts_with("wind_speed,rpm\n"));
    assert_eq!(rpm_content.lines().count(), 51);
    // 첫 데이터 행은 컷인 풍속에서 시작하고 회전수는 양수여야 한다.
    let first_row: Vec<&str> = rpm_content.lines().nth(1).unwrap().split(',').collect();
    assert_eq!(first_row[0].parse::<f64>().unwrap(), input.cut_in);
    assert!(first_row[1].parse::<f64>().unwrap() > 0.0);

    fs::remove_file(&power_path).ok();
    fs::remove_file(&cp_path).ok();
    fs::remove_file(&rpm_path).ok();
}
