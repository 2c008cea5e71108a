use std::fs;
use std::path::{Path, PathBuf};

use crate::curves::{CpCurvePoint, PowerCurvePoint, RpmCurvePoint};
use crate::solver::DesignSummary;

/// 결과 파일 기록 중 발생 가능한 오류.
#[derive(Debug)]
pub enum ReportError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ReportError::Json(e) => write!(f, "JSON 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        ReportError::Io(value)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        ReportError::Json(value)
    }
}

/// 설계 요약을 JSON 파일로 기록한다. 필드 집합은 `DesignSummary` 그대로이며
/// 하위 소비자와의 호환을 위해 추가 전용(additive-only)으로 유지한다.
pub fn write_summary_json(path: &Path, summary: &DesignSummary) -> Result<(), ReportError> {
    let content = serde_json::to_string_pretty(summary)?;
    fs::write(path, content)?;
    Ok(())
}

/// JSON 경로 옆에 놓일 CSV 경로를 만든다 (확장자만 교체).
pub fn csv_sibling_path(json_path: &Path) -> PathBuf {
    let mut path = json_path.to_path_buf();
    path.set_extension("csv");
    path
}

/// 설계 요약을 단일 행 CSV로 기록한다. 컬럼 집합/순서는 JSON 필드와 동일하다.
pub fn write_summary_csv(path: &Path, summary: &DesignSummary) -> Result<(), ReportError> {
    fs::write(path, summary_csv(summary))?;
    Ok(())
}

fn summary_csv(summary: &DesignSummary) -> String {
    let mut out = String::new();
    out.push_str("rotor_area,blade_length,tsr,rpm,gear_ratio,generator_type,cut_in,cut_out\n");
    out.push_str(&format!(
        "{},{},{},{},{},{},{},{}\n",
        summary.rotor_area,
        summary.blade_length,
        summary.tsr,
        summary.rpm,
        summary.gear_ratio,
        summary.generator_type.as_str(),
        summary.cut_in,
        summary.cut_out,
    ));
    out
}

/// 풍속-출력 곡선을 CSV로 기록한다.
pub fn write_power_curve_csv(path: &Path, points: &[PowerCurvePoint]) -> Result<(), ReportError> {
    let mut out = String::from("wind_speed,power\n");
    for p in points {
        out.push_str(&format!("{},{}\n", p.wind_speed_m_per_s, p.power_w));
    }
    fs::write(path, out)?;
    Ok(())
}

/// 풍속-축 회전수 곡선을 CSV로 기록한다.
pub fn write_rpm_curve_csv(path: &Path, points: &[RpmCurvePoint]) -> Result<(), ReportError> {
    let mut out = String::from("wind_speed,rpm\n");
    for p in points {
        out.push_str(&format!("{},{}\n", p.wind_speed_m_per_s, p.rpm));
    }
    fs::write(path, out)?;
    Ok(())
}

/// 주속비-파워계수 곡선을 CSV로 기록한다.
pub fn write_cp_curve_csv(path: &Path, points: &[CpCurvePoint]) -> Result<(), ReportError> {
    let mut out = String::from("tsr,cp\n");
    for p in points {
        out.push_str(&format!("{},{}\n", p.tsr, p.cp));
    }
    fs::write(path, out)?;
    Ok(())
}
