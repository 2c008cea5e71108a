use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::aero;
use crate::config;
use crate::curves;
use crate::i18n::{self, keys, Translator};
use crate::report;
use crate::solver::{self, DesignSummary, CUT_IN_M_PER_S, CUT_OUT_M_PER_S};
use crate::types::{Constraints, Env, GeneratorType, TurbineConfig};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 설계 계산 오류
    Design(solver::DesignError),
    /// 결과 파일 기록 오류
    Report(report::ReportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Design(e) => write!(f, "설계 오류: {e}"),
            AppError::Report(e) => write!(f, "결과 기록 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<solver::DesignError> for AppError {
    fn from(value: solver::DesignError) -> Self {
        AppError::Design(value)
    }
}

impl From<report::ReportError> for AppError {
    fn from(value: report::ReportError) -> Self {
        AppError::Report(value)
    }
}

/// 커맨드라인 인터페이스 정의.
#[derive(Debug, Parser)]
#[command(name = "wind_turbine_toolbox_cli", about = "소형 풍력터빈 설계 도구")]
pub struct Cli {
    /// UI 언어 (auto/ko/en)
    #[arg(long, global = true, default_value = "auto")]
    pub lang: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 목표 출력에 대한 터빈 설계 요약을 생성한다
    Design(DesignArgs),
    /// 예시용 출력/Cp 곡선을 CSV로 내보낸다
    Curve(CurveArgs),
}

/// `design` 명령 플래그. 생략된 값은 config.toml의 기본값을 사용한다.
#[derive(Debug, Args)]
pub struct DesignArgs {
    /// 목표 전기 출력 [W]
    #[arg(long)]
    pub wattage: f64,
    /// 공기 밀도 [kg/m³]
    #[arg(long)]
    pub air_density: Option<f64>,
    /// 설계 풍속 [m/s]
    #[arg(long)]
    pub wind_speed: Option<f64>,
    /// 블레이드 반경 [m]
    #[arg(long)]
    pub radius: Option<f64>,
    /// 블레이드 수
    #[arg(long)]
    pub blades: Option<u8>,
    /// 발전기 종류
    #[arg(long, value_enum)]
    pub generator: Option<GeneratorArg>,
    /// 요약 JSON 출력 경로 (CSV는 같은 이름으로 함께 기록)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// `curve` 명령 플래그.
#[derive(Debug, Args)]
pub struct CurveArgs {
    /// 블레이드 반경 [m]
    #[arg(long)]
    pub radius: Option<f64>,
    /// 공기 밀도 [kg/m³]
    #[arg(long)]
    pub air_density: Option<f64>,
    /// 풍속-출력 곡선 CSV 경로
    #[arg(long, default_value = "power_curve.csv")]
    pub power_output: PathBuf,
    /// 주속비-Cp 곡선 CSV 경로
    #[arg(long, default_value = "cp_curve.csv")]
    pub cp_output: PathBuf,
    /// 풍속-축 회전수 곡선 CSV 경로
    #[arg(long, default_value = "rpm_curve.csv")]
    pub rpm_output: PathBuf,
}

/// CLI 플래그용 발전기 종류. 코어의 `GeneratorType`과 분리해
/// 코어가 클랩에 의존하지 않도록 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    Brushed,
    Brushless,
}

impl From<GeneratorArg> for GeneratorType {
    fn from(value: GeneratorArg) -> Self {
        match value {
            GeneratorArg::Brushed => GeneratorType::Brushed,
            GeneratorArg::Brushless => GeneratorType::Brushless,
        }
    }
}

/// 파싱된 CLI 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new(&lang);

    match cli.command {
        Command::Design(args) => run_design(&tr, &cfg, args),
        Command::Curve(args) => run_curve(&tr, &cfg, args),
    }
}

fn run_design(
    tr: &Translator,
    cfg: &config::Config,
    args: DesignArgs,
) -> Result<(), AppError> {
    let d = &cfg.defaults;
    let turbine = TurbineConfig {
        target_wattage: args.wattage,
        env: Env {
            air_density: args.air_density.unwrap_or(d.air_density),
            wind_speed: args.wind_speed.unwrap_or(d.wind_speed),
        },
        constraints: Constraints {
            blade_radius: args.radius.unwrap_or(d.blade_radius),
            num_blades: args.blades.unwrap_or(d.num_blades),
            generator_type: args
                .generator
                .map(GeneratorType::from)
                .unwrap_or(d.generator_type),
        },
    };

    let summary = solver::solve(&turbine)?;
    print_summary(tr, &summary);

    let json_path = args.output.unwrap_or_else(|| PathBuf::from(&d.output));
    report::write_summary_json(&json_path, &summary)?;
    println!("{} {}", tr.t(keys::MSG_JSON_WRITTEN), json_path.display());

    let csv_path = report::csv_sibling_path(&json_path);
    report::write_summary_csv(&csv_path, &summary)?;
    println!("{} {}", tr.t(keys::MSG_CSV_WRITTEN), csv_path.display());

    Ok(())
}

fn run_curve(tr: &Translator, cfg: &config::Config, args: CurveArgs) -> Result<(), AppError> {
    let d = &cfg.defaults;
    let input = curves::PowerCurveInput {
        blade_radius: args.radius.unwrap_or(d.blade_radius),
        air_density: args.air_density.unwrap_or(d.air_density),
        cut_in: CUT_IN_M_PER_S,
        cut_out: CUT_OUT_M_PER_S,
    };

    let power = curves::power_curve(&input, 0.0, CUT_OUT_M_PER_S, 200);
    report::write_power_curve_csv(&args.power_output, &power)?;
    println!(
        "{} {}",
        tr.t(keys::MSG_CURVE_WRITTEN),
        args.power_output.display()
    );

    let cp = curves::cp_curve(100);
    report::write_cp_curve_csv(&args.cp_output, &cp)?;
    println!("{} {}", tr.t(keys::MSG_CURVE_WRITTEN), args.cp_output.display());

    // 축 회전수 곡선은 Cp 최대점의 주속비로 운전한다고 가정한다.
    let rpm = curves::rpm_curve(
        aero::peak_cp_tsr(),
        input.blade_radius,
        CUT_IN_M_PER_S,
        CUT_OUT_M_PER_S,
        200,
    );
    report::write_rpm_curve_csv(&args.rpm_output, &rpm)?;
    println!(
        "{} {}",
        tr.t(keys::MSG_CURVE_WRITTEN),
        args.rpm_output.display()
    );

    Ok(())
}

fn print_summary(tr: &Translator, s: &DesignSummary) {
    println!("{}", tr.t(keys::SUMMARY_HEADING));
    println!("{}: {:.4}", tr.t(keys::FIELD_ROTOR_AREA), s.rotor_area);
    println!("{}: {:.4}", tr.t(keys::FIELD_BLADE_LENGTH), s.blade_length);
    println!("{}: {:.4}", tr.t(keys::FIELD_TSR), s.tsr);
    println!("{}: {:.1}", tr.t(keys::FIELD_RPM), s.rpm);
    println!("{}: {:.3}", tr.t(keys::FIELD_GEAR_RATIO), s.gear_ratio);
    println!(
        "{}: {}",
        tr.t(keys::FIELD_GENERATOR),
        s.generator_type.as_str()
    );
    println!("{}: {:.1}", tr.t(keys::FIELD_CUT_IN), s.cut_in);
    println!("{}: {:.1}", tr.t(keys::FIELD_CUT_OUT), s.cut_out);
}
