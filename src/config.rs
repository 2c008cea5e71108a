use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::GeneratorType;

/// CLI/GUI가 사용하는 입력 기본값. 코어 솔버는 항상 완전한
/// `TurbineConfig`를 받으므로 기본값은 프론트엔드 설정에만 존재한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    /// 목표 출력 [W]
    pub target_wattage: f64,
    /// 공기 밀도 [kg/m³]
    pub air_density: f64,
    /// 설계 풍속 [m/s]
    pub wind_speed: f64,
    /// 블레이드 반경 [m]
    pub blade_radius: f64,
    /// 블레이드 수
    pub num_blades: u8,
    /// 발전기 종류
    pub generator_type: GeneratorType,
    /// 요약 JSON 출력 경로
    pub output: String,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            target_wattage: 50.0,
            air_density: 1.225,
            wind_speed: 6.0,
            blade_radius: 0.5,
            num_blades: 3,
            generator_type: GeneratorType::Brushless,
            output: "summary.json".to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (auto/ko/en 등)
    pub language: String,
    pub defaults: InputDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            defaults: InputDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
