//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 솔버를 공유한다.

pub mod aero;
pub mod app;
pub mod config;
pub mod curves;
pub mod i18n;
pub mod report;
pub mod solver;
pub mod types;

pub use solver::{solve, DesignError, DesignSummary};
pub use types::{Constraints, Env, GeneratorType, TurbineConfig};
