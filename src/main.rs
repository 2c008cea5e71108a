use clap::Parser;
use wind_turbine_toolbox::app::{self, Cli};

/// CLI 엔트리 포인트. 솔버 실패 시 분류된 오류를 stderr로 출력하고
/// 0이 아닌 종료 코드를 반환한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = app::run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
