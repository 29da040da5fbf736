//! Romark - 한글 로마자 표기 도구

use romark::config::{config_path, load_config, save_config};
use romark::ui::{App, Tui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드, 첫 실행이면 기본값을 파일로 남겨 편집할 수 있게 함
    let config = load_config();
    if !config_path().exists() {
        if let Err(e) = save_config(&config) {
            log::warn!("기본 설정 저장 실패: {}", e);
        }
    }

    let mut app = App::new(config);
    let mut tui = Tui::new()?;
    tui.run(&mut app)?;
    Ok(())
}
