//! 터미널 UI 모듈 (입력 편집기 + 표기 미리보기)

pub mod app;
pub mod editor;
mod terminal;
mod view;

pub use app::{App, Mode};
pub use terminal::Tui;
