//! 앱 상태와 키 입력 처리

use crate::config::RomarkConfig;
use crate::export::export_to_pdf;
use crate::mark::{mark, MarkedText, TokenKind};
use crate::ui::editor::Editor;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 화면 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 텍스트 입력
    Edit,
    /// 표기 결과 미리보기
    Marked,
}

/// 앱 전체 상태
pub struct App {
    pub mode: Mode,
    pub editor: Editor,
    /// 마지막 표기 결과 (입력이 바뀌면 다시 만든다)
    pub marked: Option<MarkedText>,
    /// 미리보기 세로 스크롤
    pub scroll: u16,
    /// 상태 줄 메시지
    pub status: Option<String>,
    pub config: RomarkConfig,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: RomarkConfig) -> Self {
        App {
            mode: Mode::Edit,
            editor: Editor::new(),
            marked: None,
            scroll: 0,
            status: None,
            config,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // 모드 공통
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('q') = key.code {
                self.should_quit = true;
                return;
            }
        }
        match self.mode {
            Mode::Edit => self.handle_edit_key(key),
            Mode::Marked => self.handle_marked_key(key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => self.romanize(),
                KeyCode::Char('v') => self.paste(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.newline(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            _ => {}
        }
    }

    fn handle_marked_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => self.mode = Mode::Edit,
                KeyCode::Char('e') => self.export(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.mode = Mode::Edit,
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            _ => {}
        }
    }

    /// 현재 입력을 표기 구조로 변환하고 미리보기로 전환
    pub fn romanize(&mut self) {
        let marked = mark(&self.editor.text());
        let korean_tokens: usize = marked
            .paragraphs
            .iter()
            .flat_map(|p| &p.tokens)
            .filter(|t| matches!(t.kind, TokenKind::KoreanBlock(_)))
            .count();
        log::debug!(
            "표기 완료: 문단 {}개, 한글 토큰 {}개",
            marked.paragraphs.len(),
            korean_tokens
        );
        self.status = if korean_tokens == 0 {
            Some("한글 토큰이 없습니다".to_string())
        } else {
            Some(format!("한글 토큰 {}개 표기됨", korean_tokens))
        };
        self.marked = Some(marked);
        self.scroll = 0;
        self.mode = Mode::Marked;
    }

    /// 표기 결과를 PDF로 내보내기
    pub fn export(&mut self) {
        let Some(marked) = &self.marked else {
            self.status = Some("내보낼 내용이 없습니다".to_string());
            return;
        };
        match export_to_pdf(marked, &self.config) {
            Ok(path) => {
                self.status = Some(format!("PDF 저장: {}", path.display()));
            }
            Err(e) => {
                log::error!("PDF 내보내기 실패: {}", e);
                self.status = Some(format!("내보내기 실패: {}", e));
            }
        }
    }

    /// 시스템 클립보드 붙여넣기 (실패해도 앱은 계속)
    fn paste(&mut self) {
        let text = arboard::Clipboard::new().and_then(|mut cb| cb.get_text());
        match text {
            Ok(text) => self.editor.insert_text(&text),
            Err(e) => {
                log::warn!("클립보드 읽기 실패: {}", e);
                self.status = Some("클립보드를 읽을 수 없습니다".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_romanize_flow() {
        let mut app = App::new(RomarkConfig::default());
        type_str(&mut app, "한글");
        assert_eq!(app.mode, Mode::Edit);

        app.handle_key(ctrl('r'));
        assert_eq!(app.mode, Mode::Marked);
        let marked = app.marked.as_ref().unwrap();
        assert_eq!(marked.reconstruct(), "한글");
    }

    #[test]
    fn test_marked_back_to_edit() {
        let mut app = App::new(RomarkConfig::default());
        type_str(&mut app, "가");
        app.handle_key(ctrl('r'));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Edit);
        // 표기 결과는 남아 있음
        assert!(app.marked.is_some());
    }

    #[test]
    fn test_scroll_in_marked_mode() {
        let mut app = App::new(RomarkConfig::default());
        type_str(&mut app, "가");
        app.handle_key(ctrl('r'));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll, 2);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.scroll, 1);
        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.scroll, 0); // 포화 감소
    }

    #[test]
    fn test_ctrl_q_quits_in_both_modes() {
        let mut app = App::new(RomarkConfig::default());
        app.handle_key(ctrl('q'));
        assert!(app.should_quit);

        let mut app = App::new(RomarkConfig::default());
        type_str(&mut app, "가");
        app.handle_key(ctrl('r'));
        app.handle_key(ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_and_backspace_reach_editor() {
        let mut app = App::new(RomarkConfig::default());
        type_str(&mut app, "가나");
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "다");
        assert_eq!(app.editor.text(), "가나\n다");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.editor.text(), "가나\n");
    }

    #[test]
    fn test_romanize_empty_input_has_status() {
        let mut app = App::new(RomarkConfig::default());
        app.handle_key(ctrl('r'));
        assert_eq!(app.mode, Mode::Marked);
        assert_eq!(app.status.as_deref(), Some("한글 토큰이 없습니다"));
    }

    #[test]
    fn test_rerunning_romanize_is_idempotent() {
        let mut app = App::new(RomarkConfig::default());
        type_str(&mut app, "맛있다 Hello");
        app.handle_key(ctrl('r'));
        let first = app.marked.clone();
        app.handle_key(ctrl('r')); // Marked 모드에서는 편집으로 복귀
        app.handle_key(ctrl('r')); // 다시 표기
        assert_eq!(app.marked, first);
    }
}
