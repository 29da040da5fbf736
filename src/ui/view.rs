//! 화면 그리기
//!
//! 표기 미리보기는 배치 줄마다 로마자 행(파란색)과 원문 행을 쌓아 그린다.
//! 폭 측정은 터미널 셀 기준 (unicode-width).

use crate::render::{layout_paragraph, Cell};
use crate::ui::app::{App, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// 로마자 행 색 (원본의 파란 표기와 동일한 역할)
fn roman_style() -> Style {
    Style::default().fg(Color::Blue)
}

fn title_style() -> Style {
    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
}

fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// 터미널 셀 폭 측정
fn cell_width(s: &str) -> u32 {
    UnicodeWidthStr::width(s) as u32
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = match app.mode {
        Mode::Edit => "Korean Romanization Marker - 입력",
        Mode::Marked => "Korean Romanization Marker - 표기 결과",
    };
    frame.render_widget(Paragraph::new(title).style(title_style()), chunks[0]);

    match app.mode {
        Mode::Edit => draw_editor(frame, app, chunks[1]),
        Mode::Marked => draw_marked(frame, app, chunks[1]),
    }

    let hint = match app.mode {
        Mode::Edit => "Ctrl-R 표기 | Ctrl-V 붙여넣기 | Ctrl-Q 종료",
        Mode::Marked => "Ctrl-E PDF 내보내기 | Esc 편집 | ↑↓ 스크롤 | Ctrl-Q 종료",
    };
    let status = match &app.status {
        Some(message) => Line::from(vec![
            Span::raw(message.clone()),
            Span::styled(format!("  ({})", hint), dim_style()),
        ]),
        None => Line::from(Span::styled(hint, dim_style())),
    };
    frame.render_widget(Paragraph::new(status), chunks[2]);
}

fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let height = area.height.max(1) as usize;
    // 커서가 화면 안에 오도록 세로 오프셋 조정
    let offset = app.editor.row.saturating_sub(height - 1);

    let lines: Vec<Line> = app.editor.lines.iter().map(|l| Line::from(l.as_str())).collect();
    frame.render_widget(
        Paragraph::new(lines).scroll((offset as u16, 0)),
        area,
    );

    let line = &app.editor.lines[app.editor.row];
    let prefix: String = line.chars().take(app.editor.col).collect();
    let cursor_x = area.x + (cell_width(&prefix) as u16).min(area.width.saturating_sub(1));
    let cursor_y = area.y + (app.editor.row - offset) as u16;
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn draw_marked(frame: &mut Frame, app: &App, area: Rect) {
    let Some(marked) = &app.marked else {
        frame.render_widget(Paragraph::new("표기 결과가 없습니다").style(dim_style()), area);
        return;
    };

    let max_width = area.width.max(1) as u32;
    let mut lines: Vec<Line> = Vec::new();
    for (i, paragraph) in marked.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default()); // 문단 사이 빈 줄
        }
        for layout_line in layout_paragraph(paragraph, max_width, 1, cell_width) {
            let (upper, lower) = line_rows(&layout_line, 1);
            lines.push(Line::from(Span::styled(upper, roman_style())));
            lines.push(Line::from(lower));
        }
    }

    frame.render_widget(Paragraph::new(lines).scroll((app.scroll, 0)), area);
}

/// 배치 줄 하나를 (로마자 행, 원문 행) 문자열 쌍으로 펼친다
/// 각 행은 셀 폭에 맞춰 가운데 정렬하고 셀 사이에 간격을 둔다
fn line_rows(line: &[Cell], gap: usize) -> (String, String) {
    let mut upper = String::new();
    let mut lower = String::new();
    for (i, cell) in line.iter().enumerate() {
        if i > 0 {
            upper.push_str(&" ".repeat(gap));
            lower.push_str(&" ".repeat(gap));
        }
        let w = cell.width(&cell_width) as usize;
        upper.push_str(&center(&cell.upper, w));
        lower.push_str(&center(&cell.lower, w));
    }
    (upper, lower)
}

/// 문자열을 지정 폭으로 가운데 정렬 (터미널 셀 폭 기준)
fn center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}
