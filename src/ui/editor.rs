//! 여러 줄 텍스트 편집기 상태
//!
//! 원본 도구의 textarea에 해당한다. 커서는 (줄, 글자) 단위로 움직이며
//! 한글처럼 여러 바이트인 글자도 한 칸으로 다룬다.

/// 편집 버퍼와 커서
#[derive(Debug, Clone)]
pub struct Editor {
    /// 줄 목록 (항상 한 줄 이상)
    pub lines: Vec<String>,
    /// 커서 줄 (0-based)
    pub row: usize,
    /// 커서 글자 위치 (0-based, 글자 단위)
    pub col: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Editor {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// 전체 내용 (줄을 개행으로 연결)
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn line_char_count(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// 글자 위치 -> 바이트 위치
    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    /// 커서 위치에 글자 삽입
    pub fn insert_char(&mut self, c: char) {
        let idx = Self::byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    /// 커서 위치에서 줄 나누기 (Enter)
    pub fn newline(&mut self) {
        let idx = Self::byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// 커서 앞 글자 삭제, 줄 머리에서는 윗줄과 합침
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let idx = Self::byte_index(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_char_count(self.row);
            self.lines[self.row].push_str(&current);
        }
    }

    /// 텍스트 붙여넣기 (개행 포함 가능)
    pub fn insert_text(&mut self, text: &str) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            for c in part.chars() {
                self.insert_char(c);
            }
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_char_count(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_char_count(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            // 짧은 줄로 올라가면 줄 끝으로 당김
            self.col = self.col.min(self.line_char_count(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_char_count(self.row));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_char_count(self.row);
    }
}
