//! 셀 배치와 탐욕적 줄바꿈

use crate::mark::{Paragraph, TokenKind};

/// 표시 셀 하나: 로마자 행(위) + 원문 행(아래)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// 로마자 조각 (한글 음절이 아니면 빈 문자열)
    pub upper: String,
    /// 원문 (음절 한 글자, 일반 토큰 전체, 또는 공백 런)
    pub lower: String,
}

impl Cell {
    fn new(upper: impl Into<String>, lower: impl Into<String>) -> Self {
        Cell {
            upper: upper.into(),
            lower: lower.into(),
        }
    }

    /// 셀 폭 = 위/아래 중 넓은 쪽
    pub fn width<F: Fn(&str) -> u32>(&self, measure: &F) -> u32 {
        measure(&self.upper).max(measure(&self.lower))
    }

    /// 공백 런만 담긴 셀인지 확인
    pub fn is_whitespace(&self) -> bool {
        self.upper.is_empty() && self.lower.chars().all(|c| c.is_whitespace())
    }
}

/// 문단을 셀 시퀀스로 평탄화
/// 한글 토큰은 음절마다 셀 하나 + 떼어낸 문장부호 셀, 나머지는 토큰째 셀 하나
pub fn paragraph_cells(paragraph: &Paragraph) -> Vec<Cell> {
    let mut cells = Vec::new();
    for token in &paragraph.tokens {
        match &token.kind {
            TokenKind::KoreanBlock(block) => {
                for mark in &block.syllables {
                    cells.push(Cell::new(mark.roman.clone(), mark.syllable.to_string()));
                }
                if !block.trailing.is_empty() {
                    cells.push(Cell::new("", block.trailing.clone()));
                }
            }
            TokenKind::PlainText => {
                cells.push(Cell::new("", token.raw.clone()));
            }
        }
    }
    cells
}

/// 문단을 최대 폭에 맞춰 줄 단위 셀 그룹으로 배치
///
/// - 탐욕적 줄바꿈: 셀 폭 + 셀 사이 간격이 최대 폭을 넘으면 다음 줄
/// - 줄바꿈된 줄은 공백 셀로 시작하지 않음 (문단 첫 줄은 예외)
/// - 최대 폭보다 넓은 셀은 잘리지 않고 한 줄에 단독 배치
/// - 빈 문단은 빈 줄 하나로 배치 (빈 줄도 표시됨)
pub fn layout_paragraph<F: Fn(&str) -> u32>(
    paragraph: &Paragraph,
    max_width: u32,
    gap: u32,
    measure: F,
) -> Vec<Vec<Cell>> {
    let cells = paragraph_cells(paragraph);
    if cells.is_empty() {
        return vec![Vec::new()];
    }

    let mut lines: Vec<Vec<Cell>> = Vec::new();
    let mut line: Vec<Cell> = Vec::new();
    let mut line_width: u32 = 0;

    for cell in cells {
        let cell_width = cell.width(&measure);
        let needed = if line.is_empty() {
            cell_width
        } else {
            line_width + gap + cell_width
        };

        if !line.is_empty() && needed > max_width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
            // 줄 머리의 공백 셀은 건너뜀
            if cell.is_whitespace() {
                continue;
            }
        }
        if !line.is_empty() {
            line_width += gap;
        }
        line_width += cell_width;
        line.push(cell);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(Vec::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::mark;

    /// 테스트용 폭 측정: 문자 수 (한글도 1로 계산)
    fn char_count(s: &str) -> u32 {
        s.chars().count() as u32
    }

    fn cells_of(text: &str) -> Vec<Cell> {
        paragraph_cells(&mark(text).paragraphs[0])
    }

    #[test]
    fn test_paragraph_cells_korean() {
        let cells = cells_of("한글");
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].upper, "han");
        assert_eq!(cells[0].lower, "한");
        assert_eq!(cells[1].upper, "geul");
        assert_eq!(cells[1].lower, "글");
    }

    #[test]
    fn test_paragraph_cells_trailing_punct() {
        let cells = cells_of("안녕!");
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].upper, "");
        assert_eq!(cells[2].lower, "!");
    }

    #[test]
    fn test_paragraph_cells_plain_and_whitespace() {
        let cells = cells_of("Hello 안녕");
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].lower, "Hello");
        assert!(cells[0].upper.is_empty());
        assert!(cells[1].is_whitespace());
        assert_eq!(cells[2].upper, "an");
    }

    #[test]
    fn test_cell_width_takes_wider_row() {
        let cell = Cell {
            upper: "nyeong".to_string(),
            lower: "녕".to_string(),
        };
        assert_eq!(cell.width(&char_count), 6);
    }

    #[test]
    fn test_layout_fits_single_line() {
        let paragraph = &mark("한글").paragraphs[0];
        let lines = layout_paragraph(paragraph, 80, 1, char_count);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 2);
    }

    #[test]
    fn test_layout_greedy_wrap() {
        // 셀 폭: han(3) geul(4), 간격 1 -> 폭 5에는 한 셀씩
        let paragraph = &mark("한글").paragraphs[0];
        let lines = layout_paragraph(paragraph, 5, 1, char_count);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0][0].upper, "han");
        assert_eq!(lines[1][0].upper, "geul");
    }

    #[test]
    fn test_layout_no_leading_whitespace_on_wrapped_line() {
        // "Hello 안녕": Hello(5) + 공백 + an(2) -> 폭 6이면 공백 셀에서 줄바꿈
        let paragraph = &mark("Hello 안녕").paragraphs[0];
        let lines = layout_paragraph(paragraph, 6, 1, char_count);
        assert!(lines.len() >= 2);
        for line in &lines[1..] {
            if let Some(first) = line.first() {
                assert!(!first.is_whitespace(), "줄 머리에 공백 셀: {:?}", line);
            }
        }
    }

    #[test]
    fn test_layout_oversized_cell_alone() {
        let paragraph = &mark("가 supercalifragilistic 나").paragraphs[0];
        let lines = layout_paragraph(paragraph, 8, 1, char_count);
        // 넓은 셀도 버려지지 않고 단독 줄에 배치됨
        let all: Vec<&Cell> = lines.iter().flatten().collect();
        assert!(all.iter().any(|c| c.lower == "supercalifragilistic"));
        let wide_line = lines
            .iter()
            .find(|l| l.iter().any(|c| c.lower == "supercalifragilistic"))
            .unwrap();
        assert_eq!(wide_line.len(), 1);
    }

    #[test]
    fn test_layout_empty_paragraph() {
        let paragraph = &mark("").paragraphs[0];
        let lines = layout_paragraph(paragraph, 80, 1, char_count);
        assert_eq!(lines, vec![Vec::new()]);
    }
}
