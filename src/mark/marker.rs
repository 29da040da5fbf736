//! 문단/토큰 분해와 한글 토큰 분류

use crate::core::{is_hangul_syllable, romanize_syllable};
use crate::mark::token::{
    MarkedText, Paragraph, SyllableBlock, SyllableMark, Token, TokenKind,
};

/// 분류 전에 제거하는 뒤따르는 문장부호
const TRAILING_PUNCT: [char; 4] = ['.', ',', '!', '?'];

/// 입력 텍스트 전체를 표기 구조로 변환
///
/// - 문단은 개행 문자로 나눈다 (빈 문자열 -> 빈 문단 하나, 뒤쪽 빈 문단 보존)
/// - 토큰은 공백 기준으로 나누되 공백 런도 토큰으로 남긴다 (원문 복원용)
/// - 어떤 입력이든 받아들이며 오류 조건이 없다
pub fn mark(text: &str) -> MarkedText {
    let paragraphs = text
        .split('\n')
        .map(|line| Paragraph {
            tokens: tokenize(line),
        })
        .collect();
    MarkedText { paragraphs }
}

/// 문단 하나를 토큰으로 분해 (공백 런 보존)
fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_is_ws = false;

    for c in line.chars() {
        let is_ws = c.is_whitespace();
        if !current.is_empty() && is_ws != current_is_ws {
            tokens.push(classify(current, current_is_ws));
            current = String::new();
        }
        current.push(c);
        current_is_ws = is_ws;
    }
    if !current.is_empty() {
        tokens.push(classify(current, current_is_ws));
    }
    tokens
}

/// 토큰 분류: 뒤따르는 문장부호 하나를 떼고 전부 한글 음절이면 KoreanBlock
///
/// 문장부호는 한 글자만 제거한다 ("안녕?!"은 PlainText).
/// 제거된 부호는 표시용으로 SyllableBlock에 보존된다.
fn classify(raw: String, is_whitespace: bool) -> Token {
    if is_whitespace {
        return Token {
            raw,
            kind: TokenKind::PlainText,
        };
    }

    let (clean, trailing) = strip_trailing_punct(&raw);
    if !clean.is_empty() && clean.chars().all(is_hangul_syllable) {
        let block = SyllableBlock {
            syllables: clean
                .chars()
                .map(|syllable| SyllableMark {
                    roman: romanize_syllable(syllable),
                    syllable,
                })
                .collect(),
            trailing: trailing.to_string(),
        };
        return Token {
            raw,
            kind: TokenKind::KoreanBlock(block),
        };
    }

    Token {
        raw,
        kind: TokenKind::PlainText,
    }
}

/// 뒤따르는 문장부호 {.,!?} 하나를 분리
/// 반환: (제거된 본문, 떼어낸 부호)
fn strip_trailing_punct(word: &str) -> (&str, &str) {
    if let Some(last) = word.chars().last() {
        if TRAILING_PUNCT.contains(&last) {
            let split = word.len() - last.len_utf8();
            return (&word[..split], &word[split..]);
        }
    }
    (word, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        let marked = mark("");
        assert_eq!(marked.paragraphs.len(), 1);
        assert!(marked.paragraphs[0].tokens.is_empty());
        assert!(!marked.has_content());
    }

    #[test]
    fn test_trailing_empty_paragraph_preserved() {
        let marked = mark("안녕\n");
        assert_eq!(marked.paragraphs.len(), 2);
        assert!(marked.paragraphs[1].tokens.is_empty());
    }

    #[test]
    fn test_korean_word() {
        let marked = mark("한글");
        assert_eq!(marked.paragraphs.len(), 1);
        let token = &marked.paragraphs[0].tokens[0];
        assert_eq!(token.raw, "한글");
        match &token.kind {
            TokenKind::KoreanBlock(block) => {
                assert_eq!(block.syllables.len(), 2);
                assert_eq!(block.syllables[0].syllable, '한');
                assert_eq!(block.syllables[0].roman, "han");
                assert_eq!(block.syllables[1].syllable, '글');
                assert_eq!(block.syllables[1].roman, "geul");
                assert_eq!(block.trailing, "");
            }
            TokenKind::PlainText => panic!("한글 토큰이 PlainText로 분류됨"),
        }
    }

    #[test]
    fn test_mixed_language_input() {
        let marked = mark("Hello 안녕");
        let tokens = &marked.paragraphs[0].tokens;
        assert_eq!(tokens.len(), 3);

        // "Hello" -> PlainText
        assert_eq!(tokens[0].raw, "Hello");
        assert_eq!(tokens[0].kind, TokenKind::PlainText);

        // 공백 런 -> PlainText
        assert_eq!(tokens[1].raw, " ");
        assert_eq!(tokens[1].kind, TokenKind::PlainText);

        // "안녕" -> KoreanBlock (an, nyeong)
        match &tokens[2].kind {
            TokenKind::KoreanBlock(block) => {
                assert_eq!(block.syllables[0].roman, "an");
                assert_eq!(block.syllables[1].roman, "nyeong");
            }
            TokenKind::PlainText => panic!("안녕 토큰이 PlainText로 분류됨"),
        }
    }

    #[test]
    fn test_trailing_punct_stripped_for_classification() {
        let marked = mark("안녕!");
        let token = &marked.paragraphs[0].tokens[0];
        // 원문에는 부호가 남아 있음
        assert_eq!(token.raw, "안녕!");
        match &token.kind {
            TokenKind::KoreanBlock(block) => {
                assert_eq!(block.syllables.len(), 2);
                assert_eq!(block.trailing, "!");
            }
            TokenKind::PlainText => panic!("안녕! 토큰이 PlainText로 분류됨"),
        }
    }

    #[test]
    fn test_multiple_trailing_punct_is_plain() {
        // 부호는 한 글자만 제거 - "안녕?!"은 제거 후에도 "안녕?"라 PlainText
        let marked = mark("안녕?!");
        assert_eq!(marked.paragraphs[0].tokens[0].kind, TokenKind::PlainText);
    }

    #[test]
    fn test_punct_only_token_is_plain() {
        let marked = mark("!");
        assert_eq!(marked.paragraphs[0].tokens[0].kind, TokenKind::PlainText);
        let marked = mark("...");
        assert_eq!(marked.paragraphs[0].tokens[0].kind, TokenKind::PlainText);
    }

    #[test]
    fn test_mixed_script_token_is_plain() {
        let marked = mark("한글abc");
        assert_eq!(marked.paragraphs[0].tokens[0].kind, TokenKind::PlainText);
        // 호환용 자모 단독도 음절 블록이 아님
        let marked = mark("ㅋㅋ");
        assert_eq!(marked.paragraphs[0].tokens[0].kind, TokenKind::PlainText);
    }

    #[test]
    fn test_whitespace_runs_preserved() {
        let marked = mark("가  나\t다");
        let tokens = &marked.paragraphs[0].tokens;
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].raw, "  ");
        assert_eq!(tokens[3].raw, "\t");
    }

    #[test]
    fn test_reconstruction_lossless() {
        let inputs = [
            "",
            "안녕하세요",
            "Hello 안녕!  mixed\t줄\n둘째 줄\n\n넷째",
            "  leading and trailing  ",
            "안녕?!",
        ];
        for input in inputs {
            assert_eq!(mark(input).reconstruct(), input, "입력: {:?}", input);
        }
    }

    #[test]
    fn test_idempotent() {
        let input = "맛있다 Hello 안녕!\n둘째 줄";
        assert_eq!(mark(input), mark(input));
    }

    #[test]
    fn test_matitda_romanization() {
        let marked = mark("맛있다");
        match &marked.paragraphs[0].tokens[0].kind {
            TokenKind::KoreanBlock(block) => {
                let romans: Vec<&str> =
                    block.syllables.iter().map(|s| s.roman.as_str()).collect();
                assert_eq!(romans, vec!["mat", "it", "da"]);
            }
            TokenKind::PlainText => panic!("맛있다 토큰이 PlainText로 분류됨"),
        }
    }
}
