//! 표기 구조 타입 정의

/// 표기가 붙은 전체 텍스트 (문단 목록)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedText {
    pub paragraphs: Vec<Paragraph>,
}

impl MarkedText {
    /// 내보낼 내용이 있는지 확인 (빈 입력이면 false)
    pub fn has_content(&self) -> bool {
        self.paragraphs.iter().any(|p| !p.tokens.is_empty())
    }

    /// 토큰 원문을 이어 붙여 입력 텍스트 복원
    /// 분류용 문장부호 제거는 표시에 영향을 주지 않으므로 항상 원문과 일치
    pub fn reconstruct(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.reconstruct())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 문단 하나 (토큰 목록, 공백 런 포함)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub tokens: Vec<Token>,
}

impl Paragraph {
    pub fn reconstruct(&self) -> String {
        self.tokens.iter().map(|t| t.raw.as_str()).collect()
    }
}

/// 토큰 하나: 원문 구간 + 분류 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 원문 그대로 (뒤따르는 문장부호 포함)
    pub raw: String,
    pub kind: TokenKind,
}

/// 토큰 분류
/// 렌더링이 두 경우를 빠짐없이 처리하도록 명시적 태그 사용
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// 전체가 완성형 한글 음절인 토큰 (분류용 문장부호 제거 후)
    KoreanBlock(SyllableBlock),
    /// 그 외 전부 (공백 런, 영문, 혼합, 문장부호 단독 등)
    PlainText,
}

/// 한글 토큰의 음절별 표기
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableBlock {
    pub syllables: Vec<SyllableMark>,
    /// 분류 시 제거된 뒤따르는 문장부호 (표시용으로 보존, 없으면 빈 문자열)
    pub trailing: String,
}

/// 음절 하나와 그 로마자 표기
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableMark {
    pub syllable: char,
    pub roman: String,
}
