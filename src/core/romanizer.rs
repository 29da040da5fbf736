//! 한글 음절 -> 로마자 표기 변환
//!
//! 음절을 초성/중성/종성 자모로 분해한 뒤 고정 테이블로 로마자 조각을
//! 이어 붙인다. 분해는 U+AC00 블록 산술식만 사용하며 외부 한글 라이브러리에
//! 의존하지 않는다.

use crate::core::unicode::{
    choseong_index, choseong_jamo_char, decompose_syllable, jongseong_index, jongseong_jamo_char,
    jungseong_index, jungseong_jamo_char,
};

/// 초성 로마자 테이블 (19개, 초성 인덱스 순서)
/// ㅇ(11)은 음가 없는 초성이므로 빈 문자열 - 누락이 아니라 규칙임
#[rustfmt::skip]
const CHOSEONG_ROMAN: [&str; 19] = [
    "g",  // ㄱ
    "kk", // ㄲ
    "n",  // ㄴ
    "d",  // ㄷ
    "tt", // ㄸ
    "r",  // ㄹ
    "m",  // ㅁ
    "b",  // ㅂ
    "pp", // ㅃ
    "s",  // ㅅ
    "ss", // ㅆ
    "",   // ㅇ (음가 없음)
    "j",  // ㅈ
    "jj", // ㅉ
    "ch", // ㅊ
    "k",  // ㅋ
    "t",  // ㅌ
    "p",  // ㅍ
    "h",  // ㅎ
];

/// 중성 로마자 테이블 (21개, 중성 인덱스 순서)
#[rustfmt::skip]
const JUNGSEONG_ROMAN: [&str; 21] = [
    "a",   // ㅏ
    "ae",  // ㅐ
    "ya",  // ㅑ
    "yae", // ㅒ
    "eo",  // ㅓ
    "e",   // ㅔ
    "yeo", // ㅕ
    "ye",  // ㅖ
    "o",   // ㅗ
    "wa",  // ㅘ
    "wae", // ㅙ
    "oe",  // ㅚ
    "yo",  // ㅛ
    "u",   // ㅜ
    "wo",  // ㅝ
    "we",  // ㅞ
    "wi",  // ㅟ
    "yu",  // ㅠ
    "eu",  // ㅡ
    "ui",  // ㅢ
    "i",   // ㅣ
];

/// 종성 로마자 테이블 (28개, 종성 인덱스 순서, 0 = 종성 없음)
/// 받침은 대표음으로 적는다 (ㅅ받침 -> t, ㅇ받침 -> ng 등)
#[rustfmt::skip]
const JONGSEONG_ROMAN: [&str; 28] = [
    "",   // 없음
    "k",  // ㄱ
    "k",  // ㄲ
    "k",  // ㄳ
    "n",  // ㄴ
    "n",  // ㄵ
    "n",  // ㄶ
    "t",  // ㄷ
    "l",  // ㄹ
    "k",  // ㄺ
    "m",  // ㄻ
    "l",  // ㄼ
    "l",  // ㄽ
    "l",  // ㄾ
    "p",  // ㄿ
    "l",  // ㅀ
    "m",  // ㅁ
    "p",  // ㅂ
    "p",  // ㅄ
    "t",  // ㅅ
    "t",  // ㅆ
    "ng", // ㅇ
    "t",  // ㅈ
    "t",  // ㅊ
    "k",  // ㅋ
    "t",  // ㅌ
    "p",  // ㅍ
    "t",  // ㅎ
];

/// 음절 하나를 조합형 자모 시퀀스로 분해 (초성, 중성, [종성])
/// 완성형 한글이 아니면 None
pub fn decompose_to_jamo(syllable: char) -> Option<Vec<char>> {
    let (cho, jung, jong) = decompose_syllable(syllable)?;
    let mut jamo = Vec::with_capacity(3);
    jamo.push(choseong_jamo_char(cho)?);
    jamo.push(jungseong_jamo_char(jung)?);
    if let Some(c) = jongseong_jamo_char(jong) {
        jamo.push(c);
    }
    Some(jamo)
}

/// 자모 문자 하나의 로마자 조각 반환
/// 조합형 자모(초성/중성/종성 위치 구분)와 호환용 자모를 모두 받는다.
/// 매핑에 없는 문자는 오류가 아니라 빈 문자열
pub fn jamo_fragment(jamo: char) -> &'static str {
    if let Some(cho) = choseong_index(jamo) {
        return CHOSEONG_ROMAN[cho as usize];
    }
    if let Some(jung) = jungseong_index(jamo) {
        return JUNGSEONG_ROMAN[jung as usize];
    }
    if let Some(jong) = jongseong_index(jamo) {
        return JONGSEONG_ROMAN[jong as usize];
    }
    compat_jamo_fragment(jamo)
}

/// 호환용 자모 (ㄱ~ㅎ, ㅏ~ㅣ) 로마자 조각
/// 위치 정보가 없으므로 자음은 초성 값, 모음은 중성 값으로 적는다
fn compat_jamo_fragment(jamo: char) -> &'static str {
    // 호환용 모음은 ㅏ(0x314F)~ㅣ(0x3163) 연속 배치라 중성 인덱스로 바로 변환
    let code = jamo as u32;
    if (0x314F..=0x3163).contains(&code) {
        return JUNGSEONG_ROMAN[(code - 0x314F) as usize];
    }
    // 호환용 자음은 겹받침(ㄳ 등)이 사이에 끼어 있어 직접 매핑
    match jamo {
        'ㄱ' => "g",
        'ㄲ' => "kk",
        'ㄴ' => "n",
        'ㄷ' => "d",
        'ㄸ' => "tt",
        'ㄹ' => "r",
        'ㅁ' => "m",
        'ㅂ' => "b",
        'ㅃ' => "pp",
        'ㅅ' => "s",
        'ㅆ' => "ss",
        'ㅇ' => "", // 음가 없음
        'ㅈ' => "j",
        'ㅉ' => "jj",
        'ㅊ' => "ch",
        'ㅋ' => "k",
        'ㅌ' => "t",
        'ㅍ' => "p",
        'ㅎ' => "h",
        _ => "",
    }
}

/// 음절 하나의 로마자 표기 생성
/// 자모 조각을 분해 순서대로 구분자 없이 이어 붙인다.
/// 완성형 한글이 아니면 빈 문자열 (오류 없음)
pub fn romanize_syllable(syllable: char) -> String {
    match decompose_to_jamo(syllable) {
        Some(jamo) => jamo.iter().map(|&j| jamo_fragment(j)).collect(),
        None => String::new(),
    }
}
