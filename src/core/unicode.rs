//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 조합형 초성 자모 시작 코드포인트 (ᄀ)
const CHOSEONG_JAMO_BASE: u32 = 0x1100;
/// 조합형 중성 자모 시작 코드포인트 (ᅡ)
const JUNGSEONG_JAMO_BASE: u32 = 0x1161;
/// 조합형 종성 자모 시작 코드포인트 - 1 (종성 인덱스 1 = ᆨ = 0x11A8)
const JONGSEONG_JAMO_BASE: u32 = 0x11A7;

/// 완성형 한글 음절인지 확인 (U+AC00 ~ U+D7A3)
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 초성 인덱스 -> 조합형 자모 문자 (ᄀ ~ ᄒ)
pub fn choseong_jamo_char(cho: u32) -> Option<char> {
    if cho < CHOSEONG_COUNT {
        char::from_u32(CHOSEONG_JAMO_BASE + cho)
    } else {
        None
    }
}

/// 중성 인덱스 -> 조합형 자모 문자 (ᅡ ~ ᅵ)
pub fn jungseong_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        char::from_u32(JUNGSEONG_JAMO_BASE + jung)
    } else {
        None
    }
}

/// 종성 인덱스 -> 조합형 자모 문자 (ᆨ ~ ᇂ)
/// 인덱스 0 (종성 없음)은 문자가 없으므로 None
pub fn jongseong_jamo_char(jong: u32) -> Option<char> {
    if jong >= 1 && jong < JONGSEONG_COUNT {
        char::from_u32(JONGSEONG_JAMO_BASE + jong)
    } else {
        None
    }
}

/// 조합형 초성 자모 문자 -> 초성 인덱스
pub fn choseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    if (CHOSEONG_JAMO_BASE..CHOSEONG_JAMO_BASE + CHOSEONG_COUNT).contains(&code) {
        Some(code - CHOSEONG_JAMO_BASE)
    } else {
        None
    }
}

/// 조합형 중성 자모 문자 -> 중성 인덱스
pub fn jungseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    if (JUNGSEONG_JAMO_BASE..JUNGSEONG_JAMO_BASE + JUNGSEONG_COUNT).contains(&code) {
        Some(code - JUNGSEONG_JAMO_BASE)
    } else {
        None
    }
}

/// 조합형 종성 자모 문자 -> 종성 인덱스 (1~27)
pub fn jongseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    if (JONGSEONG_JAMO_BASE + 1..JONGSEONG_JAMO_BASE + JONGSEONG_COUNT).contains(&code) {
        Some(code - JONGSEONG_JAMO_BASE)
    } else {
        None
    }
}
