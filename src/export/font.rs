//! 한글 폰트 로드
//!
//! 설정에 지정된 경로를 먼저 쓰고, 없으면 잘 알려진 시스템 폰트 위치를
//! 순서대로 탐색한다. 탐색 결과는 프로세스 전체에서 한 번만 로드된다.

use crate::export::error::ExportError;
use ab_glyph::FontRef;
use lazy_static::lazy_static;
use std::path::Path;

/// 잘 알려진 한글 폰트 경로 (Linux / macOS)
const FONT_CANDIDATES: [&str; 7] = [
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/unfonts-core/UnDotum.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/System/Library/Fonts/Supplemental/AppleGothic.ttf",
];

lazy_static! {
    /// 시스템 폰트 탐색 결과 캐시
    static ref SYSTEM_FONT: Option<FontRef<'static>> = discover_system_font();
}

fn discover_system_font() -> Option<FontRef<'static>> {
    for path in FONT_CANDIDATES {
        if let Some(font) = load_from_path(Path::new(path)) {
            log::debug!("시스템 한글 폰트 사용: {}", path);
            return Some(font);
        }
    }
    None
}

/// 파일에서 폰트 로드 (.ttc 컬렉션은 인덱스 0 사용)
fn load_from_path(path: &Path) -> Option<FontRef<'static>> {
    let bytes = std::fs::read(path).ok()?;
    // 'static 수명을 위해 바이트를 leak (프로세스당 최대 한 번)
    let leaked: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    FontRef::try_from_slice_and_index(leaked, 0).ok()
}

/// 내보내기에 쓸 폰트 결정
/// 지정 경로가 잘못되면 FontInvalid, 탐색까지 실패하면 FontNotFound
pub fn load_font(custom: Option<&Path>) -> Result<FontRef<'static>, ExportError> {
    if let Some(path) = custom {
        let bytes = std::fs::read(path)
            .map_err(|e| ExportError::FontInvalid(format!("{}: {}", path.display(), e)))?;
        let leaked: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        return FontRef::try_from_slice_and_index(leaked, 0)
            .map_err(|e| ExportError::FontInvalid(format!("{}: {}", path.display(), e)));
    }

    SYSTEM_FONT.clone().ok_or_else(|| {
        log::warn!("한글 폰트 탐색 실패 - 설정의 font_path 지정 필요");
        ExportError::FontNotFound
    })
}
