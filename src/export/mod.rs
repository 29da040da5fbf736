//! 표기 구조를 래스터화해 PDF로 내보내는 모듈
//!
//! 원본 도구의 파이프라인을 따른다:
//! 표기 구조 -> 래스터 (한글 폰트로 그리기) -> JPEG -> 페이지 분할 -> PDF

mod error;
mod font;
mod pdf;
mod raster;

pub use error::ExportError;
pub use font::load_font;
pub use pdf::write_pdf;
pub use raster::rasterize;

use crate::config::RomarkConfig;
use crate::mark::MarkedText;
use std::path::PathBuf;

/// CSS 기준 DPI (원본의 html2canvas scale 해석과 동일)
const CSS_DPI: f32 = 96.0;

/// 여백을 뺀 본문 영역 (mm): (폭, 높이)
pub fn content_box_mm(config: &RomarkConfig) -> (f32, f32) {
    let (page_w, page_h) = config.page_size_mm();
    let [top, right, bottom, left] = config.margins_mm;
    (page_w - left - right, page_h - top - bottom)
}

/// 본문 폭(mm)을 래스터 픽셀 폭으로 변환
pub fn raster_width_px(config: &RomarkConfig) -> u32 {
    let (content_w, _) = content_box_mm(config);
    (content_w / 25.4 * CSS_DPI * config.raster_scale).round().max(1.0) as u32
}

/// 표기 구조를 설정대로 PDF 파일로 저장
/// 반환: 저장된 파일 경로
pub fn export_to_pdf(marked: &MarkedText, config: &RomarkConfig) -> Result<PathBuf, ExportError> {
    if !marked.has_content() {
        return Err(ExportError::NothingToExport);
    }

    let font = load_font(config.font_path.as_deref())?;
    let image = rasterize(marked, &font, raster_width_px(config), config.raster_scale);

    let path = PathBuf::from(&config.filename);
    write_pdf(&image, config, &path)?;
    Ok(path)
}
