//! 표기 구조 래스터화
//!
//! 흰 배경 RGB 캔버스에 문단별 배치 결과를 그린다. 각 셀은 위에 파란
//! 로마자(작은 크기), 아래에 본문 글자를 가운데 정렬로 쌓는다.

use crate::mark::MarkedText;
use crate::render::layout_paragraph;
use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

/// 본문 크기 (CSS px, 원본 text-lg)
const BASE_TEXT_PX: f32 = 18.0;
/// 로마자 크기 (CSS px, 원본 text-xs)
const BASE_ROMAN_PX: f32 = 12.0;
/// 셀 간격 (CSS px, 원본 mr-1)
const BASE_GAP_PX: f32 = 4.0;
/// 문단 간격 (CSS px, 원본 mb-4)
const BASE_PARA_GAP_PX: f32 = 16.0;
/// 줄 간격 비율 (원본 leading-loose 근사)
const LINE_GAP_RATIO: f32 = 0.6;

/// 본문 색
const TEXT_COLOR: Rgb<u8> = Rgb([17, 24, 39]);
/// 로마자 색 (원본 text-blue-800)
const ROMAN_COLOR: Rgb<u8> = Rgb([30, 64, 175]);
/// 배경색
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// 배율 반영한 그리기 치수
#[derive(Debug, Clone, Copy)]
pub(crate) struct RasterMetrics {
    pub text_px: f32,
    pub roman_px: f32,
    pub gap: u32,
    pub para_gap: f32,
}

impl RasterMetrics {
    pub(crate) fn scaled(scale: f32) -> Self {
        RasterMetrics {
            text_px: BASE_TEXT_PX * scale,
            roman_px: BASE_ROMAN_PX * scale,
            gap: (BASE_GAP_PX * scale).round().max(1.0) as u32,
            para_gap: BASE_PARA_GAP_PX * scale,
        }
    }

    /// 한 줄 높이 = 로마자 행 + 본문 행 + 줄 간격
    pub(crate) fn line_height(&self) -> f32 {
        self.roman_px + self.text_px * (1.0 + LINE_GAP_RATIO)
    }
}

/// 지정 크기에서 문자열이 차지하는 가로 픽셀
fn string_width(font: &FontRef, text: &str, px: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(px));
    text.chars()
        .map(|c| scaled.h_advance(font.glyph_id(c)))
        .sum()
}

/// 표기 구조를 래스터 이미지로 그린다
/// width_px: 본문 영역 폭 (픽셀), scale: 래스터 배율
pub fn rasterize(
    marked: &MarkedText,
    font: &FontRef<'static>,
    width_px: u32,
    scale: f32,
) -> RgbImage {
    let metrics = RasterMetrics::scaled(scale);
    let measure = |s: &str| string_width(font, s, metrics.text_px).ceil() as u32;

    // 먼저 전체 배치를 끝내 캔버스 높이를 정한다
    let paragraphs: Vec<Vec<Vec<crate::render::Cell>>> = marked
        .paragraphs
        .iter()
        .map(|p| layout_paragraph(p, width_px.max(1), metrics.gap, measure))
        .collect();

    let line_count: usize = paragraphs.iter().map(|lines| lines.len()).sum();
    let height = (line_count as f32 * metrics.line_height()
        + paragraphs.len().saturating_sub(1) as f32 * metrics.para_gap)
        .ceil()
        .max(1.0) as u32;

    let mut image = RgbImage::from_pixel(width_px.max(1), height, BACKGROUND);

    let mut y = 0.0f32;
    for (i, lines) in paragraphs.iter().enumerate() {
        if i > 0 {
            y += metrics.para_gap;
        }
        for line in lines {
            let mut x = 0.0f32;
            for cell in line {
                let cell_w = cell.width(&measure) as f32;

                if !cell.upper.is_empty() {
                    let upper_w = string_width(font, &cell.upper, metrics.roman_px);
                    draw_text_mut(
                        &mut image,
                        ROMAN_COLOR,
                        (x + (cell_w - upper_w) / 2.0).round() as i32,
                        y.round() as i32,
                        PxScale::from(metrics.roman_px),
                        font,
                        &cell.upper,
                    );
                }
                if !cell.lower.is_empty() {
                    let lower_w = string_width(font, &cell.lower, metrics.text_px);
                    draw_text_mut(
                        &mut image,
                        TEXT_COLOR,
                        (x + (cell_w - lower_w) / 2.0).round() as i32,
                        (y + metrics.roman_px).round() as i32,
                        PxScale::from(metrics.text_px),
                        font,
                        &cell.lower,
                    );
                }
                x += cell_w + metrics.gap as f32;
            }
            y += metrics.line_height();
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_scaled() {
        let m = RasterMetrics::scaled(2.0);
        assert_eq!(m.text_px, 36.0);
        assert_eq!(m.roman_px, 24.0);
        assert_eq!(m.gap, 8);
        assert_eq!(m.para_gap, 32.0);
    }

    #[test]
    fn test_line_height_positive_and_monotonic() {
        let m1 = RasterMetrics::scaled(1.0);
        let m2 = RasterMetrics::scaled(2.0);
        assert!(m1.line_height() > 0.0);
        assert!((m2.line_height() - 2.0 * m1.line_height()).abs() < 0.001);
    }
}
