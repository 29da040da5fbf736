//! 래스터를 페이지로 잘라 PDF에 싣는 단계
//!
//! PDF 직렬화 자체는 printpdf가 담당한다. 여기서는 본문 폭 기준 DPI를
//! 계산하고, 래스터를 페이지 높이만큼 가로 띠로 잘라 각 페이지에
//! JPEG로 싣기만 한다.

use crate::config::RomarkConfig;
use crate::export::error::ExportError;
use crate::export::content_box_mm;
use image::codecs::jpeg::JpegEncoder;
use image::{imageops, RgbImage};
use printpdf::image_crate::codecs::jpeg::JpegDecoder;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// JPEG 품질을 0.0~1.0 -> 1~100으로 변환
pub(crate) fn jpeg_quality_u8(quality: f32) -> u8 {
    (quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8
}

/// 래스터를 페이지 높이 단위 가로 띠로 나눈다
/// 반환: (시작 y, 높이) 목록, 마지막 띠는 남은 만큼만
pub(crate) fn strip_bounds(total_height: u32, strip_height: u32) -> Vec<(u32, u32)> {
    let strip_height = strip_height.max(1);
    let mut strips = Vec::new();
    let mut y = 0;
    while y < total_height {
        let h = strip_height.min(total_height - y);
        strips.push((y, h));
        y += h;
    }
    strips
}

/// 래스터 이미지를 설정된 용지/여백/품질로 PDF 파일에 저장
pub fn write_pdf(image: &RgbImage, config: &RomarkConfig, path: &Path) -> Result<(), ExportError> {
    let (page_w, page_h) = config.page_size_mm();
    let [top, _, _, left] = config.margins_mm;
    let (content_w, content_h) = content_box_mm(config);

    // 래스터 폭이 본문 폭에 딱 맞도록 DPI를 정한다
    let px_per_mm = image.width() as f32 / content_w;
    let dpi = px_per_mm * 25.4;
    let strip_height_px = (content_h * px_per_mm).floor().max(1.0) as u32;

    let quality = jpeg_quality_u8(config.jpeg_quality);
    let strips = strip_bounds(image.height(), strip_height_px);

    let (doc, first_page, first_layer) =
        PdfDocument::new("Korean Romanization", Mm(page_w), Mm(page_h), "content");

    for (i, &(y, h)) in strips.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(page_w), Mm(page_h), "content");
            doc.get_page(page).get_layer(layer)
        };

        let strip = imageops::crop_imm(image, 0, y, image.width(), h).to_image();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, quality)
            .encode_image(&strip)
            .map_err(|e| ExportError::ImageEncode(e.to_string()))?;

        let decoder = JpegDecoder::new(Cursor::new(jpeg))
            .map_err(|e| ExportError::ImageEncode(e.to_string()))?;
        let embedded = Image::try_from(decoder)
            .map_err(|e| ExportError::ImageEncode(e.to_string()))?;

        // PDF 좌표는 왼쪽 아래 원점이므로 띠의 위 가장자리를 위 여백에 맞춘다
        let strip_h_mm = h as f32 / px_per_mm;
        embedded.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(left)),
                translate_y: Some(Mm(page_h - top - strip_h_mm)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::PdfWrite(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_quality_conversion() {
        assert_eq!(jpeg_quality_u8(0.98), 98);
        assert_eq!(jpeg_quality_u8(1.0), 100);
        assert_eq!(jpeg_quality_u8(0.0), 1); // 최소 1
        assert_eq!(jpeg_quality_u8(2.0), 100); // 범위 밖은 잘라냄
    }

    #[test]
    fn test_strip_bounds_single_page() {
        assert_eq!(strip_bounds(500, 1000), vec![(0, 500)]);
    }

    #[test]
    fn test_strip_bounds_multiple_pages() {
        assert_eq!(strip_bounds(2500, 1000), vec![(0, 1000), (1000, 1000), (2000, 500)]);
    }

    #[test]
    fn test_strip_bounds_exact_fit() {
        assert_eq!(strip_bounds(2000, 1000), vec![(0, 1000), (1000, 1000)]);
    }

    #[test]
    fn test_strip_bounds_zero_height() {
        assert!(strip_bounds(0, 1000).is_empty());
    }
}
