//! 내보내기 오류 타입

use thiserror::Error;

/// PDF 내보내기 실패 원인
/// 핵심 로직은 오류가 없으므로 전부 협력자(폰트/이미지/PDF/IO) 쪽 실패다
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("한글 폰트를 찾을 수 없습니다 (설정의 font_path를 지정해주세요)")]
    FontNotFound,

    #[error("폰트 로드 실패: {0}")]
    FontInvalid(String),

    #[error("내보낼 내용이 없습니다")]
    NothingToExport,

    #[error("이미지 인코딩 실패: {0}")]
    ImageEncode(String),

    #[error("PDF 생성 실패: {0}")]
    PdfWrite(String),

    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}
