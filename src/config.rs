//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// PDF 용지 종류
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    A4,
    Letter,
}

impl Paper {
    /// 세로 기준 용지 크기 (mm)
    pub fn size_mm(&self) -> (f32, f32) {
        match self {
            Paper::A4 => (210.0, 297.0),
            Paper::Letter => (215.9, 279.4),
        }
    }
}

/// PDF 용지 방향
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Romark 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RomarkConfig {
    /// PDF 여백 (mm): [위, 오른쪽, 아래, 왼쪽]
    #[serde(default = "default_margins_mm")]
    pub margins_mm: [f32; 4],
    /// 내보내기 파일명
    #[serde(default = "default_filename")]
    pub filename: String,
    /// JPEG 품질 (0.0 ~ 1.0)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: f32,
    /// 래스터 배율 (96dpi 기준 CSS 픽셀 배수)
    #[serde(default = "default_raster_scale")]
    pub raster_scale: f32,
    /// 용지 종류
    #[serde(default = "default_paper")]
    pub paper: Paper,
    /// 용지 방향
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    /// 한글 폰트 경로 (없으면 시스템 폰트 탐색)
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

fn default_margins_mm() -> [f32; 4] {
    [10.0, 10.0, 10.0, 10.0]
}

fn default_filename() -> String {
    "korean-romanization.pdf".to_string()
}

fn default_jpeg_quality() -> f32 {
    0.98
}

fn default_raster_scale() -> f32 {
    2.0
}

fn default_paper() -> Paper {
    Paper::A4
}

fn default_orientation() -> Orientation {
    Orientation::Portrait
}

impl Default for RomarkConfig {
    fn default() -> Self {
        Self {
            margins_mm: default_margins_mm(),
            filename: default_filename(),
            jpeg_quality: default_jpeg_quality(),
            raster_scale: default_raster_scale(),
            paper: default_paper(),
            orientation: default_orientation(),
            font_path: None,
        }
    }
}

impl RomarkConfig {
    /// 방향 반영한 용지 크기 (mm)
    pub fn page_size_mm(&self) -> (f32, f32) {
        let (w, h) = self.paper.size_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// 설정 파일 경로: ~/.config/romark/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("romark").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RomarkConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| RomarkConfig::default()),
        Err(_) => RomarkConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &RomarkConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
