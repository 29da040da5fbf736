//! 표기 구조를 2단 셀(위: 로마자, 아래: 원문)로 배치하는 모듈
//!
//! 폭 측정 함수를 밖에서 받으므로 터미널 셀 폭과 폰트 픽셀 폭 양쪽에서
//! 같은 배치 로직을 쓴다.

mod layout;

pub use layout::{layout_paragraph, paragraph_cells, Cell};
