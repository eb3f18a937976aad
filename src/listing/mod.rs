//! 매물 데이터 모듈
//!
//! 페이로드 수집(loader)과 뷰 모델 정규화(normalizer)를 담당합니다.

pub mod loader;
pub mod normalizer;

pub use loader::{load_payload, PayloadSource};
pub use normalizer::normalize;
