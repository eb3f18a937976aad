//! Listing Viewer - 매물 상세 페이지 렌더러
//!
//! JSON 페이로드를 정규화하여 갤러리/라이트박스, 속성, 연락처, 지도를 포함한
//! 단일 매물 페이지를 구성합니다. 갤러리와 라이트박스는 명시적 이벤트를 받는
//! 상태 머신이며, 렌더링은 [`view::ViewRegions`] 바인딩 계층을 통해 이루어집니다.

pub mod commands;
pub mod config;
pub mod error;
pub mod gallery;
pub mod listing;
pub mod models;
pub mod utils;
pub mod view;

pub use config::ViewerConfig;
pub use error::{CommandError, CommandResult, ListingError};
pub use models::PropertyView;
