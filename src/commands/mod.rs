//! Listing Commands
//!
//! CLI에서 호출하는 명령 정의 (페이지 초기화, 사용자 입력 전달)

pub mod interaction;
pub mod page;

pub use interaction::{replay, ListingSession, SessionSnapshot, UiEvent};
pub use page::{load_page, populate_page, PageState};
