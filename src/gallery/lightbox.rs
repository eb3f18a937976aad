//! Lightbox Controller
//!
//! 전체 화면 오버레이. 상태는 `Closed | Open(index, page)` 두 가지이며,
//! 닫혔다 다시 열릴 때 전달된 인덱스 외에는 아무 것도 유지하지 않습니다.

use serde::Serialize;

use super::pagination::{Direction, PaginationState};
use super::MediaSet;
use crate::view::{Region, RegionContent, ViewRegions};

/// 라이트박스 썸네일 페이지 크기 (뷰포트와 무관)
pub const LIGHTBOX_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxRegions {
    pub overlay: Region,
    pub image: Region,
    pub counter: Region,
    pub thumbnails: Region,
    pub prev_page: Region,
    pub next_page: Region,
    pub scroll_lock: Region,
}

impl Default for LightboxRegions {
    fn default() -> Self {
        Self {
            overlay: Region::LightboxOverlay,
            image: Region::LightboxImage,
            counter: Region::LightboxCounter,
            thumbnails: Region::LightboxThumbnails,
            prev_page: Region::LightboxPrevPage,
            next_page: Region::LightboxNextPage,
            scroll_lock: Region::BodyScrollLock,
        }
    }
}

/// 키보드 입력
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Key {
    Escape,
    ArrowRight,
    ArrowLeft,
    Other,
}

/// 오버레이 클릭 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "arg", rename_all = "snake_case")]
pub enum LightboxEvent {
    Open(usize),
    /// 닫기 버튼
    Close,
    Click(ClickTarget),
    Navigate(Direction),
    SelectThumbnail(usize),
    PreviousPage,
    NextPage,
    Key(Key),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(PaginationState),
}

pub struct LightboxController {
    media: MediaSet,
    regions: LightboxRegions,
    state: LightboxState,
}

impl LightboxController {
    pub fn new(media: MediaSet, regions: LightboxRegions) -> Self {
        Self {
            media,
            regions,
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// 열려 있으면 `(index, page)`
    pub fn position(&self) -> Option<(usize, usize)> {
        match &self.state {
            LightboxState::Open(p) => Some((p.current_index(), p.current_page())),
            LightboxState::Closed => None,
        }
    }

    /// 초기 (닫힌) 상태 렌더링
    pub fn mount(&self, view: &mut dyn ViewRegions) {
        view.put(self.regions.overlay, RegionContent::Flag(false));
        view.put(self.regions.scroll_lock, RegionContent::Flag(false));
    }

    pub fn handle(&mut self, event: LightboxEvent, view: &mut dyn ViewRegions) {
        if let LightboxEvent::Open(index) = event {
            self.open(index, view);
            return;
        }
        // 닫힌 상태에서는 열기 요청 외의 입력을 무시
        if !self.is_open() {
            return;
        }

        match event {
            LightboxEvent::Open(_) => {}
            LightboxEvent::Close
            | LightboxEvent::Click(ClickTarget::Backdrop)
            | LightboxEvent::Key(Key::Escape) => self.close(view),
            LightboxEvent::Click(ClickTarget::Content) | LightboxEvent::Key(Key::Other) => {}
            LightboxEvent::Navigate(direction) => self.step(direction, view),
            LightboxEvent::Key(Key::ArrowRight) => self.step(Direction::Next, view),
            LightboxEvent::Key(Key::ArrowLeft) => self.step(Direction::Previous, view),
            LightboxEvent::SelectThumbnail(index) => {
                if index < self.media.len() {
                    self.go_to(index, view);
                }
            }
            LightboxEvent::PreviousPage => self.shift_page(-1, view),
            LightboxEvent::NextPage => self.shift_page(1, view),
        }
    }

    /// Closed/Open → Open(index, page_of(index))
    pub fn open(&mut self, index: usize, view: &mut dyn ViewRegions) {
        if index >= self.media.len() {
            tracing::warn!("lightbox open at {} ignored ({} images)", index, self.media.len());
            return;
        }

        let mut pagination = PaginationState::new(self.media.len(), LIGHTBOX_PAGE_SIZE);
        pagination.go_to(index);
        tracing::debug!("lightbox open at {} (page {})", index, pagination.current_page());
        self.state = LightboxState::Open(pagination);

        view.put(self.regions.overlay, RegionContent::Flag(true));
        view.put(self.regions.scroll_lock, RegionContent::Flag(true));
        self.render_image(view);
        self.render_window(view);
    }

    pub fn close(&mut self, view: &mut dyn ViewRegions) {
        if !self.is_open() {
            return;
        }
        self.state = LightboxState::Closed;
        tracing::debug!("lightbox closed");
        view.put(self.regions.overlay, RegionContent::Flag(false));
        view.put(self.regions.scroll_lock, RegionContent::Flag(false));
    }

    fn step(&mut self, direction: Direction, view: &mut dyn ViewRegions) {
        let next = match &self.state {
            LightboxState::Open(p) => {
                super::pagination::advance(p.current_index(), self.media.len(), direction)
            }
            LightboxState::Closed => return,
        };
        self.go_to(next, view);
    }

    fn go_to(&mut self, index: usize, view: &mut dyn ViewRegions) {
        let LightboxState::Open(pagination) = &mut self.state else {
            return;
        };
        let nav = pagination.go_to(index);

        self.render_image(view);
        if nav.window_changed {
            self.render_window(view);
        } else {
            view.highlight(self.regions.thumbnails, nav.index);
        }
    }

    fn shift_page(&mut self, delta: isize, view: &mut dyn ViewRegions) {
        let LightboxState::Open(pagination) = &mut self.state else {
            return;
        };
        let target = pagination.visible_page().saturating_add_signed(delta);
        // 첫/마지막 페이지에서는 컨트롤이 비활성이므로 변화 없음
        if (delta < 0 && pagination.is_first_page()) || (delta > 0 && pagination.is_last_page()) {
            return;
        }
        if pagination.set_page(target) {
            self.render_window(view);
        }
    }

    fn render_image(&self, view: &mut dyn ViewRegions) {
        let LightboxState::Open(pagination) = &self.state else {
            return;
        };
        let index = pagination.current_index();
        view.put(self.regions.image, RegionContent::Image(self.media.image(index)));
        view.put(
            self.regions.counter,
            RegionContent::Text(format!("{} / {}", index + 1, self.media.len())),
        );
    }

    /// 썸네일 창 + 페이지 이동 컨트롤 활성 여부
    fn render_window(&self, view: &mut dyn ViewRegions) {
        let LightboxState::Open(pagination) = &self.state else {
            return;
        };
        view.put(
            self.regions.thumbnails,
            RegionContent::Thumbnails(
                self.media
                    .strip(pagination.visible_window(), pagination.current_index()),
            ),
        );
        view.put(
            self.regions.prev_page,
            RegionContent::Flag(!pagination.is_first_page()),
        );
        view.put(
            self.regions.next_page,
            RegionContent::Flag(!pagination.is_last_page()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLACEHOLDER_IMAGE;
    use crate::gallery::pagination::page_of;
    use crate::view::{RegionMap, ThumbnailStrip};

    fn lightbox(n: usize) -> (LightboxController, RegionMap) {
        let refs: Vec<String> = (0..n).map(|i| format!("{}.jpg", i)).collect();
        let media = MediaSet::resolve(&refs, "images/", PLACEHOLDER_IMAGE);
        let controller = LightboxController::new(media, LightboxRegions::default());
        let mut view = RegionMap::new();
        controller.mount(&mut view);
        (controller, view)
    }

    fn strip(view: &RegionMap) -> ThumbnailStrip {
        match view.get(Region::LightboxThumbnails) {
            Some(RegionContent::Thumbnails(strip)) => strip.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    fn assert_page_invariant(controller: &LightboxController) {
        if let LightboxState::Open(p) = controller.state() {
            assert_eq!(p.current_page(), page_of(p.current_index(), LIGHTBOX_PAGE_SIZE));
        }
    }

    #[test]
    fn test_open_at_nine_lands_on_second_page() {
        let (mut lb, mut view) = lightbox(20);
        lb.handle(LightboxEvent::Open(9), &mut view);

        assert_eq!(lb.position(), Some((9, 1)));
        let strip = strip(&view);
        assert_eq!(strip.indices(), 8..16);
        assert_eq!(strip.active, 9);
        assert_eq!(view.flag(Region::LightboxOverlay), Some(true));
        assert_eq!(view.flag(Region::BodyScrollLock), Some(true));
        assert_eq!(view.text(Region::LightboxCounter), Some("10 / 20"));
        assert_eq!(view.flag(Region::LightboxPrevPage), Some(true));
        assert_eq!(view.flag(Region::LightboxNextPage), Some(true));
    }

    #[test]
    fn test_open_at_nine_with_fewer_images() {
        let (mut lb, mut view) = lightbox(11);
        lb.handle(LightboxEvent::Open(9), &mut view);
        assert_eq!(strip(&view).indices(), 8..11);
        assert_eq!(view.flag(Region::LightboxNextPage), Some(false));
    }

    #[test]
    fn test_close_triggers() {
        for trigger in [
            LightboxEvent::Close,
            LightboxEvent::Click(ClickTarget::Backdrop),
            LightboxEvent::Key(Key::Escape),
        ] {
            let (mut lb, mut view) = lightbox(3);
            lb.handle(LightboxEvent::Open(1), &mut view);
            lb.handle(trigger, &mut view);
            assert_eq!(lb.state(), &LightboxState::Closed);
            assert_eq!(view.flag(Region::LightboxOverlay), Some(false));
            assert_eq!(view.flag(Region::BodyScrollLock), Some(false));
        }
    }

    #[test]
    fn test_content_click_keeps_open() {
        let (mut lb, mut view) = lightbox(3);
        lb.handle(LightboxEvent::Open(0), &mut view);
        lb.handle(LightboxEvent::Click(ClickTarget::Content), &mut view);
        assert!(lb.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let (mut lb, mut view) = lightbox(3);
        lb.handle(LightboxEvent::Key(Key::ArrowRight), &mut view);
        assert_eq!(lb.state(), &LightboxState::Closed);
        assert!(!view.is_populated(Region::LightboxImage));
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let (mut lb, mut view) = lightbox(10);
        lb.handle(LightboxEvent::Open(0), &mut view);
        lb.handle(LightboxEvent::Key(Key::ArrowLeft), &mut view);
        assert_eq!(lb.position(), Some((9, 1)));
        assert_page_invariant(&lb);

        lb.handle(LightboxEvent::Key(Key::ArrowRight), &mut view);
        assert_eq!(lb.position(), Some((0, 0)));
        assert_eq!(strip(&view).indices(), 0..8);
    }

    #[test]
    fn test_window_rerenders_only_on_page_crossing() {
        let (mut lb, mut view) = lightbox(16);
        lb.handle(LightboxEvent::Open(5), &mut view);
        assert_eq!(view.render_count(Region::LightboxThumbnails), 1);

        lb.handle(LightboxEvent::Navigate(Direction::Next), &mut view);
        lb.handle(LightboxEvent::Navigate(Direction::Next), &mut view);
        assert_eq!(view.render_count(Region::LightboxThumbnails), 1);
        assert_eq!(strip(&view).active, 7);

        lb.handle(LightboxEvent::Navigate(Direction::Next), &mut view);
        assert_eq!(view.render_count(Region::LightboxThumbnails), 2);
        assert_eq!(lb.position(), Some((8, 1)));
        assert_page_invariant(&lb);
    }

    #[test]
    fn test_page_controls_disabled_at_bounds() {
        let (mut lb, mut view) = lightbox(20);
        lb.handle(LightboxEvent::Open(2), &mut view);
        assert_eq!(view.flag(Region::LightboxPrevPage), Some(false));

        lb.handle(LightboxEvent::PreviousPage, &mut view);
        assert_eq!(view.render_count(Region::LightboxThumbnails), 1);

        lb.handle(LightboxEvent::NextPage, &mut view);
        lb.handle(LightboxEvent::NextPage, &mut view);
        assert_eq!(strip(&view).indices(), 16..20);
        assert_eq!(view.flag(Region::LightboxNextPage), Some(false));
        assert_eq!(view.flag(Region::LightboxPrevPage), Some(true));

        lb.handle(LightboxEvent::NextPage, &mut view);
        assert_eq!(view.render_count(Region::LightboxThumbnails), 3);
        // 활성 인덱스는 페이지 이동과 무관
        assert_eq!(lb.position(), Some((2, 0)));
    }

    #[test]
    fn test_reopen_does_not_persist_state() {
        let (mut lb, mut view) = lightbox(20);
        lb.handle(LightboxEvent::Open(3), &mut view);
        lb.handle(LightboxEvent::NextPage, &mut view);
        lb.handle(LightboxEvent::Close, &mut view);

        lb.handle(LightboxEvent::Open(4), &mut view);
        assert_eq!(lb.position(), Some((4, 0)));
        assert_eq!(strip(&view).indices(), 0..8);
    }

    #[test]
    fn test_select_thumbnail() {
        let (mut lb, mut view) = lightbox(12);
        lb.handle(LightboxEvent::Open(0), &mut view);
        lb.handle(LightboxEvent::SelectThumbnail(6), &mut view);
        assert_eq!(lb.position(), Some((6, 0)));
        assert_eq!(view.text(Region::LightboxCounter), Some("7 / 12"));

        lb.handle(LightboxEvent::SelectThumbnail(99), &mut view);
        assert_eq!(lb.position(), Some((6, 0)));
    }
}
