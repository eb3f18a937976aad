//! Gallery Controller
//!
//! 페이지에 포함된 메인 이미지 + 썸네일 스트립.
//! 페이지 크기는 뷰포트 너비에 따라 4(768 미만) 또는 8입니다.

use serde::Serialize;

use super::pagination::{Direction, PaginationState};
use super::MediaSet;
use crate::view::{PageDots, Region, RegionContent, ViewRegions};

/// 뷰포트 브레이크포인트
pub const BREAKPOINT: u32 = 768;
pub const COMPACT_PAGE_SIZE: usize = 4;
pub const WIDE_PAGE_SIZE: usize = 8;

pub fn page_size_for_width(width: u32) -> usize {
    if width < BREAKPOINT {
        COMPACT_PAGE_SIZE
    } else {
        WIDE_PAGE_SIZE
    }
}

/// 갤러리가 렌더링하는 영역 핸들
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryRegions {
    pub main_image: Region,
    pub thumbnails: Region,
    pub pagination: Region,
    pub photo_count: Region,
}

impl Default for GalleryRegions {
    fn default() -> Self {
        Self {
            main_image: Region::GalleryMainImage,
            thumbnails: Region::GalleryThumbnails,
            pagination: Region::GalleryPagination,
            photo_count: Region::PhotoCount,
        }
    }
}

/// 갤러리 입력 이벤트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "arg", rename_all = "snake_case")]
pub enum GalleryEvent {
    /// 썸네일 단일 활성화: 메인 이미지만 변경
    SelectThumbnail(usize),
    /// 썸네일 더블 활성화: 해당 인덱스로 라이트박스 열기
    OpenThumbnail(usize),
    /// 메인 이미지 활성화: 현재 인덱스로 라이트박스 열기
    ActivateMainImage,
    Navigate(Direction),
    /// 페이지 점 클릭: 창만 이동, 활성 인덱스 유지
    SelectPage(usize),
    Resize(u32),
}

pub struct GalleryController {
    media: MediaSet,
    regions: GalleryRegions,
    state: PaginationState,
}

impl GalleryController {
    pub fn new(media: MediaSet, regions: GalleryRegions, viewport_width: u32) -> Self {
        let state = PaginationState::new(media.len(), page_size_for_width(viewport_width));
        Self {
            media,
            regions,
            state,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn media(&self) -> &MediaSet {
        &self.media
    }

    pub fn active_index(&self) -> usize {
        self.state.current_index()
    }

    /// 초기 렌더링
    pub fn mount(&self, view: &mut dyn ViewRegions) {
        view.put(
            self.regions.photo_count,
            RegionContent::Text(self.media.len().to_string()),
        );
        self.render_main(view);
        self.render_window(view);
    }

    /// 이벤트 처리. 라이트박스를 열어야 하면 그 인덱스를 반환
    pub fn handle(&mut self, event: GalleryEvent, view: &mut dyn ViewRegions) -> Option<usize> {
        match event {
            GalleryEvent::SelectThumbnail(index) => {
                if self.in_range(index) {
                    self.select(index, view);
                }
                None
            }
            GalleryEvent::OpenThumbnail(index) => {
                if !self.in_range(index) {
                    return None;
                }
                // 더블 활성화 전에 단일 활성화가 먼저 일어난 것과 동일하게 맞춤
                self.select(index, view);
                Some(index)
            }
            GalleryEvent::ActivateMainImage => Some(self.state.current_index()),
            GalleryEvent::Navigate(direction) => {
                let next = super::pagination::advance(
                    self.state.current_index(),
                    self.media.len(),
                    direction,
                );
                self.select(next, view);
                None
            }
            GalleryEvent::SelectPage(page) => {
                if self.state.set_page(page) {
                    self.render_window(view);
                }
                None
            }
            GalleryEvent::Resize(width) => {
                self.resize(width, view);
                None
            }
        }
    }

    /// 뷰포트 크기 변경. 반복 호출해도 같은 상태로 수렴
    pub fn resize(&mut self, width: u32, view: &mut dyn ViewRegions) {
        let page_size = page_size_for_width(width);
        if self.state.set_page_size(page_size) {
            tracing::debug!(
                "gallery page size -> {} (width {}), page {}",
                page_size,
                width,
                self.state.visible_page()
            );
            self.render_window(view);
        }
    }

    fn in_range(&self, index: usize) -> bool {
        if index < self.media.len() {
            return true;
        }
        tracing::warn!("gallery index {} out of range ({} images)", index, self.media.len());
        false
    }

    fn select(&mut self, index: usize, view: &mut dyn ViewRegions) {
        let nav = self.state.go_to(index);
        self.render_main(view);
        if nav.window_changed {
            self.render_window(view);
        } else {
            view.highlight(self.regions.thumbnails, nav.index);
        }
    }

    fn render_main(&self, view: &mut dyn ViewRegions) {
        view.put(
            self.regions.main_image,
            RegionContent::Image(self.media.image(self.state.current_index())),
        );
    }

    /// 썸네일 창 + 페이지 점
    fn render_window(&self, view: &mut dyn ViewRegions) {
        view.put(
            self.regions.thumbnails,
            RegionContent::Thumbnails(
                self.media
                    .strip(self.state.visible_window(), self.state.current_index()),
            ),
        );

        let dots = if self.state.has_pagination() {
            RegionContent::Dots(PageDots {
                count: self.state.page_count(),
                active: self.state.visible_page(),
            })
        } else {
            RegionContent::Flag(false)
        };
        view.put(self.regions.pagination, dots);
    }
}
