//! Interaction Commands
//!
//! 사용자 입력(클릭, 키, 뷰포트 크기 변경)을 갤러리/라이트박스 컨트롤러로 전달합니다.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{CommandResult, ListingError};
use crate::gallery::lightbox::{ClickTarget, Key};
use crate::gallery::{
    Direction, GalleryController, GalleryEvent, GalleryRegions, LightboxController,
    LightboxEvent, LightboxRegions, LightboxState, MediaSet,
};
use crate::view::ViewRegions;

/// 화면 입력 이벤트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "target", content = "input", rename_all = "snake_case")]
pub enum UiEvent {
    Gallery(GalleryEvent),
    Lightbox(LightboxEvent),
    /// 문서 전역 키 입력 (라이트박스가 보일 때만 의미 있음)
    Key(Key),
    Resize(u32),
}

/// 이벤트 인자를 대상 정수 타입으로 파싱. 범위를 벗어나면 `InvalidEvent`
fn parse_arg<T: FromStr>(token: &str, arg: Option<&str>) -> Result<T, ListingError> {
    let arg = arg.ok_or_else(|| ListingError::InvalidEvent(format!("{} needs a number", token)))?;
    arg.trim()
        .parse()
        .map_err(|_| ListingError::InvalidEvent(format!("{}: invalid number '{}'", token, arg.trim())))
}

impl FromStr for UiEvent {
    type Err = ListingError;

    /// `next`, `select:3`, `open:9`, `resize:500`, `lb-next`, `key:escape` ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((n, a)) => (n, Some(a)),
            None => (s, None),
        };

        let event = match name {
            "next" => UiEvent::Gallery(GalleryEvent::Navigate(Direction::Next)),
            "prev" => UiEvent::Gallery(GalleryEvent::Navigate(Direction::Previous)),
            "select" => UiEvent::Gallery(GalleryEvent::SelectThumbnail(parse_arg(name, arg)?)),
            "open" => UiEvent::Gallery(GalleryEvent::OpenThumbnail(parse_arg(name, arg)?)),
            "main" => UiEvent::Gallery(GalleryEvent::ActivateMainImage),
            "page" => UiEvent::Gallery(GalleryEvent::SelectPage(parse_arg(name, arg)?)),
            "resize" => UiEvent::Resize(parse_arg(name, arg)?),
            "lb-next" => UiEvent::Lightbox(LightboxEvent::Navigate(Direction::Next)),
            "lb-prev" => UiEvent::Lightbox(LightboxEvent::Navigate(Direction::Previous)),
            "lb-select" => {
                UiEvent::Lightbox(LightboxEvent::SelectThumbnail(parse_arg(name, arg)?))
            }
            "lb-page-next" => UiEvent::Lightbox(LightboxEvent::NextPage),
            "lb-page-prev" => UiEvent::Lightbox(LightboxEvent::PreviousPage),
            "close" => UiEvent::Lightbox(LightboxEvent::Close),
            "backdrop" => UiEvent::Lightbox(LightboxEvent::Click(ClickTarget::Backdrop)),
            "content" => UiEvent::Lightbox(LightboxEvent::Click(ClickTarget::Content)),
            "key" => match arg.map(|a| a.trim().to_ascii_lowercase()).as_deref() {
                Some("escape") | Some("esc") => UiEvent::Key(Key::Escape),
                Some("right") | Some("arrowright") => UiEvent::Key(Key::ArrowRight),
                Some("left") | Some("arrowleft") => UiEvent::Key(Key::ArrowLeft),
                Some(_) => UiEvent::Key(Key::Other),
                None => return Err(ListingError::InvalidEvent("key needs a name".to_string())),
            },
            other => return Err(ListingError::InvalidEvent(other.to_string())),
        };
        Ok(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightboxSnapshot {
    pub index: usize,
    pub page: usize,
    pub visible_page: usize,
}

/// 세션 상태 요약 (replay 출력용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub gallery_index: usize,
    pub gallery_page: usize,
    pub gallery_visible_page: usize,
    pub gallery_page_size: usize,
    pub lightbox: Option<LightboxSnapshot>,
}

/// 페이지 로드당 하나씩 생성되는 갤러리 + 라이트박스 세션
pub struct ListingSession {
    gallery: GalleryController,
    lightbox: LightboxController,
}

impl ListingSession {
    pub fn new(media: MediaSet, viewport_width: u32) -> Self {
        Self {
            gallery: GalleryController::new(media.clone(), GalleryRegions::default(), viewport_width),
            lightbox: LightboxController::new(media, LightboxRegions::default()),
        }
    }

    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }

    pub fn mount(&self, view: &mut dyn ViewRegions) {
        self.gallery.mount(view);
        self.lightbox.mount(view);
    }

    pub fn dispatch(&mut self, event: UiEvent, view: &mut dyn ViewRegions) {
        match event {
            UiEvent::Gallery(e) => {
                if let Some(index) = self.gallery.handle(e, view) {
                    self.lightbox.open(index, view);
                }
            }
            UiEvent::Lightbox(e) => self.lightbox.handle(e, view),
            UiEvent::Key(key) => self.lightbox.handle(LightboxEvent::Key(key), view),
            UiEvent::Resize(width) => self.gallery.resize(width, view),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.gallery.state();
        let lightbox = match self.lightbox.state() {
            LightboxState::Open(p) => Some(LightboxSnapshot {
                index: p.current_index(),
                page: p.current_page(),
                visible_page: p.visible_page(),
            }),
            LightboxState::Closed => None,
        };
        SessionSnapshot {
            gallery_index: state.current_index(),
            gallery_page: state.current_page(),
            gallery_visible_page: state.visible_page(),
            gallery_page_size: state.page_size(),
            lightbox,
        }
    }
}

/// 쉼표로 구분된 이벤트 목록을 순서대로 적용하고 매 단계의 상태를 반환
pub fn replay(
    session: &mut ListingSession,
    script: &str,
    view: &mut dyn ViewRegions,
) -> CommandResult<Vec<SessionSnapshot>> {
    let events = script
        .split(',')
        .filter(|t| !t.trim().is_empty())
        .map(UiEvent::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    let mut snapshots = Vec::with_capacity(events.len());
    for event in events {
        session.dispatch(event, view);
        snapshots.push(session.snapshot());
    }
    Ok(snapshots)
}
