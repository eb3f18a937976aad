//! View Binding Layer
//!
//! 렌더링 로직과 마크업 구조를 분리하는 바인딩 계층입니다.
//! 컨트롤러와 페이지 채우기(populator)는 [`ViewRegions`]에 이름 있는 [`Region`] 단위로
//! 내용을 기록하며, 테스트/정적 HTML 출력은 [`RegionMap`]을 사용합니다.

pub mod format;
pub mod html;
pub mod populator;
pub mod regions;

use serde::Serialize;

pub use populator::{populate, populate_failure};
pub use regions::RegionMap;

/// 화면 영역 핸들
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Title,
    Location,
    Price,
    PreviousPrice,
    Description,
    TourButton,
    Badges,
    Details,
    Distribution,
    Features,
    Services,
    ContactName,
    ContactPhone,
    ContactEmail,
    ContactWhatsapp,
    ContactBuilding,
    ContactAdmin,
    Address,
    MapLink,
    MapPreview,
    GeneratedDate,
    PhotoCount,

    GalleryMainImage,
    GalleryThumbnails,
    GalleryPagination,

    LightboxOverlay,
    LightboxImage,
    LightboxCounter,
    LightboxThumbnails,
    LightboxPrevPage,
    LightboxNextPage,
    /// 배경 스크롤 잠금 여부
    BodyScrollLock,
}

/// 링크. `href`가 없으면 비활성(`#`)으로 렌더링
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub href: Option<String>,
    pub label: Option<String>,
}

impl Link {
    pub fn to(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            label: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            href: None,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn href_or_disabled(&self) -> &str {
        self.href.as_deref().unwrap_or("#")
    }
}

/// 라벨/값 목록 항목 (배지, 상세 목록, 서비스 등)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub label: Option<String>,
    pub value: String,
}

impl Entry {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }

    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// 썸네일 창 (연속된 미디어 인덱스 구간)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbnailStrip {
    /// 첫 썸네일의 전체 미디어 인덱스
    pub first_index: usize,
    pub items: Vec<ImageRef>,
    /// 하이라이트된 전체 미디어 인덱스
    pub active: usize,
}

impl ThumbnailStrip {
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.first_index..self.first_index + self.items.len()
    }
}

/// 페이지 점 표시기
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDots {
    pub count: usize,
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapPreview {
    Embed { src: String },
    Placeholder { text: String },
}

/// 영역에 기록되는 내용
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RegionContent {
    Text(String),
    Link(Link),
    Entries(Vec<Entry>),
    /// 목록이 비었을 때 표시되는 안내 문구
    Empty(String),
    Image(ImageRef),
    Thumbnails(ThumbnailStrip),
    Dots(PageDots),
    Map(MapPreview),
    /// 표시/활성/잠금 여부
    Flag(bool),
}

/// 렌더링 대상
pub trait ViewRegions {
    /// 영역 전체를 다시 렌더링
    fn put(&mut self, region: Region, content: RegionContent);

    /// 이미 렌더링된 썸네일 창의 하이라이트만 갱신
    fn highlight(&mut self, region: Region, active: usize);
}
