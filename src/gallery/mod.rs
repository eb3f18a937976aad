//! 이미지 갤러리 모듈
//!
//! - [`pagination`]: 공통 페이지 계산
//! - [`inline`]: 페이지에 포함된 갤러리 (뷰포트 의존 페이지 크기)
//! - [`lightbox`]: 전체 화면 오버레이 (고정 페이지 크기)

pub mod inline;
pub mod lightbox;
pub mod pagination;

use std::ops::Range;
use std::sync::Arc;

use crate::config::ViewerConfig;
use crate::models::PropertyView;
use crate::view::{ImageRef, ThumbnailStrip};

pub use inline::{GalleryController, GalleryEvent, GalleryRegions};
pub use lightbox::{LightboxController, LightboxEvent, LightboxRegions, LightboxState};
pub use pagination::{Direction, PaginationState};

/// 해석된 이미지 URL 목록 (세션 동안 불변, 컨트롤러 간 공유)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSet(Arc<[String]>);

impl MediaSet {
    /// 이미지 참조를 URL로 해석. 비어 있으면 플레이스홀더 1개
    pub fn resolve(refs: &[String], image_base: &str, placeholder: &str) -> Self {
        if refs.is_empty() {
            return Self(Arc::from(vec![placeholder.to_string()]));
        }

        let resolved: Vec<String> = refs
            .iter()
            .map(|r| {
                if r.starts_with("http") {
                    r.clone()
                } else if image_base.is_empty() || image_base.ends_with('/') {
                    format!("{}{}", image_base, r)
                } else {
                    format!("{}/{}", image_base, r)
                }
            })
            .collect();
        Self(Arc::from(resolved))
    }

    pub fn from_view(view: &PropertyView, config: &ViewerConfig) -> Self {
        Self::resolve(&view.images, &config.image_base, &config.placeholder_image)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn urls(&self) -> &[String] {
        &self.0
    }

    /// 메인 이미지 참조 (`Imagen n`)
    pub fn image(&self, index: usize) -> ImageRef {
        ImageRef {
            src: self.get(index).unwrap_or_default().to_string(),
            alt: format!("Imagen {}", index + 1),
        }
    }

    /// 구간의 썸네일 창 (`Miniatura n`)
    pub fn strip(&self, range: Range<usize>, active: usize) -> ThumbnailStrip {
        let first_index = range.start;
        let items = range
            .filter_map(|i| {
                self.get(i).map(|src| ImageRef {
                    src: src.to_string(),
                    alt: format!("Miniatura {}", i + 1),
                })
            })
            .collect();
        ThumbnailStrip {
            first_index,
            items,
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLACEHOLDER_IMAGE;

    #[test]
    fn test_relative_refs_resolve_against_base() {
        let refs = vec![
            "b.jpg".to_string(),
            "https://cdn.example.com/a.jpg".to_string(),
            "http://cdn.example.com/c.jpg".to_string(),
        ];
        let media = MediaSet::resolve(&refs, "images/", PLACEHOLDER_IMAGE);
        assert_eq!(
            media.urls(),
            &[
                "images/b.jpg".to_string(),
                "https://cdn.example.com/a.jpg".to_string(),
                "http://cdn.example.com/c.jpg".to_string(),
            ]
        );

        let media = MediaSet::resolve(&refs[..1], "media", PLACEHOLDER_IMAGE);
        assert_eq!(media.get(0), Some("media/b.jpg"));
    }

    #[test]
    fn test_empty_refs_yield_placeholder() {
        let media = MediaSet::resolve(&[], "images/", PLACEHOLDER_IMAGE);
        assert_eq!(media.len(), 1);
        assert_eq!(media.get(0), Some(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_strip_numbers_thumbnails_globally() {
        let refs: Vec<String> = (0..10).map(|i| format!("{}.jpg", i)).collect();
        let media = MediaSet::resolve(&refs, "images/", PLACEHOLDER_IMAGE);
        let strip = media.strip(8..10, 9);
        assert_eq!(strip.first_index, 8);
        assert_eq!(strip.items[1].alt, "Miniatura 10");
        assert_eq!(strip.indices(), 8..10);
        assert_eq!(media.image(9).alt, "Imagen 10");
    }
}
