//! 정적 HTML 출력
//!
//! [`RegionMap`]에 기록된 내용을 askama 템플릿(`templates/listing.html`)으로 렌더링합니다.

use askama::Template;

use super::{Entry, MapPreview, Region, RegionContent, RegionMap};
use crate::error::ListingError;

pub struct EntryView {
    pub label: String,
    pub value: String,
}

impl From<&Entry> for EntryView {
    fn from(entry: &Entry) -> Self {
        Self {
            label: entry.label.clone().unwrap_or_default(),
            value: entry.value.clone(),
        }
    }
}

pub struct ThumbView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub active: bool,
}

pub struct DotView {
    pub page: usize,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingPage {
    pub title: String,
    pub location: String,
    pub price: String,
    pub previous_price: String,
    pub description: String,
    pub tour_href: String,
    pub photo_count: String,
    pub generated_date: String,

    pub badges: Vec<EntryView>,
    pub details: Vec<EntryView>,
    pub distribution: Vec<EntryView>,
    pub features: Vec<EntryView>,
    pub features_empty: String,
    pub services: Vec<EntryView>,
    pub services_empty: String,

    pub contact_name: String,
    pub phone_href: String,
    pub phone_label: String,
    pub email_href: String,
    pub whatsapp_href: String,
    pub building: String,
    pub admin: String,

    pub address: String,
    pub map_href: String,
    pub map_embed: String,
    pub map_placeholder: String,

    pub main_src: String,
    pub main_alt: String,
    pub gallery_thumbs: Vec<ThumbView>,
    pub dots: Vec<DotView>,

    pub lightbox_open: bool,
    pub lightbox_src: String,
    pub lightbox_alt: String,
    pub lightbox_counter: String,
    pub lightbox_thumbs: Vec<ThumbView>,
    pub lightbox_prev_enabled: bool,
    pub lightbox_next_enabled: bool,
    pub scroll_locked: bool,
}

fn text(map: &RegionMap, region: Region) -> String {
    map.text(region).unwrap_or_default().to_string()
}

/// (href, label). 비활성 링크는 `#`
fn link(map: &RegionMap, region: Region) -> (String, String) {
    match map.get(region) {
        Some(RegionContent::Link(l)) => (
            l.href_or_disabled().to_string(),
            l.label.clone().unwrap_or_default(),
        ),
        _ => ("#".to_string(), String::new()),
    }
}

/// 목록 항목과 빈 목록 안내 문구
fn entries(map: &RegionMap, region: Region) -> (Vec<EntryView>, String) {
    match map.get(region) {
        Some(RegionContent::Entries(items)) => (items.iter().map(EntryView::from).collect(), String::new()),
        Some(RegionContent::Empty(message)) => (Vec::new(), message.clone()),
        _ => (Vec::new(), String::new()),
    }
}

fn image(map: &RegionMap, region: Region) -> (String, String) {
    match map.get(region) {
        Some(RegionContent::Image(img)) => (img.src.clone(), img.alt.clone()),
        _ => (String::new(), String::new()),
    }
}

fn thumbs(map: &RegionMap, region: Region) -> Vec<ThumbView> {
    match map.get(region) {
        Some(RegionContent::Thumbnails(strip)) => strip
            .items
            .iter()
            .zip(strip.indices())
            .map(|(img, index)| ThumbView {
                index,
                src: img.src.clone(),
                alt: img.alt.clone(),
                active: index == strip.active,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn flag(map: &RegionMap, region: Region) -> bool {
    map.flag(region).unwrap_or(false)
}

impl ListingPage {
    pub fn from_regions(map: &RegionMap) -> Self {
        let (tour_href, _) = link(map, Region::TourButton);
        let (phone_href, phone_label) = link(map, Region::ContactPhone);
        let (email_href, _) = link(map, Region::ContactEmail);
        let (whatsapp_href, _) = link(map, Region::ContactWhatsapp);
        let (map_href, _) = link(map, Region::MapLink);
        let (features, features_empty) = entries(map, Region::Features);
        let (services, services_empty) = entries(map, Region::Services);
        let (main_src, main_alt) = image(map, Region::GalleryMainImage);
        let (lightbox_src, lightbox_alt) = image(map, Region::LightboxImage);

        let (map_embed, map_placeholder) = match map.get(Region::MapPreview) {
            Some(RegionContent::Map(MapPreview::Embed { src })) => (src.clone(), String::new()),
            Some(RegionContent::Map(MapPreview::Placeholder { text })) => (String::new(), text.clone()),
            _ => (String::new(), String::new()),
        };

        let dots = match map.get(Region::GalleryPagination) {
            Some(RegionContent::Dots(d)) => (0..d.count)
                .map(|page| DotView {
                    page,
                    active: page == d.active,
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            title: text(map, Region::Title),
            location: text(map, Region::Location),
            price: text(map, Region::Price),
            previous_price: text(map, Region::PreviousPrice),
            description: text(map, Region::Description),
            tour_href: if tour_href == "#" { String::new() } else { tour_href },
            photo_count: text(map, Region::PhotoCount),
            generated_date: text(map, Region::GeneratedDate),
            badges: entries(map, Region::Badges).0,
            details: entries(map, Region::Details).0,
            distribution: entries(map, Region::Distribution).0,
            features,
            features_empty,
            services,
            services_empty,
            contact_name: text(map, Region::ContactName),
            phone_href,
            phone_label,
            email_href,
            whatsapp_href,
            building: text(map, Region::ContactBuilding),
            admin: text(map, Region::ContactAdmin),
            address: text(map, Region::Address),
            map_href,
            map_embed,
            map_placeholder,
            main_src,
            main_alt,
            gallery_thumbs: thumbs(map, Region::GalleryThumbnails),
            dots,
            lightbox_open: flag(map, Region::LightboxOverlay),
            lightbox_src,
            lightbox_alt,
            lightbox_counter: text(map, Region::LightboxCounter),
            lightbox_thumbs: thumbs(map, Region::LightboxThumbnails),
            lightbox_prev_enabled: flag(map, Region::LightboxPrevPage),
            lightbox_next_enabled: flag(map, Region::LightboxNextPage),
            scroll_locked: flag(map, Region::BodyScrollLock),
        }
    }
}

/// 영역 내용을 HTML 문서로 렌더링
pub fn render_page(map: &RegionMap) -> Result<String, ListingError> {
    Ok(ListingPage::from_regions(map).render()?)
}
