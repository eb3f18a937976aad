//! Page Populator
//!
//! 정규화된 매물 필드를 화면 영역(배지, 상세 목록, 연락처, 지도 등)에 기록합니다.

use chrono::NaiveDate;

use super::format::{format_area, format_currency, format_long_date, format_number, PLACEHOLDER};
use super::{Entry, Link, MapPreview, Region, RegionContent, ViewRegions};
use crate::models::PropertyView;

const FALLBACK_TITLE: &str = "Inmueble en venta";
const FALLBACK_DESCRIPTION: &str = "Sin descripción";
const FALLBACK_CONTACT_NAME: &str = "Equipo comercial";
const FALLBACK_ADDRESS: &str = "Dirección no disponible";
const NO_FEATURES: &str = "No hay características disponibles.";
const NO_SERVICES: &str = "No hay servicios registrados.";
const MAP_PLACEHOLDER: &str = "Ubicación aproximada";

const LOAD_FAILED_TITLE: &str = "No se pudo cargar el inmueble";

/// 메신저 딥링크에 붙는 국가 번호
pub const WHATSAPP_COUNTRY_CODE: &str = "57";

/// 지도 임베드 경계 상자 크기 (도)
pub const MAP_BBOX_DELTA: f64 = 0.01;

/// 페이지 전체 채우기 (갤러리는 컨트롤러가 별도로 렌더링)
pub fn populate(property: &PropertyView, view: &mut dyn ViewRegions, generated_on: NaiveDate) {
    let text = |s: &str| RegionContent::Text(s.to_string());

    view.put(
        Region::Title,
        text(property.title.as_deref().unwrap_or(FALLBACK_TITLE)),
    );
    view.put(Region::Location, RegionContent::Text(location_line(property)));
    view.put(Region::Price, RegionContent::Text(format_currency(property.price)));
    let previous = match property.previous_price {
        Some(v) if v != 0.0 => format_currency(Some(v)),
        _ => String::new(),
    };
    view.put(Region::PreviousPrice, RegionContent::Text(previous));
    view.put(
        Region::Description,
        text(property.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION)),
    );

    // 360° 투어: 링크가 없으면 비활성(숨김)
    let tour = match &property.tour_url {
        Some(url) => Link::to(url.clone()),
        None => Link::disabled(),
    };
    view.put(Region::TourButton, RegionContent::Link(tour));

    view.put(Region::Badges, RegionContent::Entries(badges(property)));
    view.put(Region::Details, RegionContent::Entries(details(property)));
    view.put(Region::Distribution, RegionContent::Entries(distribution(property)));
    view.put(Region::Features, features(property));
    view.put(Region::Services, services(property));

    populate_contact(property, view);
    populate_map(property, view);

    view.put(
        Region::GeneratedDate,
        RegionContent::Text(format_long_date(generated_on)),
    );
    tracing::debug!("page populated for {:?}", property.title);
}

/// 데이터 수집 실패: 제목/설명 영역만 덮어씀
pub fn populate_failure(view: &mut dyn ViewRegions, payload_name: &str) {
    view.put(
        Region::Title,
        RegionContent::Text(LOAD_FAILED_TITLE.to_string()),
    );
    view.put(
        Region::Description,
        RegionContent::Text(format!(
            "Revisa que el archivo {} esté disponible.",
            payload_name
        )),
    );
}

/// 바리오 · 도시 · 주 (없는 부분은 생략)
pub fn location_line(property: &PropertyView) -> String {
    [&property.neighborhood, &property.city, &property.department]
        .into_iter()
        .filter_map(|s| s.as_deref())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// 지도 검색용 주소 `direccion, barrio, ciudad`
pub fn address_line(property: &PropertyView) -> String {
    [&property.address, &property.neighborhood, &property.city]
        .into_iter()
        .filter_map(|s| s.as_deref())
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// 숫자로 읽히는 텍스트 필드(연식, 등급)의 `0` 제외
fn non_zero_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| v.trim().parse::<f64>() != Ok(0.0))
        .map(str::to_string)
}

fn badges(property: &PropertyView) -> Vec<Entry> {
    let mut badges = Vec::new();
    if let Some(t) = &property.property_type {
        badges.push(Entry::value(t.clone()));
    }
    if let Some(area) = non_zero(property.private_area) {
        badges.push(Entry::value(format_area(area)));
    }
    if let Some(s) = non_zero_text(&property.stratum) {
        badges.push(Entry::value(format!("Estrato {}", s)));
    }
    if let Some(s) = &property.status {
        badges.push(Entry::value(s.clone()));
    }
    if let Some(c) = &property.city {
        badges.push(Entry::value(c.clone()));
    }
    badges
}

/// 값이 비었거나 0인 항목은 목록에서 제외
fn labeled(items: Vec<(&str, Option<String>)>) -> Vec<Entry> {
    items
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.is_empty() && v != PLACEHOLDER)
                .map(|v| Entry::labeled(label, v))
        })
        .collect()
}

fn count(value: Option<f64>) -> Option<String> {
    non_zero(value).map(format_number)
}

fn details(property: &PropertyView) -> Vec<Entry> {
    labeled(vec![
        ("Área privada", non_zero(property.private_area).map(format_area)),
        ("Área construida", non_zero(property.built_area).map(format_area)),
        ("Parqueaderos", count(property.parking_spots)),
        ("Baños", count(property.bathrooms)),
        ("Habitaciones", count(property.bedrooms)),
        ("Antigüedad", non_zero_text(&property.age)),
        ("Tipo", property.property_type.clone()),
        ("Estrato", non_zero_text(&property.stratum)),
    ])
}

fn distribution(property: &PropertyView) -> Vec<Entry> {
    labeled(vec![
        ("Habitaciones", count(property.bedrooms)),
        ("Baños", count(property.bathrooms)),
        ("Parqueaderos", count(property.parking_spots)),
        ("Estrato", non_zero_text(&property.stratum)),
    ])
}

fn features(property: &PropertyView) -> RegionContent {
    if property.features.is_empty() {
        return RegionContent::Empty(NO_FEATURES.to_string());
    }
    RegionContent::Entries(
        property
            .features
            .iter()
            .map(|f| Entry::value(f.clone()))
            .collect(),
    )
}

fn services(property: &PropertyView) -> RegionContent {
    if property.services.is_empty() {
        return RegionContent::Empty(NO_SERVICES.to_string());
    }
    RegionContent::Entries(
        property
            .services
            .iter()
            .map(|s| {
                let amount = match non_zero(s.amount) {
                    Some(v) => format_currency(Some(v)),
                    None => PLACEHOLDER.to_string(),
                };
                Entry::labeled(s.name.as_deref().unwrap_or("Servicio"), amount)
            })
            .collect(),
    )
}

/// 전화번호에서 숫자만 추출한 메신저 링크
pub fn whatsapp_link(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{}{}", WHATSAPP_COUNTRY_CODE, digits))
}

fn populate_contact(property: &PropertyView, view: &mut dyn ViewRegions) {
    view.put(
        Region::ContactName,
        RegionContent::Text(
            property
                .contact_name
                .clone()
                .unwrap_or_else(|| FALLBACK_CONTACT_NAME.to_string()),
        ),
    );

    let (phone, whatsapp) = match &property.contact_phone {
        Some(phone) => (
            Link::to(format!("tel:{}", phone)).with_label(format!("Llamar {}", phone)),
            whatsapp_link(phone).map(Link::to).unwrap_or_else(Link::disabled),
        ),
        None => (Link::disabled().with_label("Llamar"), Link::disabled()),
    };
    view.put(Region::ContactPhone, RegionContent::Link(phone));
    view.put(Region::ContactWhatsapp, RegionContent::Link(whatsapp));

    let email = match &property.contact_email {
        Some(email) => Link::to(format!("mailto:{}", email)),
        None => Link::disabled(),
    };
    view.put(Region::ContactEmail, RegionContent::Link(email));

    view.put(
        Region::ContactBuilding,
        RegionContent::Text(
            property
                .building
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
    );
    let admin = match non_zero(property.administration_fee) {
        Some(v) => format_currency(Some(v)),
        None => PLACEHOLDER.to_string(),
    };
    view.put(Region::ContactAdmin, RegionContent::Text(admin));
}

/// OpenStreetMap 임베드 URL (좌표 주변 ±0.01°)
pub fn map_embed_url(lat: f64, lon: f64) -> String {
    let left = lon - MAP_BBOX_DELTA;
    let right = lon + MAP_BBOX_DELTA;
    let top = lat + MAP_BBOX_DELTA;
    let bottom = lat - MAP_BBOX_DELTA;
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={}%2C{}%2C{}%2C{}&layer=mapnik&marker={}%2C{}",
        left, bottom, right, top, lat, lon
    )
}

/// 외부 지도 검색 링크: 좌표가 있으면 좌표로, 없으면 주소 텍스트로
pub fn map_search_url(coordinates: Option<(f64, f64)>, address: &str) -> String {
    let query = match coordinates {
        Some((lat, lon)) => format!("{},{}", lat, lon),
        None => urlencoding::encode(address).into_owned(),
    };
    format!("https://www.google.com/maps/search/?api=1&query={}", query)
}

fn populate_map(property: &PropertyView, view: &mut dyn ViewRegions) {
    let address = address_line(property);
    let coordinates = property.coordinates();

    view.put(
        Region::Address,
        RegionContent::Text(if address.is_empty() {
            FALLBACK_ADDRESS.to_string()
        } else {
            address.clone()
        }),
    );
    view.put(
        Region::MapLink,
        RegionContent::Link(Link::to(map_search_url(coordinates, &address))),
    );

    let preview = match coordinates {
        Some((lat, lon)) => MapPreview::Embed {
            src: map_embed_url(lat, lon),
        },
        None => MapPreview::Placeholder {
            text: MAP_PLACEHOLDER.to_string(),
        },
    };
    view.put(Region::MapPreview, RegionContent::Map(preview));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::normalize;
    use crate::view::RegionMap;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn render(raw: serde_json::Value) -> RegionMap {
        let mut view = RegionMap::new();
        populate(&normalize(&raw), &mut view, date());
        view
    }

    fn entries(view: &RegionMap, region: Region) -> Vec<Entry> {
        match view.get(region) {
            Some(RegionContent::Entries(e)) => e.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    fn link(view: &RegionMap, region: Region) -> Link {
        match view.get(region) {
            Some(RegionContent::Link(l)) => l.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_title_and_missing_price() {
        let view = render(json!({ "property": { "titulo": "Casa X" } }));
        assert_eq!(view.text(Region::Title), Some("Casa X"));
        assert_eq!(view.text(Region::Price), Some("--"));
        assert_eq!(view.text(Region::PreviousPrice), Some(""));
        assert_eq!(view.text(Region::Description), Some("Sin descripción"));
        assert_eq!(view.text(Region::GeneratedDate), Some("18 de octubre de 2026"));
    }

    #[test]
    fn test_fallback_title_and_zero_price() {
        let view = render(json!({ "precio": 0 }));
        assert_eq!(view.text(Region::Title), Some("Inmueble en venta"));
        assert_eq!(view.text(Region::Price), Some("$\u{a0}0"));
    }

    #[test]
    fn test_location_skips_absent_segments() {
        let view = render(json!({ "barrio": "El Poblado", "departamento": "Antioquia" }));
        assert_eq!(view.text(Region::Location), Some("El Poblado · Antioquia"));
    }

    #[test]
    fn test_badges_and_details() {
        let view = render(json!({
            "tipo_inmueble": "Apartamento",
            "estado": "Usado",
            "detalles_propiedad": {
                "area": 85.5,
                "estrato": 4,
                "num_habitaciones": 3,
                "garajes": 0
            }
        }));
        let badges: Vec<String> = entries(&view, Region::Badges)
            .into_iter()
            .map(|e| e.value)
            .collect();
        assert_eq!(badges, vec!["Apartamento", "85,5 m²", "Estrato 4", "Usado"]);

        let details = entries(&view, Region::Details);
        assert_eq!(details[0], Entry::labeled("Área privada", "85,5 m²"));
        assert!(details.iter().all(|e| e.label.as_deref() != Some("Parqueaderos")));

        let distribution = entries(&view, Region::Distribution);
        assert_eq!(
            distribution,
            vec![
                Entry::labeled("Habitaciones", "3"),
                Entry::labeled("Estrato", "4"),
            ]
        );
    }

    #[test]
    fn test_zero_age_and_stratum_are_left_out() {
        let view = render(json!({
            "antiguedad": 0,
            "detalles_propiedad": { "estrato": 0 }
        }));
        assert!(entries(&view, Region::Details).is_empty());
        assert!(entries(&view, Region::Distribution).is_empty());
        assert!(entries(&view, Region::Badges)
            .iter()
            .all(|e| !e.value.starts_with("Estrato")));
    }

    #[test]
    fn test_empty_lists_show_messages() {
        let view = render(json!({}));
        assert_eq!(
            view.get(Region::Features),
            Some(&RegionContent::Empty("No hay características disponibles.".to_string()))
        );
        assert_eq!(
            view.get(Region::Services),
            Some(&RegionContent::Empty("No hay servicios registrados.".to_string()))
        );
    }

    #[test]
    fn test_services_render_amounts() {
        let view = render(json!({
            "servicios": [{ "nombre": "Agua", "valor": 45000 }, { "valor": 0 }]
        }));
        assert_eq!(
            entries(&view, Region::Services),
            vec![
                Entry::labeled("Agua", "$\u{a0}45.000"),
                Entry::labeled("Servicio", "--"),
            ]
        );
    }

    #[test]
    fn test_contact_links() {
        let view = render(json!({
            "telefono": "+57 (300) 123-4567",
            "correo": "ventas@example.com",
            "administracion": 320000
        }));
        assert_eq!(view.text(Region::ContactName), Some("Equipo comercial"));
        let phone = link(&view, Region::ContactPhone);
        assert_eq!(phone.href.as_deref(), Some("tel:+57 (300) 123-4567"));
        assert_eq!(phone.label.as_deref(), Some("Llamar +57 (300) 123-4567"));
        assert_eq!(
            link(&view, Region::ContactWhatsapp).href.as_deref(),
            Some("https://wa.me/57573001234567")
        );
        assert_eq!(
            link(&view, Region::ContactEmail).href.as_deref(),
            Some("mailto:ventas@example.com")
        );
        assert_eq!(view.text(Region::ContactBuilding), Some("--"));
        assert_eq!(view.text(Region::ContactAdmin), Some("$\u{a0}320.000"));
    }

    #[test]
    fn test_contact_without_phone_is_disabled() {
        let view = render(json!({ "nombre_contacto": "Laura" }));
        assert_eq!(view.text(Region::ContactName), Some("Laura"));
        let phone = link(&view, Region::ContactPhone);
        assert_eq!(phone.href_or_disabled(), "#");
        assert_eq!(phone.label.as_deref(), Some("Llamar"));
        assert_eq!(link(&view, Region::ContactWhatsapp).href, None);
        assert_eq!(link(&view, Region::ContactEmail).href, None);
    }

    #[test]
    fn test_map_embed_with_coordinates() {
        let view = render(json!({ "latitud": 6.25, "longitud": -75.5 }));
        match view.get(Region::MapPreview) {
            Some(RegionContent::Map(MapPreview::Embed { src })) => {
                assert!(src.starts_with("https://www.openstreetmap.org/export/embed.html?bbox="));
                assert!(src.contains("marker=6.25%2C-75.5"));
                assert!(src.contains("&layer=mapnik"));
            }
            other => panic!("unexpected content: {:?}", other),
        }
        assert_eq!(
            link(&view, Region::MapLink).href.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=6.25,-75.5")
        );
    }

    #[test]
    fn test_map_fallback_uses_address() {
        let view = render(json!({
            "direccion": "Cra 43A # 1-50",
            "barrio": "El Poblado",
            "ciudad": "Medellín"
        }));
        assert_eq!(
            view.get(Region::MapPreview),
            Some(&RegionContent::Map(MapPreview::Placeholder {
                text: "Ubicación aproximada".to_string()
            }))
        );
        assert_eq!(
            view.text(Region::Address),
            Some("Cra 43A # 1-50, El Poblado, Medellín")
        );
        let href = link(&view, Region::MapLink).href.unwrap();
        assert_eq!(
            href,
            format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                urlencoding::encode("Cra 43A # 1-50, El Poblado, Medellín")
            )
        );
        assert!(href.contains("Cra%2043A%20%23%201-50"));
    }

    #[test]
    fn test_missing_address_fallback() {
        let view = render(json!({}));
        assert_eq!(view.text(Region::Address), Some("Dirección no disponible"));
    }

    #[test]
    fn test_tour_link() {
        let view = render(json!({ "url_360": "https://tour.example.com/1" }));
        assert_eq!(
            link(&view, Region::TourButton).href.as_deref(),
            Some("https://tour.example.com/1")
        );
        let view = render(json!({}));
        assert_eq!(link(&view, Region::TourButton).href, None);
    }

    #[test]
    fn test_failure_only_touches_title_and_description() {
        let mut view = RegionMap::new();
        populate_failure(&mut view, "property-5157395.json");
        assert_eq!(view.text(Region::Title), Some("No se pudo cargar el inmueble"));
        assert_eq!(
            view.text(Region::Description),
            Some("Revisa que el archivo property-5157395.json esté disponible.")
        );
        assert_eq!(view.regions().count(), 2);
    }
}
