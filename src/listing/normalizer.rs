//! View-Model Normalizer
//!
//! 느슨한 구조의 매물 페이로드를 [`PropertyView`]로 변환합니다.
//!
//! - 레코드 위치: `property` → `data.property` → 페이로드 자체
//! - `detalles_propiedad`(상세) 값이 최상위 값보다 우선
//! - 누락 필드는 에러가 아니며 각각 `None`으로 남음

use std::cmp::Ordering;

use serde_json::Value;

use crate::models::{PropertyView, ServiceRecord};

/// 페이로드를 정규화된 뷰 모델로 변환 (순수 함수)
pub fn normalize(raw: &Value) -> PropertyView {
    let property = locate_record(raw);
    let details = property
        .get("detalles_propiedad")
        .filter(|d| d.is_object());

    // 상세 키 목록 → 최상위 키 순서로 탐색
    let text_of = |detail_keys: &[&str], top_key: &str| -> Option<String> {
        detail_keys
            .iter()
            .filter_map(|k| details.and_then(|d| d.get(*k)))
            .chain(property.get(top_key))
            .find_map(as_text)
    };
    let number_of = |detail_keys: &[&str], top_key: &str| -> Option<f64> {
        detail_keys
            .iter()
            .filter_map(|k| details.and_then(|d| d.get(*k)))
            .chain(property.get(top_key))
            .find_map(as_number)
    };
    let top_text = |key: &str| property.get(key).and_then(as_text);

    PropertyView {
        title: top_text("titulo"),
        description: top_text("descripcion"),
        tour_url: top_text("url_360"),
        images: ordered_image_refs(property.get("images")),
        services: services(property.get("servicios")),
        features: features(property.get("caracteristicas_propiedad")),

        property_type: text_of(&["tipo_inmueble"], "tipo_inmueble"),
        stratum: text_of(&["estrato"], "estrato"),
        building: text_of(&["conjunto", "conjunto_edificio"], "conjunto"),
        address: text_of(&["direccion"], "direccion"),
        neighborhood: text_of(&["barriocomun"], "barrio"),
        city: text_of(&["ciudad"], "ciudad"),
        department: text_of(&["departamento"], "departamento"),

        price: number_of(&["precio_venta"], "precio"),
        previous_price: number_of(&["precio_anterior"], "precio_anterior"),
        private_area: number_of(&["area"], "area_privada"),
        built_area: number_of(&["area_construida"], "area_construida"),
        bedrooms: number_of(&["num_habitaciones"], "habitaciones"),
        bathrooms: number_of(&["baños", "banos"], "banos"),
        parking_spots: number_of(&["garajes"], "parqueaderos"),
        age: text_of(&["anos_antiguedad"], "antiguedad"),

        contact_phone: text_of(&["telefono", "contacto_zona"], "telefono"),
        contact_email: text_of(&["correo"], "correo"),
        contact_name: top_text("nombre_contacto"),
        administration_fee: number_of(&["last_admin_price"], "administracion"),

        latitude: number_of(&["latitud"], "latitud"),
        longitude: number_of(&["longitud"], "longitud"),
        status: top_text("estado"),
    }
}

/// 실제 매물 레코드 위치 탐색
fn locate_record(raw: &Value) -> &Value {
    if let Some(p) = raw.get("property").filter(|v| is_present(v)) {
        return p;
    }
    if let Some(p) = raw
        .get("data")
        .and_then(|d| d.get("property"))
        .filter(|v| is_present(v))
    {
        return p;
    }
    raw
}

fn is_present(v: &Value) -> bool {
    match v {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// 문자열/숫자 값을 표시용 텍스트로 변환. 빈 문자열은 없음으로 취급
fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 숫자 또는 숫자 문자열. `null`은 없음, 0은 유지
fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// `order` 오름차순(누락 시 0, 안정 정렬)으로 정렬한 이미지 참조 목록
pub fn ordered_image_refs(images: Option<&Value>) -> Vec<String> {
    let Some(items) = images.and_then(|v| v.as_array()) else {
        return Vec::new();
    };

    let mut keyed: Vec<(f64, &Value)> = items
        .iter()
        .map(|img| {
            let order = img.get("order").and_then(as_number).unwrap_or(0.0);
            (order, img)
        })
        .collect();
    // sort_by는 안정 정렬이므로 동순위는 원래 위치 유지
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    keyed
        .into_iter()
        .filter_map(|(_, img)| match img {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Object(_) => img.get("url").and_then(as_text),
            _ => None,
        })
        .collect()
}

fn services(value: Option<&Value>) -> Vec<ServiceRecord> {
    let Some(items) = value.and_then(|v| v.as_array()) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(_) => Some(ServiceRecord {
                name: item
                    .get("nombre")
                    .and_then(as_text)
                    .or_else(|| item.get("servicio").and_then(as_text)),
                amount: item.get("valor").and_then(as_number),
            }),
            Value::String(s) if !s.is_empty() => Some(ServiceRecord {
                name: Some(s.clone()),
                amount: None,
            }),
            _ => None,
        })
        .collect()
}

fn features(value: Option<&Value>) -> Vec<String> {
    let Some(items) = value.and_then(|v| v.as_array()) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(_) => item.get("nombre").and_then(as_text),
            other => as_text(other),
        })
        .collect()
}
