//! Listing Data Models
//!
//! 정규화된 매물 뷰 모델

use serde::{Deserialize, Serialize};

/// 정규화된 매물 레코드
///
/// 모든 필드는 독립적으로 선택 사항이며, 값이 없는 것(`None`)과 0은 구분됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyView {
    pub title: Option<String>,
    pub description: Option<String>,
    /// 360° 투어 링크
    pub tour_url: Option<String>,
    /// `order` 기준으로 정렬된 이미지 참조 (아직 해석되지 않은 원본 값)
    pub images: Vec<String>,
    pub services: Vec<ServiceRecord>,
    pub features: Vec<String>,

    pub property_type: Option<String>,
    pub stratum: Option<String>,
    /// 단지/건물명
    pub building: Option<String>,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub department: Option<String>,

    pub price: Option<f64>,
    pub previous_price: Option<f64>,
    pub private_area: Option<f64>,
    pub built_area: Option<f64>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub parking_spots: Option<f64>,
    /// 연식 ("5", "10 años" 등 원본 표기를 그대로 유지)
    pub age: Option<String>,

    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub contact_name: Option<String>,
    pub administration_fee: Option<f64>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<String>,
}

impl PropertyView {
    /// 좌표가 모두 있을 때만 `(lat, lon)` 반환
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// 관리비 항목 (서비스)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: Option<String>,
    pub amount: Option<f64>,
}
