//! Page Commands
//!
//! 페이로드 로드 → 정규화 → 페이지 채우기 → 갤러리 마운트까지의 초기화 흐름.
//! 로드는 한 번만 수행되며, 결과에 따라 채워진 상태 또는 오류 상태로 한 번 전환됩니다.

use chrono::NaiveDate;
use serde_json::Value;

use super::interaction::ListingSession;
use crate::config::ViewerConfig;
use crate::error::CommandError;
use crate::gallery::MediaSet;
use crate::listing::{load_payload, normalize, PayloadSource};
use crate::models::PropertyView;
use crate::view::{populate, populate_failure, RegionMap};

/// 초기화 결과
pub enum PageState {
    Populated {
        property: PropertyView,
        session: ListingSession,
        view: RegionMap,
    },
    Failed {
        error: CommandError,
        view: RegionMap,
    },
}

impl PageState {
    pub fn view(&self) -> &RegionMap {
        match self {
            PageState::Populated { view, .. } | PageState::Failed { view, .. } => view,
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, PageState::Populated { .. })
    }
}

/// 이미 확보한 페이로드로 페이지 채우기
pub fn populate_page(raw: &Value, config: &ViewerConfig, generated_on: NaiveDate) -> PageState {
    let property = normalize(raw);
    let media = MediaSet::from_view(&property, config);
    let session = ListingSession::new(media, config.viewport_width);

    let mut view = RegionMap::new();
    populate(&property, &mut view, generated_on);
    session.mount(&mut view);

    tracing::info!(
        "listing populated: {} image(s), viewport {}",
        session.gallery().media().len(),
        config.viewport_width
    );

    PageState::Populated {
        property,
        session,
        view,
    }
}

/// 설정에 따라 페이로드를 로드하고 페이지 초기화
pub async fn load_page(config: &ViewerConfig, generated_on: NaiveDate) -> PageState {
    let source = match PayloadSource::from_config(config) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!("invalid payload source: {}", e);
            return failed(e.into(), &config.payload_file);
        }
    };

    match load_payload(&source).await {
        Ok(raw) => populate_page(&raw, config, generated_on),
        Err(e) => {
            tracing::warn!("payload load failed: {}", e);
            failed(e.into(), &source.display_name())
        }
    }
}

fn failed(error: CommandError, payload_name: &str) -> PageState {
    let mut view = RegionMap::new();
    populate_failure(&mut view, payload_name);
    PageState::Failed { error, view }
}
