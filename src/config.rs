//! Viewer Configuration
//!
//! 환경 변수(.env.local / .env)에서 뷰어 설정을 읽습니다.

use crate::error::ListingError;

/// 기본 페이로드 파일명
pub const DEFAULT_PAYLOAD_FILE: &str = "property-5157395.json";

/// 상대 경로 이미지의 기본 경로
pub const DEFAULT_IMAGE_BASE: &str = "images/";

/// 이미지가 없을 때 사용하는 플레이스홀더
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/1200x750?text=Sin+imagen";

/// 기본 뷰포트 너비 (데스크톱)
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// 뷰어 설정
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// 페이로드를 찾을 디렉토리 또는 http(s) 기본 URL
    pub source: String,
    /// 고정 페이로드 파일명
    pub payload_file: String,
    /// 주입된 페이로드 (JSON 문자열). 있으면 파일/네트워크보다 우선
    pub injected_payload: Option<String>,
    pub image_base: String,
    pub placeholder_image: String,
    pub viewport_width: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source: ".".to_string(),
            payload_file: DEFAULT_PAYLOAD_FILE.to_string(),
            injected_payload: None,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

impl ViewerConfig {
    /// 환경 변수에서 설정 로드 (비어있는 값은 기본값 유지)
    pub fn from_env() -> Result<Self, ListingError> {
        let mut cfg = Self::default();

        if let Some(v) = non_empty_var("LISTING_SOURCE") {
            cfg.source = v;
        }
        if let Some(v) = non_empty_var("LISTING_PAYLOAD_FILE") {
            cfg.payload_file = v;
        }
        cfg.injected_payload = non_empty_var("LISTING_PAYLOAD_JSON");
        if let Some(v) = non_empty_var("LISTING_IMAGE_BASE") {
            cfg.image_base = v;
        }
        if let Some(v) = non_empty_var("LISTING_VIEWPORT_WIDTH") {
            cfg.viewport_width = v.parse().map_err(|_| {
                ListingError::Config(format!("LISTING_VIEWPORT_WIDTH is not a width: {}", v))
            })?;
        }

        Ok(cfg)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `.env.local`, `.env` 순서로 로드합니다 (CWD부터 상위 디렉토리로 탐색).
/// 이미 설정된 변수는 덮어쓰지 않으므로 먼저 읽힌 `.env.local`이 우선합니다.
/// 파일이 없으면 건너뜁니다.
pub fn load_env_files() {
    for name in [".env.local", ".env"] {
        match dotenvy::from_filename(name) {
            Ok(path) => tracing::debug!("loaded env from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("failed to load {}: {}", name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.payload_file, DEFAULT_PAYLOAD_FILE);
        assert_eq!(cfg.image_base, "images/");
        assert!(cfg.injected_payload.is_none());
    }

    #[test]
    fn test_invalid_viewport_width_is_config_error() {
        std::env::set_var("LISTING_VIEWPORT_WIDTH", "wide");
        let result = ViewerConfig::from_env();
        std::env::remove_var("LISTING_VIEWPORT_WIDTH");

        assert!(matches!(result, Err(ListingError::Config(_))));
    }
}
