//! Payload Loader
//!
//! 시작 시 한 번만 수행하는 데이터 수집 단계입니다.
//! 주입된 JSON → 로컬 파일 → HTTP 순으로 결정하며, 재시도/타임아웃은 없습니다.

use std::path::PathBuf;

use serde_json::Value;
use url::Url;

use crate::config::ViewerConfig;
use crate::error::ListingError;

/// 페이로드 출처
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadSource {
    /// 메모리에 주입된 JSON 텍스트
    Injected(String),
    File(PathBuf),
    Remote(Url),
}

impl PayloadSource {
    /// 설정으로부터 출처 결정
    pub fn from_config(config: &ViewerConfig) -> Result<Self, ListingError> {
        if let Some(json) = &config.injected_payload {
            return Ok(PayloadSource::Injected(json.clone()));
        }

        let source = config.source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            // 기본 URL 뒤에 고정 파일명을 붙임 (디렉토리처럼 취급)
            let base = if source.ends_with('/') {
                source.to_string()
            } else {
                format!("{}/", source)
            };
            let url = Url::parse(&base)
                .and_then(|b| b.join(&config.payload_file))
                .map_err(|e| ListingError::InvalidSource(format!("{}: {}", source, e)))?;
            return Ok(PayloadSource::Remote(url));
        }
        if source.contains("://") {
            return Err(ListingError::InvalidSource(format!(
                "unsupported scheme: {}",
                source
            )));
        }

        let path = PathBuf::from(source);
        // 파일을 직접 지정한 경우 그대로 사용
        if path.extension().is_some_and(|ext| ext == "json") {
            return Ok(PayloadSource::File(path));
        }
        Ok(PayloadSource::File(path.join(&config.payload_file)))
    }

    /// 실패 메시지에 보여줄 파일명
    pub fn display_name(&self) -> String {
        match self {
            PayloadSource::Injected(_) => "PROPERTY_DATA".to_string(),
            PayloadSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            PayloadSource::Remote(url) => url
                .path_segments()
                .and_then(|mut s| s.next_back().map(str::to_string))
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| url.to_string()),
        }
    }
}

/// 페이로드 로드 (단일 요청)
pub async fn load_payload(source: &PayloadSource) -> Result<Value, ListingError> {
    match source {
        PayloadSource::Injected(json) => {
            tracing::debug!("using injected payload ({} bytes)", json.len());
            Ok(serde_json::from_str(json)?)
        }
        PayloadSource::File(path) => {
            tracing::info!("reading payload from {}", path.display());
            let bytes = tokio::fs::read(path).await?;
            Ok(serde_json::from_slice(&bytes)?)
        }
        PayloadSource::Remote(url) => {
            tracing::info!("fetching payload from {}", url);
            let resp = reqwest::Client::new()
                .get(url.clone())
                .header("Accept", "application/json")
                .send()
                .await?;

            if !resp.status().is_success() {
                return Err(ListingError::HttpStatus(resp.status().as_u16()));
            }

            let body = resp.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        }
    }
}
