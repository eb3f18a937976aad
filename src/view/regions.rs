//! 메모리 내 영역 저장소
//!
//! 테스트와 정적 HTML 출력에 사용되며, 영역별 재렌더링 횟수를 함께 기록합니다.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Region, RegionContent, ViewRegions};

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegionMap {
    contents: BTreeMap<Region, RegionContent>,
    #[serde(skip)]
    renders: BTreeMap<Region, usize>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: Region) -> Option<&RegionContent> {
        self.contents.get(&region)
    }

    /// 텍스트 영역 값 (텍스트가 아니면 None)
    pub fn text(&self, region: Region) -> Option<&str> {
        match self.contents.get(&region) {
            Some(RegionContent::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn flag(&self, region: Region) -> Option<bool> {
        match self.contents.get(&region) {
            Some(RegionContent::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    /// `put` 호출 횟수 (하이라이트 갱신은 세지 않음)
    pub fn render_count(&self, region: Region) -> usize {
        self.renders.get(&region).copied().unwrap_or(0)
    }

    pub fn is_populated(&self, region: Region) -> bool {
        self.contents.contains_key(&region)
    }

    pub fn regions(&self) -> impl Iterator<Item = (&Region, &RegionContent)> {
        self.contents.iter()
    }
}

impl ViewRegions for RegionMap {
    fn put(&mut self, region: Region, content: RegionContent) {
        self.contents.insert(region, content);
        *self.renders.entry(region).or_insert(0) += 1;
    }

    fn highlight(&mut self, region: Region, active: usize) {
        if let Some(RegionContent::Thumbnails(strip)) = self.contents.get_mut(&region) {
            strip.active = active;
        }
    }
}
