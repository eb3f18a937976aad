//! Paginated Media Index
//!
//! 인라인 갤러리와 라이트박스가 공통으로 사용하는 페이지 계산.
//! 현재 페이지는 항상 `current_index / page_size`로 유도되며 따로 저장하지 않습니다.

use std::ops::Range;

use serde::Serialize;

/// 이동 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

/// `ceil(item_count / page_size)`, 항목이 없으면 0
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be positive");
    item_count.div_ceil(page_size)
}

pub fn page_of(index: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be positive");
    index / page_size
}

/// 순환 이동: 마지막 다음은 0, 0 이전은 마지막
///
/// `item_count == 0`은 호출자 불변식 위반입니다 (정규화 단계가 플레이스홀더를 보장).
pub fn advance(current: usize, item_count: usize, direction: Direction) -> usize {
    debug_assert!(item_count > 0, "advance on an empty media set");
    match direction {
        Direction::Next => (current + 1) % item_count,
        Direction::Previous => (current + item_count - 1) % item_count,
    }
}

/// 페이지에 보이는 항목 범위 `[page*size, min(page*size+size, count))`
pub fn window(page: usize, page_size: usize, item_count: usize) -> Range<usize> {
    let start = (page * page_size).min(item_count);
    let end = (start + page_size).min(item_count);
    start..end
}

/// 인덱스 이동 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub index: usize,
    pub page: usize,
    /// 보이는 썸네일 창이 바뀌었는지 (false면 하이라이트만 갱신)
    pub window_changed: bool,
}

/// 페이지네이션 상태
///
/// `visible_page`는 화면에 렌더링된 썸네일 창의 페이지로, 페이지 점(dot)이나
/// 페이지 이동 버튼으로 활성 인덱스와 무관하게 바뀔 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    item_count: usize,
    page_size: usize,
    current_index: usize,
    visible_page: usize,
}

impl PaginationState {
    pub fn new(item_count: usize, page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        Self {
            item_count,
            page_size: page_size.max(1),
            current_index: 0,
            visible_page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 활성 인덱스가 속한 페이지
    pub fn current_page(&self) -> usize {
        page_of(self.current_index, self.page_size)
    }

    pub fn visible_page(&self) -> usize {
        self.visible_page
    }

    pub fn page_count(&self) -> usize {
        page_count(self.item_count, self.page_size)
    }

    /// 페이지 표시기(점)가 필요한지: 2페이지 이상일 때만
    pub fn has_pagination(&self) -> bool {
        self.page_count() > 1
    }

    pub fn visible_window(&self) -> Range<usize> {
        window(self.visible_page, self.page_size, self.item_count)
    }

    pub fn is_first_page(&self) -> bool {
        self.visible_page == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.visible_page + 1 >= self.page_count()
    }

    /// 임의 인덱스로 이동. 페이지가 바뀌면 창도 그 페이지로 맞춤
    pub fn go_to(&mut self, index: usize) -> Navigation {
        debug_assert!(index < self.item_count, "index {} out of range", index);
        self.current_index = index.min(self.item_count.saturating_sub(1));

        let page = self.current_page();
        let window_changed = page != self.visible_page;
        self.visible_page = page;

        Navigation {
            index: self.current_index,
            page,
            window_changed,
        }
    }

    pub fn step(&mut self, direction: Direction) -> Navigation {
        let next = advance(self.current_index, self.item_count, direction);
        self.go_to(next)
    }

    /// 보이는 페이지 변경 (`[0, page_count-1]`로 클램프). 활성 인덱스는 유지.
    /// 창이 바뀌었으면 true
    pub fn set_page(&mut self, page: usize) -> bool {
        let clamped = page.min(self.page_count().saturating_sub(1));
        let changed = clamped != self.visible_page;
        self.visible_page = clamped;
        changed
    }

    /// 페이지 크기 변경. 바뀌었으면 현재 인덱스 기준으로 창을 다시 유도하고 true
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        debug_assert!(page_size > 0, "page size must be positive");
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return false;
        }
        self.page_size = page_size;
        self.visible_page = self.current_page();
        true
    }
}
