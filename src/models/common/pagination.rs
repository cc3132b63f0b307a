use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 每页条目数
pub const ITEM_PER_PAGE: u64 = 10;

/// 页码上限，保证偏移量落在 SQL OFFSET 的取值范围内
pub const MAX_PAGE: u64 = i64::MAX as u64 / ITEM_PER_PAGE;

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationInfo {
    pub fn new(page: u64, total: u64) -> Self {
        Self {
            page,
            page_size: ITEM_PER_PAGE,
            total,
            total_pages: total.div_ceil(ITEM_PER_PAGE),
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T: TS> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: u64, total: u64) -> Self {
        Self {
            items,
            pagination: PaginationInfo::new(page, total),
        }
    }
}

/// 解析页码：缺失、非数字或小于 1 时回落到第 1 页
///
/// 超过上限时截到 [`MAX_PAGE`]。
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map(|page| (page as u64).min(MAX_PAGE))
        .unwrap_or(1)
}

/// 第 `page` 页之前需要跳过的条目数
pub fn page_offset(page: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(ITEM_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_fallbacks() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some("4")), 4);
        assert_eq!(parse_page(Some(" 2 ")), 2);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(3), 20);
        assert_eq!(page_offset(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_huge_page_is_clamped() {
        assert_eq!(parse_page(Some("9223372036854775807")), MAX_PAGE);
        assert!(page_offset(MAX_PAGE) <= i64::MAX as u64);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(PaginationInfo::new(1, 0).total_pages, 0);
        assert_eq!(PaginationInfo::new(1, 10).total_pages, 1);
        assert_eq!(PaginationInfo::new(1, 11).total_pages, 2);
    }
}
