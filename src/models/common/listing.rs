use std::collections::HashMap;

use crate::models::auth::entities::{SessionUser, UserRole};

use super::pagination::parse_page;

/// 发起列表查询的用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub role: UserRole,
    pub user_id: String,
}

impl Viewer {
    pub fn new(role: UserRole, user_id: impl Into<String>) -> Self {
        Self {
            role,
            user_id: user_id.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl From<&SessionUser> for Viewer {
    fn from(user: &SessionUser) -> Self {
        Self::new(user.role, user.id.clone())
    }
}

/// 列表查询：调用者、页码和过滤条件
///
/// 过滤键原样保存，各实体只读取自己认识的键，其余忽略。
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub viewer: Viewer,
    pub page: u64,
    filters: HashMap<String, String>,
}

impl ListQuery {
    pub fn new(viewer: Viewer, mut params: HashMap<String, String>) -> Self {
        let page = parse_page(params.remove("page").as_deref());
        params.retain(|_, value| !value.trim().is_empty());
        Self {
            viewer,
            page,
            filters: params,
        }
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(|value| value.trim())
    }

    /// 数字类过滤值，无法解析时视为未提供
    pub fn filter_id(&self, key: &str) -> Option<i64> {
        self.filter(key).and_then(|value| value.parse().ok())
    }

    pub fn search(&self) -> Option<&str> {
        self.filter("search")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_page_is_removed_from_filters() {
        let query = ListQuery::new(
            Viewer::new(UserRole::Admin, "admin"),
            params(&[("page", "3"), ("classId", "2")]),
        );
        assert_eq!(query.page, 3);
        assert_eq!(query.filter("page"), None);
        assert_eq!(query.filter_id("classId"), Some(2));
    }

    #[test]
    fn test_empty_and_unparseable_filters() {
        let query = ListQuery::new(
            Viewer::new(UserRole::Teacher, "user_1"),
            params(&[("search", "  "), ("classId", "abc"), ("page", "x")]),
        );
        assert_eq!(query.page, 1);
        assert_eq!(query.search(), None);
        assert_eq!(query.filter_id("classId"), None);
    }
}
