use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Listing requests asking for more rows than this are rejected outright.
pub const MAX_LIST_LIMIT: i64 = 100;

const DEFAULT_LIST_LIMIT: i64 = 20;

/// Normalize limit/offset for a listing query: apply defaults, clamp
/// negatives to zero, and reject limits above [`MAX_LIST_LIMIT`].
pub fn list_bounds(limit: Option<i64>, offset: Option<i64>) -> AppResult<(i64, i64)> {
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
    if limit > MAX_LIST_LIMIT {
        return Err(AppError::TooManyDatas);
    }
    Ok((limit.max(0), offset.unwrap_or(0).max(0)))
}

/// Parse an id-like path segment; anything non-numeric is a `KEY_ERROR`.
pub fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>().map_err(|_| AppError::KeyError)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn bounds(&self) -> AppResult<(i64, i64)> {
        list_bounds(self.limit, self.offset)
    }
}

/// Query parameters accepted by `GET /items`. `sort` and `order` stay raw
/// strings here; the enums below own the mapping onto SQL so that no request
/// input ever reaches the query text directly.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemListQuery {
    pub main_category_id: Option<i32>,
    pub sub_category_id: Option<i32>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ItemListQuery {
    pub fn bounds(&self) -> AppResult<(i64, i64)> {
        list_bounds(self.limit, self.offset)
    }

    pub fn sort(&self) -> ItemSort {
        ItemSort::parse(self.sort.as_deref())
    }

    pub fn direction(&self) -> SortDirection {
        SortDirection::parse(self.order.as_deref())
    }
}

/// Sort keys for the item listings. Anything the client sends that is not a
/// recognized key falls back to `Default`, which orders by `items.id` —
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSort {
    LikeCount,
    Price,
    Name,
    #[default]
    Default,
}

impl ItemSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("likeCount") => ItemSort::LikeCount,
            Some("price") => ItemSort::Price,
            Some("name") => ItemSort::Name,
            _ => ItemSort::Default,
        }
    }

    /// Column (or aggregate alias) this key orders by.
    pub fn order_column(&self) -> &'static str {
        match self {
            ItemSort::LikeCount => "like_count",
            ItemSort::Price => "items.price",
            ItemSort::Name => "items.name",
            ItemSort::Default => "items.id",
        }
    }

    /// Only the like-count sort joins and groups over the likes table.
    pub fn aggregates_likes(&self) -> bool {
        matches!(self, ItemSort::LikeCount)
    }
}

/// Sort direction, parsed case-insensitively; unrecognized input falls back
/// to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_apply_defaults() {
        assert_eq!(list_bounds(None, None).unwrap(), (20, 0));
        assert_eq!(list_bounds(Some(10), Some(5)).unwrap(), (10, 5));
    }

    #[test]
    fn bounds_reject_limits_above_one_hundred() {
        let err = list_bounds(Some(101), Some(10)).unwrap_err();
        assert!(matches!(err, AppError::TooManyDatas));
        assert_eq!(err.to_string(), "Too Many Datas");
        // The boundary itself is still allowed.
        assert_eq!(list_bounds(Some(100), None).unwrap(), (100, 0));
    }

    #[test]
    fn bounds_clamp_negative_values() {
        assert_eq!(list_bounds(Some(-1), Some(-7)).unwrap(), (0, 0));
    }

    #[test]
    fn sort_keys_map_to_fixed_columns() {
        assert_eq!(ItemSort::parse(Some("likeCount")), ItemSort::LikeCount);
        assert_eq!(ItemSort::parse(Some("price")), ItemSort::Price);
        assert_eq!(ItemSort::parse(Some("name")), ItemSort::Name);
        assert_eq!(ItemSort::parse(Some("price")).order_column(), "items.price");
        assert_eq!(
            ItemSort::parse(Some("likeCount")).order_column(),
            "like_count"
        );
    }

    #[test]
    fn unrecognized_sort_falls_back_to_insertion_order() {
        assert_eq!(ItemSort::parse(None), ItemSort::Default);
        assert_eq!(ItemSort::parse(Some("default")), ItemSort::Default);
        assert_eq!(ItemSort::parse(Some("LIKECOUNT")), ItemSort::Default);
        assert_eq!(ItemSort::parse(Some("id; DROP TABLE items")), ItemSort::Default);
        assert_eq!(ItemSort::Default.order_column(), "items.id");
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("DESC")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("Asc")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(None), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }

    #[test]
    fn ids_parse_or_key_error() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert!(matches!(parse_id("book").unwrap_err(), AppError::KeyError));
        assert!(matches!(parse_id("").unwrap_err(), AppError::KeyError));
    }
}
