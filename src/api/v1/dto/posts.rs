/*
 * Responsibility
 * - GET /posts/{tags} のクエリ DTO
 * - key は大文字小文字を区別しない (sortBy / sortby / SORTBY)、重複時は先勝ち
 * - 値の解釈 (大文字小文字, fallback) は SortOrder 側に任せる
 */
use url::form_urlencoded;

use crate::services::posts::SortOrder;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PostsQuery {
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

impl PostsQuery {
    /// Never fails: unknown keys are ignored, a repeated key keeps its
    /// first value.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = Self::default();

        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let slot = match key.to_ascii_lowercase().as_str() {
                "sortby" => &mut query.sort_by,
                "direction" => &mut query.direction,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        query
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_params(self.sort_by.as_deref(), self.direction.as_deref())
    }
}
