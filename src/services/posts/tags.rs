/*
 * Responsibility
 * - "tech,health" のような生の tags パラメータを tag の列に分解する
 * - 前後の空白は落とし、空のセグメントは無視する (重複はそのまま)
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagList(Vec<String>);

impl TagList {
    /// `None` when the input holds no usable tag (empty, blank, or only
    /// commas and whitespace).
    pub fn parse(raw: &str) -> Option<Self> {
        let tags: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        if tags.is_empty() { None } else { Some(Self(tags)) }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // always false for a parsed list, kept alongside len()
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
