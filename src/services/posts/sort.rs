/*
 * Responsibility
 * - sortBy / direction のクエリ文字列を型に落とす
 * - 未知の sortBy は id、"asc" 以外の direction は desc
 */
use std::cmp::Ordering;

use super::model::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Reads,
    Likes,
    Popularity,
}

type Compare = fn(&Post, &Post) -> Ordering;

const SORT_KEYS: [(&str, SortKey); 4] = [
    ("id", SortKey::Id),
    ("reads", SortKey::Reads),
    ("likes", SortKey::Likes),
    ("popularity", SortKey::Popularity),
];

impl SortKey {
    /// Case-insensitive lookup; anything unrecognized (or absent) sorts by id.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|raw| {
            SORT_KEYS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(raw))
                .map(|(_, key)| *key)
        })
        .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Reads => "reads",
            SortKey::Likes => "likes",
            SortKey::Popularity => "popularity",
        }
    }

    fn compare(&self) -> Compare {
        match self {
            SortKey::Id => by_id,
            SortKey::Reads => by_reads,
            SortKey::Likes => by_likes,
            SortKey::Popularity => by_popularity,
        }
    }
}

fn by_id(a: &Post, b: &Post) -> Ordering {
    a.id.cmp(&b.id)
}

fn by_reads(a: &Post, b: &Post) -> Ordering {
    a.reads.cmp(&b.reads)
}

fn by_likes(a: &Post, b: &Post) -> Ordering {
    a.likes.cmp(&b.likes)
}

fn by_popularity(a: &Post, b: &Post) -> Ordering {
    a.popularity.total_cmp(&b.popularity)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// `asc` (any case) or a missing parameter is ascending. Every other
    /// value, typos included, is descending.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None => Direction::Asc,
            Some(raw) if raw.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(_) => Direction::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: Direction,
}

impl SortOrder {
    pub fn from_params(sort_by: Option<&str>, direction: Option<&str>) -> Self {
        Self {
            key: SortKey::from_param(sort_by),
            direction: Direction::from_param(direction),
        }
    }

    /// Stable in both directions: descending flips the comparator, so
    /// equal keys keep their incoming order.
    pub fn apply(&self, posts: &mut [Post]) {
        let compare = self.key.compare();
        match self.direction {
            Direction::Asc => posts.sort_by(compare),
            Direction::Desc => posts.sort_by(|a, b| compare(b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, reads: i64, likes: i64, popularity: f64) -> Post {
        Post {
            author: format!("author-{id}"),
            author_id: id * 10,
            id,
            likes,
            popularity,
            reads,
            tags: vec!["tech".into()],
        }
    }

    fn ids(posts: &[Post]) -> Vec<i64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn sort_key_is_case_insensitive() {
        assert_eq!(SortKey::from_param(Some("READS")), SortKey::Reads);
        assert_eq!(SortKey::from_param(Some("Likes")), SortKey::Likes);
        assert_eq!(SortKey::from_param(Some("popularity")), SortKey::Popularity);
        assert_eq!(SortKey::from_param(Some("iD")), SortKey::Id);
    }

    #[test]
    fn unknown_or_missing_sort_key_falls_back_to_id() {
        assert_eq!(SortKey::from_param(Some("author")), SortKey::Id);
        assert_eq!(SortKey::from_param(Some("")), SortKey::Id);
        assert_eq!(SortKey::from_param(None), SortKey::Id);
    }

    #[test]
    fn only_asc_is_ascending() {
        assert_eq!(Direction::from_param(None), Direction::Asc);
        assert_eq!(Direction::from_param(Some("asc")), Direction::Asc);
        assert_eq!(Direction::from_param(Some("ASC")), Direction::Asc);
        assert_eq!(Direction::from_param(Some("desc")), Direction::Desc);
        assert_eq!(Direction::from_param(Some("ascending")), Direction::Desc);
        assert_eq!(Direction::from_param(Some("asx")), Direction::Desc);
        assert_eq!(Direction::from_param(Some("")), Direction::Desc);
    }

    #[test]
    fn sorts_each_key_in_both_directions() {
        let posts = vec![
            post(2, 30, 1, 0.5),
            post(3, 10, 3, 0.9),
            post(1, 20, 2, 0.1),
        ];

        let cases = [
            ("id", vec![1, 2, 3]),
            ("reads", vec![3, 1, 2]),
            ("likes", vec![2, 1, 3]),
            ("popularity", vec![1, 2, 3]),
        ];

        for (key, ascending) in cases {
            let mut asc = posts.clone();
            SortOrder::from_params(Some(key), Some("asc")).apply(&mut asc);
            assert_eq!(ids(&asc), ascending, "{key} asc");

            let mut desc = posts.clone();
            SortOrder::from_params(Some(key), Some("desc")).apply(&mut desc);
            let descending: Vec<i64> = ascending.iter().rev().copied().collect();
            assert_eq!(ids(&desc), descending, "{key} desc");
        }
    }

    #[test]
    fn ties_keep_incoming_order() {
        let posts = vec![
            post(5, 10, 0, 0.0),
            post(1, 20, 0, 0.0),
            post(4, 10, 0, 0.0),
            post(2, 20, 0, 0.0),
        ];

        let mut asc = posts.clone();
        SortOrder::from_params(Some("reads"), None).apply(&mut asc);
        assert_eq!(ids(&asc), vec![5, 4, 1, 2]);

        let mut desc = posts;
        SortOrder::from_params(Some("reads"), Some("desc")).apply(&mut desc);
        assert_eq!(ids(&desc), vec![1, 2, 5, 4]);
    }
}
