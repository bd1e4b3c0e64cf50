/*
 * Responsibility
 * - tag ごとの取得結果をマージ (id で重複排除、先勝ち)
 * - SortOrder を適用して最終的な並びを返す
 */
use std::collections::HashSet;

use super::{model::Post, sort::SortOrder};

/// Merge per-tag results in the order the tags were given, keeping the
/// first occurrence of every post id, then sort.
pub fn aggregate(per_tag: Vec<Vec<Post>>, order: SortOrder) -> Vec<Post> {
    let capacity = per_tag.iter().map(Vec::len).sum();
    let mut seen = HashSet::with_capacity(capacity);
    let mut posts = Vec::with_capacity(capacity);

    for post in per_tag.into_iter().flatten() {
        if seen.insert(post.id) {
            posts.push(post);
        }
    }

    order.apply(&mut posts);
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, reads: i64, tags: &[&str]) -> Post {
        Post {
            author: format!("author-{id}"),
            author_id: id,
            id,
            likes: 0,
            popularity: 0.0,
            reads,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn ids(posts: &[Post]) -> Vec<i64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn dedups_across_tags_and_sorts_by_reads_desc() {
        let tech = vec![post(1, 10, &["tech"]), post(2, 5, &["tech", "health"])];
        let health = vec![post(2, 5, &["tech", "health"]), post(3, 20, &["health"])];

        let merged = aggregate(
            vec![tech, health],
            SortOrder::from_params(Some("reads"), Some("desc")),
        );

        assert_eq!(ids(&merged), vec![3, 1, 2]);
    }

    #[test]
    fn first_occurrence_is_kept_verbatim() {
        let first = post(4, 100, &["tech"]);
        let mut later = post(4, 999, &["history"]);
        later.author = "someone else".into();

        let merged = aggregate(vec![vec![first.clone()], vec![later]], SortOrder::default());

        assert_eq!(merged, vec![first]);
    }

    #[test]
    fn ties_follow_admission_order() {
        let a = vec![post(9, 50, &["a"]), post(3, 50, &["a"])];
        let b = vec![post(3, 50, &["b"]), post(7, 50, &["b"])];

        let merged = aggregate(vec![a, b], SortOrder::from_params(Some("reads"), None));

        assert_eq!(ids(&merged), vec![9, 3, 7]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(Vec::new(), SortOrder::default()).is_empty());
        assert!(aggregate(vec![Vec::new(), Vec::new()], SortOrder::default()).is_empty());
    }
}
