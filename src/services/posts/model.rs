/*
 * Responsibility
 * - Post の定義 (upstream から受け取り、そのまま client に返す)
 * - upstream 側のフィールド名は大文字小文字を区別しない
 */
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single blog entry as served by the upstream content API.
///
/// Field order is the serialized order: `author, authorId, id, likes,
/// popularity, reads, tags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub author: String,

    #[serde(rename = "authorId", alias = "authorid", default)]
    pub author_id: i64,

    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub likes: i64,

    #[serde(default)]
    pub popularity: f64,

    #[serde(default)]
    pub reads: i64,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Outbound envelope, also the shape the upstream answers with.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostsEnvelope {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Parse an upstream body, matching field names case-insensitively.
///
/// Keys of the envelope and of every post object are lower-cased before
/// deserializing, so `Posts`/`AuthorId`/`READS` all land on their field.
pub fn parse_envelope(body: &[u8]) -> serde_json::Result<PostsEnvelope> {
    let mut value: Value = serde_json::from_slice(body)?;

    if let Value::Object(map) = &mut value {
        lowercase_keys(map);
        if let Some(Value::Array(posts)) = map.get_mut("posts") {
            for post in posts.iter_mut() {
                if let Value::Object(fields) = post {
                    lowercase_keys(fields);
                }
            }
        }
    }

    serde_json::from_value(value)
}

fn lowercase_keys(map: &mut Map<String, Value>) {
    let taken = std::mem::take(map);
    // first key wins when two spellings collide
    for (key, value) in taken {
        map.entry(key.to_lowercase()).or_insert(value);
    }
}
