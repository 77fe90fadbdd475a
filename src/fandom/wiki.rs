//! Wiki records as returned by the list endpoint.

use serde::{Deserialize, Deserializer};

/// Envelope of the list endpoint: `{ "items": [...] }`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WikiList {
    #[serde(default)]
    pub items: Vec<Wiki>,
}

/// A single wiki entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Wiki {
    /// Wiki identifier. The API sends a number; it is kept as text.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub stats: WikiStats,
    /// Thumbnail URL, absent for many wikis.
    #[serde(default)]
    pub image: Option<String>,
}

impl Wiki {
    pub fn new(id: impl Into<String>, title: impl Into<String>, article_count: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            stats: WikiStats { article_count },
            image: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct WikiStats {
    #[serde(rename = "articles", default)]
    pub article_count: u32,
}

impl WikiStats {
    /// Human-readable article count.
    ///
    /// Below 1000 the count is shown as is, otherwise in whole thousands:
    /// `999 articles`, `2K articles`.
    pub fn articles_label(&self) -> String {
        if self.article_count < 1000 {
            format!("{} articles", self.article_count)
        } else {
            format!("{}K articles", self.article_count / 1000)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(article_count: u32) -> WikiStats {
        WikiStats { article_count }
    }

    #[test]
    fn articles_label_below_thousand_is_verbatim() {
        assert_eq!(stats(0).articles_label(), "0 articles");
        assert_eq!(stats(999).articles_label(), "999 articles");
    }

    #[test]
    fn articles_label_from_thousand_is_abbreviated() {
        assert_eq!(stats(1000).articles_label(), "1K articles");
        assert_eq!(stats(2500).articles_label(), "2K articles");
        assert_eq!(stats(1_234_567).articles_label(), "1234K articles");
    }

    #[test]
    fn decodes_api_payload_with_numeric_ids() {
        let body = r#"{
            "items": [
                {
                    "id": 3035,
                    "name": "Fallout Wiki",
                    "title": "Fallout Wiki",
                    "stats": { "articles": 27430, "images": 120000 },
                    "image": "https://images.example.com/fallout.png",
                    "wam_score": "99.1"
                },
                { "id": "147", "title": "Star Wars", "stats": { "articles": 512 }, "image": null }
            ],
            "next": 2,
            "total": 2
        }"#;

        let list: WikiList = serde_json::from_str(body).unwrap();
        assert_eq!(list.items.len(), 2);

        let fallout = &list.items[0];
        assert_eq!(fallout.id, "3035");
        assert_eq!(fallout.title, "Fallout Wiki");
        assert_eq!(fallout.stats.article_count, 27430);
        assert_eq!(
            fallout.image.as_deref(),
            Some("https://images.example.com/fallout.png")
        );

        let star_wars = &list.items[1];
        assert_eq!(star_wars.id, "147");
        assert_eq!(star_wars.image, None);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let wiki: Wiki = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();
        assert_eq!(wiki, Wiki::new("1", "", 0));

        let list: WikiList = serde_json::from_str("{}").unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn rejects_entry_without_id() {
        let result = serde_json::from_str::<Wiki>(r#"{ "title": "No id" }"#);
        assert!(result.is_err());
    }
}
