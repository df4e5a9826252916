/// Data structures for Tab Suspender
use serde::Deserialize;

/// Host-assigned numeric tab id
pub type TabId = i32;

/// A browser tab as last reported by the host
///
/// Deserialized directly from the host tab object; fields the popup does not
/// use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    pub id: Option<TabId>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub fav_icon_url: Option<String>,
    #[serde(default)]
    pub discarded: bool,
}

impl TabSnapshot {
    pub fn new(id: TabId, title: &str, url: &str) -> TabSnapshot {
        TabSnapshot {
            id: Some(id),
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            fav_icon_url: None,
            discarded: false,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("No Title")
    }

    pub fn display_url(&self) -> &str {
        self.url.as_deref().unwrap_or("No URL")
    }

    /// Rendering key: id when known, url otherwise
    pub fn list_key(&self, index: usize) -> String {
        match (self.id, &self.url) {
            (Some(id), _) => id.to_string(),
            (None, Some(url)) => url.clone(),
            (None, None) => format!("index-{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_tab() {
        let json = r#"{
            "id": 42,
            "index": 3,
            "windowId": 1,
            "active": false,
            "title": "Rust",
            "url": "https://www.rust-lang.org/",
            "favIconUrl": "https://www.rust-lang.org/favicon.ico"
        }"#;

        let tab: TabSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, Some(42));
        assert_eq!(tab.title.as_deref(), Some("Rust"));
        assert_eq!(
            tab.fav_icon_url.as_deref(),
            Some("https://www.rust-lang.org/favicon.ico")
        );
        assert!(!tab.discarded);
    }

    #[test]
    fn test_deserialize_already_discarded_tab() {
        let tab: TabSnapshot = serde_json::from_str(r#"{"id": 7, "discarded": true}"#).unwrap();
        assert!(tab.discarded);
    }

    #[test]
    fn test_deserialize_bare_tab() {
        let tab: TabSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(tab, TabSnapshot::default());
    }

    #[test]
    fn test_deserialize_null_fields() {
        let json = r#"{"id": null, "title": null, "url": "https://a.com", "favIconUrl": null}"#;

        let tab: TabSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, None);
        assert_eq!(tab.display_title(), "No Title");
        assert_eq!(tab.fav_icon_url, None);
        assert!(!tab.discarded);
    }

    #[test]
    fn test_display_fallbacks() {
        let tab = TabSnapshot::default();
        assert_eq!(tab.display_title(), "No Title");
        assert_eq!(tab.display_url(), "No URL");

        let tab = TabSnapshot::new(1, "Docs", "https://docs.rs");
        assert_eq!(tab.display_title(), "Docs");
        assert_eq!(tab.display_url(), "https://docs.rs");
    }

    #[test]
    fn test_list_key() {
        assert_eq!(TabSnapshot::new(5, "a", "https://a.com").list_key(0), "5");

        let no_id = TabSnapshot {
            url: Some("https://b.com".to_string()),
            ..TabSnapshot::default()
        };
        assert_eq!(no_id.list_key(1), "https://b.com");

        assert_eq!(TabSnapshot::default().list_key(2), "index-2");
    }
}
