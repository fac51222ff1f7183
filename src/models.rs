//! Frontend Models
//!
//! Row shapes for the remote collections, the form drafts edited against them,
//! and the validated payloads sent on insert/update. `id` and `created_at` are
//! assigned by the store and never sent back in a payload.

use serde::{Deserialize, Serialize};

use crate::config;

/// Article row (collection `articles`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub read_time: u32,
    pub tags: Vec<String>,
    pub category: String,
    pub featured: bool,
}

/// Project row (collection `projects`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    /// Opaque metrics blob, carried through untouched.
    #[serde(default)]
    pub stats: serde_json::Value,
    pub created_at: String,
}

/// Service row (collection `services`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub icon: String,
    pub image: Option<String>,
    pub featured: bool,
    pub created_at: String,
}

/// Authenticated user, as returned by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: serde_json::Value,
}

// ========================
// Drafts
// ========================
//
// A draft mirrors the form inputs: sequences are held as the comma-joined
// display string until submit re-normalizes them.

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: String,
    pub read_time: u32,
    pub featured: bool,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            author: config::DEFAULT_AUTHOR.to_string(),
            category: String::new(),
            tags: String::new(),
            read_time: 5,
            featured: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tech: String,
    pub github_url: String,
    pub demo_url: String,
    pub image: String,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub tech: String,
    pub icon: String,
    pub image: String,
    pub featured: bool,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            tech: String::new(),
            icon: "Brain".to_string(),
            image: String::new(),
            featured: false,
        }
    }
}

// ========================
// Payloads
// ========================

/// Normalized article fields sent on insert/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticlePayload {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: u32,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub stats: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicePayload {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub icon: String,
    pub image: Option<String>,
    pub featured: bool,
}

/// Icon names a service may reference; anything else fails validation.
pub const SERVICE_ICONS: &[&str] = &[
    "Brain", "Database", "MessageSquare", "BarChart3", "FileText", "Zap", "Globe", "Shield", "Cpu",
    "Camera", "TrendingUp", "Bot", "Search", "Cloud", "Code", "Settings", "Layers", "Target",
    "Sparkles", "Rocket",
];

/// Empty form input for an optional field maps to a null column.
pub fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_field_blank_is_none() {
        assert_eq!(optional_field(""), None);
        assert_eq!(optional_field("   "), None);
    }

    #[test]
    fn test_optional_field_trims() {
        assert_eq!(
            optional_field(" https://github.com/x/y "),
            Some("https://github.com/x/y".to_string())
        );
    }

    #[test]
    fn test_article_draft_defaults() {
        let draft = ArticleDraft::default();
        assert_eq!(draft.author, config::DEFAULT_AUTHOR);
        assert_eq!(draft.read_time, 5);
        assert!(!draft.featured);
    }

    #[test]
    fn test_service_draft_default_icon_is_known() {
        let draft = ServiceDraft::default();
        assert!(SERVICE_ICONS.contains(&draft.icon.as_str()));
    }
}
