//! Content Collections
//!
//! One [`Collection`] impl per content type binds together the remote table
//! name, the row shape, the form draft, and the validate-then-normalize
//! payload assembly. The list and form controllers are generic over this
//! trait; the three impls are the only per-type code in the CRUD core.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    optional_field, Article, ArticleDraft, ArticlePayload, Project, ProjectDraft, ProjectPayload,
    Service, ServiceDraft, ServicePayload,
};
use crate::tags::{join_tags, parse_tag_input};
use crate::validate::{validate_article, validate_project, validate_service, ValidationError};

/// A named remote collection of one content type.
pub trait Collection: 'static {
    /// Row shape as stored remotely.
    type Record: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static;
    /// In-progress form state (sequences as comma-joined strings).
    type Draft: Clone + Default + PartialEq + Send + Sync + 'static;
    /// Normalized, validated body for insert/update.
    type Payload: Serialize + 'static;

    /// Remote table name.
    const TABLE: &'static str;
    /// Singular label for notifications ("Failed to save article").
    const LABEL: &'static str;
    /// Plural label for notifications ("Failed to fetch articles").
    const PLURAL: &'static str;

    fn record_id(record: &Self::Record) -> &str;
    fn is_featured(record: &Self::Record) -> bool;

    /// Denormalize a row into an editable draft.
    fn to_draft(record: &Self::Record) -> Self::Draft;

    /// Re-normalize a draft and validate it; the first violated constraint
    /// aborts the submit.
    fn to_payload(draft: &Self::Draft) -> Result<Self::Payload, ValidationError>;
}

pub struct Articles;

impl Collection for Articles {
    type Record = Article;
    type Draft = ArticleDraft;
    type Payload = ArticlePayload;

    const TABLE: &'static str = "articles";
    const LABEL: &'static str = "article";
    const PLURAL: &'static str = "articles";

    fn record_id(record: &Article) -> &str {
        &record.id
    }

    fn is_featured(record: &Article) -> bool {
        record.featured
    }

    fn to_draft(record: &Article) -> ArticleDraft {
        ArticleDraft {
            title: record.title.clone(),
            excerpt: record.excerpt.clone(),
            content: record.content.clone(),
            author: record.author.clone(),
            category: record.category.clone(),
            tags: join_tags(&record.tags),
            read_time: record.read_time,
            featured: record.featured,
        }
    }

    fn to_payload(draft: &ArticleDraft) -> Result<ArticlePayload, ValidationError> {
        let payload = ArticlePayload {
            title: draft.title.clone(),
            excerpt: draft.excerpt.clone(),
            content: draft.content.clone(),
            author: draft.author.clone(),
            category: draft.category.clone(),
            tags: parse_tag_input(&draft.tags),
            read_time: draft.read_time,
            featured: draft.featured,
        };
        validate_article(&payload)?;
        Ok(payload)
    }
}

pub struct Projects;

impl Collection for Projects {
    type Record = Project;
    type Draft = ProjectDraft;
    type Payload = ProjectPayload;

    const TABLE: &'static str = "projects";
    const LABEL: &'static str = "project";
    const PLURAL: &'static str = "projects";

    fn record_id(record: &Project) -> &str {
        &record.id
    }

    fn is_featured(record: &Project) -> bool {
        record.featured
    }

    fn to_draft(record: &Project) -> ProjectDraft {
        ProjectDraft {
            title: record.title.clone(),
            description: record.description.clone(),
            tech: join_tags(&record.tech),
            github_url: record.github_url.clone().unwrap_or_default(),
            demo_url: record.demo_url.clone().unwrap_or_default(),
            image: record.image.clone().unwrap_or_default(),
            featured: record.featured,
        }
    }

    fn to_payload(draft: &ProjectDraft) -> Result<ProjectPayload, ValidationError> {
        let payload = ProjectPayload {
            title: draft.title.clone(),
            description: draft.description.clone(),
            tech: parse_tag_input(&draft.tech),
            github_url: optional_field(&draft.github_url),
            demo_url: optional_field(&draft.demo_url),
            image: optional_field(&draft.image),
            featured: draft.featured,
            // The stats blob is owned by the store side; a form submit
            // starts it empty and never edits it.
            stats: serde_json::json!({}),
        };
        validate_project(&payload)?;
        Ok(payload)
    }
}

pub struct Services;

impl Collection for Services {
    type Record = Service;
    type Draft = ServiceDraft;
    type Payload = ServicePayload;

    const TABLE: &'static str = "services";
    const LABEL: &'static str = "service";
    const PLURAL: &'static str = "services";

    fn record_id(record: &Service) -> &str {
        &record.id
    }

    fn is_featured(record: &Service) -> bool {
        record.featured
    }

    fn to_draft(record: &Service) -> ServiceDraft {
        ServiceDraft {
            title: record.title.clone(),
            description: record.description.clone(),
            tech: join_tags(&record.tech),
            icon: record.icon.clone(),
            image: record.image.clone().unwrap_or_default(),
            featured: record.featured,
        }
    }

    fn to_payload(draft: &ServiceDraft) -> Result<ServicePayload, ValidationError> {
        let payload = ServicePayload {
            title: draft.title.clone(),
            description: draft.description.clone(),
            tech: parse_tag_input(&draft.tech),
            icon: draft.icon.clone(),
            image: optional_field(&draft.image),
            featured: draft.featured,
        };
        validate_service(&payload)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article_row() -> Article {
        Article {
            id: "a1".to_string(),
            title: "Attention Is Enough".to_string(),
            excerpt: "Notes on transformers".to_string(),
            content: "Long form body".to_string(),
            author: "Dr. Umar Majeed".to_string(),
            created_at: "2026-01-05T10:00:00Z".to_string(),
            read_time: 7,
            tags: vec!["AI".to_string(), "ML".to_string()],
            category: "Research".to_string(),
            featured: true,
        }
    }

    #[test]
    fn test_article_edit_round_trip() {
        let row = article_row();
        let draft = Articles::to_draft(&row);
        assert_eq!(draft.tags, "AI, ML");

        let payload = Articles::to_payload(&draft).unwrap();
        assert_eq!(payload.title, row.title);
        assert_eq!(payload.tags, row.tags);
        assert_eq!(payload.read_time, row.read_time);
        assert!(payload.featured);
    }

    #[test]
    fn test_article_payload_normalizes_tags() {
        let draft = ArticleDraft {
            title: "T".to_string(),
            excerpt: "E".to_string(),
            content: "C".to_string(),
            author: "A".to_string(),
            category: "Cat".to_string(),
            tags: "AI, ML ,  ,Python".to_string(),
            read_time: 5,
            featured: false,
        };
        let payload = Articles::to_payload(&draft).unwrap();
        assert_eq!(payload.tags, vec!["AI", "ML", "Python"]);
    }

    #[test]
    fn test_article_invalid_draft_reports_first_field() {
        let draft = ArticleDraft {
            title: String::new(),
            ..ArticleDraft::default()
        };
        let err = Articles::to_payload(&draft).unwrap_err();
        assert_eq!(err.message, "Title is required");
    }

    #[test]
    fn test_project_blank_urls_become_null() {
        let draft = ProjectDraft {
            title: "Folio".to_string(),
            description: "Portfolio site".to_string(),
            tech: "Rust, Leptos".to_string(),
            github_url: "  ".to_string(),
            demo_url: "https://folio.dev".to_string(),
            image: String::new(),
            featured: false,
        };
        let payload = Projects::to_payload(&draft).unwrap();
        assert_eq!(payload.github_url, None);
        assert_eq!(payload.demo_url, Some("https://folio.dev".to_string()));
        assert_eq!(payload.image, None);
        assert_eq!(payload.stats, json!({}));
    }

    #[test]
    fn test_project_payload_serializes_null_urls() {
        let draft = ProjectDraft {
            title: "Folio".to_string(),
            description: "Portfolio site".to_string(),
            tech: "Rust".to_string(),
            ..ProjectDraft::default()
        };
        let value = serde_json::to_value(Projects::to_payload(&draft).unwrap()).unwrap();
        assert_eq!(value["github_url"], json!(null));
        assert_eq!(value["stats"], json!({}));
        assert_eq!(value["tech"], json!(["Rust"]));
    }

    #[test]
    fn test_service_round_trip_keeps_icon() {
        let row = Service {
            id: "s1".to_string(),
            title: "NLP Systems".to_string(),
            description: "Chatbots and semantic search".to_string(),
            tech: vec!["Rust".to_string(), "ONNX".to_string()],
            icon: "MessageSquare".to_string(),
            image: None,
            featured: false,
            created_at: "2025-11-02T08:00:00Z".to_string(),
        };
        let draft = Services::to_draft(&row);
        assert_eq!(draft.icon, "MessageSquare");
        assert_eq!(draft.image, "");

        let payload = Services::to_payload(&draft).unwrap();
        assert_eq!(payload.icon, "MessageSquare");
        assert_eq!(payload.image, None);
    }

    #[test]
    fn test_service_unknown_icon_rejected() {
        let draft = ServiceDraft {
            title: "X".to_string(),
            description: "Y".to_string(),
            tech: "Rust".to_string(),
            icon: "NotAnIcon".to_string(),
            ..ServiceDraft::default()
        };
        assert!(Services::to_payload(&draft).is_err());
    }
}
