//! Validation Schemas
//!
//! Pre-flight validation run against an assembled payload before any write
//! leaves the client. The first violated constraint aborts with its
//! field-level message, matching the schema-per-entity design.

use crate::models::{ArticlePayload, ProjectPayload, ServicePayload, SERVICE_ICONS};

/// A field-level validation failure. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

fn required(field: &'static str, label: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, format!("{label} is required")));
    }
    Ok(())
}

fn max_len(field: &'static str, label: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("{label} must be less than {max} characters"),
        ));
    }
    Ok(())
}

fn min_len(field: &'static str, label: &str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::new(
            field,
            format!("{label} must be at least {min} characters"),
        ));
    }
    Ok(())
}

pub fn validate_article(payload: &ArticlePayload) -> Result<(), ValidationError> {
    required("title", "Title", &payload.title)?;
    max_len("title", "Title", &payload.title, 200)?;
    required("excerpt", "Excerpt", &payload.excerpt)?;
    max_len("excerpt", "Excerpt", &payload.excerpt, 500)?;
    required("content", "Content", &payload.content)?;
    max_len("content", "Content", &payload.content, 10000)?;
    required("author", "Author", &payload.author)?;
    max_len("author", "Author", &payload.author, 100)?;
    required("category", "Category", &payload.category)?;
    max_len("category", "Category", &payload.category, 50)?;
    if payload.tags.len() > 10 {
        return Err(ValidationError::new("tags", "Maximum 10 tags allowed"));
    }
    if !(1..=120).contains(&payload.read_time) {
        return Err(ValidationError::new(
            "read_time",
            "Read time must be between 1 and 120 minutes",
        ));
    }
    Ok(())
}

pub fn validate_project(payload: &ProjectPayload) -> Result<(), ValidationError> {
    required("title", "Title", &payload.title)?;
    max_len("title", "Title", &payload.title, 200)?;
    required("description", "Description", &payload.description)?;
    max_len("description", "Description", &payload.description, 1000)?;
    if payload.tech.len() > 10 {
        return Err(ValidationError::new("tech", "Maximum 10 technologies allowed"));
    }
    if let Some(url) = &payload.github_url {
        max_len("github_url", "GitHub URL", url, 500)?;
    }
    if let Some(url) = &payload.demo_url {
        max_len("demo_url", "Demo URL", url, 500)?;
    }
    if let Some(url) = &payload.image {
        max_len("image", "Image URL", url, 500)?;
    }
    Ok(())
}

pub fn validate_service(payload: &ServicePayload) -> Result<(), ValidationError> {
    required("title", "Title", &payload.title)?;
    max_len("title", "Title", &payload.title, 200)?;
    required("description", "Description", &payload.description)?;
    max_len("description", "Description", &payload.description, 1000)?;
    if payload.tech.is_empty() {
        return Err(ValidationError::new(
            "tech",
            "At least one technology is required",
        ));
    }
    if payload.tech.len() > 10 {
        return Err(ValidationError::new("tech", "Maximum 10 technologies allowed"));
    }
    if !SERVICE_ICONS.contains(&payload.icon.as_str()) {
        return Err(ValidationError::new("icon", "Icon must be a known icon name"));
    }
    if let Some(url) = &payload.image {
        max_len("image", "Image URL", url, 500)?;
    }
    Ok(())
}

/// Contact form fields, validated before dispatch to the email service.
pub fn validate_contact(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<(), ValidationError> {
    min_len("name", "Name", name, 2)?;
    max_len("name", "Name", name, 50)?;
    if !email_is_well_formed(email) {
        return Err(ValidationError::new(
            "email",
            "Please enter a valid email address",
        ));
    }
    max_len("email", "Email", email, 100)?;
    min_len("subject", "Subject", subject, 5)?;
    max_len("subject", "Subject", subject, 100)?;
    min_len("message", "Message", message, 10)?;
    max_len("message", "Message", message, 1000)?;
    Ok(())
}

/// `local@domain.tld` shape: one `@`, non-empty local part, dotted domain,
/// no whitespace.
fn email_is_well_formed(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> ArticlePayload {
        ArticlePayload {
            title: title.to_string(),
            excerpt: "An excerpt".to_string(),
            content: "Body text".to_string(),
            author: "Dr. Umar Majeed".to_string(),
            category: "AI".to_string(),
            tags: vec!["AI".to_string()],
            read_time: 5,
            featured: false,
        }
    }

    #[test]
    fn test_article_title_boundary() {
        assert!(validate_article(&article(&"x".repeat(200))).is_ok());
        let err = validate_article(&article(&"x".repeat(201))).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.message, "Title must be less than 200 characters");
    }

    #[test]
    fn test_article_first_violation_wins() {
        let mut payload = article("");
        payload.category = String::new();
        let err = validate_article(&payload).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.message, "Title is required");
    }

    #[test]
    fn test_article_tag_limit() {
        let mut payload = article("ok");
        payload.tags = (0..11).map(|i| format!("t{i}")).collect();
        let err = validate_article(&payload).unwrap_err();
        assert_eq!(err.message, "Maximum 10 tags allowed");
    }

    #[test]
    fn test_article_read_time_bounds() {
        let mut payload = article("ok");
        payload.read_time = 120;
        assert!(validate_article(&payload).is_ok());
        payload.read_time = 121;
        assert!(validate_article(&payload).is_err());
        payload.read_time = 0;
        assert!(validate_article(&payload).is_err());
    }

    #[test]
    fn test_service_icon_must_be_known() {
        let payload = ServicePayload {
            title: "NLP Systems".to_string(),
            description: "Chatbots and search".to_string(),
            tech: vec!["Rust".to_string()],
            icon: "Wand".to_string(),
            image: None,
            featured: false,
        };
        let err = validate_service(&payload).unwrap_err();
        assert_eq!(err.field, "icon");
    }

    #[test]
    fn test_service_requires_tech() {
        let payload = ServicePayload {
            title: "NLP Systems".to_string(),
            description: "Chatbots and search".to_string(),
            tech: vec![],
            icon: "Brain".to_string(),
            image: None,
            featured: false,
        };
        let err = validate_service(&payload).unwrap_err();
        assert_eq!(err.message, "At least one technology is required");
    }

    #[test]
    fn test_project_url_length() {
        let payload = ProjectPayload {
            title: "Folio".to_string(),
            description: "A site".to_string(),
            tech: vec!["Rust".to_string()],
            github_url: Some(format!("https://{}", "x".repeat(500))),
            demo_url: None,
            image: None,
            featured: false,
            stats: serde_json::json!({}),
        };
        assert_eq!(validate_project(&payload).unwrap_err().field, "github_url");
    }

    #[test]
    fn test_contact_message_boundary() {
        let err = validate_contact("Al", "a@b.co", "Hello there", &"m".repeat(9)).unwrap_err();
        assert_eq!(err.message, "Message must be at least 10 characters");
        assert!(validate_contact("Al", "a@b.co", "Hello there", &"m".repeat(10)).is_ok());
    }

    #[test]
    fn test_contact_scenario_accepts() {
        assert!(validate_contact("Al", "a@b.co", "Hello there", "This is a test message.").is_ok());
    }

    #[test]
    fn test_contact_name_too_short() {
        let err = validate_contact("A", "a@b.co", "Hello there", "This is a test message.")
            .unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_email_shapes() {
        assert!(email_is_well_formed("a@b.co"));
        assert!(email_is_well_formed("first.last@mail.example.org"));
        assert!(!email_is_well_formed("no-at-sign"));
        assert!(!email_is_well_formed("@missing.local"));
        assert!(!email_is_well_formed("x@nodot"));
        assert!(!email_is_well_formed("x@.co"));
        assert!(!email_is_well_formed("spa ce@b.co"));
    }
}
