//! Email Delivery
//!
//! Single-operation binding to the templated-email service: one `send` with
//! the template variables the contact template expects. No retry; the caller
//! reports the failure and the visitor resubmits.

use serde::Serialize;

use super::{check, http, ApiError};
use crate::config;

/// Placeholder values for the contact template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

impl EmailParams {
    /// Contact-form params with the fixed recipient baked in.
    pub fn contact(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            from_name: name.to_string(),
            from_email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            to_name: config::CONTACT_RECIPIENT.to_string(),
        }
    }
}

#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
}

/// Dispatch one templated message. Returns the service's status/text pair.
pub async fn send(
    service_id: &str,
    template_id: &str,
    params: &EmailParams,
) -> Result<(u16, String), ApiError> {
    let body = SendBody {
        service_id,
        template_id,
        user_id: config::EMAILJS_PUBLIC_KEY,
        template_params: params,
    };
    let resp = check(
        http()
            .post(config::EMAILJS_ENDPOINT)
            .json(&body)
            .send()
            .await?,
    )
    .await?;
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    Ok((status, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_params_fix_recipient() {
        let params = EmailParams::contact("Al", "a@b.co", "Hello there", "This is a test message.");
        assert_eq!(params.from_name, "Al");
        assert_eq!(params.from_email, "a@b.co");
        assert_eq!(params.subject, "Hello there");
        assert_eq!(params.message, "This is a test message.");
        assert_eq!(params.to_name, config::CONTACT_RECIPIENT);
    }

    #[test]
    fn test_send_body_shape() {
        let params = EmailParams::contact("Al", "a@b.co", "Hello there", "This is a test message.");
        let body = SendBody {
            service_id: config::EMAILJS_SERVICE_ID,
            template_id: config::EMAILJS_TEMPLATE_ID,
            user_id: config::EMAILJS_PUBLIC_KEY,
            template_params: &params,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["service_id"], config::EMAILJS_SERVICE_ID);
        assert_eq!(value["template_params"]["to_name"], config::CONTACT_RECIPIENT);
        assert_eq!(value["template_params"]["from_email"], "a@b.co");
    }
}
