//! Outbound email client
//!
//! Sends through the Resend REST API when an API key is configured;
//! otherwise logs the message and reports a dry run.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::EmailConfig;
use crate::error::{AppError, AppResult};

/// Email client
#[derive(Clone)]
pub struct Mailer {
    client: Client,
    api_endpoint: String,
    api_key: Option<String>,
    from: String,
}

/// What happened to an outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Delivered to the provider
    Sent { message_id: String },
    /// No provider configured; message was logged only
    DryRun,
}

#[derive(Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ProviderError {
    message: Option<String>,
}

impl Mailer {
    /// Build a mailer from the email configuration
    pub fn from_config(config: &EmailConfig) -> Self {
        Self {
            client: Client::new(),
            api_endpoint: config.api_endpoint.clone(),
            api_key: config.resend_api_key.clone(),
            from: config.from.clone(),
        }
    }

    /// Send one message. The plain-text part is the HTML body with tags
    /// stripped.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<SendOutcome> {
        let Some(api_key) = &self.api_key else {
            let preview: String = html.chars().take(200).collect();
            tracing::info!(to, subject, preview, "No mail provider configured; dry run");
            return Ok(SendOutcome::DryRun);
        };

        let text = strip_tags(html);
        let body = SendEmailBody {
            from: &self.from,
            to,
            subject,
            html,
            text: &text,
        };

        let response = self
            .client
            .post(&self.api_endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::EmailDelivery(e.to_string()))?;

        if !response.status().is_success() {
            let message = response
                .json::<ProviderError>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Failed to send email".to_string());
            return Err(AppError::EmailDelivery(message));
        }

        let sent: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| AppError::EmailDelivery(e.to_string()))?;

        Ok(SendOutcome::Sent {
            message_id: sent.id,
        })
    }
}

/// Crude tag stripper for the plain-text alternative part
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
