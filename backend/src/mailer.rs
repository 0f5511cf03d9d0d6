use common::model::media::MediaRecord;
use log::info;
use reqwest::multipart::{Form, Part};

use crate::config::MailSettings;
use crate::error::ApiError;

const MAILGUN_BASE_URL: &str = "https://api.mailgun.net/v3";

/// Sends catalogue mail through the Mailgun messages API.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    api_key: String,
    domain: String,
}

impl Mailer {
    pub fn new(settings: &MailSettings) -> Self {
        Mailer {
            client: reqwest::Client::new(),
            api_key: settings.api_key.clone(),
            domain: settings.domain.clone(),
        }
    }

    /// Mails the exported catalogue to `recipient`: the matching records as
    /// the text body plus the rendered PDF as an attachment.
    pub async fn send_catalogue(
        &self,
        recipient: &str,
        records: &[MediaRecord],
        pdf: Vec<u8>,
    ) -> Result<(), ApiError> {
        let text = serde_json::to_string(records)
            .map_err(|e| ApiError::Service(format!("mail rendering failed: {}", e)))?;
        let attachment = Part::bytes(pdf)
            .file_name("media.pdf")
            .mime_str("application/pdf")
            .map_err(|e| ApiError::Service(format!("mail rendering failed: {}", e)))?;
        let form = Form::new()
            .text("from", format!("postmaster@{}", self.domain))
            .text("to", recipient.to_string())
            .text("subject", "Requested Catalog")
            .text("text", text)
            .part("attachment", attachment);

        let url = format!("{}/{}/messages", MAILGUN_BASE_URL, self.domain);
        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Service(format!("mail delivery failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(ApiError::Service(format!(
                "mail delivery failed: {}",
                response.status()
            )));
        }

        info!("catalogue mailed to {}", recipient);
        Ok(())
    }
}
