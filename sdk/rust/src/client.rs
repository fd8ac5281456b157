use reqwest::Client;
use serde::{Deserialize, Serialize};

/// A contact-form submission as the website sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    /// Honeypot. Humans leave it empty.
    #[serde(default)]
    pub website: String,
    #[serde(rename = "sourcePage", skip_serializing_if = "Option::is_none")]
    pub source_page: Option<String>,
}

/// Body of every JSON answer from the relay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: SubmitBody,
}

pub struct ContactClient {
    client: Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(relay_url: &str) -> Self {
        Self::with_client(Client::new(), relay_url)
    }

    pub fn with_client(client: Client, relay_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/contact", relay_url.trim_end_matches('/')),
        }
    }

    /// Submit a form. Non-2xx answers are returned, not raised.
    pub async fn submit(&self, form: &ContactForm) -> Result<SubmitResponse, Box<dyn std::error::Error>> {
        self.submit_json(&serde_json::to_value(form)?).await
    }

    /// Submit an arbitrary JSON body, for probing validation.
    pub async fn submit_json(&self, body: &serde_json::Value) -> Result<SubmitResponse, Box<dyn std::error::Error>> {
        let resp = self.client.post(&self.endpoint).json(body).send().await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;

        match serde_json::from_str::<SubmitBody>(&text) {
            Ok(body) => Ok(SubmitResponse { status, body }),
            Err(e) => Err(format!("Relay returned non-JSON body (status {}): {}: {}", status, text, e).into()),
        }
    }
}
