use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::article::ArticleNotice;
use crate::error::AlertError;

/// Subscriber counts reported by the email-delivery collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub success: u32,
    pub failed: u32,
}

/// Email-delivery collaborator: announce one article to all subscribers.
#[async_trait]
pub trait SubscriberNotifier: Send + Sync {
    async fn notify(&self, notice: &ArticleNotice) -> Result<DeliveryReport, AlertError>;
}

/// Notifier backed by the hosted email broadcast endpoint.
pub struct HttpSubscriberNotifier {
    client: Client,
    endpoint: String,
}

impl HttpSubscriberNotifier {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubscriberNotifier for HttpSubscriberNotifier {
    async fn notify(&self, notice: &ArticleNotice) -> Result<DeliveryReport, AlertError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(notice)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<DeliveryReport>().await?)
    }
}
