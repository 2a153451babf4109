use crate::core::view::ViewReader;
use crate::domain::model::ViewRequest;
use crate::domain::ports::{ConfigProvider, ViewTransport};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_positive_number, validate_url};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// JSON REST client for a fullnode (`<node_url>/view`).
#[derive(Debug, Clone)]
pub struct NodeClient {
    client: Client,
    base_url: String,
}

impl NodeClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        validate_url("node_url", config.node_url())?;
        validate_positive_number("timeout_secs", config.timeout_secs(), 1)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.node_url().trim_end_matches('/').to_string(),
        })
    }

    /// 以設定建立 HTTP 節點連線並包成 `ViewReader`
    pub fn reader<C: ConfigProvider + ?Sized>(config: &C) -> Result<ViewReader<NodeClient>> {
        let transport = Self::new(config)?;
        Ok(ViewReader::new(transport, config))
    }

    pub fn view_url(&self) -> String {
        format!("{}/view", self.base_url)
    }
}

#[async_trait]
impl ViewTransport for NodeClient {
    async fn view(&self, request: &ViewRequest) -> Result<serde_json::Value> {
        let url = self.view_url();
        tracing::debug!("POST {} ({})", url, request.function);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        tracing::debug!("View response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Node {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
