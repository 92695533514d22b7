//! HTTP Callback Client - Delivers notifications as JSON over HTTP.
//!
//! Each notification is a `POST` of a `NotifyForMessageRequest` to the
//! callback address recorded for the session. Any non-2xx answer counts as a
//! failed delivery.
//!
//! # Configuration
//!
//! ```ignore
//! let connector = HttpCallbackConnector::new(&config.callback)?;
//! let client = connector.connect("http://test-bed:8080/notify")?;
//! client.notify_for_message(&request).await?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, NoProxy, Proxy, Url};
use std::time::Duration;
use tracing::debug;

use crate::config::{CallbackConfig, ProxyConfig};
use crate::ports::{
    CallbackClient, CallbackConnector, ConnectError, DeliveryError, NotifyForMessageRequest,
};

/// Builds HTTP clients bound to callback addresses.
#[derive(Debug, Clone)]
pub struct HttpCallbackConnector {
    timeout: Duration,
    proxy: Option<Proxy>,
}

impl HttpCallbackConnector {
    /// Creates a connector from the callback configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConnectError::Configuration` if the proxy settings cannot be used.
    pub fn new(config: &CallbackConfig) -> Result<Self, ConnectError> {
        let proxy = if config.proxy.enabled {
            Some(build_proxy(&config.proxy)?)
        } else {
            None
        };

        Ok(Self {
            timeout: config.timeout(),
            proxy,
        })
    }

    /// Connector without proxy and with the given timeout.
    pub fn direct(timeout: Duration) -> Self {
        Self {
            timeout,
            proxy: None,
        }
    }
}

fn build_proxy(config: &ProxyConfig) -> Result<Proxy, ConnectError> {
    let mut proxy =
        Proxy::all(config.url()).map_err(|e| ConnectError::Configuration(e.to_string()))?;
    if config.auth_enabled {
        proxy = proxy.basic_auth(&config.username, config.password());
    }
    if let Some(hosts) = config.non_proxy_hosts_list() {
        proxy = proxy.no_proxy(NoProxy::from_string(&hosts));
    }
    Ok(proxy)
}

fn parse_address(address: &str) -> Result<Url, ConnectError> {
    let invalid = |reason: String| ConnectError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    let url = Url::parse(address).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

impl CallbackConnector for HttpCallbackConnector {
    fn connect(&self, address: &str) -> Result<Box<dyn CallbackClient>, ConnectError> {
        let url = parse_address(address)?;

        let mut builder = Client::builder().timeout(self.timeout);
        builder = match &self.proxy {
            Some(proxy) => builder.proxy(proxy.clone()),
            None => builder.no_proxy(),
        };
        let client = builder
            .build()
            .map_err(|e| ConnectError::Configuration(e.to_string()))?;

        Ok(Box::new(HttpCallbackClient {
            client,
            url,
            address: address.to_string(),
            timeout: self.timeout,
        }))
    }
}

/// HTTP client bound to one callback URL.
pub struct HttpCallbackClient {
    client: Client,
    url: Url,
    address: String,
    timeout: Duration,
}

#[async_trait]
impl CallbackClient for HttpCallbackClient {
    async fn notify_for_message(
        &self,
        request: &NotifyForMessageRequest,
    ) -> Result<(), DeliveryError> {
        debug!(
            session_id = %request.session_id,
            callback = %self.address,
            outcome = %request.report.result(),
            "Posting notification"
        );

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Timeout {
                        timeout_secs: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    DeliveryError::Network(format!("Connection failed: {}", e))
                } else {
                    DeliveryError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
