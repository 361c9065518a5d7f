use std::time::Duration;

use futures::channel::oneshot;
use leptos::prelude::set_timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::{SimulatedOutcome, SiteConfig};
use crate::contact::{rejection, ContactPayload, ContactTransport, TransportError};

const NETWORK_FAILURE: &str = "Network error. Please try again.";

fn network_error(e: JsValue) -> TransportError {
    log::warn!("contact request failed: {e:?}");
    TransportError::Network(NETWORK_FAILURE.to_string())
}

/// Posts the form to a real endpoint.
#[derive(Debug, Clone)]
pub struct EndpointTransport {
    url: String,
}

impl EndpointTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ContactTransport for EndpointTransport {
    async fn send(&self, payload: ContactPayload) -> Result<(), TransportError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&payload.to_form_body()));

        let request = Request::new_with_str_and_init(&self.url, &opts).map_err(network_error)?;
        request
            .headers()
            .set("Content-Type", "application/x-www-form-urlencoded")
            .map_err(network_error)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network(NETWORK_FAILURE.to_string()))?;
        let resp: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;

        if resp.ok() {
            return Ok(());
        }

        let body = match resp.text() {
            Ok(text) => JsFuture::from(text)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        Err(rejection(resp.status(), &body))
    }
}

/// Waits, then resolves with a fixed outcome. Used when no endpoint is configured.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u64, outcome: SimulatedOutcome) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            outcome,
        }
    }
}

impl ContactTransport for SimulatedTransport {
    async fn send(&self, payload: ContactPayload) -> Result<(), TransportError> {
        let (tx, rx) = oneshot::channel();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            self.delay,
        );
        // a dropped sender only means the page is going away
        let _ = rx.await;

        let result = self.outcome.result();
        if result.is_ok() {
            log::info!("simulated delivery of message from {}", payload.email);
        }
        result
    }
}

/// The transport the site is configured for.
#[derive(Debug, Clone)]
pub enum SiteTransport {
    Endpoint(EndpointTransport),
    Simulated(SimulatedTransport),
}

impl SiteTransport {
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.contact_endpoint {
            Some(url) => SiteTransport::Endpoint(EndpointTransport::new(url.clone())),
            None => SiteTransport::Simulated(SimulatedTransport::new(
                config.simulated_delay_ms,
                config.simulated_outcome.clone(),
            )),
        }
    }
}

impl ContactTransport for SiteTransport {
    async fn send(&self, payload: ContactPayload) -> Result<(), TransportError> {
        match self {
            SiteTransport::Endpoint(t) => t.send(payload).await,
            SiteTransport::Simulated(t) => t.send(payload).await,
        }
    }
}
