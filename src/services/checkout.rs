use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::pricing;

//The provider never answers instantly but must not hang the storefront
//forever either. Expiry surfaces as a failed checkout, the cart stays put.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// One entry of a checkout request, prices in major currency units (euro).
/// This is the wire shape the storefront submits to `/api/checkout/session`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
}

/// A created hosted-checkout session: an opaque id plus the URL the browser
/// should be redirected to.
#[derive(Clone, Debug, Serialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Provider error: {status} - {message}")]
    Provider { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the external hosted-checkout payment API.
#[derive(Clone, Debug)]
pub struct PaymentClient {
    http: reqwest::Client,
    api_url: String,
    public_origin: String,
}

impl PaymentClient {
    pub fn new(
        api_url: String,
        secret_key: &str,
        public_origin: String,
    ) -> Result<Self, CheckoutError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", secret_key);
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&auth_value)
                .map_err(|e| CheckoutError::Parse(format!("Invalid secret key format: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_url,
            public_origin,
        })
    }

    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok();
        let api_url = std::env::var("PAYMENT_API_URL").expect("PAYMENT_API_URL must be set");
        let secret_key =
            std::env::var("PAYMENT_SECRET_KEY").expect("PAYMENT_SECRET_KEY must be set");
        let public_origin =
            std::env::var("PUBLIC_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        Self::new(api_url, &secret_key, public_origin)
    }

    /// Creates a hosted-checkout session for the given items. Prices are
    /// converted to integer cents here, and the shipping fee is derived once
    /// from the shared pricing policy and appended as its own line, so the
    /// provider charges exactly what the cart displayed.
    pub async fn create_session(
        &self,
        items: &[CheckoutItem],
        success_url: Option<String>,
        cancel_url: Option<String>,
    ) -> Result<CheckoutSession, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut line_items: Vec<ProviderLineItem> = items
            .iter()
            .map(|item| ProviderLineItem {
                name: item.name.clone(),
                description: item.description.clone(),
                unit_amount: pricing::to_minor_units(item.price),
                quantity: item.quantity,
            })
            .collect();

        let subtotal = pricing::subtotal(
            &items
                .iter()
                .map(|item| pricing::line_total(item.price, item.quantity))
                .collect::<Vec<_>>(),
        );
        let shipping = pricing::shipping_fee(subtotal);
        if shipping > 0.0 {
            line_items.push(ProviderLineItem {
                name: "Shipping & Handling".to_owned(),
                description: "Standard delivery".to_owned(),
                unit_amount: pricing::to_minor_units(shipping),
                quantity: 1,
            });
        }

        let request = ProviderSessionRequest {
            mode: "payment",
            currency: "eur",
            line_items,
            success_url: success_url.unwrap_or_else(|| {
                format!(
                    "{}/#/success?session_id={{CHECKOUT_SESSION_ID}}",
                    self.public_origin
                )
            }),
            cancel_url: cancel_url.unwrap_or_else(|| format!("{}/#/store", self.public_origin)),
        };

        let url = format!("{}/v1/checkout/sessions", self.api_url);
        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CheckoutError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let session: ProviderSession = response
            .json()
            .await
            .map_err(|e| CheckoutError::Parse(e.to_string()))?;

        //Some providers omit the redirect URL and expect it to be derived
        //from the session id.
        let redirect = session
            .url
            .unwrap_or_else(|| format!("{}/v1/checkout/pay/{}", self.api_url, session.id));

        Ok(CheckoutSession {
            session_id: session.id,
            url: redirect,
        })
    }
}

#[derive(Debug, Serialize)]
struct ProviderSessionRequest {
    mode: &'static str,
    currency: &'static str,
    line_items: Vec<ProviderLineItem>,
    success_url: String,
    cancel_url: String,
}

#[derive(Debug, Serialize)]
struct ProviderLineItem {
    name: String,
    description: String,
    unit_amount: i64,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct ProviderSession {
    id: String,
    url: Option<String>,
}
