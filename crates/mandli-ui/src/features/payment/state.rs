//! Payment page state and checkout payloads.
//!
//! # Design
//! - The widget options are a plain serde struct; the success handler is
//!   attached on the JS side after serialization.
//! - Amounts are configured in rupees and sent to the widget in paise.

use crate::core::config::AppConfig;
use serde::{Deserialize, Serialize};

/// Response of the order-creation endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CreateOrderResponse {
    /// Gateway order id.
    #[serde(rename = "orderId")]
    pub order_id: String,
}

/// Contact details pre-filled in the widget.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PrefillOptions {
    /// Payer name.
    pub name: String,
    /// Payer email.
    pub email: String,
    /// Payer phone.
    pub contact: String,
}

/// Widget accent.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Hex color.
    pub color: String,
}

/// Options passed to the checkout widget constructor.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CheckoutOptions {
    /// Publishable key.
    pub key: String,
    /// Amount in paise.
    pub amount: u64,
    /// ISO currency code.
    pub currency: String,
    /// Merchant name.
    pub name: String,
    /// Transaction description.
    pub description: String,
    /// Order id returned by the backend.
    pub order_id: String,
    /// Payer details.
    pub prefill: PrefillOptions,
    /// Widget theme.
    pub theme: ThemeOptions,
}

impl CheckoutOptions {
    /// Build widget options for an order.
    #[must_use]
    pub fn for_order(config: &AppConfig, order_id: impl Into<String>) -> Self {
        Self {
            key: config.checkout_key.to_string(),
            amount: amount_in_paise(config.amount_rupees),
            currency: config.currency.to_string(),
            name: config.merchant_name.to_string(),
            description: config.description.to_string(),
            order_id: order_id.into(),
            prefill: PrefillOptions {
                name: config.prefill.name.to_string(),
                email: config.prefill.email.to_string(),
                contact: config.prefill.contact.to_string(),
            },
            theme: ThemeOptions {
                color: config.theme_color.to_string(),
            },
        }
    }
}

/// Convert whole rupees to paise.
#[must_use]
pub const fn amount_in_paise(rupees: u32) -> u64 {
    rupees as u64 * 100
}

/// Alert text shown after a successful payment.
#[must_use]
pub fn success_message(label: &str, payment_id: &str) -> String {
    format!("{label}: {payment_id}")
}

/// Pay button state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaymentState {
    /// Whether an order request is in flight.
    pub processing: bool,
}

impl PaymentState {
    /// Translation key for the pay button.
    #[must_use]
    pub const fn button_key(self) -> &'static str {
        if self.processing {
            "processing"
        } else {
            "payNow"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_carry_the_demo_order() -> Result<(), serde_json::Error> {
        let options = CheckoutOptions::for_order(&AppConfig::default(), "order_123");
        let value = serde_json::to_value(&options)?;
        assert_eq!(value["amount"], 10_000);
        assert_eq!(value["currency"], "INR");
        assert_eq!(value["order_id"], "order_123");
        assert_eq!(value["name"], "Mandli Cooperative Bank");
        assert_eq!(value["description"], "Test Transaction");
        assert_eq!(value["prefill"]["name"], "DHRUV PATEL");
        assert_eq!(value["theme"]["color"], "#F37254");
        Ok(())
    }

    #[test]
    fn order_response_reads_camel_case_id() -> Result<(), serde_json::Error> {
        let response: CreateOrderResponse = serde_json::from_str(r#"{"orderId":"order_9"}"#)?;
        assert_eq!(response.order_id, "order_9");
        assert!(serde_json::from_str::<CreateOrderResponse>("{}").is_err());
        Ok(())
    }

    #[test]
    fn button_label_follows_processing_flag() {
        assert_eq!(PaymentState::default().button_key(), "payNow");
        assert_eq!(PaymentState { processing: true }.button_key(), "processing");
        assert_eq!(amount_in_paise(1), 100);
        assert_eq!(
            success_message("Payment successful", "pay_1"),
            "Payment successful: pay_1"
        );
    }
}
