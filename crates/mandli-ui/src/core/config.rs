//! Build-time application configuration.
//!
//! The front-end has no runtime config source; values are fixed at compile
//! time and the checkout key may be injected with `MANDLI_CHECKOUT_KEY`.

/// Contact details pre-filled in the checkout widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckoutPrefill {
    /// Payer name.
    pub name: &'static str,
    /// Payer email.
    pub email: &'static str,
    /// Payer phone number.
    pub contact: &'static str,
}

/// Settings for the payment page and its checkout widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the order-creation endpoint, relative to the API base URL.
    pub create_order_path: &'static str,
    /// Script that defines the checkout widget constructor.
    pub checkout_script_url: &'static str,
    /// Publishable widget key.
    pub checkout_key: &'static str,
    /// Fixed amount charged by the demo, in rupees.
    pub amount_rupees: u32,
    /// ISO currency code.
    pub currency: &'static str,
    /// Merchant name shown in the widget header.
    pub merchant_name: &'static str,
    /// Line shown under the merchant name.
    pub description: &'static str,
    /// Accent color of the widget.
    pub theme_color: &'static str,
    /// Pre-filled payer details.
    pub prefill: CheckoutPrefill,
}

impl AppConfig {
    /// Configuration baked into this build.
    #[must_use]
    pub const fn from_build_env() -> Self {
        Self {
            create_order_path: "/api/create-order",
            checkout_script_url: "https://checkout.razorpay.com/v1/checkout.js",
            checkout_key: match option_env!("MANDLI_CHECKOUT_KEY") {
                Some(key) => key,
                None => "",
            },
            amount_rupees: 100,
            currency: "INR",
            merchant_name: "Mandli Cooperative Bank",
            description: "Test Transaction",
            theme_color: "#F37254",
            prefill: CheckoutPrefill {
                name: "DHRUV PATEL",
                email: "dhruv@example.com",
                contact: "9589482345",
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    #[test]
    fn demo_payment_is_one_hundred_rupees() {
        let config = AppConfig::default();
        assert_eq!(config.amount_rupees, 100);
        assert_eq!(config.currency, "INR");
        assert!(config.create_order_path.starts_with('/'));
        assert!(config.checkout_script_url.starts_with("https://"));
    }
}
