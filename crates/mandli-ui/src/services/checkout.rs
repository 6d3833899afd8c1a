//! Order creation and the hosted checkout widget.
//!
//! # Design
//! - The widget script is injected once; its constructor is looked up on
//!   `window` only when a payment starts.
//! - Options are serialized with serde and handed to JS as a plain object,
//!   then the success handler is attached to it.

use crate::core::config::AppConfig;
use crate::features::payment::state::{CheckoutOptions, CreateOrderResponse, success_message};
use anyhow::{Context, anyhow, bail};
use gloo::utils::{document, window};
use gloo_net::http::Request;
use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlScriptElement;

/// Ask the backend for a gateway order id.
pub(crate) async fn create_order(base_url: &str, config: &AppConfig) -> anyhow::Result<String> {
    let response = Request::post(&format!("{base_url}{}", config.create_order_path))
        .send()
        .await
        .context("order request failed")?;
    if !response.ok() {
        bail!("order endpoint returned {}", response.status());
    }
    let order: CreateOrderResponse = response.json().await.context("malformed order response")?;
    Ok(order.order_id)
}

/// Inject the widget script unless a tag for it already exists.
pub(crate) fn ensure_script(src: &str) -> anyhow::Result<()> {
    let doc = document();
    let selector = format!("script[src=\"{src}\"]");
    if doc.query_selector(&selector).map_err(js_error)?.is_some() {
        return Ok(());
    }
    let script: HtmlScriptElement = doc
        .create_element("script")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not a script"))?;
    script.set_src(src);
    script.set_async(true);
    let head = doc.head().ok_or_else(|| anyhow!("document has no head"))?;
    head.append_child(&script).map_err(js_error)?;
    Ok(())
}

/// Construct the widget for `options` and open it.
///
/// The success handler alerts `"{success_label}: <payment id>"`.
pub(crate) fn open_checkout(options: &CheckoutOptions, success_label: String) -> anyhow::Result<()> {
    let payload = serde_json::to_string(options)?;
    let options = JSON::parse(&payload).map_err(js_error)?;

    let handler = Closure::once_into_js(move |response: JsValue| {
        let payment_id = Reflect::get(&response, &JsValue::from_str("razorpay_payment_id"))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default();
        gloo::dialogs::alert(&success_message(&success_label, &payment_id));
    });
    Reflect::set(&options, &JsValue::from_str("handler"), &handler).map_err(js_error)?;

    let constructor: Function = Reflect::get(&window(), &JsValue::from_str("Razorpay"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("checkout widget is not loaded"))?;
    let widget = Reflect::construct(&constructor, &Array::of1(&options)).map_err(js_error)?;
    let open: Function = Reflect::get(&widget, &JsValue::from_str("open"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("checkout widget has no open()"))?;
    open.call0(&widget).map_err(js_error)?;
    Ok(())
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{err:?}")
}
