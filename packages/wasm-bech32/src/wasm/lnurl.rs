use crate::lnurl;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
pub struct LnurlNamespace;

#[wasm_bindgen]
impl LnurlNamespace {
    /// Encode an http(s) URL as a lowercase LNURL
    #[wasm_bindgen]
    pub fn encode(url: &str) -> std::result::Result<String, JsValue> {
        lnurl::Lnurl::from_url(url)
            .map(|l| l.to_string())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode an LNURL back to its URL
    #[wasm_bindgen]
    pub fn decode(lnurl: &str) -> std::result::Result<String, JsValue> {
        lnurl::decode(lnurl).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn is_lnurl(text: &str) -> bool {
        lnurl::is_lnurl(text)
    }
}
