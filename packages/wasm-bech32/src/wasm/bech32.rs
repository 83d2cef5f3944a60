use crate::codec::{Bech32Codec, Decoded};
use crate::variant::Variant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
pub struct Bech32Namespace;

#[wasm_bindgen]
impl Bech32Namespace {
    /// Encode bytes as a lowercase bech32 string
    ///
    /// # Arguments
    /// * `prefix` - Human readable prefix, must not contain '1'
    /// * `payload` - Bytes to encode
    /// * `variant` - Optional checksum variant: "bech32" (default) or "bech32m"
    #[wasm_bindgen]
    pub fn encode(
        prefix: &str,
        payload: &[u8],
        variant: Option<String>,
    ) -> std::result::Result<String, JsValue> {
        let codec = build_codec(Some(prefix), variant.as_deref())
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(codec.encode(payload))
    }

    /// Decode a bech32 string into `{ prefix: string, payload: Uint8Array }`
    ///
    /// # Arguments
    /// * `text` - The encoded string, all lowercase or all uppercase
    /// * `prefix` - Optional expected prefix; any prefix is accepted when omitted
    /// * `variant` - Optional checksum variant: "bech32" (default) or "bech32m"
    #[wasm_bindgen]
    pub fn decode(
        text: &str,
        prefix: Option<String>,
        variant: Option<String>,
    ) -> std::result::Result<JsValue, JsValue> {
        let codec = build_codec(prefix.as_deref(), variant.as_deref())
            .map_err(|e| JsValue::from_str(&e))?;
        let decoded = codec
            .decode(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        decoded_to_js(&decoded)
    }

    /// Returns false for any string that does not decode. Only a bad prefix or variant
    /// argument throws.
    #[wasm_bindgen]
    pub fn is_valid(
        text: &str,
        prefix: Option<String>,
        variant: Option<String>,
    ) -> std::result::Result<bool, JsValue> {
        let codec = build_codec(prefix.as_deref(), variant.as_deref())
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(codec.is_valid(text))
    }
}

pub(crate) fn build_codec(
    prefix: Option<&str>,
    variant: Option<&str>,
) -> std::result::Result<Bech32Codec, String> {
    let variant = Variant::from_optional_str(variant)?;
    Bech32Codec::new(prefix, variant).map_err(|e| e.to_string())
}

fn decoded_to_js(decoded: &Decoded) -> std::result::Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(
        &obj,
        &JsValue::from_str("prefix"),
        &JsValue::from_str(&decoded.prefix),
    )?;
    js_sys::Reflect::set(
        &obj,
        &JsValue::from_str("payload"),
        &js_sys::Uint8Array::from(decoded.payload.as_slice()).into(),
    )?;
    Ok(obj.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_codec() {
        let codec = build_codec(Some("A"), None).unwrap();
        assert_eq!(codec.prefix(), Some("a"));
        assert_eq!(codec.variant(), Variant::Bech32);

        let codec = build_codec(None, Some("bech32m")).unwrap();
        assert_eq!(codec.prefix(), None);
        assert_eq!(codec.variant(), Variant::Bech32m);
    }

    #[test]
    fn test_build_codec_errors() {
        assert!(build_codec(Some("bc1"), None)
            .unwrap_err()
            .contains("separator"));
        assert!(build_codec(Some("bc"), Some("base58"))
            .unwrap_err()
            .contains("Unknown variant"));
    }
}
