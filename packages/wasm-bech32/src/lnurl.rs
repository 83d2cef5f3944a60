//! LNURL (LUD-01): a wallet or service URL carried as a bech32 string with prefix `lnurl`.
//!
//! Spec: https://github.com/lnurl/luds/blob/luds/01.md
//!
//! The payload is the UTF-8 bytes of the URL, checksummed with the classic Bech32 constant.
//! LNURLs are routinely longer than the 90 characters BIP-173 allows for addresses, which is
//! why the codec enforces no length limit.

use crate::codec::Bech32Codec;
use crate::error::LnurlError;
use std::fmt;
use std::str::FromStr;

pub const LNURL_PREFIX: &str = "lnurl";

fn codec() -> Bech32Codec {
    Bech32Codec::bech32(LNURL_PREFIX).expect("lnurl is a valid prefix")
}

/// Encode a URL as a lowercase LNURL.
pub fn encode(url: &str) -> String {
    codec().encode(url.as_bytes())
}

/// Decode an LNURL (either case) back to the URL it carries.
pub fn decode(lnurl: &str) -> Result<String, LnurlError> {
    let decoded = codec().decode(lnurl)?;
    String::from_utf8(decoded.payload).map_err(|_| LnurlError::InvalidUtf8)
}

pub fn is_lnurl(text: &str) -> bool {
    decode(text).is_ok()
}

fn is_http_url(s: &str) -> bool {
    s.get(..4).is_some_and(|scheme| scheme.eq_ignore_ascii_case("http"))
}

/// A validated LNURL, held in lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lnurl(String);

impl Lnurl {
    pub fn from_url(url: &str) -> Result<Self, LnurlError> {
        if !is_http_url(url) {
            return Err(LnurlError::NotAUrl(url.to_string()));
        }
        Ok(Lnurl(encode(url)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase form, which QR codes can pack in alphanumeric mode.
    pub fn to_qr(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn url(&self) -> Result<String, LnurlError> {
        decode(&self.0)
    }
}

impl FromStr for Lnurl {
    type Err = LnurlError;

    /// Accepts either an http(s) URL, which is encoded, or an existing LNURL, which is
    /// validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_http_url(s) {
            return Lnurl::from_url(s);
        }
        let is_lnurl_form = s
            .get(..LNURL_PREFIX.len() + 1)
            .is_some_and(|head| head.eq_ignore_ascii_case("lnurl1"));
        if !is_lnurl_form {
            return Err(LnurlError::NotAUrl(s.to_string()));
        }
        decode(s)?;
        Ok(Lnurl(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for Lnurl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::variant::Variant;

    // Example from LUD-01
    const LUD01_URL: &str =
        "https://service.com/api?q=3fc3645b439ce8e7f2553a69e5267081d96dcd340693afabe04be7b0ccd178df";
    const LUD01_LNURL: &str = "LNURL1DP68GURN8GHJ7UM9WFMXJCM99E3K7MF0V9CXJ0M385EKVCENXC6R2C35XVUKXEFCV5MKVV34X5EKZD3EV56NYD3HXQURZEPEXEJXXEPNXSCRVWFNV9NXZCN9XQ6XYEFHVGCXXCMYXYMNSERXFQ5FNS";

    #[test]
    fn test_lud01_example() {
        assert_eq!(decode(LUD01_LNURL).unwrap(), LUD01_URL);
        assert_eq!(encode(LUD01_URL), LUD01_LNURL.to_lowercase());
        assert!(is_lnurl(LUD01_LNURL));
    }

    #[test]
    fn test_decode_wallet_lnurl() {
        let lnurl = "LNURL1DP68GURN8GHJ7AMPD3KX2AR0VEEKZAR0WD5XJTNRDAKJ7TNHV4KXCTTTDEHHWM30D3H82UNVWQHKYUNP0FJKUARJDA6KYMR9XSUQR0HD5H";
        assert_eq!(
            decode(lnurl).unwrap(),
            "https://walletofsatoshi.com/.well-known/lnurlp/brazentrouble48"
        );
    }

    #[test]
    fn test_is_lnurl_rejects_other_strings() {
        assert!(!is_lnurl("a12uel5l"));
        assert!(!is_lnurl("https://example.com"));
        assert!(!is_lnurl(""));

        // right prefix, wrong checksum constant
        let bech32m = Bech32Codec::bech32m(LNURL_PREFIX)
            .unwrap()
            .encode(b"https://example.com");
        assert!(!is_lnurl(&bech32m));
    }

    #[test]
    fn test_decode_rejects_non_utf8_payload() {
        let code = Bech32Codec::new(Some(LNURL_PREFIX), Variant::Bech32)
            .unwrap()
            .encode(&[0xff, 0xfe]);
        assert_eq!(decode(&code), Err(LnurlError::InvalidUtf8));
    }

    #[test]
    fn test_decode_surfaces_codec_errors() {
        assert!(matches!(
            decode("a12uel5l"),
            Err(LnurlError::Decode(DecodeError::PrefixMismatch { .. }))
        ));
    }

    #[test]
    fn test_lnurl_type() {
        let from_url: Lnurl = LUD01_URL.parse().unwrap();
        let from_lnurl: Lnurl = LUD01_LNURL.parse().unwrap();
        assert_eq!(from_url, from_lnurl);
        assert_eq!(from_url.to_string(), LUD01_LNURL.to_lowercase());
        assert_eq!(from_url.to_qr(), LUD01_LNURL);
        assert_eq!(from_lnurl.url().unwrap(), LUD01_URL);

        assert!(matches!(
            "ftp://example.com".parse::<Lnurl>(),
            Err(LnurlError::NotAUrl(_))
        ));
        assert!(matches!(
            Lnurl::from_url("example.com"),
            Err(LnurlError::NotAUrl(_))
        ));
        assert!(matches!(
            "lnurl1qqqqqqqq".parse::<Lnurl>(),
            Err(LnurlError::Decode(_))
        ));
    }
}
