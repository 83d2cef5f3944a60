mod bech32;
mod lnurl;

pub use bech32::Bech32Namespace;
pub use lnurl::LnurlNamespace;
