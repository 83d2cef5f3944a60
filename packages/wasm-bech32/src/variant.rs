//! Checksum variants.
// BIP-173: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
// BIP-350: https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// BIP-173, used for segwit v0 and LNURL
    #[default]
    Bech32,
    /// BIP-350, used for segwit v1+
    Bech32m,
}

impl Variant {
    pub const ALL: &'static [Variant] = &[Variant::Bech32, Variant::Bech32m];

    /// The value a valid string's polymod must reduce to.
    pub const fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc830a3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Bech32 => "bech32",
            Variant::Bech32m => "bech32m",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Variant> {
        match name.to_ascii_lowercase().as_str() {
            "bech32" => Some(Variant::Bech32),
            "bech32m" => Some(Variant::Bech32m),
            _ => None,
        }
    }

    /// Parse an optional name, defaulting to [`Variant::Bech32`] when absent or empty.
    pub fn from_optional_str(s: Option<&str>) -> Result<Self, String> {
        match s {
            None | Some("") => Ok(Variant::default()),
            Some(name) => name.parse(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::from_name(s).ok_or_else(|| {
            format!(
                "Unknown variant: {}. Valid variants are: 'bech32', 'bech32m'",
                s
            )
        })
    }
}
