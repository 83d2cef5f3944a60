use core::fmt;

/// Failure to build a [`crate::Bech32Codec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    InvalidPrefix(String),
}

impl std::error::Error for ConstructionError {}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::InvalidPrefix(msg) => write!(f, "Invalid prefix: {}", msg),
        }
    }
}

/// Reasons a string is rejected by [`crate::Bech32Codec::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    MissingSeparator,
    /// Fewer than six characters follow the separator.
    TooShort {
        data_len: usize,
    },
    PrefixMismatch {
        expected: String,
        found: String,
    },
    MixedCase,
    InvalidCharacter(char),
    ChecksumMismatch,
    /// Leftover bits after the last whole byte are non-zero, or there are five or more of them.
    InvalidPadding,
}

impl std::error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MissingSeparator => write!(f, "Missing separator '1'"),
            DecodeError::TooShort { data_len } => write!(
                f,
                "Data part too short: {} characters, checksum needs 6",
                data_len
            ),
            DecodeError::PrefixMismatch { expected, found } => write!(
                f,
                "Prefix mismatch: expected '{}', got '{}'",
                expected, found
            ),
            DecodeError::MixedCase => write!(f, "Mixed case string"),
            DecodeError::InvalidCharacter(c) => write!(f, "Invalid character: {:?}", c),
            DecodeError::ChecksumMismatch => write!(f, "Invalid checksum"),
            DecodeError::InvalidPadding => write!(f, "Invalid padding bits"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitStreamError {
    Underflow { requested: u32, remaining: usize },
}

impl std::error::Error for BitStreamError {}

impl fmt::Display for BitStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitStreamError::Underflow {
                requested,
                remaining,
            } => write!(
                f,
                "Bit stream underflow: requested {} bits, {} remaining",
                requested, remaining
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// A group value above 31 was handed to the encoder.
    InvariantViolation(u8),
}

impl std::error::Error for AlphabetError {}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::InvariantViolation(v) => {
                write!(f, "Value {} does not fit in 5 bits", v)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LnurlError {
    Decode(DecodeError),
    InvalidUtf8,
    NotAUrl(String),
}

impl std::error::Error for LnurlError {}

impl fmt::Display for LnurlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LnurlError::Decode(e) => write!(f, "Invalid LNURL: {}", e),
            LnurlError::InvalidUtf8 => write!(f, "LNURL payload is not valid UTF-8"),
            LnurlError::NotAUrl(s) => write!(f, "Not an http(s) URL or LNURL: {}", s),
        }
    }
}

impl From<DecodeError> for LnurlError {
    fn from(err: DecodeError) -> Self {
        LnurlError::Decode(err)
    }
}
