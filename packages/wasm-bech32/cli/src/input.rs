use anyhow::{Context, Result};
use base64::Engine;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Decode input bytes, attempting to interpret as hex, then base64, then raw bytes
pub fn decode_input(raw_bytes: &[u8]) -> Vec<u8> {
    // Try to interpret as text first (for base64/hex encoded input)
    if let Ok(text) = std::str::from_utf8(raw_bytes) {
        let trimmed = text.trim();

        // Try hex first (more common format)
        if let Ok(decoded) = hex::decode(trimmed) {
            return decoded;
        }

        if let Ok(decoded) = base64::engine::general_purpose::STANDARD.decode(trimmed) {
            return decoded;
        }
    }

    raw_bytes.to_vec()
}

/// Read bytes from a file path or stdin (if path is "-")
pub fn read_input_bytes(path: &Path) -> Result<Vec<u8>> {
    if path.to_str() == Some("-") {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read(path).with_context(|| format!("Failed to read payload file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_input_hex() {
        assert_eq!(decode_input(b"00ff10\n"), vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn test_decode_input_base64() {
        // 'Q' is not a hex digit
        assert_eq!(decode_input(b"AQID"), vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_input_raw_fallback() {
        assert_eq!(decode_input(b"hello world!"), b"hello world!".to_vec());
        assert_eq!(decode_input(&[0xff, 0xfe]), vec![0xff, 0xfe]);
    }
}
