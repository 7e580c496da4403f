//! Chart output buffer and transport encoding
//!
//! Rendered charts travel as an opaque UTF-8 byte buffer. Helpers
//! re-encode a buffer or raw text to base64 for transport.

use base64::{engine::general_purpose, Engine as _};
use std::borrow::Cow;

/// Rendered chart text as an opaque byte buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBuffer(Vec<u8>);

impl ChartBuffer {
    /// Wrap rendered text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into().into_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The rendered text
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Base64 of the raw buffer for transport
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.0)
    }
}

/// Encode raw text to base64 for transport
pub fn text_to_base64(text: &str) -> String {
    general_purpose::STANDARD.encode(text.as_bytes())
}
