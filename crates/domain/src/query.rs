use crate::DomainError;

/// A lookup request. The datagram payload is the hostname itself: no header,
/// no length prefix, no transaction identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    hostname: String,
}

impl Query {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.trim().to_string(),
        }
    }

    /// Decodes a query datagram. Surrounding whitespace is not part of the
    /// hostname.
    pub fn parse(payload: &[u8]) -> Result<Self, DomainError> {
        let text = std::str::from_utf8(payload)
            .map_err(|e| DomainError::InvalidQuery(format!("payload is not UTF-8: {}", e)))?;
        Ok(Self::new(text))
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.hostname.as_bytes()
    }
}
