use crate::settings::ProviderId;

/// Why one key's request did not produce a translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureReason {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// One failed key attempt. Logged and skipped during failover.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("key #{} ({masked_key}) failed: {reason}", .index + 1)]
pub struct AttemptFailure {
    /// Zero-based position of the key in the usable key list.
    pub index: usize,
    pub masked_key: String,
    pub reason: FailureReason,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("no API keys configured for {0}")]
    NoKeys(ProviderId),
    #[error("all {} API keys failed for {provider}", .attempts.len())]
    AllKeysFailed {
        provider: ProviderId,
        attempts: Vec<AttemptFailure>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no API key configured for {0}")]
    NoKeys(ProviderId),
    #[error("failed to fetch {provider} models: {reason}")]
    Request {
        provider: ProviderId,
        reason: FailureReason,
    },
}

/// Shows only the last four characters of a key.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("…{tail}")
}
