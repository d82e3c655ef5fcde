use thiserror::Error;

/// Errors surfaced by the Nanoleaf client and the digital twin.
///
/// None of these are retried internally. Callers match on the variant to tell
/// "device unreachable" ([`NanoleafError::Unavailable`]) apart from "device
/// refused" ([`NanoleafError::Unauthorized`], [`NanoleafError::InvalidToken`])
/// and "bad input" ([`NanoleafError::InvalidValue`]).
#[derive(Debug, Error)]
pub enum NanoleafError {
    /// The device refused to hand out a token because it is not in pairing mode.
    ///
    /// Hold the power button for 5-7 seconds until the LEDs flash, then retry.
    #[error("Device is not accepting new tokens, put it in pairing mode first")]
    Unauthorized,

    /// The stored token is missing, expired or was revoked.
    #[error("Invalid or missing auth token")]
    InvalidToken,

    /// A value was out of range, either caught locally before sending or
    /// rejected by the device with HTTP 422.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// The request never produced a response (connection refused, timeout, reset).
    #[error("Device unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// Any other non-success status, carried through unchanged.
    #[error("Device responded with status {status}: {text}")]
    Api { status: u16, text: String },

    /// The response body did not have the expected shape.
    #[error("Failed to decode device response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The digital twin does not know this panel.
    #[error("Unknown panel id: {0}")]
    UnknownPanel(u32),

    /// The device reported no panels, so per-panel control is impossible.
    #[error("Panel layout not found; per-panel control requires a panel device")]
    NoPanelLayout,
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, NanoleafError>;

impl NanoleafError {
    /// The HTTP status behind this error, if the device answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            NanoleafError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
