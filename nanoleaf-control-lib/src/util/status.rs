use reqwest::StatusCode;

use crate::util::error::NanoleafError;

/// How the client treats a status code returned by the device.
///
/// The HTTP status is the only signal the device gives; there is no result
/// code in the body like other vendors use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Success,
    InvalidToken,
    Unauthorized,
    InvalidValue,
    /// Anything not in the table. Surfaced as [`NanoleafError::Api`].
    Unmapped,
}

/// Which kind of endpoint produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// The token-less pairing endpoint (`POST /api/v1/new`).
    Pairing,
    /// Every endpoint below `/api/v1/<token>/`.
    Token,
}

// Checked in order, first match wins.
const PAIRING_STATUS_TABLE: &[(u16, StatusClass)] = &[
    (401, StatusClass::InvalidToken),
    (403, StatusClass::Unauthorized),
    (422, StatusClass::InvalidValue),
];

// A 403 below the token path means the token itself is refused.
const TOKEN_STATUS_TABLE: &[(u16, StatusClass)] = &[
    (401, StatusClass::InvalidToken),
    (403, StatusClass::InvalidToken),
    (422, StatusClass::InvalidValue),
];

/// Map a status code to its class for the given endpoint kind.
pub fn classify(status: StatusCode, access: Access) -> StatusClass {
    if status.is_success() {
        return StatusClass::Success;
    }
    let table = match access {
        Access::Pairing => PAIRING_STATUS_TABLE,
        Access::Token => TOKEN_STATUS_TABLE,
    };
    table
        .iter()
        .find(|(code, _)| *code == status.as_u16())
        .map(|(_, class)| *class)
        .unwrap_or(StatusClass::Unmapped)
}

/// Turn a non-success response into the matching error, or `None` on success.
pub fn status_error(status: StatusCode, text: &str, access: Access) -> Option<NanoleafError> {
    match classify(status, access) {
        StatusClass::Success => None,
        StatusClass::InvalidToken => Some(NanoleafError::InvalidToken),
        StatusClass::Unauthorized => Some(NanoleafError::Unauthorized),
        StatusClass::InvalidValue => Some(NanoleafError::InvalidValue(if text.is_empty() {
            "rejected by device".to_string()
        } else {
            text.to_string()
        })),
        StatusClass::Unmapped => Some(NanoleafError::Api {
            status: status.as_u16(),
            text: text.to_string(),
        }),
    }
}
