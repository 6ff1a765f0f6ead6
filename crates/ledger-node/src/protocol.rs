//! # Line Protocol
//!
//! One JSON `AuthenticatedMessage<LedgerRequest>` per input line, one JSON
//! `LedgerResponse` per output line.

use pl_01_review_ledger::{ErrorPayload, LedgerRequest, LedgerResponse};
use shared_types::{AuthenticatedMessage, MessageError};
use uuid::Uuid;

/// Decode one input line.
///
/// On failure returns the error response to write back. The correlation id
/// is recovered from the raw JSON when present, nil otherwise.
pub fn decode_line(line: &str) -> Result<AuthenticatedMessage<LedgerRequest>, LedgerResponse> {
    let value: serde_json::Value = serde_json::from_str(line).map_err(|e| malformed(Uuid::nil(), &e))?;

    let correlation_id = value
        .get("correlation_id")
        .and_then(serde_json::Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::nil);

    serde_json::from_value(value).map_err(|e| malformed(correlation_id, &e))
}

/// Encode a response as a single line, without the trailing newline.
pub fn encode_response(response: &LedgerResponse) -> serde_json::Result<String> {
    serde_json::to_string(response)
}

fn malformed(correlation_id: Uuid, err: &serde_json::Error) -> LedgerResponse {
    let err = MessageError::MalformedPayload(err.to_string());
    LedgerResponse::err(correlation_id, ErrorPayload::from(&err))
}
