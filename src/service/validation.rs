//! Identifier validation. Runs before any id-keyed store access.

use uuid::Uuid;

use crate::error::AppError;

pub const INVALID_IDENTIFIER: &str = "invalid identifier";

/// True iff `raw` parses as a UUID in any form the `uuid` crate accepts
/// (hyphenated, simple, braced, `urn:uuid:`).
pub fn is_valid_id(raw: &str) -> bool {
    Uuid::parse_str(raw).is_ok()
}

/// Parse a path identifier, or fail with `BadRequest("invalid identifier")`.
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(INVALID_IDENTIFIER.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uuid_forms() {
        assert!(is_valid_id("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(is_valid_id("67e5504410b1426f9247bb680e5fe0c8"));
        assert!(is_valid_id("{67e55044-10b1-426f-9247-bb680e5fe0c8}"));
        assert!(is_valid_id("urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(is_valid_id("67E55044-10B1-426F-9247-BB680E5FE0C8"));
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["", "42", "not-a-uuid", "67e55044-10b1-426f-9247-bb680e5fe0c", "67e55044-10b1-426f-9247-bb680e5fe0c8x"] {
            assert!(!is_valid_id(raw), "{raw} should be rejected");
        }
    }

    #[test]
    fn parse_id_reports_bad_request() {
        let err = parse_id("nope").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == INVALID_IDENTIFIER));
    }
}
