//! HTTP status to API status code text.
//!
//! The API reports failures through the HTTP status alone. The meaning of a
//! 400 depends on the call, so lookups go through `(service, function)`
//! first and fall back to the codes every call shares.

/// Text for statuses not known for the call.
pub const UNKNOWN_CODE: &str = "UNKNOWN_CODE";

/// Codes shared by every call.
const COMMON: &[(u16, &str)] = &[
    (200, "OK"),
    (204, "OK"),
    (401, "TOKEN_INVALID"),
    (403, "UNAUTHORIZED"),
    (429, "TOO_MANY_REQUESTS"),
    (500, "SYSTEM_ERROR"),
];

/// Call-specific codes, keyed by `(service, function)`.
const SPECIFIC: &[((&str, &str), &[(u16, &str)])] = &[
    (("dns", "delete"), &[(400, "DNS_RECORD_TO_DELETE_NOT_FOUND")]),
    (("dns", "update"), &[(400, "DNS_RECORD_TO_UPDATE_NOT_FOUND")]),
    (("dns", "create"), &[(400, "VALIDATION_ERROR")]),
    (("domains", "detail"), &[(400, "OBJECT_ID_DOESNT_EXIST")]),
];

fn find(codes: &[(u16, &'static str)], status: u16) -> Option<&'static str> {
    codes
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// Translate `status` for a call of `function` on `service`.
///
/// Never fails: unknown statuses and unknown calls yield [`UNKNOWN_CODE`].
pub fn translate(status: u16, service: &str, function: &str) -> &'static str {
    SPECIFIC
        .iter()
        .find(|((s, f), _)| *s == service && *f == function)
        .and_then(|(_, codes)| find(codes, status))
        .or_else(|| find(COMMON, status))
        .unwrap_or(UNKNOWN_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_specific_codes() {
        assert_eq!(translate(400, "dns", "delete"), "DNS_RECORD_TO_DELETE_NOT_FOUND");
        assert_eq!(translate(400, "dns", "update"), "DNS_RECORD_TO_UPDATE_NOT_FOUND");
        assert_eq!(translate(400, "dns", "create"), "VALIDATION_ERROR");
        assert_eq!(translate(400, "domains", "detail"), "OBJECT_ID_DOESNT_EXIST");
    }

    #[test]
    fn shared_codes_apply_to_every_call() {
        assert_eq!(translate(401, "dns", "list"), "TOKEN_INVALID");
        assert_eq!(translate(401, "dns", "delete"), "TOKEN_INVALID");
        assert_eq!(translate(200, "dns", "create"), "OK");
        assert_eq!(translate(204, "dns", "delete"), "OK");
        assert_eq!(translate(403, "anything", "else"), "UNAUTHORIZED");
        assert_eq!(translate(429, "dns", "list"), "TOO_MANY_REQUESTS");
        assert_eq!(translate(500, "dns", "update"), "SYSTEM_ERROR");
    }

    #[test]
    fn unknown_status_falls_back() {
        assert_eq!(translate(418, "dns", "list"), UNKNOWN_CODE);
        assert_eq!(translate(400, "dns", "list"), UNKNOWN_CODE);
        assert_eq!(translate(404, "nope", "nope"), UNKNOWN_CODE);
    }
}
