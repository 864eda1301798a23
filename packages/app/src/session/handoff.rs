//! Web deep-link credential hand-off.
//!
//! After a social login the backend redirects to the app with the credential
//! fields in the query string. The tokens are URL-safe, so a plain key/value
//! split is sufficient.

use waypoint_api::Credential;

/// Parse a credential from a query string (`?accessToken=...&userId=...`).
///
/// Returns `None` unless both `accessToken` and `userId` are present.
pub fn parse_handoff(query: &str) -> Option<Credential> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut access_token = None;
    let mut refresh_token = None;
    let mut user_id = None;
    let mut need_phone_verification = false;

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "accessToken" => access_token = Some(value.to_string()),
            "refreshToken" => refresh_token = Some(value.to_string()),
            "userId" => user_id = Some(value.to_string()),
            "needPhoneVerification" => need_phone_verification = value == "true",
            _ => {}
        }
    }

    Some(Credential {
        access_token: access_token?,
        refresh_token,
        user_id: user_id?,
        need_phone_verification,
    })
}

/// Credential handed off in the current location's query string.
pub fn credential_from_location() -> Option<Credential> {
    #[cfg(feature = "web")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        return parse_handoff(&search);
    }
    #[cfg(not(feature = "web"))]
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_handoff_parses() {
        let credential =
            parse_handoff("?accessToken=a1&refreshToken=r1&userId=42&needPhoneVerification=true")
                .unwrap();
        assert_eq!(credential.access_token, "a1");
        assert_eq!(credential.refresh_token.as_deref(), Some("r1"));
        assert_eq!(credential.user_id, "42");
        assert!(credential.need_phone_verification);
    }

    #[test]
    fn test_minimal_handoff_parses() {
        let credential = parse_handoff("accessToken=a1&userId=42").unwrap();
        assert_eq!(credential.refresh_token, None);
        assert!(!credential.need_phone_verification);
    }

    #[test]
    fn test_missing_token_or_user_is_rejected() {
        assert!(parse_handoff("userId=42").is_none());
        assert!(parse_handoff("accessToken=a1").is_none());
        assert!(parse_handoff("").is_none());
        assert!(parse_handoff("?utm_source=email").is_none());
    }
}
