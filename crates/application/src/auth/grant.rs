//! Identity service response classification.
//!
//! The login endpoint answers `{access_token, role}` while signup nests the
//! role under `user`. Both are folded into one [`AuthGrant`] here so nothing
//! past this module sees two shapes.

use quizgen_domain::{AuthFailure, AuthGrant};
use serde::Deserialize;

use crate::ports::IdentityResponse;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireGrant {
    Nested { access_token: String, user: WireUser },
    Flat { access_token: String, role: String },
}

#[derive(Debug, Deserialize)]
struct WireUser {
    role: String,
}

impl From<WireGrant> for AuthGrant {
    fn from(wire: WireGrant) -> Self {
        match wire {
            WireGrant::Nested { access_token, user } => Self {
                access_token,
                role: user.role,
            },
            WireGrant::Flat { access_token, role } => Self { access_token, role },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Classifies a raw identity service response.
///
/// # Errors
///
/// - `Endpoint` for 404, whatever the body says
/// - `Credentials` for any other non-2xx status
/// - `Parse` for a 2xx body that is not a grant
pub fn classify(response: &IdentityResponse) -> Result<AuthGrant, AuthFailure> {
    if response.status == 404 {
        return Err(AuthFailure::Endpoint);
    }

    if !response.is_success() {
        return Err(AuthFailure::credentials(error_detail(&response.body)));
    }

    serde_json::from_slice::<WireGrant>(&response.body)
        .map(AuthGrant::from)
        .map_err(|e| AuthFailure::Parse {
            message: e.to_string(),
        })
}

/// Extracts the server's `detail` message from an error body, if there is one.
fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quizgen_domain::DEFAULT_CREDENTIALS_MESSAGE;

    fn response(status: u16, body: &str) -> IdentityResponse {
        IdentityResponse::new(status, body)
    }

    #[test]
    fn flat_login_grant() {
        let grant = classify(&response(200, r#"{"access_token":"t1","role":"admin"}"#)).unwrap();
        assert_eq!(
            grant,
            AuthGrant {
                access_token: "t1".to_string(),
                role: "admin".to_string()
            }
        );
    }

    #[test]
    fn nested_signup_grant() {
        let body = r#"{"access_token":"t2","token_type":"bearer","user":{"username":"cj","role":"free_trial"}}"#;
        let grant = classify(&response(200, body)).unwrap();
        assert_eq!(grant.access_token, "t2");
        assert_eq!(grant.role, "free_trial");
    }

    #[test]
    fn not_found_ignores_body() {
        assert_eq!(
            classify(&response(404, r#"{"detail":"Not Found"}"#)),
            Err(AuthFailure::Endpoint)
        );
        assert_eq!(classify(&response(404, "<html>")), Err(AuthFailure::Endpoint));
    }

    #[test]
    fn rejection_surfaces_detail() {
        assert_eq!(
            classify(&response(401, r#"{"detail":"Incorrect Secret"}"#)),
            Err(AuthFailure::Credentials {
                message: "Incorrect Secret".to_string()
            })
        );
        assert_eq!(
            classify(&response(409, r#"{"detail":"User Already Exists"}"#)),
            Err(AuthFailure::Credentials {
                message: "User Already Exists".to_string()
            })
        );
    }

    #[test]
    fn rejection_without_detail_uses_default() {
        let default = Err(AuthFailure::Credentials {
            message: DEFAULT_CREDENTIALS_MESSAGE.to_string(),
        });
        assert_eq!(classify(&response(401, "{}")), default);
        assert_eq!(classify(&response(500, "Internal Server Error")), default);
        assert_eq!(classify(&response(403, r#"{"detail":""}"#)), default);
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let result = classify(&response(422, r#"{"detail":[{"msg":"field required"}]}"#));
        assert_eq!(
            result,
            Err(AuthFailure::Credentials {
                message: r#"[{"msg":"field required"}]"#.to_string()
            })
        );
    }

    #[test]
    fn malformed_success_body_is_parse_error() {
        assert!(matches!(
            classify(&response(200, "not json")),
            Err(AuthFailure::Parse { .. })
        ));
        assert!(matches!(
            classify(&response(200, r#"{"role":"admin"}"#)),
            Err(AuthFailure::Parse { .. })
        ));
    }
}
