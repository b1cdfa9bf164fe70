use serde::Deserialize;

/// Short-lived bearer token minted by the widget token issuer for one
/// document-upload session.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetToken {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

/// Access token from the OAuth client-credentials grant. Authorizes general
/// API calls, not widget sessions.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiToken {
    pub access_token: String,
}

fn default_expires_in() -> u64 {
    900
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn widget_token_fills_in_defaults() {
        let token: WidgetToken =
            serde_json::from_value(json!({ "access_token": "tok" })).unwrap();
        assert_eq!(token.access_token, "tok");
        assert_eq!(token.expires_in, 900);
        assert_eq!(token.token_type, "Bearer");
    }

    #[test]
    fn widget_token_keeps_issuer_values() {
        let token: WidgetToken = serde_json::from_value(json!({
            "access_token": "tok",
            "expires_in": 300,
            "token_type": "JWE",
        }))
        .unwrap();
        assert_eq!(token.expires_in, 300);
        assert_eq!(token.token_type, "JWE");
    }
}
