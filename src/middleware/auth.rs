use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

const BEARER: &str = "Bearer";

/// ✅ **JWT Claims** carried by every bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Identity of the caller, attached to the request as [`AuthUser`].
    pub user: serde_json::Value,
    /// Issued-at timestamp (UNIX TIME)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
    /// Expiration timestamp (UNIX TIME)
    pub exp: usize,
}

/// ✅ **Authenticated caller**: the decoded `user` claim of a verified request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser(pub serde_json::Value);

/// ❌ **Gate rejections**, both answered with `401 Unauthorized`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Unauthorized - No valid token provided")]
    MissingToken,

    #[error("Unauthorized - Invalid token")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}

/// ✅ **Signing material** for bearer tokens, built once from the configured secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    /// ✅ **HS256 keys and validation** from a shared secret
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// ✅ **Sign a token** for `user` that expires after `ttl`.
    pub fn issue(&self, user: serde_json::Value, ttl: Duration) -> jsonwebtoken::errors::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            user,
            iat: Some(now.timestamp() as usize),
            exp: (now + ttl).timestamp() as usize,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// ✅ **Verify a token**
    /// - ✅ Checks signature and expiry
    /// - ❌ Rejects tokens whose `user` claim is missing or `null`
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                error!("Token verification failed: {}", e);
                AuthError::InvalidToken
            })?;

        if claims.user.is_null() {
            error!("Token verification failed: `user` claim is null");
            return Err(AuthError::InvalidToken);
        }
        Ok(claims)
    }
}

/// ✅ **Extract the bearer token** from `Authorization: Bearer <token>`
/// - ❌ Missing header, non-UTF-8 value or another scheme
/// - ❌ `Bearer` glued to the token with no whitespace in between
/// - ❌ Nothing but whitespace after `Bearer`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let rest = value.strip_prefix(BEARER).ok_or(AuthError::MissingToken)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return Err(AuthError::MissingToken);
    }
    let token = rest.trim();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// ✅ **JWT Middleware** (Handles Token Authentication)
/// - ✅ Attaches the decoded `user` claim as [`AuthUser`]
/// - ❌ Answers `401` before any resolver or store query runs
pub async fn jwt_middleware(
    State(keys): State<Arc<JwtKeys>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    // Step 1: Extract the bearer token
    let token = bearer_token(req.headers()).inspect_err(|_| {
        error!("Missing or malformed Authorization header");
    })?;

    // Step 2: Verify signature, expiry and `user` claim
    let claims = keys.verify(token)?;
    info!("Decoded token: {:?}", claims);

    // Step 3: Attach the identity and proceed
    req.extensions_mut().insert(AuthUser(claims.user));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_is_missing_token() {
        assert_eq!(bearer_token(&HeaderMap::new()), Err(AuthError::MissingToken));
    }

    #[test]
    fn other_schemes_are_missing_token() {
        assert_eq!(
            bearer_token(&headers_with("Basic dXNlcjpwYXNz")),
            Err(AuthError::MissingToken)
        );
        assert_eq!(bearer_token(&headers_with("bearer abc")), Err(AuthError::MissingToken));
    }

    #[test]
    fn empty_bearer_is_missing_token() {
        assert_eq!(bearer_token(&headers_with("Bearer")), Err(AuthError::MissingToken));
        assert_eq!(bearer_token(&headers_with("Bearer    ")), Err(AuthError::MissingToken));
    }

    #[test]
    fn scheme_glued_to_token_is_missing_token() {
        assert_eq!(bearer_token(&headers_with("Bearerabc.def.ghi")), Err(AuthError::MissingToken));
    }

    #[test]
    fn token_is_trimmed() {
        assert_eq!(bearer_token(&headers_with("Bearer   abc.def.ghi  ")), Ok("abc.def.ghi"));
    }

    #[test]
    fn issued_token_verifies() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let token = keys.issue(json!({ "name": "ada" }), Duration::hours(1)).unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.user, json!({ "name": "ada" }));
        assert!(claims.iat.is_some());
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let issuer = JwtKeys::from_secret(b"one-secret");
        let verifier = JwtKeys::from_secret(b"another-secret");
        let token = issuer.issue(json!("ada"), Duration::hours(1)).unwrap();

        assert_eq!(verifier.verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn expired_token_is_invalid() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let token = keys.issue(json!("ada"), Duration::hours(-2)).unwrap();

        assert_eq!(keys.verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn tampered_payload_is_invalid() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let forged = keys.issue(json!("root"), Duration::hours(1)).unwrap();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let token = keys.issue(json!("ada"), Duration::hours(1)).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = forged_payload;

        assert_eq!(keys.verify(&parts.join(".")).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn token_without_user_claim_is_invalid() {
        #[derive(Serialize)]
        struct Anonymous {
            exp: usize,
        }
        let exp = (Utc::now() + Duration::hours(1)).timestamp() as usize;
        let token = encode(
            &Header::default(),
            &Anonymous { exp },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let keys = JwtKeys::from_secret(b"test-secret");
        assert_eq!(keys.verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn null_user_claim_is_invalid() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let token = keys.issue(serde_json::Value::Null, Duration::hours(1)).unwrap();

        assert_eq!(keys.verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn garbage_is_invalid() {
        let keys = JwtKeys::from_secret(b"test-secret");
        assert_eq!(keys.verify("not-a-jwt").unwrap_err(), AuthError::InvalidToken);
    }
}
