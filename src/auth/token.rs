//! Bearer token issuing and verification.

use std::fmt::{self, Debug, Formatter};

use chrono::{DateTime, TimeDelta, Utc};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::Error};

use serde::{Deserialize, Serialize};

/// The only algorithm tokens are signed and verified with.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by a bearer token.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Claims {
    /// The database ID of the user.
    pub sub: i64,
    /// When the token was issued, in unix seconds.
    pub iat: i64,
    /// When the token expires, in unix seconds.
    pub exp: i64,
}

/// Keys for issuing and verifying bearer tokens.
///
/// Verification is a pure function of the secret and the token; nothing
/// about issued tokens is remembered.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
}

impl TokenKeys {
    /// Creates a new set of keys from a shared secret.
    pub fn new(secret: &[u8], ttl: TimeDelta) -> TokenKeys {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        TokenKeys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Issues a token for a user.
    pub fn issue(&self, user_id: i64) -> Result<String, Error> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token for a user as if it were `now`.
    pub fn issue_at(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, Error> {
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &self.encoding)
    }

    /// Verifies a token, returning its claims.
    ///
    /// Fails if the signature does not match, the token has expired, or the
    /// token was signed with anything other than [`ALGORITHM`].
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
}

impl Debug for TokenKeys {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &[u8] = b"test secret";

    fn keys() -> TokenKeys {
        TokenKeys::new(SECRET, TimeDelta::hours(72))
    }

    #[test]
    pub fn test_issue_and_verify() {
        let keys = keys();

        let token = keys.issue(42).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp - claims.iat, 72 * 60 * 60);
    }

    #[test]
    pub fn test_expired_token() {
        let keys = keys();

        // issued 73 hours ago, expired an hour ago
        let token = keys
            .issue_at(42, Utc::now() - TimeDelta::hours(73))
            .unwrap();
        let err = keys.verify(&token).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));

        // issued 71 hours ago, still valid for an hour
        let token = keys
            .issue_at(42, Utc::now() - TimeDelta::hours(71))
            .unwrap();
        assert_eq!(keys.verify(&token).unwrap().sub, 42);
    }

    #[test]
    pub fn test_wrong_secret() {
        let token = keys().issue(42).unwrap();
        let other = TokenKeys::new(b"another secret", TimeDelta::hours(72));

        let err = other.verify(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    pub fn test_other_algorithm_rejected() {
        let now = Utc::now();
        let claims = Claims {
            sub: 42,
            iat: now.timestamp(),
            exp: (now + TimeDelta::hours(1)).timestamp(),
        };

        // same secret, different HMAC
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let err = keys().verify(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidAlgorithm));
    }

    #[test]
    pub fn test_garbage_rejected() {
        assert!(keys().verify("not.a.token").is_err());
        assert!(keys().verify("").is_err());
    }
}
