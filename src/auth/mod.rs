//! Authentication for the record-management surface.
//!
//! Every protected view goes through one gate: the [`require_auth`]
//! middleware, layered once over the protected router. It validates the
//! bearer token, rejects revoked sessions, and injects the acting
//! [`AuthUser`] for handlers to read. Sign-out revokes the presented token;
//! the revocation set is the only mutable session state in the process.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use dashmap::DashMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::DbPool;
use crate::errors::ServiceError;

pub mod user;

/// Claim structure for access tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Token id, the unit of revocation
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// Acting identity extracted from a validated token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub token_id: String,
    pub expires_at: i64,
}

/// Authentication configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: String,
    pub audience: String,
    pub access_token_expiration: Duration,
}

impl AuthConfig {
    pub fn new(
        jwt_secret: String,
        issuer: String,
        audience: String,
        access_token_expiration: Duration,
    ) -> Self {
        Self {
            jwt_secret,
            issuer,
            audience,
            access_token_expiration,
        }
    }
}

#[derive(Debug, Deserialize, validator::Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}

impl From<user::Model> for UserInfo {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            display_name: model.display_name,
        }
    }
}

/// Issues and validates access tokens and owns the revocation set.
pub struct AuthService {
    config: AuthConfig,
    db: Arc<DbPool>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// token id -> expiry (unix seconds); entries are purged once expired
    revoked: DashMap<String, i64>,
}

impl AuthService {
    pub fn new(config: AuthConfig, db: Arc<DbPool>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            db,
            encoding_key,
            decoding_key,
            revoked: DashMap::new(),
        }
    }

    /// Verify credentials and issue an access token.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        let account = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::IsActive.eq(true))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::AuthError("Invalid email or password".to_string()))?;

        let parsed = PasswordHash::new(&account.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("stored hash unreadable: {e}")))?;
        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_err()
        {
            debug!(email, "password verification failed");
            return Err(ServiceError::AuthError(
                "Invalid email or password".to_string(),
            ));
        }

        let (token, expires_in) = self.issue_token(&account)?;
        info!(user_id = %account.id, "user signed in");

        Ok(LoginResponse {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: account.into(),
        })
    }

    fn issue_token(&self, account: &user::Model) -> Result<(String, u64), ServiceError> {
        let now = Utc::now().timestamp();
        let expires_in = self.config.access_token_expiration.as_secs();
        let claims = Claims {
            sub: account.id.to_string(),
            email: account.email.clone(),
            name: account.display_name.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + expires_in as i64,
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::InternalError(format!("token encoding failed: {e}")))?;
        Ok((token, expires_in))
    }

    /// Validate a bearer token and return the acting identity.
    pub fn verify_token(&self, token: &str) -> Result<AuthUser, ServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| ServiceError::AuthError(format!("Invalid token: {e}")))?;

        if self.revoked.contains_key(&data.claims.jti) {
            return Err(ServiceError::AuthError("Token has been revoked".to_string()));
        }

        let user_id = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| ServiceError::AuthError("Invalid subject claim".to_string()))?;

        Ok(AuthUser {
            user_id,
            email: data.claims.email,
            name: data.claims.name,
            token_id: data.claims.jti,
            expires_at: data.claims.exp,
        })
    }

    /// Revoke the given token id. The session stays dead until the token
    /// would have expired anyway, after which the entry is purged.
    pub fn sign_out(&self, token_id: &str, expires_at: i64) {
        self.revoked.insert(token_id.to_string(), expires_at);
        let now = Utc::now().timestamp();
        self.revoked.retain(|_, exp| *exp > now);
        info!(token_id, "session revoked");
    }

    /// Create an account. Used by startup seeding and the test harness.
    #[instrument(skip(self, password))]
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<user::Model, ServiceError> {
        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(format!(
                "user '{email}' already exists"
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ServiceError::InternalError(format!("password hashing failed: {e}")))?
            .to_string();

        let now = Utc::now();
        let account = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            display_name: Set(display_name.to_string()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = account.insert(&*self.db).await?;
        info!(user_id = %model.id, "user account created");
        Ok(model)
    }

    /// Development convenience: make sure at least one account exists so the
    /// login screen is usable on a fresh database.
    pub async fn ensure_dev_user(&self) -> Result<(), ServiceError> {
        let count = user::Entity::find().one(&*self.db).await?;
        if count.is_none() {
            warn!("no user accounts found; creating development account admin@example.com");
            self.create_user("admin@example.com", "admin-password", "管理者")
                .await?;
        }
        Ok(())
    }
}

/// The Session Guard. Applied once to the protected router; every request
/// below it either carries a valid, unrevoked bearer token or is answered
/// with 401 before reaching a handler.
pub async fn require_auth(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match token {
        Some(token) => token,
        None => {
            return ServiceError::AuthError("Missing bearer token".to_string()).into_response()
        }
    };

    match auth.verify_token(token) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}

/// Extractor for the acting identity injected by [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                ServiceError::AuthError("Authentication required".to_string()).into_response()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        let config = AuthConfig::new(
            "unit-test-secret-key-0123456789-0123456789".to_string(),
            "hanbai-api".to_string(),
            "hanbai-clients".to_string(),
            Duration::from_secs(3600),
        );
        // The connection is only touched by DB-backed methods, which these
        // tests avoid.
        let db = Arc::new(DbPool::default());
        AuthService::new(config, db)
    }

    fn test_account() -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            email: "tanaka@example.com".to_string(),
            password_hash: String::new(),
            display_name: "田中一郎".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let service = test_service();
        let account = test_account();

        let (token, _) = service.issue_token(&account).unwrap();
        let user = service.verify_token(&token).unwrap();

        assert_eq!(user.user_id, account.id);
        assert_eq!(user.email, account.email);
        assert_eq!(user.name, account.display_name);
    }

    #[test]
    fn revoked_token_is_rejected() {
        let service = test_service();
        let account = test_account();

        let (token, _) = service.issue_token(&account).unwrap();
        let user = service.verify_token(&token).unwrap();

        service.sign_out(&user.token_id, user.expires_at);
        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = test_service();
        assert!(service.verify_token("not-a-jwt").is_err());
    }

    #[test]
    fn token_from_other_issuer_is_rejected() {
        let service = test_service();
        let other = AuthService::new(
            AuthConfig::new(
                "unit-test-secret-key-0123456789-0123456789".to_string(),
                "someone-else".to_string(),
                "hanbai-clients".to_string(),
                Duration::from_secs(3600),
            ),
            Arc::new(DbPool::default()),
        );

        let (token, _) = other.issue_token(&test_account()).unwrap();
        assert!(service.verify_token(&token).is_err());
    }
}
