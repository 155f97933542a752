//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::auth::{
    AuthServiceError, format_session_token, generate_session_secret,
    models::{Identity, IssuedSession, NewUser, SessionUuid, UserRecord},
    parse_session_token,
    repository::PgAuthRepository,
    session_verifier, verifiers_match,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Register a user.
    pub async fn create_user(&self, user: NewUser) -> Result<UserRecord, AuthServiceError> {
        let email = user.email.trim().to_string();

        if email.is_empty() || !email.contains('@') {
            return Err(AuthServiceError::InvalidData);
        }

        let created = self.repository.create_user(NewUser { email, ..user }).await?;

        info!(user = %created.uuid, role = %created.role, "created user");

        Ok(created)
    }

    /// Issue a new session for the user with the given email.
    ///
    /// The raw token in the result is not stored anywhere and cannot be recovered later.
    pub async fn issue_session(&self, email: &str) -> Result<IssuedSession, AuthServiceError> {
        let user = self.repository.find_user_by_email(email.trim()).await?;

        let session_uuid = SessionUuid::new();
        let secret = generate_session_secret();
        let token = format_session_token(session_uuid, &secret);
        let secret_hash = session_verifier(session_uuid, &secret);

        let session = self
            .repository
            .create_session(session_uuid, user.uuid, &secret_hash)
            .await?;

        info!(user = %user.uuid, session = %session.uuid, "issued session");

        Ok(IssuedSession { token, session })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, token: &str) -> Result<Identity, AuthServiceError> {
        let parsed = parse_session_token(token)?;

        let Some(active) = self
            .repository
            .find_active_session(parsed.session_uuid)
            .await?
        else {
            return Err(AuthServiceError::NotFound);
        };

        let presented = session_verifier(parsed.session_uuid, &parsed.secret);

        if !verifiers_match(&active.secret_hash, &presented) {
            warn!(session = %parsed.session_uuid, "session secret mismatch");

            return Err(AuthServiceError::NotFound);
        }

        if let Err(error) = self.repository.touch_session(parsed.session_uuid).await {
            warn!("failed to record session use: {error}");
        }

        Ok(active.identity)
    }

    async fn sign_out(&self, session: SessionUuid) -> Result<(), AuthServiceError> {
        let rows_affected = self.repository.revoke_session(session).await?;

        if rows_affected == 0 {
            return Err(AuthServiceError::NotFound);
        }

        info!(session = %session, "signed out");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the identity behind a live session.
    async fn authenticate_bearer(&self, token: &str) -> Result<Identity, AuthServiceError>;

    /// Revoke a session so its token stops authenticating.
    async fn sign_out(&self, session: SessionUuid) -> Result<(), AuthServiceError>;
}
