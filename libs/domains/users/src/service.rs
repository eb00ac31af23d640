use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum_helpers::JwtAuth;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Role, User, UserProfile};
use crate::repository::UserRepository;

/// Registration, login and token issuing.
#[derive(Clone)]
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repository: R, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            jwt,
        }
    }

    /// Token verifier shared with the auth middleware.
    pub fn jwt(&self) -> &JwtAuth {
        &self.jwt
    }

    /// Create an account and log it in.
    pub async fn register(&self, input: RegisterRequest) -> UserResult<AuthResponse> {
        let password = input.password.clone();
        let user = self
            .create_user(input.username, input.email, &password, Role::User)
            .await?;

        self.login(LoginRequest {
            username: user.username,
            password,
        })
        .await
    }

    /// Exchange credentials for a token.
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    pub async fn login(&self, input: LoginRequest) -> UserResult<AuthResponse> {
        let user = self
            .repository
            .find_by_username(&input.username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(&input.password, &user.password_hash)? {
            tracing::debug!(username = %input.username, "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .jwt
            .create_access_token(
                &user.id.to_string(),
                &user.email,
                &user.username,
                &[user.role.to_string()],
            )
            .map_err(|e| UserError::Internal(format!("Token signing failed: {}", e)))?;

        Ok(AuthResponse {
            token,
            user_id: user.id,
            username: user.username,
            email: user.email,
        })
    }

    /// Profile of the authenticated caller.
    pub async fn me(&self, username: &str) -> UserResult<UserProfile> {
        self.repository
            .find_by_username(username)
            .await?
            .map(UserProfile::from)
            .ok_or(UserError::NotFound)
    }

    /// Hash the password and store a new user. Also used by startup seeding.
    pub async fn create_user(
        &self,
        username: String,
        email: String,
        password: &str,
        role: Role,
    ) -> UserResult<User> {
        let password_hash = self.hash_password(password)?;
        self.repository
            .create(User::new(username, email, password_hash, role))
            .await
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
