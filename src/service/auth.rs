//! Account signup and login
//!
//! The engine only deals in resolved user ids; producing them is the job of
//! this module's collaborators. Password hashing sits behind
//! [`CredentialHasher`] (with an Argon2id default) and token issuance
//! behind [`TokenIssuer`], whose wire format is deliberately out of scope.

use crate::core::{Organization, User, UserBuilder, UserRole};
use crate::error::{HelpdeskError, Result};
use crate::service::requests::{LoginRequest, SignupRequest};
use crate::service::responses::{AuthResponse, UserResponse};
use crate::storage::Store;
use argon2::password_hash::{PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use tracing::{info, warn};

/// Hashes and verifies user credentials
pub trait CredentialHasher: Send + Sync {
    /// Hashes a plain password for storage
    fn hash(&self, password: &str) -> Result<String>;

    /// Verifies a plain password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Issues opaque access and refresh tokens for an authenticated user
pub trait TokenIssuer: Send + Sync {
    fn access_token(&self, user: &User) -> Result<String>;
    fn refresh_token(&self, user: &User) -> Result<String>;
}

/// Default [`CredentialHasher`] using Argon2id with library defaults
#[derive(Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HelpdeskError::Hashing(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| HelpdeskError::Hashing(e.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HelpdeskError::Hashing(e.to_string())),
        }
    }
}

/// Signup and login operations
pub struct AuthService<S, H, T> {
    store: S,
    hasher: H,
    tokens: T,
}

impl<S, H, T> AuthService<S, H, T>
where
    S: Store,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(store: S, hasher: H, tokens: T) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Registers a new account
    ///
    /// The organization is looked up by name and created if absent; the new
    /// user becomes an active admin of it. Fails if the email is already
    /// registered.
    pub fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        request.validate()?;
        let password_hash = self.hasher.hash(&request.password)?;
        self.store.transaction(|tx| {
            if tx.users().email_taken(&request.email)? {
                return Err(HelpdeskError::EmailTaken {
                    email: request.email.clone(),
                });
            }
            let organization = match tx.organizations().find_by_name(&request.organization_name)? {
                Some(existing) => existing,
                None => tx
                    .organizations()
                    .save(Organization::new(request.organization_name.clone()))?,
            };
            let user = tx.users().save(
                UserBuilder::new()
                    .email(request.email.clone())
                    .password_hash(password_hash.clone())
                    .full_name(request.full_name.clone())
                    .role(UserRole::Admin)
                    .organization(organization.id)
                    .is_active(true)
                    .build(),
            )?;
            info!(user = %user.id, organization = %organization.id, "account created");
            Ok(AuthResponse {
                access_token: self.tokens.access_token(&user)?,
                refresh_token: self.tokens.refresh_token(&user)?,
                user: UserResponse::for_user(tx, &user)?,
            })
        })
    }

    /// Authenticates an existing account
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller; inactive accounts are rejected after the credential check.
    pub fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.store.transaction(|tx| {
            let user = tx
                .users()
                .find_by_email(&request.email)?
                .ok_or(HelpdeskError::InvalidCredentials)?;
            if !self.hasher.verify(&request.password, &user.password_hash)? {
                warn!(user = %user.id, "login with wrong password");
                return Err(HelpdeskError::InvalidCredentials);
            }
            if !user.is_active {
                return Err(HelpdeskError::AccountInactive);
            }
            Ok(AuthResponse {
                access_token: self.tokens.access_token(&user)?,
                refresh_token: self.tokens.refresh_token(&user)?,
                user: UserResponse::for_user(tx, &user)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::sync::Arc;

    mock! {
        Hasher {}
        impl CredentialHasher for Hasher {
            fn hash(&self, password: &str) -> Result<String>;
            fn verify(&self, password: &str, hash: &str) -> Result<bool>;
        }
    }

    /// Token issuer that returns fixed strings
    struct StaticTokens;

    impl TokenIssuer for StaticTokens {
        fn access_token(&self, _user: &User) -> Result<String> {
            Ok("access".into())
        }

        fn refresh_token(&self, _user: &User) -> Result<String> {
            Ok("refresh".into())
        }
    }

    fn signup_request(email: &str, organization: &str) -> SignupRequest {
        SignupRequest {
            email: email.into(),
            password: "correct horse battery staple".into(),
            full_name: "Pat Doe".into(),
            organization_name: organization.into(),
        }
    }

    fn service_with_mock(
        store: Arc<MemoryStore>,
        hasher: MockHasher,
    ) -> AuthService<Arc<MemoryStore>, MockHasher, StaticTokens> {
        AuthService::new(store, hasher, StaticTokens)
    }

    #[test]
    fn test_signup_creates_admin_in_new_organization() {
        let store = Arc::new(MemoryStore::new());
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .with(eq("correct horse battery staple"))
            .returning(|_| Ok("hashed".into()));
        let service = service_with_mock(Arc::clone(&store), hasher);

        let response = service
            .signup(&signup_request("pat@acme.test", "Acme"))
            .expect("Signup failed");

        assert_eq!(response.user.role, UserRole::Admin);
        assert_eq!(response.user.organization_name, "Acme");
        assert_eq!(response.access_token, "access");
    }

    #[test]
    fn test_signup_joins_existing_organization() {
        let store = Arc::new(MemoryStore::new());
        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|_| Ok("hashed".into()));
        let service = service_with_mock(Arc::clone(&store), hasher);

        let first = service
            .signup(&signup_request("one@acme.test", "Acme"))
            .expect("Signup failed");
        let second = service
            .signup(&signup_request("two@acme.test", "Acme"))
            .expect("Signup failed");

        assert_eq!(
            first.user.organization_name,
            second.user.organization_name
        );
        // No duplicate organization was created
        let org_count = store
            .transaction(|tx| {
                Ok(tx
                    .organizations()
                    .find_by_name("Acme")?
                    .into_iter()
                    .count())
            })
            .expect("Failed to count");
        assert_eq!(org_count, 1);
    }

    #[test]
    fn test_signup_rejects_duplicate_email() {
        let store = Arc::new(MemoryStore::new());
        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|_| Ok("hashed".into()));
        let service = service_with_mock(store, hasher);

        service
            .signup(&signup_request("pat@acme.test", "Acme"))
            .expect("Signup failed");
        let err = service
            .signup(&signup_request("pat@acme.test", "Globex"))
            .unwrap_err();
        assert!(matches!(err, HelpdeskError::EmailTaken { .. }));
    }

    #[test]
    fn test_login_happy_path() {
        let store = Arc::new(MemoryStore::new());
        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|_| Ok("hashed".into()));
        hasher
            .expect_verify()
            .with(eq("correct horse battery staple"), eq("hashed"))
            .returning(|_, _| Ok(true));
        let service = service_with_mock(store, hasher);

        service
            .signup(&signup_request("pat@acme.test", "Acme"))
            .expect("Signup failed");
        let response = service
            .login(&LoginRequest {
                email: "pat@acme.test".into(),
                password: "correct horse battery staple".into(),
            })
            .expect("Login failed");
        assert_eq!(response.user.email, "pat@acme.test");
    }

    #[test]
    fn test_login_unknown_email_and_wrong_password_look_identical() {
        let store = Arc::new(MemoryStore::new());
        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|_| Ok("hashed".into()));
        hasher.expect_verify().returning(|_, _| Ok(false));
        let service = service_with_mock(store, hasher);

        service
            .signup(&signup_request("pat@acme.test", "Acme"))
            .expect("Signup failed");

        let unknown = service
            .login(&LoginRequest {
                email: "ghost@acme.test".into(),
                password: "whatever".into(),
            })
            .unwrap_err();
        let wrong = service
            .login(&LoginRequest {
                email: "pat@acme.test".into(),
                password: "wrong".into(),
            })
            .unwrap_err();
        assert_eq!(unknown.code(), wrong.code());
        assert!(matches!(unknown, HelpdeskError::InvalidCredentials));
    }

    #[test]
    fn test_login_rejects_inactive_account() {
        let store = Arc::new(MemoryStore::new());
        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|_| Ok("hashed".into()));
        hasher.expect_verify().returning(|_, _| Ok(true));
        let service = service_with_mock(Arc::clone(&store), hasher);

        let response = service
            .signup(&signup_request("pat@acme.test", "Acme"))
            .expect("Signup failed");

        store
            .transaction(|tx| {
                let mut user = tx.users().require(response.user.id)?;
                user.is_active = false;
                tx.users().save(user)?;
                Ok(())
            })
            .expect("Failed to deactivate");

        let err = service
            .login(&LoginRequest {
                email: "pat@acme.test".into(),
                password: "correct horse battery staple".into(),
            })
            .unwrap_err();
        assert!(matches!(err, HelpdeskError::AccountInactive));
    }

    #[test]
    fn test_argon2_hasher_roundtrip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("hunter2hunter2").expect("Failed to hash");
        assert!(hasher.verify("hunter2hunter2", &hash).expect("Verify failed"));
        assert!(!hasher.verify("wrong", &hash).expect("Verify failed"));
    }
}
