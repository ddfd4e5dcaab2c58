//! Driving port for authenticating callers.
//!
//! Inbound adapters decode credentials and call this port without knowing
//! where accounts are stored, so handler tests can swap in a double.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::{AuthenticatedUser, Error, LoginCredentials, Owner, Role};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the identity they belong to.
    ///
    /// Unknown users and wrong passwords both yield
    /// [`crate::domain::ErrorCode::Unauthorized`].
    async fn authenticate(&self, credentials: &LoginCredentials)
    -> Result<AuthenticatedUser, Error>;
}

struct FixtureAccount {
    username: &'static str,
    password_sha256: &'static str,
    role: Role,
}

const FIXTURE_ACCOUNTS: &[FixtureAccount] = &[
    FixtureAccount {
        username: "sarah",
        password_sha256: "6ca13d52ca70c883e0f0bb101e425a89e8624de51db2d2392593af6a84118090",
        role: Role::CardOwner,
    },
    FixtureAccount {
        username: "kumar2",
        password_sha256: "5a4640c17e8e49ebcc72234cce9644dcacfbc2c53e026f59281ca33928bed52d",
        role: Role::CardOwner,
    },
    FixtureAccount {
        username: "hank-owns-no-cards",
        password_sha256: "4169bac5bb3b4c3f7abdadf4cd1e2919b5938abe1f97fa5f8a24fbd9216f9d3b",
        role: Role::NonOwner,
    },
];

fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// In-memory account directory holding the demo users.
///
/// `sarah` / `abc123` and `kumar2` / `xyz789` own cards;
/// `hank-owns-no-cards` / `qrs456` authenticates but may not use the card
/// endpoints. Passwords are compared by SHA-256 digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedUser, Error> {
        let digest = sha256_hex(credentials.password());
        let account = FIXTURE_ACCOUNTS
            .iter()
            .find(|account| {
                account.username == credentials.username() && account.password_sha256 == digest
            })
            .ok_or_else(|| Error::unauthorized("invalid credentials"))?;
        let owner = Owner::new(account.username)
            .map_err(|err| Error::internal(format!("invalid fixture account: {err}")))?;
        Ok(AuthenticatedUser::new(owner, account.role))
    }
}
