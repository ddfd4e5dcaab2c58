//! Authentication primitives: caller credentials and the identity they
//! resolve to.
//!
//! Inbound adapters decode transport-specific credentials into
//! [`LoginCredentials`] before handing them to the
//! [`crate::domain::ports::LoginService`] port.

use std::fmt;

use zeroize::Zeroizing;

use super::Owner;

/// Why a username/password pair was rejected before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("credentials must have the form username:password")]
    MissingSeparator,
}

/// Username and password presented by a caller.
///
/// The username is trimmed; the password is kept verbatim and wiped from
/// memory on drop. `Debug` output never shows the password.
///
/// # Examples
/// ```
/// use cashcard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new(" sarah ", "abc123").expect("valid");
/// assert_eq!(creds.username(), "sarah");
/// assert!(!format!("{creds:?}").contains("abc123"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate a username and password; blank values are rejected.
    pub fn new(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        match (username.is_empty(), password.is_empty()) {
            (true, _) => Err(LoginValidationError::EmptyUsername),
            (false, true) => Err(LoginValidationError::EmptyPassword),
            (false, false) => Ok(Self {
                username: username.to_owned(),
                password: Zeroizing::new(password.to_owned()),
            }),
        }
    }

    /// Split a decoded `username:password` pair on its first colon.
    pub fn from_pair(pair: &str) -> Result<Self, LoginValidationError> {
        let (username, password) = pair
            .split_once(':')
            .ok_or(LoginValidationError::MissingSeparator)?;
        Self::new(username, password)
    }

    /// Trimmed account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password exactly as presented.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Role granted to an authenticated account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// May create and manage their own cash cards.
    CardOwner,
    /// Authenticated, but not allowed to touch cash cards.
    NonOwner,
}

/// Identity established by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    owner: Owner,
    role: Role,
}

impl AuthenticatedUser {
    /// Pair an owner identity with its granted role.
    pub fn new(owner: Owner, role: Role) -> Self {
        Self { owner, role }
    }

    /// Identity used to scope every card operation.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Role granted at login.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the account may use the cash card endpoints.
    pub fn is_card_owner(&self) -> bool {
        self.role == Role::CardOwner
    }

    /// Consume the identity, keeping only the owner.
    pub fn into_owner(self) -> Owner {
        self.owner
    }
}
