use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{UserError, UserResult};

const USERNAME_MIN_LEN: usize = 5;
const USERNAME_MAX_LEN: usize = 20;

/// Alphanumeric runs joined by single `.`, `_` or `-`
static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+(?:[._-][a-zA-Z0-9]+)*$").unwrap());

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> UserResult<Self> {
        let value = value.into();
        let len = value.chars().count();

        if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            return Err(UserError::Validation(format!(
                "Username must be between {} and {} characters long, got {}",
                USERNAME_MIN_LEN, USERNAME_MAX_LEN, len
            )));
        }

        if !USERNAME_PATTERN.is_match(&value) {
            return Err(UserError::Validation(
                "Username must consist of letters and digits, optionally separated by single \
                 '.', '_' or '-'"
                    .to_string(),
            ));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// User roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(UserRole::SuperAdmin),
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// User entity
///
/// Not serializable; responses go through [`UserQueryModel`].
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
}

impl User {
    pub fn new(id: UserId, username: Username, password_hash: String, role: UserRole) -> Self {
        Self {
            id,
            username,
            password_hash,
            role,
            is_active: true,
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .finish()
    }
}

/// Current user as returned by `GET /me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserQueryModel {
    pub id: Uuid,
    #[schema(example = "alice.smith")]
    pub username: String,
    pub role: UserRole,
    pub is_active: bool,
}

impl From<User> for UserQueryModel {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            username: user.username.into_inner(),
            role: user.role,
            is_active: user.is_active,
        }
    }
}
