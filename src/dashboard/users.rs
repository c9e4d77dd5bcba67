//! User directory for moderators and admins

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Role determining what a user may do in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Moderator,
    Viewer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Moderator => write!(f, "moderator"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

/// A dashboard user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (user-<uuid>)
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
}

/// Partial update for a user record
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub avatar: Option<String>,
}

/// In-memory user directory
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user with a generated id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        role: UserRole,
        avatar: impl Into<String>,
    ) -> &User {
        self.users.push(User {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            name: name.into(),
            role,
            avatar: avatar.into(),
        });
        // Just pushed, so the list is non-empty
        self.users.last().expect("push succeeded")
    }

    /// Apply a partial update to a user.
    pub fn update(&mut self, id: &str, update: UserUpdate) -> Result<&User> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| Error::UserNotFound(id.to_string()))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        Ok(user)
    }

    /// Remove a user, returning the removed record.
    pub fn remove(&mut self, id: &str) -> Result<User> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| Error::UserNotFound(id.to_string()))?;
        Ok(self.users.remove(index))
    }

    /// Look up a user by id.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// All users, in insertion order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
