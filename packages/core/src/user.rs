//! Users, roles and role-based capabilities.

use serde::{Deserialize, Serialize};

use crate::{CardStatus, UserId};

/// Role assigned to a user by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Content requester; views and reviews cards.
    Client,
    /// Reviews cards and moves them between statuses.
    Approver,
    /// Manages users and everything else.
    Admin,
    /// Any other role string (for instance content producers).
    Other(String),
}

impl Role {
    /// Role of a user record that carries none. Grants no review rights.
    pub fn unassigned() -> Self {
        Role::Other(String::new())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Client => "cliente",
            Role::Approver => "aprovador",
            Role::Admin => "admin",
            Role::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "cliente" => Role::Client,
            "aprovador" => Role::Approver,
            "admin" => Role::Admin,
            _ => Role::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default = "Role::unassigned")]
    pub role: Role,
}

impl User {
    pub fn is_client(&self) -> bool {
        self.role == Role::Client
    }

    pub fn is_approver(&self) -> bool {
        self.role == Role::Approver
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Upper-cased first character of the name, for avatars.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn capabilities(&self) -> Capabilities {
        capabilities_for(&self.role)
    }
}

/// What a role may do on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// May create new content cards.
    pub can_create: bool,
    /// May approve or reject pending cards.
    pub can_approve: bool,
}

/// Resolve dashboard capabilities for a role.
///
/// Clients and approvers review cards; everyone else creates them.
pub fn capabilities_for(role: &Role) -> Capabilities {
    let reviewer = matches!(role, Role::Client | Role::Approver);
    Capabilities {
        can_create: !reviewer,
        can_approve: reviewer,
    }
}

/// Whether approve/reject controls appear on a card.
pub fn show_review_actions(show_actions: bool, status: &CardStatus) -> bool {
    show_actions && status.is_pending()
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Body for `PUT /users/:id`; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Body for `PUT /users/:id/password`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Query parameters for `GET /users`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQuery {
    pub role: Option<Role>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UserQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(role) = &self.role {
            params.push(("role", role.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}
