//! User management endpoints.

use approval_core::{PasswordChange, User, UserId, UserQuery, UserUpdate};
use serde::Deserialize;

use crate::{ApiClient, ApiError, MessageResponse, Transport};

#[derive(Deserialize)]
struct UserList {
    #[serde(default)]
    users: Vec<User>,
}

#[derive(Deserialize)]
pub(crate) struct UserEnvelope {
    pub(crate) user: User,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<User>, ApiError> {
        let params = query.params();
        let data: UserList = self.get("/users", &params).await?;
        Ok(data.users)
    }

    /// Search users by name or email.
    pub async fn search_users(&self, q: &str) -> Result<Vec<User>, ApiError> {
        let data: UserList = self.get("/users/search", &[("q", q.to_string())]).await?;
        Ok(data.users)
    }

    pub async fn update_user(&self, id: &UserId, update: &UserUpdate) -> Result<User, ApiError> {
        let data: UserEnvelope = self.put(&format!("/users/{id}"), update).await?;
        Ok(data.user)
    }

    pub async fn change_password(
        &self,
        id: &UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = PasswordChange {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let data: Option<MessageResponse> =
            self.put(&format!("/users/{id}/password"), &body).await?;
        Ok(data.unwrap_or_default())
    }
}
