//! Users of the organization.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::types::Phone;

api_enum! {
    /// Role of a user within the organization
    pub enum UserRole {
        Admin => "ADMIN",
        User => "USER",
        Stakeholder => "STAKEHOLDER",
        Guest => "GUEST",
        Responder => "RESPONDER",
    }
}

api_enum! {
    /// Interface language
    pub enum UserLanguage {
        English => "en",
        German => "de",
    }
}

/// A user account
///
/// Other resources embed users with only a subset of these fields set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Phone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landline: Option<Phone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<UserLanguage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_color: Option<String>,
}

impl User {
    /// Reference a user by id
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    pub user: Option<User>,
}

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user: User,
}

#[derive(Debug, Clone, Default)]
pub struct GetUsersInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetUsersOutput {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default)]
pub struct GetUserInput {
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetUserOutput {
    pub user: User,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub user_id: Option<i64>,
    pub user: Option<User>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserOutput {
    pub user: User,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub user_id: Option<i64>,
}

impl IlertClient {
    /// Create a user
    pub async fn create_user(&self, input: &CreateUserInput) -> Result<CreateUserOutput> {
        let user = required(input.user.as_ref(), "user")?;
        let url = self.url(&[&routes::USERS])?;
        let user = self.post_json(url, user).await?;
        Ok(CreateUserOutput { user })
    }

    /// List users
    pub async fn get_users(&self, input: &GetUsersInput) -> Result<GetUsersOutput> {
        let url = self.url(&[&routes::USERS])?;
        let query = Query::new().paging(input.start_index, input.max_results);
        let users = self.get_json(url, &query).await?;
        Ok(GetUsersOutput { users })
    }

    /// Get a user by id
    pub async fn get_user(&self, input: &GetUserInput) -> Result<GetUserOutput> {
        let user_id = required(input.user_id, "user id")?;
        let url = self.url(&[&routes::USERS, &user_id])?;
        let user = self.get_json(url, &Query::new()).await?;
        Ok(GetUserOutput { user })
    }

    /// Get the user the client is authenticated as
    pub async fn get_current_user(&self) -> Result<GetUserOutput> {
        let url = self.url(&[&routes::USERS, &"current"])?;
        let user = self.get_json(url, &Query::new()).await?;
        Ok(GetUserOutput { user })
    }

    /// Update a user
    pub async fn update_user(&self, input: &UpdateUserInput) -> Result<UpdateUserOutput> {
        let user_id = required(input.user_id, "user id")?;
        let user = required(input.user.as_ref(), "user")?;
        let url = self.url(&[&routes::USERS, &user_id])?;
        let user = self.put_json(url, user).await?;
        Ok(UpdateUserOutput { user })
    }

    /// Delete a user
    pub async fn delete_user(&self, input: &DeleteUserInput) -> Result<()> {
        let user_id = required(input.user_id, "user id")?;
        let url = self.url(&[&routes::USERS, &user_id])?;
        self.delete_resource(url).await
    }
}
