use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::store::Store;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.store.list_users().await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        self.store.user_by_username(username).await
    }

    /// Username is the one enforced uniqueness in the system. Password
    /// stays empty for OAuth-backed accounts.
    pub async fn create(
        &self,
        username: String,
        company_name: Option<String>,
        role: String,
        email: Option<String>,
    ) -> Result<User> {
        if self.store.user_by_username(&username).await?.is_some() {
            return Err(Error::Conflict(format!(
                "username {} is already taken",
                username
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            username,
            password: String::new(),
            company_name,
            role,
            email,
        };
        self.store.insert_user(user).await
    }
}
