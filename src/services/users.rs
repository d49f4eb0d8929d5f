use std::sync::Arc;

use mongodb::bson::doc;

use crate::{
    error::{Error, Result},
    models::{
        requests::UserQuery,
        users::{NewUser, UpdateUser, User},
    },
    store::{Collection, Filter},
    validation::{RequiredFields, new_object_id, validate_object_id},
};

/// User operations over an injected `Users` collection.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn Collection<User>>,
}

fn invalid_user_id() -> String {
    "Invalid user ID format.".to_string()
}

fn user_not_found(id: &str) -> Error {
    Error::NotFound(format!("User with ID '{}' not found.", id))
}

impl UserService {
    pub fn new(users: Arc<dyn Collection<User>>) -> Self {
        Self { users }
    }

    /// Creates a user after checking required fields and login uniqueness.
    ///
    /// # Errors
    /// * `Validation` if login or password is blank
    /// * `Conflict` if another user already has the login
    pub async fn add_user(&self, new_user: NewUser) -> Result<User> {
        RequiredFields::new()
            .require("login", &new_user.login, "Login is required.")
            .require("password", &new_user.password, "Password is required.")
            .finish()?;

        if self.find_by_login(&new_user.login).await?.is_some() {
            return Err(Error::Conflict(format!(
                "User with login '{}' already exists.",
                new_user.login
            )));
        }

        let user = User::from_new(new_object_id(), new_user);
        self.users.insert_one(&user).await?;

        tracing::info!(user_id = %user.id, login = %user.login, "User created");
        Ok(user)
    }

    /// Deletes a user by id.
    pub async fn remove_user(&self, id: &str) -> Result<()> {
        let oid = validate_object_id(id, invalid_user_id)?;

        let deleted = self.users.delete_one(Filter::by_id(oid)).await?;
        if deleted == 0 {
            return Err(user_not_found(id));
        }

        tracing::info!(user_id = %id, "User removed");
        Ok(())
    }

    /// Replaces every mutable field of a user.
    ///
    /// Keeping the user's own login is allowed; taking a login that belongs to
    /// a different user is a conflict.
    pub async fn edit_user(&self, id: &str, updated: UpdateUser) -> Result<()> {
        let oid = validate_object_id(id, invalid_user_id)?;

        if self.users.find_one(Filter::by_id(oid)).await?.is_none() {
            return Err(user_not_found(id));
        }

        if let Some(owner) = self.find_by_login(&updated.login).await? {
            if owner.id != oid {
                return Err(Error::Conflict(format!(
                    "Login '{}' is already taken.",
                    updated.login
                )));
            }
        }

        let fields = doc! {
            "login": updated.login,
            "password": updated.password,
            "email": updated.email,
            "firstName": updated.first_name,
            "lastName": updated.last_name,
        };
        let matched = self.users.update_one(Filter::by_id(oid), fields).await?;
        if matched == 0 {
            // Removed between the lookup and the update
            return Err(user_not_found(id));
        }

        tracing::info!(user_id = %id, "User updated");
        Ok(())
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<User> {
        let oid = validate_object_id(id, invalid_user_id)?;

        let user = self
            .users
            .find_one(Filter::by_id(oid))
            .await?
            .ok_or_else(|| user_not_found(id))?;

        tracing::debug!(user_id = %id, "User fetched");
        Ok(user)
    }

    /// Lists users, optionally restricted to an exact first name.
    pub async fn get_all_users(&self, query: UserQuery) -> Result<Vec<User>> {
        let filter = match query.first_name {
            Some(first_name) => Filter::eq("firstName", first_name),
            None => Filter::All,
        };
        self.users.find_many(filter, query.page).await
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>> {
        self.users.find_one(Filter::eq("login", login)).await
    }
}
