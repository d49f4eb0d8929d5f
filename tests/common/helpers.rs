//! Shared test helper functions

use chatstore::models::users::NewUser;

/// Builds a user payload with the given login and password and fixed profile fields.
pub fn new_user(login: &str, password: &str) -> NewUser {
    NewUser {
        login: login.to_string(),
        password: password.to_string(),
        email: Some(format!("{}@example.com", login)),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
    }
}

/// Owned participant list from string literals.
pub fn participants(logins: &[&str]) -> Vec<String> {
    logins.iter().map(|s| s.to_string()).collect()
}
