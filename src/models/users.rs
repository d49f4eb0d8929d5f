use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A stored user. `login` is unique across the collection.
///
/// Serializes in its stored shape, with `id` as a BSON object id. Clients see
/// [`UserResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ObjectId,
    pub login: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Payload for creating a user. Missing fields deserialize as empty so that
/// blank checks, not the JSON extractor, report them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    pub login: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Replacement values for every mutable field of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUser {
    pub login: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// JSON view of a user, with the id as 24 hex characters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub login: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            login: user.login,
            password: user.password,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

impl User {
    /// Builds a stored user from a creation payload and a freshly generated id.
    pub fn from_new(id: ObjectId, new_user: NewUser) -> Self {
        Self {
            id,
            login: new_user.login,
            password: new_user.password,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
        }
    }
}
