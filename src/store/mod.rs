//! Document store abstraction.
//!
//! Services talk to a [`Collection`] rather than to a database driver. Two
//! adapters implement it:
//! - [`mongo::MongoCollection`] backed by a MongoDB collection
//! - [`memory::MemoryCollection`] backed by an in-process ordered map
//!
//! Records are addressed by their `id` field, which every model serializes.
//! Users and messages keep it as a BSON object id, chats as a string. Both
//! adapters reject a second record with an existing `id` as a conflict.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// Name of the primary key field on every stored model.
pub const ID_FIELD: &str = "id";

/// Collection names, shared by every adapter.
pub const USERS: &str = "Users";
pub const CHATS: &str = "Chats";
pub const MESSAGES: &str = "Messages";

/// Field assignments applied by [`Collection::update_one`].
pub type FieldSet = Document;

/// Record selector.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every record.
    All,
    /// Matches records whose `field` equals the value.
    Eq(String, Bson),
}

impl Filter {
    /// Matches the record whose primary key is `id`.
    pub fn by_id(id: impl Into<Bson>) -> Self {
        Filter::eq(ID_FIELD, id)
    }

    pub fn eq(field: &str, value: impl Into<Bson>) -> Self {
        Filter::Eq(field.to_string(), value.into())
    }

    /// Evaluates the filter against a stored document.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq(field, value) => doc.get(field) == Some(value),
        }
    }
}

/// Ad-hoc paging for listings. `None` means no skip / no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl Page {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }
}

/// Storage capability for one collection of `T`.
///
/// All methods take a filter rather than a driver-specific query, so services
/// stay independent of the backing store.
#[async_trait]
pub trait Collection<T>: Send + Sync
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Returns the first record matching the filter.
    async fn find_one(&self, filter: Filter) -> Result<Option<T>>;

    /// Returns every record matching the filter, in storage order, after paging.
    async fn find_many(&self, filter: Filter, page: Page) -> Result<Vec<T>>;

    /// Inserts a record. Fails with `Conflict` if its `id` already exists.
    async fn insert_one(&self, record: &T) -> Result<()>;

    /// Sets the given fields on the first matching record.
    /// Returns the number of matched records (0 or 1).
    async fn update_one(&self, filter: Filter, fields: FieldSet) -> Result<u64>;

    /// Deletes the first matching record. Returns the number deleted (0 or 1).
    async fn delete_one(&self, filter: Filter) -> Result<u64>;
}
