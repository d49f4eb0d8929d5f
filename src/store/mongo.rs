//! MongoDB-backed collection.
//!
//! Models carry their primary key as `id`; MongoDB requires `_id`. The adapter
//! renames the key on the way in and out, and in filters and field sets, so
//! the rest of the crate never sees `_id`.

use std::marker::PhantomData;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, Document, doc},
    error::{ErrorKind, WriteFailure},
};
use serde::{de::DeserializeOwned, Serialize};

use super::{Collection, FieldSet, Filter, ID_FIELD, Page};
use crate::error::{Error, Result};

const MONGO_ID_FIELD: &str = "_id";

pub struct MongoCollection<T> {
    inner: mongodb::Collection<Document>,
    _record: PhantomData<fn() -> T>,
}

impl<T> MongoCollection<T> {
    /// Opens the named collection in `database`. No indexes are created.
    pub fn new(database: &mongodb::Database, name: &str) -> Self {
        Self {
            inner: database.collection::<Document>(name),
            _record: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }
}

impl<T> Clone for MongoCollection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _record: PhantomData,
        }
    }
}

fn to_mongo_field(field: &str) -> &str {
    if field == ID_FIELD { MONGO_ID_FIELD } else { field }
}

fn to_mongo_filter(filter: Filter) -> Document {
    match filter {
        Filter::All => doc! {},
        Filter::Eq(field, value) => {
            let mut query = Document::new();
            query.insert(to_mongo_field(&field), value);
            query
        }
    }
}

fn to_mongo_fields(fields: FieldSet) -> Document {
    fields
        .into_iter()
        .map(|(field, value)| (to_mongo_field(&field).to_string(), value))
        .collect()
}

/// Serializes a record and moves its `id` to `_id`.
fn to_stored<T: Serialize>(record: &T) -> Result<Document> {
    let mut doc = bson::to_document(record)?;
    let mut stored = Document::new();
    if let Some(id) = doc.remove(ID_FIELD) {
        stored.insert(MONGO_ID_FIELD, id);
    }
    for (field, value) in doc {
        stored.insert(field, value);
    }
    Ok(stored)
}

/// Moves `_id` back to `id` and deserializes the record.
fn from_stored<T: DeserializeOwned>(mut doc: Document) -> Result<T> {
    if let Some(id) = doc.remove(MONGO_ID_FIELD) {
        doc.insert(ID_FIELD, id);
    }
    Ok(bson::from_document(doc)?)
}

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl<T> Collection<T> for MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn find_one(&self, filter: Filter) -> Result<Option<T>> {
        let found = self.inner.find_one(to_mongo_filter(filter)).await?;
        found.map(from_stored).transpose()
    }

    async fn find_many(&self, filter: Filter, page: Page) -> Result<Vec<T>> {
        // MongoDB reads a zero limit as "no limit"
        if page.limit == Some(0) {
            return Ok(Vec::new());
        }

        let mut find = self.inner.find(to_mongo_filter(filter));
        if let Some(skip) = page.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = page.limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let documents: Vec<Document> = find.await?.try_collect().await?;
        documents.into_iter().map(from_stored).collect()
    }

    async fn insert_one(&self, record: &T) -> Result<()> {
        let doc = to_stored(record)?;
        self.inner.insert_one(doc).await.map_err(|e| {
            if is_duplicate_key(&e) {
                Error::Conflict(format!("Duplicate key in collection '{}'", self.inner.name()))
            } else {
                Error::Database(e)
            }
        })?;
        Ok(())
    }

    async fn update_one(&self, filter: Filter, fields: FieldSet) -> Result<u64> {
        let result = self
            .inner
            .update_one(to_mongo_filter(filter), doc! { "$set": to_mongo_fields(fields) })
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, filter: Filter) -> Result<u64> {
        let result = self.inner.delete_one(to_mongo_filter(filter)).await?;
        Ok(result.deleted_count)
    }
}
