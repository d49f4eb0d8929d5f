//! In-process collection used by tests and by the `memory` backend.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use mongodb::bson::{self, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use super::{Collection, FieldSet, Filter, ID_FIELD, Page};
use crate::error::{Error, Result};

/// Ordered map of documents keyed by `id`.
///
/// Records are kept as BSON documents, so field-level updates and filters
/// behave the same way as against MongoDB. Iteration follows insertion order.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    name: String,
    documents: Arc<RwLock<IndexMap<String, Document>>>,
    _record: PhantomData<fn() -> T>,
}

impl<T> MemoryCollection<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Arc::new(RwLock::new(IndexMap::new())),
            _record: PhantomData,
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

impl<T> Clone for MemoryCollection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            documents: Arc::clone(&self.documents),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T> Collection<T> for MemoryCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn find_one(&self, filter: Filter) -> Result<Option<T>> {
        let documents = self.documents.read().await;
        documents
            .values()
            .find(|doc| filter.matches(doc))
            .map(|doc| bson::from_document(doc.clone()).map_err(Error::from))
            .transpose()
    }

    async fn find_many(&self, filter: Filter, page: Page) -> Result<Vec<T>> {
        let documents = self.documents.read().await;
        let skip = page.skip.map_or(0, |s| usize::try_from(s).unwrap_or(usize::MAX));
        let limit = page.limit.map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        documents
            .values()
            .filter(|doc| filter.matches(doc))
            .skip(skip)
            .take(limit)
            .map(|doc| bson::from_document(doc.clone()).map_err(Error::from))
            .collect()
    }

    async fn insert_one(&self, record: &T) -> Result<()> {
        let doc = bson::to_document(record)?;
        let id = match doc.get(ID_FIELD) {
            Some(Bson::String(id)) => id.clone(),
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            other => {
                return Err(Error::Internal(format!(
                    "Record in '{}' has no usable id: {:?}",
                    self.name, other
                )));
            }
        };

        let mut documents = self.documents.write().await;
        if documents.contains_key(&id) {
            return Err(Error::Conflict(format!(
                "Duplicate key '{}' in collection '{}'",
                id, self.name
            )));
        }
        documents.insert(id, doc);
        Ok(())
    }

    async fn update_one(&self, filter: Filter, fields: FieldSet) -> Result<u64> {
        let mut documents = self.documents.write().await;
        match documents.values_mut().find(|doc| filter.matches(doc)) {
            Some(doc) => {
                for (field, value) in fields {
                    doc.insert(field, value);
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, filter: Filter) -> Result<u64> {
        let mut documents = self.documents.write().await;
        let key = documents
            .iter()
            .find(|(_, doc)| filter.matches(doc))
            .map(|(key, _)| key.clone());

        match key {
            Some(key) => {
                documents.shift_remove(&key);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
