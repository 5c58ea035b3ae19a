use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use uuid::Uuid;

use crate::{
    api::error,
    modules::file_upload::{repository::BlobRepository, schema::BlobEntity},
};

/// Blobs are never evicted: a reference stays valid until the process exits.
#[derive(Default)]
pub struct BlobRepositoryMemory {
    blobs: RwLock<HashMap<Uuid, BlobEntity>>,
}

impl BlobRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobRepository for BlobRepositoryMemory {
    fn insert(&self, blob: BlobEntity) -> Result<(), error::SystemError> {
        let mut blobs = self.blobs.write().unwrap_or_else(PoisonError::into_inner);
        if blobs.contains_key(&blob.id) {
            return Err(error::SystemError::bad_request("Blob already exists"));
        }
        blobs.insert(blob.id, blob);
        Ok(())
    }

    fn find_by_id(&self, blob_id: &Uuid) -> Option<BlobEntity> {
        self.blobs.read().unwrap_or_else(PoisonError::into_inner).get(blob_id).cloned()
    }
}
