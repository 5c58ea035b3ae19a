use uuid::Uuid;

use crate::{api::error, modules::file_upload::schema::BlobEntity};

pub trait BlobRepository {
    fn insert(&self, blob: BlobEntity) -> Result<(), error::SystemError>;

    fn find_by_id(&self, blob_id: &Uuid) -> Option<BlobEntity>;
}
