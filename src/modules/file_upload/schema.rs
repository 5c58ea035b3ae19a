use actix_web::web::Bytes;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::chat::schema::FileRef;

/// A file picked by the user, kept in memory for the rest of the process.
#[derive(Debug, Clone)]
pub struct BlobEntity {
    pub id: Uuid,
    pub filename: String,
    pub mime_type: String,
    pub bytes: Bytes,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl BlobEntity {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn file_ref(&self, base_url: &str) -> FileRef {
        FileRef {
            url: format!("{}/{}", base_url, self.id),
            name: self.filename.clone(),
            size: self.size(),
            mime_type: self.mime_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobResponse {
    pub id: Uuid,
    pub url: String,
    pub name: String,
    pub size: u64,
    pub size_label: String,
    pub mime_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
