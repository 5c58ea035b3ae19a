use actix_web::web::Bytes;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::chat::schema::FileRef;
use crate::modules::file_upload::{
    model::UploadConfig,
    repository::BlobRepository,
    schema::{BlobEntity, BlobResponse},
};
use crate::utils::format_file_size;

#[derive(Clone)]
pub struct FileUploadService {
    blob_repo: Arc<dyn BlobRepository + Send + Sync>,
    config: UploadConfig,
}

impl FileUploadService {
    pub fn new(blob_repo: Arc<dyn BlobRepository + Send + Sync>, config: UploadConfig) -> Self {
        Self { blob_repo, config }
    }

    pub fn max_file_size(&self) -> usize {
        self.config.max_file_size
    }

    /// Declared type from the form part, or a guess from the file name when the
    /// browser sent nothing useful.
    pub fn detect_mime_type(filename: &str, declared: Option<&str>) -> String {
        match declared {
            Some(mime) if !mime.is_empty() && mime != "application/octet-stream" => {
                mime.to_string()
            }
            _ => mime_guess::from_path(filename).first_or_octet_stream().essence_str().to_string(),
        }
    }

    /// Any image type, or one of the configured document extensions.
    fn validate_file(
        &self,
        filename: &str,
        file_size: usize,
        mime_type: &str,
    ) -> Result<(), error::SystemError> {
        if file_size > self.config.max_file_size {
            return Err(error::SystemError::bad_request(format!(
                "File size exceeds maximum allowed size of {} bytes",
                self.config.max_file_size
            )));
        }

        if mime_type.starts_with("image/") {
            return Ok(());
        }

        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if self.config.accepted_extensions.iter().any(|accepted| *accepted == extension) {
            return Ok(());
        }

        Err(error::SystemError::bad_request(format!("File type of '{}' is not accepted", filename)))
    }

    /// Keep the file in memory and hand back its session-scoped reference.
    pub fn store_file(
        &self,
        filename: String,
        bytes: Bytes,
        declared_mime: Option<&str>,
    ) -> Result<BlobResponse, error::SystemError> {
        let mime_type = Self::detect_mime_type(&filename, declared_mime);
        self.validate_file(&filename, bytes.len(), &mime_type)?;

        let blob = BlobEntity {
            id: Uuid::now_v7(),
            filename,
            mime_type,
            bytes,
            created_at: chrono::Utc::now(),
        };
        let file = blob.file_ref(&self.config.base_url);
        let response = BlobResponse {
            id: blob.id,
            url: file.url,
            name: file.name,
            size: file.size,
            size_label: format_file_size(file.size),
            mime_type: file.mime_type,
            created_at: blob.created_at,
        };

        self.blob_repo.insert(blob)?;
        log::info!("Stored blob {} ({})", response.id, response.size_label);
        Ok(response)
    }

    pub fn get_blob(&self, blob_id: &Uuid) -> Result<BlobEntity, error::SystemError> {
        self.blob_repo
            .find_by_id(blob_id)
            .ok_or_else(|| error::SystemError::not_found("File not found"))
    }

    pub fn file_ref(&self, blob_id: &Uuid) -> Result<FileRef, error::SystemError> {
        Ok(self.get_blob(blob_id)?.file_ref(&self.config.base_url))
    }
}
