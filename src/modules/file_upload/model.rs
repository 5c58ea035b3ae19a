use crate::constants::ACCEPTED_EXTENSIONS;

/// What the file picker accepts
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub accepted_extensions: Vec<String>,
    pub base_url: String,
}

impl UploadConfig {
    pub fn with_max_file_size(max_file_size: usize) -> Self {
        Self { max_file_size, ..Default::default() }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            base_url: "/api/files".to_string(),
        }
    }
}
