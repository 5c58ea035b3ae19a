use serde::{Deserialize, Serialize};

use crate::store::list::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineUser {
    pub id: String,
    pub username: String,
    pub last_seen: chrono::DateTime<chrono::Utc>,
}

impl Identified for OnlineUser {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Reference to a locally held file, addressable for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub url: String,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileRef {
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// `Multiple` always carries at least two files; decoding rejects anything less.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "AttachmentRecord")]
pub enum Attachment {
    Text,
    Image { file: FileRef },
    File { file: FileRef },
    Multiple { files: Vec<FileRef> },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum AttachmentRecord {
    Text,
    Image { file: FileRef },
    File { file: FileRef },
    Multiple { files: Vec<FileRef> },
}

impl TryFrom<AttachmentRecord> for Attachment {
    type Error = String;

    fn try_from(record: AttachmentRecord) -> Result<Self, Self::Error> {
        Ok(match record {
            AttachmentRecord::Text => Attachment::Text,
            AttachmentRecord::Image { file } => Attachment::Image { file },
            AttachmentRecord::File { file } => Attachment::File { file },
            AttachmentRecord::Multiple { files } if files.len() < 2 => {
                return Err(format!("multiple message needs at least 2 files, got {}", files.len()));
            }
            AttachmentRecord::Multiple { files } => Attachment::Multiple { files },
        })
    }
}

impl Attachment {
    pub fn files(&self) -> &[FileRef] {
        match self {
            Attachment::Text => &[],
            Attachment::Image { file } | Attachment::File { file } => std::slice::from_ref(file),
            Attachment::Multiple { files } => files,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub attachment: Attachment,
}

impl Identified for Message {
    fn id(&self) -> &str {
        &self.id
    }
}
