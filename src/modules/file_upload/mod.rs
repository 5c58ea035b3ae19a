pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_memory;
pub mod route;
pub mod schema;
pub mod service;

pub use model::UploadConfig;
pub use repository::BlobRepository;
pub use repository_memory::BlobRepositoryMemory;
pub use schema::{BlobEntity, BlobResponse};
pub use service::FileUploadService;
