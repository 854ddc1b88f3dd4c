#![forbid(unsafe_code)]

pub mod dataset;
pub mod repository;
pub mod sqlite;

pub use dataset::{DatasetError, load_sentences};
pub use repository::{InMemoryRepository, NewProgress, ProgressRepository, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
