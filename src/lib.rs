pub mod cli;
pub mod defaults;
pub mod entity;
pub mod error;
pub mod media;
pub mod session;
pub mod storage;

pub use error::{FolioError, Result};
pub use storage::RecordStore;
