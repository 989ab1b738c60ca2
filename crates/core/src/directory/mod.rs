//! Member directory

pub mod ports;
pub mod service;

pub use ports::DirectoryStore;
pub use service::DirectoryService;
