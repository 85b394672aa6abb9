//! Local storage implementations - file-backed and in-memory.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;
