//! Stock store adapters.

pub mod file;
pub mod memory;

pub use file::FileInventoryStore;
pub use memory::InMemoryInventoryStore;
