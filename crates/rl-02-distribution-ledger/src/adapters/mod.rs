//! Storage adapters implementing the `TransactionStore` outbound port.

pub mod file;
pub mod memory;

pub use file::FileTransactionStore;
pub use memory::InMemoryTransactionStore;
