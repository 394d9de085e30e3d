//! 基础设施层

pub mod logger;
pub mod memory_store;

pub use logger::Logger;
pub use memory_store::MemoryStore;
