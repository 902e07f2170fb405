pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileCacheStorage;
pub use memory::MemoryCacheStorage;
pub use traits::CacheStorage;
