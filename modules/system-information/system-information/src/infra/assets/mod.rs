pub mod fs_store;
pub mod memory;

pub use fs_store::FsAssetStore;
pub use memory::InMemoryAssetStore;
