pub mod entity;
pub mod mapper;
pub mod memory;
pub mod migrations;
pub mod sea_orm_repo;


pub use memory::InMemorySettingsStore;
pub use sea_orm_repo::SeaOrmSettingsStore;
