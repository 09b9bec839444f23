pub mod repository;
pub mod resources;
pub mod types;
