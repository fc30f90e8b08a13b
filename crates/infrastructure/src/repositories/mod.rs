pub mod seed;
pub mod zone_repository;

pub use zone_repository::InMemoryZoneRepository;
