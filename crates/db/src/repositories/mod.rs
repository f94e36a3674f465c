//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods that
//! accept any Postgres executor as the first argument, so the same method runs
//! against the pool or inside a transaction.

pub mod person_repo;
pub mod planet_repo;
pub mod species_repo;

pub use person_repo::PersonRepo;
pub use planet_repo::PlanetRepo;
pub use species_repo::SpeciesRepo;
