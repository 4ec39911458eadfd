//! Fixture utilities: database seeding for the in-memory test environment.

pub mod seed;
