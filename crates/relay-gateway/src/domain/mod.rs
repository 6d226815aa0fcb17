//! # Domain Layer
//!
//! Pure parsing and key-decoding logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod address;
pub mod bls;
pub mod config;
pub mod entities;
pub mod errors;
pub mod uri;
