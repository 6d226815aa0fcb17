//! # Adapters Module
//!
//! Default implementations of the outbound ports.

pub mod key_codec;
pub mod uri;
