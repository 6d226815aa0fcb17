//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that configuration and client code use
//! - **Outbound (Driven)**: Collaborators the parser delegates to

pub mod inbound;
pub mod outbound;
