//! Domain layer
//!
//! - `entities`: coordinates and artifact records
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
