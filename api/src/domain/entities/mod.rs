//! Domain entities
//!
//! Plain models shared by the fetcher, the pipeline and the renderer.

pub mod artifact;
pub mod coordinate;

pub use artifact::Artifact;
pub use coordinate::Coordinate;
