//! Artifact acquisition and on-disk layout.
//!
//! The store resolves where the component artifact lives
//! (`dir/<fixed-filename>`); the fetcher downloads it over HTTP on a
//! best-effort basis. Neither knows anything about what is inside the
//! artifact — loading is the `component` module's job.

mod fetcher;
mod store;

pub use fetcher::ArtifactFetcher;
pub use store::ArtifactStore;
