//! Discography — performer and release catalog.
//!
//! Owns the performer and release records, the pass-through entity service
//! over a store, and the composition that joins each release with its
//! performer at read time.

pub mod application;
pub mod domain;
