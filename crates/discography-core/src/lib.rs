//! Discography Core — shared domain abstractions.
//!
//! This crate defines the entity abstraction, the domain error type and the
//! capability traits that stores and services implement. It contains no
//! infrastructure code.

pub mod entity;
pub mod error;
pub mod service;
pub mod store;
