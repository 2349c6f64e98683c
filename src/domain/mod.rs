//! Domain layer containing the alias registry contract.
//!
//! This module is independent of storage technology and HTTP concerns. It
//! defines the persisted entity, the registry interface and its error kinds.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Registry trait definition
//! - [`error`] - Registry error taxonomy
//!
//! # Design Principles
//!
//! - Alias uniqueness is enforced by the storage backend at write time, never by a
//!   check-then-insert sequence
//! - Backends translate their native "duplicate key" signal into
//!   [`error::RegistryError::AliasConflict`]
//! - Business rules (alias defaulting, validation) live in
//!   [`crate::application::services`]

pub mod entities;
pub mod error;
pub mod repositories;
