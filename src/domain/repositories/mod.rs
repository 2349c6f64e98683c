//! Registry trait definitions for the domain layer.
//!
//! The [`AliasRegistry`] trait is the single contract for alias persistence.
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_alias_registry.rs`.

pub mod alias_registry;

pub use alias_registry::AliasRegistry;

#[cfg(test)]
pub use alias_registry::MockAliasRegistry;
