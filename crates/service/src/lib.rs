//! Service layer providing business-oriented operations on top of models.
//! - Separates record policy (completeness, soft-delete lifecycle, search)
//!   from data access.
//! - Reuses entity definitions and persistence helpers in the `models`
//!   crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod lifecycle;
pub mod record;
pub mod auth;
pub mod admin;
#[cfg(test)]
pub mod test_support;
