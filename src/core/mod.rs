//! Field arithmetic.

pub mod gf256;

pub use gf256::{generate_tables, FieldError, GF};
