//! Projects a GraphQL type model plus field-selection operations into
//! precise TypeScript descriptions of each operation's result and
//! variables shapes.
//!
//! The whole engine lives in `libtypegen-core`; this crate is the
//! published surface.

pub use libtypegen_core::*;
