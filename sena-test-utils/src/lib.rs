//! Shared test setup for the SENA backend crates.
//!
//! Tests build a [`TestContext`] through [`TestBuilder`], which creates the requested tables in
//! an in-memory SQLite database, then insert rows through the fixture helpers.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
