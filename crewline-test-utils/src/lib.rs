//! Shared test harness for the Crewline workspace.
//!
//! Provides an in-memory SQLite environment, table-creation macros, and
//! fixture seeding so repository and service tests run without an external
//! database.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        test_setup_with_onboarding_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
