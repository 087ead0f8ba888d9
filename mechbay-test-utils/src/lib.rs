pub mod error;
pub mod factory;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        factory, test_setup_with_all_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
