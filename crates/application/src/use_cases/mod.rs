//! Application use cases (business logic orchestration).

mod launch_quiz;
mod report_retry;

pub use launch_quiz::*;
pub use report_retry::*;
