//! Request orchestration: validation, the timeout race and error mapping.
//!
//! Every failure leaves this module as one of three [`ErrorKind`]s, each with
//! a fixed user-facing message. Detailed causes only reach the logs.

pub mod error;
pub mod prioritizer;
pub mod response;


pub use error::{
    ErrorKind, INVALID_INPUT_MESSAGE, OrchestratorError, TIMEOUT_MESSAGE, UPSTREAM_FAILURE_MESSAGE,
};
pub use prioritizer::Prioritizer;
pub use response::PrioritizeResponse;
