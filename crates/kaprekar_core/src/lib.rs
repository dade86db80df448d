pub mod domain;
pub mod engine;
pub mod error;
pub mod survey;
pub mod validate;

pub use domain::{
    Candidate, Exploration, Outcome, StepRecord, DEFAULT_MAX_STEPS, KAPREKAR_CONSTANT,
};
pub use engine::{explore, explore_value, explore_with, kaprekar_step};
pub use error::ValidationError;
pub use survey::{survey, Survey};
pub use validate::validate;
