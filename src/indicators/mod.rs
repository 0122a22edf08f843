pub mod error;
pub mod parser;
pub mod validation;

pub mod structure;

pub use error::IndicatorError;
pub use parser::*;
pub use validation::*;
