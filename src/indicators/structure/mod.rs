//! Structure indicators: support and resistance levels
//!
//! Detection runs as scanner → significance filter → partitioner. Each stage is a
//! pure function of its inputs and can be used on its own.

pub mod extrema;
pub mod partition;
pub mod significance;
pub mod support_resistance;

pub use extrema::*;
pub use partition::*;
pub use significance::*;
pub use support_resistance::*;
