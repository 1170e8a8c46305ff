#![warn(clippy::pedantic)]
#![expect(clippy::module_name_repetitions)]
#![expect(clippy::must_use_candidate)]
#![expect(clippy::return_self_not_must_use)]
#![expect(clippy::cast_precision_loss)]
#![expect(clippy::cast_possible_truncation)]
#![expect(clippy::cast_sign_loss)]
#![expect(clippy::missing_errors_doc)]
#![expect(clippy::float_cmp)]

//! Interval arithmetic with per-value tolerances, and its extension to piecewise-linear
//! fuzzy numbers given by nested alpha-cuts.

pub mod error;
pub mod factory;
pub mod functions;
pub mod fuzzy_number;
pub mod interval;
pub mod numbers;

pub use error::{FuzzyError, Result};
pub use factory::FuzzyNumberFactory;
pub use functions::Elementary;
pub use fuzzy_number::FuzzyNumber;
pub use interval::Interval;
