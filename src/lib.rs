pub mod types;
pub mod curve;
pub mod presets;
pub mod constraints;
pub mod rules;
pub mod quote;
pub mod engine;
pub mod dom;
pub mod controller;

pub use controller::Calculator;
pub use engine::PriceEngine;
pub use quote::compute_quote;
pub use types::*;
