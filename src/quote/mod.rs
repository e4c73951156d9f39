//! Quote aggregation across product lines

mod engine;
mod result;

pub use engine::QuoteEngine;
pub use result::{CancerRiderPremium, LifePremium, QuoteColumn, QuoteResult};
