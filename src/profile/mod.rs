//! Client profile and product selection inputs to a quote

mod data;
mod selection;

pub use data::{completed_years, ClientProfile, Gender};
pub use selection::{LifeInsurance, ProductSelection};
