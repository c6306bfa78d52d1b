mod investments_model;

pub use investments_model::{build_investments, Investment};
