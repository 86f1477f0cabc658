pub mod amortization;
pub mod args;
pub mod comparison;
pub mod products;
