pub mod catalog;
pub mod quote;

pub use catalog::{list_products, LoanProduct, ProductInfo, ProductLimits};
pub use quote::{limit_warnings, quote_product, ProductQuote, ProductQuoteInput};
