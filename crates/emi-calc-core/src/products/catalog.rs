use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EmiError;
use crate::types::{Money, Percent};

/// Loan products offered through the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanProduct {
    HomeLoan,
    PersonalLoan,
    GoldLoan,
    EducationLoan,
    BusinessLoan,
    LoanAgainstProperty,
    LoanAgainstSecurities,
}

/// Slider ranges and starting values for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLimits {
    pub min_principal: Money,
    pub max_principal: Money,
    pub min_rate_percent: Percent,
    pub max_rate_percent: Percent,
    pub min_tenure_months: u32,
    pub max_tenure_months: u32,
    pub default_principal: Money,
    pub default_rate_percent: Percent,
    pub default_tenure_months: u32,
}

/// Catalogue row as served to the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product: LoanProduct,
    pub display_name: String,
    pub limits: ProductLimits,
}

impl LoanProduct {
    pub const ALL: [LoanProduct; 7] = [
        LoanProduct::HomeLoan,
        LoanProduct::PersonalLoan,
        LoanProduct::GoldLoan,
        LoanProduct::EducationLoan,
        LoanProduct::BusinessLoan,
        LoanProduct::LoanAgainstProperty,
        LoanProduct::LoanAgainstSecurities,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            LoanProduct::HomeLoan => "home_loan",
            LoanProduct::PersonalLoan => "personal_loan",
            LoanProduct::GoldLoan => "gold_loan",
            LoanProduct::EducationLoan => "education_loan",
            LoanProduct::BusinessLoan => "business_loan",
            LoanProduct::LoanAgainstProperty => "loan_against_property",
            LoanProduct::LoanAgainstSecurities => "loan_against_securities",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LoanProduct::HomeLoan => "Home Loan",
            LoanProduct::PersonalLoan => "Personal Loan",
            LoanProduct::GoldLoan => "Gold Loan",
            LoanProduct::EducationLoan => "Education Loan",
            LoanProduct::BusinessLoan => "Business Loan",
            LoanProduct::LoanAgainstProperty => "Loan Against Property",
            LoanProduct::LoanAgainstSecurities => "Loan Against Securities",
        }
    }

    pub fn limits(&self) -> ProductLimits {
        match self {
            LoanProduct::HomeLoan => ProductLimits {
                min_principal: dec!(100000),
                max_principal: dec!(100000000),
                min_rate_percent: dec!(6.5),
                max_rate_percent: dec!(15),
                min_tenure_months: 12,
                max_tenure_months: 360,
                default_principal: dec!(7500000),
                default_rate_percent: dec!(8.5),
                default_tenure_months: 240,
            },
            LoanProduct::PersonalLoan => ProductLimits {
                min_principal: dec!(50000),
                max_principal: dec!(4000000),
                min_rate_percent: dec!(10),
                max_rate_percent: dec!(24),
                min_tenure_months: 12,
                max_tenure_months: 84,
                default_principal: dec!(500000),
                default_rate_percent: dec!(11),
                default_tenure_months: 60,
            },
            LoanProduct::GoldLoan => ProductLimits {
                min_principal: dec!(10000),
                max_principal: dec!(10000000),
                min_rate_percent: dec!(7),
                max_rate_percent: dec!(24),
                min_tenure_months: 3,
                max_tenure_months: 36,
                default_principal: dec!(100000),
                default_rate_percent: dec!(9.5),
                default_tenure_months: 12,
            },
            LoanProduct::EducationLoan => ProductLimits {
                min_principal: dec!(50000),
                max_principal: dec!(15000000),
                min_rate_percent: dec!(8),
                max_rate_percent: dec!(16),
                min_tenure_months: 12,
                max_tenure_months: 180,
                default_principal: dec!(1000000),
                default_rate_percent: dec!(9.5),
                default_tenure_months: 84,
            },
            LoanProduct::BusinessLoan => ProductLimits {
                min_principal: dec!(100000),
                max_principal: dec!(50000000),
                min_rate_percent: dec!(11),
                max_rate_percent: dec!(24),
                min_tenure_months: 12,
                max_tenure_months: 120,
                default_principal: dec!(2000000),
                default_rate_percent: dec!(14),
                default_tenure_months: 60,
            },
            LoanProduct::LoanAgainstProperty => ProductLimits {
                min_principal: dec!(500000),
                max_principal: dec!(100000000),
                min_rate_percent: dec!(8),
                max_rate_percent: dec!(18),
                min_tenure_months: 12,
                max_tenure_months: 240,
                default_principal: dec!(5000000),
                default_rate_percent: dec!(10),
                default_tenure_months: 180,
            },
            LoanProduct::LoanAgainstSecurities => ProductLimits {
                min_principal: dec!(50000),
                max_principal: dec!(50000000),
                min_rate_percent: dec!(9),
                max_rate_percent: dec!(18),
                min_tenure_months: 1,
                max_tenure_months: 36,
                default_principal: dec!(1000000),
                default_rate_percent: dec!(10.5),
                default_tenure_months: 12,
            },
        }
    }

    pub fn info(&self) -> ProductInfo {
        ProductInfo {
            product: *self,
            display_name: self.display_name().to_string(),
            limits: self.limits(),
        }
    }
}

impl fmt::Display for LoanProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for LoanProduct {
    type Err = EmiError;

    /// Accepts `home_loan`, `home-loan` or `Home Loan`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        LoanProduct::ALL
            .into_iter()
            .find(|p| p.slug() == normalized)
            .ok_or_else(|| EmiError::UnknownProduct(s.to_string()))
    }
}

/// The whole catalogue, in display order.
pub fn list_products() -> Vec<ProductInfo> {
    LoanProduct::ALL.iter().map(LoanProduct::info).collect()
}
