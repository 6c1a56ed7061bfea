use serde::{Deserialize, Serialize};

/// Coupon rule selected by a customer-supplied code.
///
/// A closed enumeration rather than string dispatch, so the pricing engine's
/// match is exhaustiveness-checked. Codes are parsed once at the service
/// boundary; an unrecognized code degrades to [`Coupon::None`] and is never
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coupon {
    /// No coupon, or an unrecognized code.
    None,
    /// Percentage off the subtotal, in basis points (1000 = 10%).
    PercentOff(u32),
    /// Waives the shipping fee.
    FreeShipping,
}

impl Coupon {
    /// Map a raw code to a coupon rule. Exact, case-sensitive match; absent,
    /// empty, and unknown codes all mean "no coupon".
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("SAVE10") => Coupon::PercentOff(1_000),
            Some("FREESHIP") => Coupon::FreeShipping,
            _ => Coupon::None,
        }
    }
}

impl Default for Coupon {
    fn default() -> Self {
        Coupon::None
    }
}
