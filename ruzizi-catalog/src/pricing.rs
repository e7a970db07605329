use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Business rules applied when quoting a stay. Loaded from configuration by
/// the store crate; defaults mirror the chain's published rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// VAT applied to the room subtotal after discounts
    pub tax_rate: f64,

    /// Flat per-booking fee
    pub booking_fee_cents: i32,

    /// Stays of at least this many nights earn the long-stay discount
    pub long_stay_nights: i64,

    /// Discount fraction for long stays (0.10 = 10%)
    pub long_stay_discount: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.18,
            booking_fee_cents: 5_00,
            long_stay_nights: 7,
            long_stay_discount: 0.10,
        }
    }
}

/// Priced breakdown for one stay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayQuote {
    pub nights: i64,
    pub room_subtotal_cents: i32,
    pub discount_cents: i32,
    pub tax_cents: i32,
    pub booking_fee_cents: i32,
    pub total_cents: i32,
}

pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Number of nights between two "YYYY-MM-DD" date strings.
    pub fn nights_between(check_in: &str, check_out: &str) -> Result<i64, PricingError> {
        let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d")
            .map_err(|_| PricingError::UnparseableDate(check_in.to_string()))?;
        let check_out = NaiveDate::parse_from_str(check_out, "%Y-%m-%d")
            .map_err(|_| PricingError::UnparseableDate(check_out.to_string()))?;

        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Err(PricingError::InvalidDateRange {
                check_in: check_in.to_string(),
                check_out: check_out.to_string(),
            });
        }
        Ok(nights)
    }

    /// Quote a stay: nights x nightly rate, long-stay discount, then tax
    /// and the flat booking fee.
    pub fn quote(
        &self,
        nightly_rate_cents: i32,
        check_in: &str,
        check_out: &str,
    ) -> Result<StayQuote, PricingError> {
        let nights = Self::nights_between(check_in, check_out)?;

        let room_subtotal_cents = nightly_rate_cents
            .checked_mul(nights as i32)
            .ok_or(PricingError::AmountOverflow)?;

        let discount_cents = if nights >= self.config.long_stay_nights {
            (room_subtotal_cents as f64 * self.config.long_stay_discount) as i32
        } else {
            0
        };

        let discounted = room_subtotal_cents - discount_cents;
        let tax_cents = (discounted as f64 * self.config.tax_rate) as i32;
        let total_cents = discounted + tax_cents + self.config.booking_fee_cents;

        Ok(StayQuote {
            nights,
            room_subtotal_cents,
            discount_cents,
            tax_cents,
            booking_fee_cents: self.config.booking_fee_cents,
            total_cents,
        })
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Unparseable date: {0}")]
    UnparseableDate(String),

    #[error("Check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange { check_in: String, check_out: String },

    #[error("Stay amount overflows")]
    AmountOverflow,
}
