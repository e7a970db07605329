use ruzizi_catalog::PricingConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub tax_rate: f64,
    pub booking_fee_cents: i32,
    pub long_stay_nights: i64,
    pub long_stay_discount: f64,
    #[serde(default = "default_adults")]
    pub default_adults: u32,
    #[serde(default = "default_selection_limit")]
    pub selection_limit: usize,
    pub currency: String,
}

fn default_adults() -> u32 {
    2
}

fn default_selection_limit() -> usize {
    4
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file (optional)
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file that stays out of git
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. RUZIZI__BUSINESS_RULES__TAX_RATE=0.2
            .add_source(config::Environment::with_prefix("RUZIZI").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Bridge the loaded business rules into the catalog's pricing config.
    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            tax_rate: self.business_rules.tax_rate,
            booking_fee_cents: self.business_rules.booking_fee_cents,
            long_stay_nights: self.business_rules.long_stay_nights,
            long_stay_discount: self.business_rules.long_stay_discount,
        }
    }
}
