use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    MobileMoney,
    Paypal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    RequiresPaymentMethod,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String, // Provider's ID (e.g., pi_123)
    pub booking_id: Uuid,
    pub amount_cents: i32,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Create a payment intent with the provider
    async fn create_intent(
        &self,
        booking_id: Uuid,
        amount_cents: i32,
        currency: &str,
        method: PaymentMethod,
    ) -> Result<PaymentIntent, Box<dyn std::error::Error + Send + Sync>>;

    /// Process a payment (direct checkout)
    async fn process_payment(
        &self,
        intent: &PaymentIntent,
    ) -> Result<PaymentStatus, Box<dyn std::error::Error + Send + Sync>>;
}

/// Adapter that authorizes everything. No real gateway exists in this
/// system; the wizard marks payment complete with whatever status the
/// adapter returns, so swapping in a real provider changes nothing upstream.
pub struct MockPaymentAdapter;

#[async_trait]
impl PaymentAdapter for MockPaymentAdapter {
    async fn create_intent(
        &self,
        booking_id: Uuid,
        amount_cents: i32,
        currency: &str,
        method: PaymentMethod,
    ) -> Result<PaymentIntent, Box<dyn std::error::Error + Send + Sync>> {
        Ok(PaymentIntent {
            id: format!("mock_pi_{}", booking_id.simple()),
            booking_id,
            amount_cents,
            currency: currency.to_string(),
            method,
            status: PaymentStatus::RequiresPaymentMethod,
            created_at: Utc::now(),
        })
    }

    async fn process_payment(
        &self,
        intent: &PaymentIntent,
    ) -> Result<PaymentStatus, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(
            "Mock-authorizing payment intent {} for {} {}",
            intent.id,
            intent.amount_cents,
            intent.currency
        );
        Ok(PaymentStatus::Succeeded)
    }
}
