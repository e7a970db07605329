use crate::draft::PaymentDetails;
use ruzizi_core::payment::PaymentMethod;
use ruzizi_shared::pii::Masked;

/// Cosmetic card-number shaping: digits only, capped at 16, grouped into
/// space-separated 4-digit blocks. No Luhn check is performed anywhere.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).take(16).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expiry shaping: digits capped at 4, rendered MM/YY once the month part
/// is complete.
pub fn format_expiry(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digits.len() <= 2 {
        digits.into_iter().collect()
    } else {
        let (month, year) = digits.split_at(2);
        format!(
            "{}/{}",
            month.iter().collect::<String>(),
            year.iter().collect::<String>()
        )
    }
}

/// CVC shaping: digits only, capped at 4.
pub fn format_cvc(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect()
}

/// Payment-step inputs. Continue is gated on the terms checkbox regardless
/// of the chosen method.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card_number: String,
    pub card_holder: String,
    pub expiry: String,
    pub cvc: String,
    pub terms_accepted: bool,
}

impl PaymentForm {
    pub fn new(method: PaymentMethod) -> Self {
        Self {
            method,
            card_number: String::new(),
            card_holder: String::new(),
            expiry: String::new(),
            cvc: String::new(),
            terms_accepted: false,
        }
    }

    /// Type into the card number field; the stored value is the shaped one.
    pub fn enter_card_number(&mut self, raw: &str) {
        self.card_number = format_card_number(raw);
    }

    pub fn enter_expiry(&mut self, raw: &str) {
        self.expiry = format_expiry(raw);
    }

    pub fn enter_cvc(&mut self, raw: &str) {
        self.cvc = format_cvc(raw);
    }

    pub fn accept_terms(&mut self) {
        self.terms_accepted = true;
    }

    pub fn can_continue(&self) -> bool {
        self.terms_accepted
    }

    /// Freeze the form into the draft's payment block. Card fields are only
    /// carried for the card method; sensitive values are masked.
    pub fn into_details(self, completed: bool) -> PaymentDetails {
        let is_card = self.method == PaymentMethod::Card;
        PaymentDetails {
            method: self.method,
            card_number: is_card.then(|| Masked::new(self.card_number)),
            card_holder: if is_card && !self.card_holder.trim().is_empty() {
                Some(self.card_holder.trim().to_string())
            } else {
                None
            },
            expiry: is_card.then_some(self.expiry),
            cvc: is_card.then(|| Masked::new(self.cvc)),
            completed,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentFormError {
    #[error("Terms and conditions must be accepted")]
    TermsNotAccepted,
}
