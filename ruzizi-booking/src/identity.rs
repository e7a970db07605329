use crate::draft::{GuestDetail, IdentityDetails};
use serde::Serialize;

/// Raw identity-step inputs as typed by the guest.
#[derive(Debug, Clone, Default)]
pub struct IdentityForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub special_requests: String,
    pub guest_details: Vec<GuestDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field failures for one submission. Surfaced inline to the guest;
/// never logged or propagated further, it only blocks this step.
#[derive(Debug, thiserror::Error)]
#[error("Identity form rejected ({} invalid fields)", .errors.len())]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

/// Required: first/last name >= 2 chars, email of valid shape, phone >= 6
/// chars, country >= 2 chars. Address, city and zip are optional.
pub fn validate(form: &IdentityForm) -> Result<IdentityDetails, ValidationFailure> {
    let mut errors = Vec::new();

    let first_name = form.first_name.trim();
    if first_name.chars().count() < 2 {
        errors.push(FieldError {
            field: "first_name",
            message: "First name must be at least 2 characters".to_string(),
        });
    }

    let last_name = form.last_name.trim();
    if last_name.chars().count() < 2 {
        errors.push(FieldError {
            field: "last_name",
            message: "Last name must be at least 2 characters".to_string(),
        });
    }

    let email = form.email.trim();
    if !email_shape_ok(email) {
        errors.push(FieldError {
            field: "email",
            message: "Enter a valid email address".to_string(),
        });
    }

    let phone = form.phone.trim();
    if phone.chars().count() < 6 {
        errors.push(FieldError {
            field: "phone",
            message: "Phone must be at least 6 characters".to_string(),
        });
    }

    let country = form.country.trim();
    if country.chars().count() < 2 {
        errors.push(FieldError {
            field: "country",
            message: "Country must be at least 2 characters".to_string(),
        });
    }

    if !errors.is_empty() {
        return Err(ValidationFailure { errors });
    }

    let optional = |value: &str| {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    };

    Ok(IdentityDetails {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        country: country.to_string(),
        address: optional(&form.address),
        city: optional(&form.city),
        zip: optional(&form.zip),
    })
}

// local@domain where the domain carries at least one dot, with no empty
// labels on either side of it.
fn email_shape_ok(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
