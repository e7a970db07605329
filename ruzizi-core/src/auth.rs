use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Back-office roles, ordered by privilege (Receptionist < Manager < Admin).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Receptionist,
    Manager,
    Admin,
}

// Hard-coded staff credentials. There is no user database; login is a
// constant comparison yielding a role.
const STAFF_CREDENTIALS: &[(&str, &str, StaffRole)] = &[
    ("admin", "ruzizi@admin", StaffRole::Admin),
    ("manager", "ruzizi@manager", StaffRole::Manager),
    ("frontdesk", "ruzizi@desk", StaffRole::Receptionist),
];

pub fn authenticate(username: &str, password: &str) -> CoreResult<StaffRole> {
    STAFF_CREDENTIALS
        .iter()
        .find(|(user, pass, _)| *user == username && *pass == password)
        .map(|(_, _, role)| *role)
        .ok_or_else(|| CoreError::AuthError("Unknown username or password".to_string()))
}

/// Plain role comparison; there is no further authorization model.
pub fn ensure_role(actual: StaffRole, required: StaffRole) -> CoreResult<()> {
    if actual >= required {
        Ok(())
    } else {
        Err(CoreError::AuthError(format!(
            "Requires {:?} role, have {:?}",
            required, actual
        )))
    }
}
