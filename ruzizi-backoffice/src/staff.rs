use chrono::{DateTime, NaiveDate, Utc};
use ruzizi_core::auth::{ensure_role, StaffRole};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub role: StaffRole,
    pub email: String,
    pub phone: Option<String>,
    pub hotel_id: String,
    pub hired_on: NaiveDate,
    pub is_active: bool,
}

impl StaffMember {
    pub fn new(name: &str, role: StaffRole, email: &str, hotel_id: &str, hired_on: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role,
            email: email.to_string(),
            phone: None,
            hotel_id: hotel_id.to_string(),
            hired_on,
            is_active: true,
        }
    }
}

/// Staff roster for the admin panel. In-memory sample data only.
pub struct StaffRegistry {
    members: HashMap<Uuid, StaffMember>,
}

impl StaffRegistry {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }

    pub fn add(&mut self, member: StaffMember) -> Uuid {
        let id = member.id;
        self.members.insert(id, member);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&StaffMember> {
        self.members.get(id)
    }

    pub fn list_active(&self) -> Vec<&StaffMember> {
        self.members.values().filter(|m| m.is_active).collect()
    }

    pub fn by_hotel(&self, hotel_id: &str) -> Vec<&StaffMember> {
        self.members
            .values()
            .filter(|m| m.hotel_id == hotel_id && m.is_active)
            .collect()
    }

    /// Deactivate instead of delete; the roster keeps history.
    pub fn deactivate(&mut self, id: &Uuid) -> Result<(), StaffError> {
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| StaffError::NotFound(id.to_string()))?;
        member.is_active = false;
        Ok(())
    }
}

impl Default for StaffRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One month's salary entry for one staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub month: String, // "2026-08"
    pub gross_cents: i64,
    pub paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Salary ledger. Writes require the Admin role; reads are open to any
/// back-office role.
pub struct SalaryLedger {
    records: Vec<SalaryRecord>,
}

impl SalaryLedger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn record(
        &mut self,
        actor: StaffRole,
        staff_id: Uuid,
        month: &str,
        gross_cents: i64,
    ) -> Result<Uuid, StaffError> {
        ensure_role(actor, StaffRole::Admin).map_err(|e| StaffError::Forbidden(e.to_string()))?;

        if self
            .records
            .iter()
            .any(|r| r.staff_id == staff_id && r.month == month)
        {
            return Err(StaffError::DuplicateSalary {
                staff_id: staff_id.to_string(),
                month: month.to_string(),
            });
        }

        let record = SalaryRecord {
            id: Uuid::new_v4(),
            staff_id,
            month: month.to_string(),
            gross_cents,
            paid: false,
            paid_at: None,
        };
        let id = record.id;
        self.records.push(record);
        Ok(id)
    }

    pub fn mark_paid(&mut self, actor: StaffRole, record_id: &Uuid) -> Result<(), StaffError> {
        ensure_role(actor, StaffRole::Admin).map_err(|e| StaffError::Forbidden(e.to_string()))?;

        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id == record_id)
            .ok_or_else(|| StaffError::NotFound(record_id.to_string()))?;

        record.paid = true;
        record.paid_at = Some(Utc::now());
        Ok(())
    }

    /// Total gross still unpaid for a month.
    pub fn pending_for_month(&self, month: &str) -> i64 {
        self.records
            .iter()
            .filter(|r| r.month == month && !r.paid)
            .map(|r| r.gross_cents)
            .sum()
    }

    pub fn for_staff(&self, staff_id: &Uuid) -> Vec<&SalaryRecord> {
        self.records
            .iter()
            .filter(|r| &r.staff_id == staff_id)
            .collect()
    }
}

impl Default for SalaryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StaffError {
    #[error("Staff record not found: {0}")]
    NotFound(String),

    #[error("Operation forbidden: {0}")]
    Forbidden(String),

    #[error("Salary already recorded for {staff_id} in {month}")]
    DuplicateSalary { staff_id: String, month: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> StaffMember {
        StaffMember::new(
            "Claudine Ingabire",
            StaffRole::Receptionist,
            "claudine@ruzizi.example",
            "hotel-1",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_roster_crud() {
        let mut registry = StaffRegistry::new();
        let id = registry.add(member());

        assert_eq!(registry.list_active().len(), 1);
        assert_eq!(registry.by_hotel("hotel-1").len(), 1);

        registry.deactivate(&id).unwrap();
        assert!(registry.list_active().is_empty());
        assert!(registry.get(&id).is_some());
    }

    #[test]
    fn test_salary_requires_admin() {
        let mut ledger = SalaryLedger::new();
        let staff_id = Uuid::new_v4();

        let err = ledger
            .record(StaffRole::Receptionist, staff_id, "2026-08", 350_000)
            .unwrap_err();
        assert!(matches!(err, StaffError::Forbidden(_)));

        ledger
            .record(StaffRole::Admin, staff_id, "2026-08", 350_000)
            .unwrap();
    }

    #[test]
    fn test_duplicate_month_rejected() {
        let mut ledger = SalaryLedger::new();
        let staff_id = Uuid::new_v4();

        ledger
            .record(StaffRole::Admin, staff_id, "2026-08", 350_000)
            .unwrap();
        assert!(matches!(
            ledger.record(StaffRole::Admin, staff_id, "2026-08", 350_000),
            Err(StaffError::DuplicateSalary { .. })
        ));
    }

    #[test]
    fn test_pending_total_drops_when_paid() {
        let mut ledger = SalaryLedger::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let record_a = ledger.record(StaffRole::Admin, a, "2026-08", 350_000).unwrap();
        ledger.record(StaffRole::Admin, b, "2026-08", 420_000).unwrap();
        assert_eq!(ledger.pending_for_month("2026-08"), 770_000);

        ledger.mark_paid(StaffRole::Admin, &record_a).unwrap();
        assert_eq!(ledger.pending_for_month("2026-08"), 420_000);
        assert_eq!(ledger.for_staff(&a).len(), 1);
    }
}
