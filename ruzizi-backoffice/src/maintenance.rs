use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Resolved,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub room_id: Uuid,
    pub description: String,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub reported_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Maintenance request log for the admin panel
pub struct MaintenanceLog {
    requests: HashMap<Uuid, MaintenanceRequest>,
}

impl MaintenanceLog {
    pub fn new() -> Self {
        Self {
            requests: HashMap::new(),
        }
    }

    pub fn report(
        &mut self,
        room_id: Uuid,
        description: &str,
        priority: MaintenancePriority,
    ) -> Uuid {
        let request = MaintenanceRequest {
            id: Uuid::new_v4(),
            room_id,
            description: description.to_string(),
            priority,
            status: MaintenanceStatus::Open,
            reported_at: Utc::now(),
            resolved_at: None,
        };
        let id = request.id;
        self.requests.insert(id, request);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&MaintenanceRequest> {
        self.requests.get(id)
    }

    /// Transition: Open -> InProgress
    pub fn start(&mut self, id: &Uuid) -> Result<(), MaintenanceError> {
        let request = self.get_mut(id)?;

        if request.status != MaintenanceStatus::Open {
            return Err(MaintenanceError::InvalidTransition {
                from: format!("{:?}", request.status),
                to: "IN_PROGRESS".to_string(),
            });
        }

        request.status = MaintenanceStatus::InProgress;
        Ok(())
    }

    /// Transition: InProgress -> Resolved
    pub fn resolve(&mut self, id: &Uuid) -> Result<(), MaintenanceError> {
        let request = self.get_mut(id)?;

        if request.status != MaintenanceStatus::InProgress {
            return Err(MaintenanceError::InvalidTransition {
                from: format!("{:?}", request.status),
                to: "RESOLVED".to_string(),
            });
        }

        request.status = MaintenanceStatus::Resolved;
        request.resolved_at = Some(Utc::now());
        Ok(())
    }

    /// Cancel a request that was never worked on
    pub fn cancel(&mut self, id: &Uuid) -> Result<(), MaintenanceError> {
        let request = self.get_mut(id)?;

        if request.status != MaintenanceStatus::Open {
            return Err(MaintenanceError::InvalidTransition {
                from: format!("{:?}", request.status),
                to: "CANCELLED".to_string(),
            });
        }

        request.status = MaintenanceStatus::Cancelled;
        Ok(())
    }

    pub fn open_requests(&self) -> Vec<&MaintenanceRequest> {
        self.requests
            .values()
            .filter(|r| {
                matches!(
                    r.status,
                    MaintenanceStatus::Open | MaintenanceStatus::InProgress
                )
            })
            .collect()
    }

    pub fn for_room(&self, room_id: &Uuid) -> Vec<&MaintenanceRequest> {
        self.requests
            .values()
            .filter(|r| &r.room_id == room_id)
            .collect()
    }

    fn get_mut(&mut self, id: &Uuid) -> Result<&mut MaintenanceRequest, MaintenanceError> {
        self.requests
            .get_mut(id)
            .ok_or_else(|| MaintenanceError::NotFound(id.to_string()))
    }
}

impl Default for MaintenanceLog {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MaintenanceError {
    #[error("Maintenance request not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}
