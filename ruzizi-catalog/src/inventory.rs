use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Availability tracking for a room (count of identical units).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStock {
    pub room_id: Uuid,
    pub available_units: i32,
    pub total_units: i32,
    pub reserved_units: i32,
    pub offline_units: i32,
}

/// In-memory availability ledger for the chain's rooms. Units move between
/// available, reserved (a draft holds them), and offline (maintenance).
pub struct RoomInventory {
    stock: HashMap<Uuid, RoomStock>,
}

impl RoomInventory {
    pub fn new() -> Self {
        Self {
            stock: HashMap::new(),
        }
    }

    /// Register a room with its unit count.
    pub fn initialize(&mut self, room_id: Uuid, total_units: i32) {
        self.stock.insert(
            room_id,
            RoomStock {
                room_id,
                available_units: total_units,
                total_units,
                reserved_units: 0,
                offline_units: 0,
            },
        );
    }

    pub fn get(&self, room_id: &Uuid) -> Option<&RoomStock> {
        self.stock.get(room_id)
    }

    /// Rooms the inventory has never heard of are treated as available so a
    /// catalog without stock tracking keeps working.
    pub fn is_available(&self, room_id: &Uuid) -> bool {
        self.stock
            .get(room_id)
            .map_or(true, |s| s.available_units > 0)
    }

    /// Hold units while a booking draft is in flight.
    pub fn reserve(&mut self, room_id: &Uuid, units: i32) -> Result<(), InventoryError> {
        let stock = self.stock_mut(room_id)?;

        if stock.available_units < units {
            return Err(InventoryError::InsufficientAvailability {
                requested: units,
                available: stock.available_units,
            });
        }

        stock.available_units -= units;
        stock.reserved_units += units;
        Ok(())
    }

    /// Return held units (draft abandoned).
    pub fn release(&mut self, room_id: &Uuid, units: i32) -> Result<(), InventoryError> {
        let stock = self.stock_mut(room_id)?;
        stock.available_units += units;
        stock.reserved_units = stock.reserved_units.saturating_sub(units);
        Ok(())
    }

    /// Convert held units into a confirmed booking.
    pub fn commit(&mut self, room_id: &Uuid, units: i32) -> Result<(), InventoryError> {
        let stock = self.stock_mut(room_id)?;

        if stock.reserved_units < units {
            return Err(InventoryError::InsufficientReserved {
                requested: units,
                reserved: stock.reserved_units,
            });
        }

        stock.reserved_units -= units;
        Ok(())
    }

    /// Pull units out of sale for maintenance.
    pub fn take_offline(&mut self, room_id: &Uuid, units: i32) -> Result<(), InventoryError> {
        let stock = self.stock_mut(room_id)?;

        if stock.available_units < units {
            return Err(InventoryError::InsufficientAvailability {
                requested: units,
                available: stock.available_units,
            });
        }

        stock.available_units -= units;
        stock.offline_units += units;
        Ok(())
    }

    /// Return maintenance units to sale.
    pub fn bring_online(&mut self, room_id: &Uuid, units: i32) -> Result<(), InventoryError> {
        let stock = self.stock_mut(room_id)?;
        let moved = units.min(stock.offline_units);
        stock.offline_units -= moved;
        stock.available_units += moved;
        Ok(())
    }

    /// Share of units not currently available for sale.
    pub fn utilization(&self, room_id: &Uuid) -> Option<f64> {
        self.stock.get(room_id).map(|s| {
            if s.total_units == 0 {
                0.0
            } else {
                1.0 - (s.available_units as f64 / s.total_units as f64)
            }
        })
    }

    pub fn stock(&self) -> impl Iterator<Item = &RoomStock> {
        self.stock.values()
    }

    fn stock_mut(&mut self, room_id: &Uuid) -> Result<&mut RoomStock, InventoryError> {
        self.stock
            .get_mut(room_id)
            .ok_or_else(|| InventoryError::NotFound(room_id.to_string()))
    }
}

impl Default for RoomInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Room not tracked in inventory: {0}")]
    NotFound(String),

    #[error("Insufficient availability: requested {requested}, available {available}")]
    InsufficientAvailability { requested: i32, available: i32 },

    #[error("Insufficient reserved units: requested {requested}, reserved {reserved}")]
    InsufficientReserved { requested: i32, reserved: i32 },
}
