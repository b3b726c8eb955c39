pub mod ledger;
pub mod registry;
pub mod seed;

use anyhow::Context;
use parking_lot::RwLock;

use self::{ledger::SlotLedger, registry::AppointmentRegistry};
use crate::{
    error::ApiError,
    models::{
        appointments::{Appointment, BookingRequest},
        doctors::{self, Doctor},
        slots::Slot,
    },
};

struct Tables {
    ledger: SlotLedger,
    registry: AppointmentRegistry,
}

/// Process-wide booking state. Readers share the lock; booking and
/// cancelling hold it exclusively so the slot flip and the registry change
/// are seen together or not at all.
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    pub fn new(doctors: Vec<Doctor>) -> anyhow::Result<Self> {
        Ok(Self {
            tables: RwLock::new(Tables {
                ledger: SlotLedger::new(doctors)?,
                registry: AppointmentRegistry::default(),
            }),
        })
    }

    pub fn seeded() -> anyhow::Result<Self> {
        Self::new(seed::doctors()).context("Invalid seed data")
    }

    pub fn list_doctors(&self, specialty: Option<&str>) -> Vec<Doctor> {
        let tables = self.tables.read();
        doctors::filter_by_specialty(tables.ledger.doctors(), specialty)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_doctor(&self, doctor_id: u64) -> Result<Doctor, ApiError> {
        self.tables.read().ledger.get_doctor(doctor_id).cloned()
    }

    pub fn list_slots(&self, doctor_id: u64, date: Option<&str>) -> Result<Vec<Slot>, ApiError> {
        self.tables.read().ledger.list_slots(doctor_id, date)
    }

    pub fn specialties(&self) -> Vec<String> {
        doctors::specialties(self.tables.read().ledger.doctors())
    }

    pub fn book(&self, request: &BookingRequest) -> Result<Appointment, ApiError> {
        let mut tables = self.tables.write();
        let Tables { ledger, registry } = &mut *tables;
        registry.book(ledger, request)
    }

    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.tables.read().registry.list().to_vec()
    }

    pub fn get_appointment(&self, id: u64) -> Result<Appointment, ApiError> {
        self.tables.read().registry.get(id).cloned()
    }

    pub fn cancel_appointment(&self, id: u64) -> Result<Appointment, ApiError> {
        let mut tables = self.tables.write();
        let Tables { ledger, registry } = &mut *tables;
        registry.cancel(ledger, id)
    }
}
