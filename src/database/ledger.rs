use anyhow::bail;

use crate::{
    error::ApiError,
    models::{doctors::Doctor, slots::Slot},
};

/// Doctors and their bookable slots. Slots are flipped, never added or removed.
#[derive(Debug)]
pub struct SlotLedger {
    doctors: Vec<Doctor>,
}

impl SlotLedger {
    pub fn new(doctors: Vec<Doctor>) -> anyhow::Result<Self> {
        for (i, doctor) in doctors.iter().enumerate() {
            if doctors[..i].iter().any(|d| d.id == doctor.id) {
                bail!("duplicate doctor id {}", doctor.id);
            }
            for (j, slot) in doctor.available_slots.iter().enumerate() {
                if doctor.available_slots[..j]
                    .iter()
                    .any(|s| s.is_at(&slot.date, &slot.time))
                {
                    bail!(
                        "doctor {} has slot {} {} twice",
                        doctor.id,
                        slot.date,
                        slot.time
                    );
                }
            }
        }
        Ok(Self { doctors })
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn get_doctor(&self, doctor_id: u64) -> Result<&Doctor, ApiError> {
        self.doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .ok_or(ApiError::DoctorNotFound)
    }

    pub fn list_slots(&self, doctor_id: u64, date: Option<&str>) -> Result<Vec<Slot>, ApiError> {
        let doctor = self.get_doctor(doctor_id)?;
        Ok(doctor.slots_on(date).cloned().collect())
    }

    fn slot_mut(&mut self, doctor_id: u64, date: &str, time: &str) -> Option<&mut Slot> {
        self.doctors
            .iter_mut()
            .find(|d| d.id == doctor_id)?
            .available_slots
            .iter_mut()
            .find(|s| s.is_at(date, time))
    }

    /// Takes the slot. Fails unless it exists and is still free.
    pub fn reserve(&mut self, doctor_id: u64, date: &str, time: &str) -> Result<(), ApiError> {
        match self.slot_mut(doctor_id, date, time) {
            Some(slot) if slot.available => {
                slot.available = false;
                Ok(())
            }
            _ => Err(ApiError::SlotUnavailable),
        }
    }

    /// Frees the slot again. Returns whether a matching slot exists.
    pub fn release(&mut self, doctor_id: u64, date: &str, time: &str) -> bool {
        match self.slot_mut(doctor_id, date, time) {
            Some(slot) => {
                slot.available = true;
                true
            }
            None => false,
        }
    }
}
