use chrono::Utc;

use super::ledger::SlotLedger;
use crate::{
    error::ApiError,
    models::appointments::{Appointment, BookingRequest, APPOINT_STATUS_CONFIRMED},
};

/// Booked appointments in insertion order. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct AppointmentRegistry {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl Default for AppointmentRegistry {
    fn default() -> Self {
        Self {
            appointments: Vec::new(),
            next_id: 1,
        }
    }
}

impl AppointmentRegistry {
    pub fn book(
        &mut self,
        ledger: &mut SlotLedger,
        request: &BookingRequest,
    ) -> Result<Appointment, ApiError> {
        let new = request.validate()?;

        let doctor = ledger.get_doctor(new.doctor_id)?;
        let doctor_name = doctor.name.clone();
        let specialty = doctor.specialty.clone();

        ledger.reserve(new.doctor_id, &new.date, &new.time)?;

        let appointment = Appointment {
            id: self.next_id,
            doctor_id: new.doctor_id,
            doctor_name,
            specialty,
            date: new.date,
            time: new.time,
            patient_name: new.patient_name,
            patient_email: new.patient_email,
            patient_phone: new.patient_phone,
            reason: new.reason,
            status: APPOINT_STATUS_CONFIRMED.to_string(),
            booked_at: Utc::now(),
        };
        self.next_id += 1;
        self.appointments.push(appointment.clone());

        Ok(appointment)
    }

    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: u64) -> Result<&Appointment, ApiError> {
        self.appointments
            .iter()
            .find(|a| a.id == id)
            .ok_or(ApiError::AppointmentNotFound)
    }

    pub fn cancel(&mut self, ledger: &mut SlotLedger, id: u64) -> Result<Appointment, ApiError> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or(ApiError::AppointmentNotFound)?;

        let appointment = self.appointments.remove(index);
        if !ledger.release(appointment.doctor_id, &appointment.date, &appointment.time) {
            log::debug!(
                "appointment {} had no slot left to release ({} {} {})",
                appointment.id,
                appointment.doctor_id,
                appointment.date,
                appointment.time
            );
        }

        Ok(appointment)
    }
}
