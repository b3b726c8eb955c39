//! The four-step booking flow a patient walks through before an appointment
//! is requested: pick a doctor, pick a slot, fill in contact details, confirm.
//!
//! The wizard only holds selections. Reserving the slot is left to a
//! [`BookingBackend`]; [`Store`] is one.

mod summary;

use thiserror::Error;

pub use self::summary::{Summary, SummaryRow};
use crate::{
    database::Store,
    error::ApiError,
    models::{
        appointments::{Appointment, BookingRequest},
        doctors::Doctor,
        slots::Slot,
    },
};

pub trait BookingBackend {
    fn book(&self, request: &BookingRequest) -> Result<Appointment, ApiError>;
}

impl BookingBackend for Store {
    fn book(&self, request: &BookingRequest) -> Result<Appointment, ApiError> {
        Store::book(self, request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    SelectDoctor = 1,
    SelectSlot = 2,
    EnterPatientInfo = 3,
    Confirm = 4,
}

impl Step {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::SelectDoctor => Some(Step::SelectSlot),
            Step::SelectSlot => Some(Step::EnterPatientInfo),
            Step::EnterPatientInfo => Some(Step::Confirm),
            Step::Confirm => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::SelectDoctor => None,
            Step::SelectSlot => Some(Step::SelectDoctor),
            Step::EnterPatientInfo => Some(Step::SelectSlot),
            Step::Confirm => Some(Step::EnterPatientInfo),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub reason: String,
}

impl PatientForm {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Which buttons are visible and usable for the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub show_previous: bool,
    pub show_next: bool,
    pub next_enabled: bool,
    pub show_book: bool,
    pub completed: Vec<Step>,
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Booking can only be submitted from the confirmation step")]
    NotReady,
    #[error(transparent)]
    Rejected(#[from] ApiError),
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: Step,
    doctor: Option<Doctor>,
    date: Option<String>,
    time: Option<String>,
    patient: PatientForm,
    completed: Vec<Step>,
    summary: Option<Summary>,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self {
            step: Step::SelectDoctor,
            doctor: None,
            date: None,
            time: None,
            patient: PatientForm::default(),
            completed: Vec::new(),
            summary: None,
        }
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn doctor(&self) -> Option<&Doctor> {
        self.doctor.as_ref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn patient(&self) -> &PatientForm {
        &self.patient
    }

    /// Contact details can only be edited on the patient step.
    pub fn patient_mut(&mut self) -> Option<&mut PatientForm> {
        if self.step != Step::EnterPatientInfo {
            return None;
        }
        Some(&mut self.patient)
    }

    /// Only on the first step. A slot picked for another doctor means
    /// nothing for this one.
    pub fn select_doctor(&mut self, doctor: &Doctor) -> bool {
        if self.step != Step::SelectDoctor {
            return false;
        }
        if self.doctor.as_ref().map(|d| d.id) != Some(doctor.id) {
            self.time = None;
        }
        self.doctor = Some(doctor.clone());
        true
    }

    /// Picks a doctor from the directory and moves on to slot selection.
    pub fn select_doctor_and_advance(&mut self, doctor: &Doctor) -> bool {
        self.select_doctor(doctor) && self.next()
    }

    pub fn select_date(&mut self, date: &str) -> bool {
        if self.step != Step::SelectSlot {
            return false;
        }
        self.date = Some(date.to_string()).filter(|d| !d.is_empty());
        self.time = None;
        true
    }

    /// Booked slots cannot be picked.
    pub fn select_time(&mut self, slot: &Slot) -> bool {
        if self.step != Step::SelectSlot || !slot.available {
            return false;
        }
        self.date = Some(slot.date.clone());
        self.time = Some(slot.time.clone());
        true
    }

    pub fn can_proceed(&self) -> bool {
        match self.step {
            Step::SelectDoctor => self.doctor.is_some(),
            Step::SelectSlot => self.date.is_some() && self.time.is_some(),
            Step::EnterPatientInfo => self.patient.is_complete(),
            Step::Confirm => false,
        }
    }

    pub fn next(&mut self) -> bool {
        let next = match self.step.next() {
            Some(next) if self.can_proceed() => next,
            _ => return false,
        };

        if !self.completed.contains(&self.step) {
            self.completed.push(self.step);
        }
        self.step = next;
        if self.step == Step::Confirm {
            self.summary = self.render_summary();
        }
        true
    }

    pub fn previous(&mut self) -> bool {
        let previous = match self.step.previous() {
            Some(previous) => previous,
            None => return false,
        };

        let current = self.step;
        self.completed.retain(|step| *step != current);
        if current == Step::Confirm {
            self.summary = None;
        }
        self.step = previous;
        true
    }

    fn render_summary(&self) -> Option<Summary> {
        match (&self.doctor, &self.date, &self.time) {
            (Some(doctor), Some(date), Some(time)) => {
                Some(Summary::render(doctor, date, time, &self.patient))
            }
            _ => None,
        }
    }

    /// Present only on the confirmation step.
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn navigation(&self) -> Navigation {
        Navigation {
            show_previous: self.step > Step::SelectDoctor,
            show_next: self.step < Step::Confirm,
            next_enabled: self.can_proceed(),
            show_book: self.step == Step::Confirm,
            completed: self.completed.clone(),
        }
    }

    pub fn booking_request(&self) -> Option<BookingRequest> {
        let doctor = self.doctor.as_ref()?;
        Some(BookingRequest {
            doctor_id: doctor.id.into(),
            date: self.date.clone(),
            time: self.time.clone(),
            patient_name: Some(self.patient.name.trim().to_string()),
            patient_email: Some(self.patient.email.trim().to_string()),
            patient_phone: Some(self.patient.phone.trim().to_string()),
            reason: Some(self.patient.reason.trim().to_string()),
        })
    }

    /// Sends the booking. A confirmed booking starts the wizard over; a
    /// rejected one leaves everything in place for another try.
    pub fn submit<B: BookingBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Result<Appointment, WizardError> {
        if self.step != Step::Confirm {
            return Err(WizardError::NotReady);
        }
        let request = self.booking_request().ok_or(WizardError::NotReady)?;

        let appointment = backend.book(&request)?;
        self.reset();
        Ok(appointment)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
