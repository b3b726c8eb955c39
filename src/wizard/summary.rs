use crate::{
    models::doctors::Doctor,
    utils::{format_date_display, format_time_display},
};

use super::PatientForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Read-only recap shown on the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn render(doctor: &Doctor, date: &str, time: &str, patient: &PatientForm) -> Self {
        let mut rows = vec![
            ("Doctor", doctor.name.clone()),
            ("Specialty", doctor.specialty.clone()),
            ("Date", format_date_display(date)),
            ("Time", format_time_display(time)),
            ("Patient Name", patient.name.trim().to_string()),
            ("Email", patient.email.trim().to_string()),
            ("Phone", patient.phone.trim().to_string()),
        ];
        // shown as it will be sent
        let reason = patient.reason.trim();
        if !reason.is_empty() {
            rows.push(("Reason", reason.to_string()));
        }

        Self {
            rows: rows
                .into_iter()
                .map(|(label, value)| SummaryRow { label, value })
                .collect(),
        }
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}
