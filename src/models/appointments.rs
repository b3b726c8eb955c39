use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

pub const APPOINT_STATUS_CONFIRMED: &str = "confirmed";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub doctor_id: u64,
    pub doctor_name: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub reason: String,
    pub status: String,
    #[serde(serialize_with = "crate::utils::serialize_time_str")]
    pub booked_at: DateTime<Utc>,
}

/// Booking payload as it arrives on the wire. Every field is optional here so
/// that validation can report all missing ones at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub doctor_id: Value,
    pub date: Option<String>,
    pub time: Option<String>,
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub patient_phone: Option<String>,
    pub reason: Option<String>,
}

/// A booking request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub doctor_id: u64,
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub reason: String,
}

fn given(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl BookingRequest {
    pub fn validate(&self) -> Result<NewAppointment, ApiError> {
        let mut missing = Vec::new();
        if !crate::utils::is_present(&self.doctor_id) {
            missing.push("doctorId");
        }
        let date = given(&self.date);
        let time = given(&self.time);
        let patient_name = given(&self.patient_name);
        let patient_email = given(&self.patient_email);
        let patient_phone = given(&self.patient_phone);
        for (name, field) in [
            ("date", date),
            ("time", time),
            ("patientName", patient_name),
            ("patientEmail", patient_email),
            ("patientPhone", patient_phone),
        ] {
            if field.is_none() {
                missing.push(name);
            }
        }

        match (date, time, patient_name, patient_email, patient_phone) {
            (Some(date), Some(time), Some(patient_name), Some(patient_email), Some(patient_phone))
                if missing.is_empty() =>
            {
                // present but not a number: no doctor can have that id
                let doctor_id =
                    crate::utils::parse_id_value(&self.doctor_id).ok_or(ApiError::DoctorNotFound)?;
                Ok(NewAppointment {
                    doctor_id,
                    date: date.to_string(),
                    time: time.to_string(),
                    patient_name: patient_name.to_string(),
                    patient_email: patient_email.to_string(),
                    patient_phone: patient_phone.to_string(),
                    reason: self.reason.clone().unwrap_or_default(),
                })
            }
            _ => Err(ApiError::Validation(missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_request() -> BookingRequest {
        serde_json::from_value(json!({
            "doctorId": 1,
            "date": "2024-01-15",
            "time": "09:00",
            "patientName": "John Doe",
            "patientEmail": "john.doe@email.com",
            "patientPhone": "+1-555-1234",
        }))
        .unwrap()
    }

    #[test]
    fn complete_request_validates_with_empty_reason() {
        let new = full_request().validate().unwrap();
        assert_eq!(new.doctor_id, 1);
        assert_eq!(new.reason, "");
    }

    #[test]
    fn string_doctor_id_is_accepted() {
        let mut req = full_request();
        req.doctor_id = json!("2");
        assert_eq!(req.validate().unwrap().doctor_id, 2);
    }

    #[test]
    fn every_missing_field_is_reported() {
        let req = BookingRequest {
            doctor_id: json!(0),
            date: Some("2024-01-15".to_string()),
            patient_email: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            req.validate(),
            Err(ApiError::Validation(vec![
                "doctorId",
                "time",
                "patientName",
                "patientEmail",
                "patientPhone"
            ]))
        );
    }

    #[test]
    fn fractional_doctor_id_is_truncated() {
        let mut req = full_request();
        req.doctor_id = json!(1.0);
        assert_eq!(req.validate().unwrap().doctor_id, 1);
        req.doctor_id = json!("1.5");
        assert_eq!(req.validate().unwrap().doctor_id, 1);
    }

    #[test]
    fn non_numeric_doctor_id_is_not_found() {
        let mut req = full_request();
        req.doctor_id = json!("abc");
        assert_eq!(req.validate(), Err(ApiError::DoctorNotFound));
    }
}
