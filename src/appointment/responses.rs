use serde::Serialize;

use crate::models::appointments::Appointment;

pub const BOOKED_MESSAGE: &str = "Appointment booked successfully";
pub const CANCELLED_MESSAGE: &str = "Appointment cancelled successfully";

#[derive(Serialize)]
pub struct AppointResponse {
    pub message: String,
    pub appointment: Appointment,
}
