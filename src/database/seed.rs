use crate::models::{doctors::Doctor, slots::Slot};

fn slots(raw: &[(&str, &str, bool)]) -> Vec<Slot> {
    raw.iter()
        .map(|&(date, time, available)| Slot::new(date, time, available))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: u64,
    name: &str,
    specialty: &str,
    email: &str,
    phone: &str,
    experience: &str,
    rating: f64,
    available_slots: Vec<Slot>,
) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        image: format!("/images/doctor{}.jpg", id),
        experience: experience.to_string(),
        rating,
        available_slots,
    }
}

/// Doctors the server starts with.
pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(
            1,
            "Dr. Sarah Johnson",
            "Cardiology",
            "sarah.johnson@hospital.com",
            "+1-555-0101",
            "15 years",
            4.9,
            slots(&[
                ("2024-01-15", "09:00", true),
                ("2024-01-15", "10:00", true),
                ("2024-01-15", "11:00", false),
                ("2024-01-15", "14:00", true),
                ("2024-01-16", "09:00", true),
                ("2024-01-16", "10:00", true),
                ("2024-01-16", "11:00", true),
            ]),
        ),
        doctor(
            2,
            "Dr. Michael Chen",
            "Neurology",
            "michael.chen@hospital.com",
            "+1-555-0102",
            "12 years",
            4.8,
            slots(&[
                ("2024-01-15", "08:00", true),
                ("2024-01-15", "09:00", true),
                ("2024-01-15", "10:00", false),
                ("2024-01-15", "15:00", true),
                ("2024-01-16", "08:00", true),
                ("2024-01-16", "09:00", true),
            ]),
        ),
        doctor(
            3,
            "Dr. Emily Rodriguez",
            "Pediatrics",
            "emily.rodriguez@hospital.com",
            "+1-555-0103",
            "10 years",
            4.9,
            slots(&[
                ("2024-01-15", "09:30", true),
                ("2024-01-15", "10:30", true),
                ("2024-01-15", "11:30", true),
                ("2024-01-15", "14:30", true),
                ("2024-01-16", "09:30", true),
                ("2024-01-16", "10:30", false),
            ]),
        ),
        doctor(
            4,
            "Dr. Robert Thompson",
            "Orthopedics",
            "robert.thompson@hospital.com",
            "+1-555-0104",
            "18 years",
            4.7,
            slots(&[
                ("2024-01-15", "08:30", true),
                ("2024-01-15", "09:30", true),
                ("2024-01-15", "10:30", true),
                ("2024-01-15", "13:30", true),
                ("2024-01-16", "08:30", false),
                ("2024-01-16", "09:30", true),
            ]),
        ),
    ]
}
