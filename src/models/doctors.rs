use serde::Serialize;

use super::slots::Slot;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub image: String,
    pub experience: String,
    pub rating: f64,
    pub available_slots: Vec<Slot>,
}

impl Doctor {
    pub fn slots_on<'a>(&'a self, date: Option<&'a str>) -> impl Iterator<Item = &'a Slot> + 'a {
        self.available_slots
            .iter()
            .filter(move |slot| date.map_or(true, |date| slot.date == date))
    }
}

/// Doctors of one specialty, in directory order. `None` keeps everyone.
pub fn filter_by_specialty<'a>(doctors: &'a [Doctor], specialty: Option<&str>) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|doctor| specialty.map_or(true, |s| doctor.specialty == s))
        .collect()
}

/// Distinct specialties in first-appearance order.
pub fn specialties(doctors: &[Doctor]) -> Vec<String> {
    let mut res: Vec<String> = Vec::new();
    for doctor in doctors {
        if !res.contains(&doctor.specialty) {
            res.push(doctor.specialty.clone());
        }
    }
    res
}
