use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchDoctorRequest {
    pub specialty: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchSlotRequest {
    pub date: Option<String>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl SearchDoctorRequest {
    pub fn specialty(&self) -> Option<&str> {
        non_empty(&self.specialty)
    }
}

impl SearchSlotRequest {
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }
}
