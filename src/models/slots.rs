use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub date: String,
    pub time: String,
    pub available: bool,
}

impl Slot {
    pub fn new<S1: Into<String>, S2: Into<String>>(date: S1, time: S2, available: bool) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            available,
        }
    }

    pub fn is_at(&self, date: &str, time: &str) -> bool {
        self.date == date && self.time == time
    }
}
