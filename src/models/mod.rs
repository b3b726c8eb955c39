pub mod appointments;
pub mod doctors;
pub mod slots;
