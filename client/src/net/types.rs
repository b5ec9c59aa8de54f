//! Wire DTOs for the hospital backend's JSON API.
//!
//! DESIGN
//! ======
//! Only the fields the portal renders are modeled; serde ignores the rest so
//! backend additions do not break decoding. Nullable backend columns are
//! `Option` with `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::SessionUser;

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: SessionUser,
}

/// Row returned by the patient list endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PatientSummary {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
}

/// Row returned by the doctor list endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DoctorSummary {
    pub id: i64,
    pub full_name: String,
    pub specialization: String,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub experience_years: Option<i64>,
    #[serde(default)]
    pub consultation_fee: Option<f64>,
}

/// Row returned by the appointment list endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppointmentSummary {
    pub id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    #[serde(default)]
    pub doctor_specialization: Option<String>,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Flatten a record into table cells.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_owned()
}

impl TableRow for PatientSummary {
    const HEADERS: &'static [&'static str] = &["Name", "Email", "Phone", "Gender", "Blood group"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            or_dash(self.email.as_deref()),
            or_dash(self.phone.as_deref()),
            or_dash(self.gender.as_deref()),
            or_dash(self.blood_group.as_deref()),
        ]
    }
}

impl TableRow for DoctorSummary {
    const HEADERS: &'static [&'static str] = &["Name", "Specialization", "Department", "Experience", "Fee"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.specialization.clone(),
            or_dash(self.department_name.as_deref()),
            self.experience_years.map_or_else(|| "-".to_owned(), |years| format!("{years} yrs")),
            self.consultation_fee.map_or_else(|| "-".to_owned(), |fee| format!("{fee:.2}")),
        ]
    }
}

impl TableRow for AppointmentSummary {
    const HEADERS: &'static [&'static str] = &["Date", "Time", "Patient", "Doctor", "Status", "Reason"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.appointment_date.clone(),
            self.appointment_time.clone(),
            self.patient_name.clone(),
            self.doctor_name.clone(),
            self.status.clone(),
            or_dash(self.reason.as_deref()),
        ]
    }
}
