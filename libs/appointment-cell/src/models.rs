use serde::{Deserialize, Serialize};

/// Status written to every newly booked appointment.
pub const INITIAL_STATUS: &str = "Scheduled";

/// An appointment row. Doctor and patient are carried as free-text name and
/// email, not as user ids; `status` is free text once the row exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient: String,
    #[serde(rename = "patientEmail")]
    pub patient_email: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
    pub notes: String,
}

/// Booking request. Deliberately carries no status field: a new appointment
/// always starts as [`INITIAL_STATUS`], whatever else the caller sends.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient: Option<String>,
    #[serde(rename = "patientEmail")]
    pub patient_email: Option<String>,
    pub doctor: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

impl CreateAppointmentRequest {
    /// Presence check only: absent and empty-string both count as missing.
    pub fn missing_required_fields(&self) -> bool {
        is_blank(&self.patient)
            || is_blank(&self.patient_email)
            || is_blank(&self.doctor)
            || is_blank(&self.date)
            || is_blank(&self.time)
    }
}

/// Overwrite of status and notes. An absent field is written back as an
/// empty string, not preserved.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
