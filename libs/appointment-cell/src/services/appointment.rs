use std::sync::Arc;

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use shared_database::ClinicStorage;

use crate::models::{
    Appointment, CreateAppointmentRequest, UpdateAppointmentRequest, INITIAL_STATUS,
};

const APPOINTMENT_COLUMNS: &str =
    "id, patient, patientEmail, doctor, date, time, reason, status, notes";

pub struct AppointmentService {
    storage: Arc<ClinicStorage>,
}

impl AppointmentService {
    pub fn new(storage: Arc<ClinicStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let rows = sqlx::query(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY id"
        ))
        .fetch_all(self.storage.pool())
        .await?;
        rows.into_iter().map(row_to_appointment).collect()
    }

    /// Insert the booking with its forced initial status and blank notes,
    /// then read the stored row back.
    pub async fn book_appointment(&self, request: CreateAppointmentRequest) -> Result<Appointment> {
        debug!(
            "Booking appointment for {:?} with {:?}",
            request.patient, request.doctor
        );

        let result = sqlx::query(
            "INSERT INTO appointments (patient, patientEmail, doctor, date, time, reason, status, notes) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(request.patient.unwrap_or_default())
        .bind(request.patient_email.unwrap_or_default())
        .bind(request.doctor.unwrap_or_default())
        .bind(request.date.unwrap_or_default())
        .bind(request.time.unwrap_or_default())
        .bind(request.reason.unwrap_or_default())
        .bind(INITIAL_STATUS)
        .bind("")
        .execute(self.storage.pool())
        .await?;

        let row = sqlx::query(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = ?"
        ))
        .bind(result.last_insert_rowid())
        .fetch_one(self.storage.pool())
        .await?;
        row_to_appointment(row)
    }

    /// Overwrite status and notes unconditionally, then read the row back.
    /// Returns `None` when no row carries the id.
    pub async fn update_appointment(
        &self,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> Result<Option<Appointment>> {
        sqlx::query("UPDATE appointments SET status = ?, notes = ? WHERE id = ?")
            .bind(request.status.unwrap_or_default())
            .bind(request.notes.unwrap_or_default())
            .bind(id)
            .execute(self.storage.pool())
            .await?;

        let row = sqlx::query(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.storage.pool())
        .await?;
        row.map(row_to_appointment).transpose()
    }
}

fn row_to_appointment(row: SqliteRow) -> Result<Appointment> {
    Ok(Appointment {
        id: row.try_get("id")?,
        patient: row.try_get("patient")?,
        patient_email: row.try_get("patientEmail")?,
        doctor: row.try_get("doctor")?,
        date: row.try_get("date")?,
        time: row.try_get("time")?,
        reason: row.try_get("reason")?,
        status: row.try_get("status")?,
        notes: row.try_get("notes")?,
    })
}
