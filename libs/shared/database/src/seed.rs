//! First-run seed rows: a usable default roster and two example
//! appointments. Each table has its own row-count guard, so a restart
//! against a non-empty store inserts nothing.

use anyhow::Result;
use tracing::info;

use crate::sqlite::ClinicStorage;

const SEED_USERS: [(&str, &str, &str, &str); 4] = [
    ("Admin User", "admin@example.com", "Admin", ""),
    ("Dr. Alice", "alice@clinic.com", "Doctor", "Cardiology"),
    ("Dr. Bob", "bob@clinic.com", "Doctor", "Dermatology"),
    ("John Patient", "john@patient.com", "Patient", ""),
];

const SEED_APPOINTMENTS: [(&str, &str, &str, &str, &str, &str); 2] = [
    (
        "John Patient",
        "john@patient.com",
        "Dr. Alice",
        "2026-01-10",
        "10:00",
        "Chest pain",
    ),
    (
        "Jane Doe",
        "jane@patient.com",
        "Dr. Bob",
        "2026-01-12",
        "15:00",
        "Skin rash",
    ),
];

pub async fn seed_defaults(storage: &ClinicStorage) -> Result<()> {
    let (user_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(storage.pool())
        .await?;
    if user_count == 0 {
        for (name, email, role, specialization) in SEED_USERS {
            sqlx::query("INSERT INTO users (name, email, role, specialization) VALUES (?, ?, ?, ?)")
                .bind(name)
                .bind(email)
                .bind(role)
                .bind(specialization)
                .execute(storage.pool())
                .await?;
        }
        info!("seeded {} default users", SEED_USERS.len());
    }

    let (appointment_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM appointments")
        .fetch_one(storage.pool())
        .await?;
    if appointment_count == 0 {
        for (patient, patient_email, doctor, date, time, reason) in SEED_APPOINTMENTS {
            sqlx::query(
                "INSERT INTO appointments (patient, patientEmail, doctor, date, time, reason, status, notes) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(patient)
            .bind(patient_email)
            .bind(doctor)
            .bind(date)
            .bind(time)
            .bind(reason)
            .bind("Scheduled")
            .bind("")
            .execute(storage.pool())
            .await?;
        }
        info!("seeded {} default appointments", SEED_APPOINTMENTS.len());
    }

    Ok(())
}
