use std::sync::Arc;

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use shared_database::ClinicStorage;

use crate::models::{CreateUserRequest, User};

pub struct UserService {
    storage: Arc<ClinicStorage>,
}

impl UserService {
    pub fn new(storage: Arc<ClinicStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows =
            sqlx::query("SELECT id, name, email, role, specialization FROM users ORDER BY id")
                .fetch_all(self.storage.pool())
                .await?;
        rows.into_iter().map(row_to_user).collect()
    }

    /// Insert the new user and read the stored row back, id included.
    /// A duplicate email surfaces here as a unique-constraint failure.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        debug!("Creating user: {:?}", request.email);

        let result =
            sqlx::query("INSERT INTO users (name, email, role, specialization) VALUES (?, ?, ?, ?)")
                .bind(request.name.unwrap_or_default())
                .bind(request.email.unwrap_or_default())
                .bind(request.role.unwrap_or_default())
                .bind(request.specialization.unwrap_or_default())
                .execute(self.storage.pool())
                .await?;

        let row = sqlx::query("SELECT id, name, email, role, specialization FROM users WHERE id = ?")
            .bind(result.last_insert_rowid())
            .fetch_one(self.storage.pool())
            .await?;
        row_to_user(row)
    }

    /// Unconditional delete: an id with no matching row is not an error.
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.storage.pool())
            .await?;
        Ok(())
    }
}

fn row_to_user(row: SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role: row.try_get("role")?,
        specialization: row.try_get("specialization")?,
    })
}
