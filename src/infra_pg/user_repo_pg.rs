use super::util::is_unique_violation;
use crate::application_port::BirthdayError;
use crate::domain_port::{UpsertOutcome, UserRepo};
use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use tracing::warn;

pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        PgUserRepo { pool }
    }
}

#[async_trait::async_trait]
impl UserRepo for PgUserRepo {
    async fn find_date_of_birth(
        &self,
        username: &str,
    ) -> Result<Option<NaiveDate>, BirthdayError> {
        let row = sqlx::query(
            r#"
SELECT date_of_birth FROM users WHERE username = $1 LIMIT 1
"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BirthdayError::Store(format!("query date_of_birth: {e}")))?;

        Ok(row.map(|row| row.get::<NaiveDate, _>("date_of_birth")))
    }

    async fn upsert_date_of_birth(
        &self,
        username: &str,
        date_of_birth: NaiveDate,
    ) -> Result<UpsertOutcome, BirthdayError> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)"#)
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| BirthdayError::Store(format!("check username: {e}")))?;

        if exists {
            sqlx::query("UPDATE users SET date_of_birth = $1 WHERE username = $2")
                .bind(date_of_birth)
                .bind(username)
                .execute(&self.pool)
                .await
                .map_err(|e| BirthdayError::Store(format!("update user: {e}")))?;

            Ok(UpsertOutcome::Updated)
        } else {
            sqlx::query(
                r#"
INSERT INTO users (username, date_of_birth)
VALUES ($1, $2)
"#,
            )
            .bind(username)
            .bind(date_of_birth)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    // Another writer slipped in between our existence check
                    // and this insert.
                    warn!(username, "lost a concurrent insert race");
                }
                BirthdayError::Store(format!("insert user: {e}"))
            })?;

            Ok(UpsertOutcome::Created)
        }
    }
}
