use crate::domain_port::UpsertOutcome;

#[derive(Debug, thiserror::Error)]
pub enum BirthdayError {
    #[error("username must contain only letters")]
    InvalidUsername,
    #[error("date of birth must be a YYYY-MM-DD date no later than today")]
    InvalidDate,
    #[error("user not found")]
    UserNotFound,
    #[error("store error: {0}")]
    Store(String),
}

#[async_trait::async_trait]
pub trait BirthdayService: Send + Sync {
    /// Whole days until the user's next birthday, 0 on the day itself.
    async fn days_until_birthday(&self, username: &str) -> Result<i64, BirthdayError>;

    /// Records a date of birth, creating the user or overwriting the stored
    /// date. Validation failures are reported before any store access.
    async fn record_date_of_birth(
        &self,
        username: &str,
        date_of_birth: &str,
    ) -> Result<UpsertOutcome, BirthdayError>;
}
