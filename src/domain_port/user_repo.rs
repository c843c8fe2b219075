use crate::application_port::BirthdayError;
use chrono::NaiveDate;

/// Whether an upsert created a new record or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    /// Point read. `Ok(None)` means no such user, which is distinct from a
    /// store failure.
    async fn find_date_of_birth(&self, username: &str)
        -> Result<Option<NaiveDate>, BirthdayError>;

    /// Insert-if-absent, else overwrite the stored date in place.
    ///
    /// Check-then-act: existence is read first, then exactly one insert or
    /// update is issued, with no transaction tying the two together. Two
    /// concurrent first writes for the same username can both observe
    /// "absent"; the loser's insert hits the unique index and surfaces as a
    /// store error. No retries.
    async fn upsert_date_of_birth(
        &self,
        username: &str,
        date_of_birth: NaiveDate,
    ) -> Result<UpsertOutcome, BirthdayError>;
}
