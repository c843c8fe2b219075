use crate::application_port::BirthdayError;
use crate::domain_port::{UpsertOutcome, UserRepo};
use chrono::NaiveDate;
use dashmap::DashMap;

/// In-memory store backend for development and tests.
pub struct MemoryUserRepo {
    users: DashMap<String, NaiveDate>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        MemoryUserRepo {
            users: DashMap::new(),
        }
    }
}

impl Default for MemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserRepo for MemoryUserRepo {
    async fn find_date_of_birth(
        &self,
        username: &str,
    ) -> Result<Option<NaiveDate>, BirthdayError> {
        Ok(self.users.get(username).map(|entry| *entry.value()))
    }

    async fn upsert_date_of_birth(
        &self,
        username: &str,
        date_of_birth: NaiveDate,
    ) -> Result<UpsertOutcome, BirthdayError> {
        // Same read-then-write shape as the SQL backend, not an atomic entry
        // update.
        let existed = self.users.contains_key(username);
        self.users.insert(username.to_string(), date_of_birth);

        Ok(if existed {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Created
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn missing_user_reads_as_none() {
        let repo = MemoryUserRepo::new();
        assert_eq!(repo.find_date_of_birth("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn upsert_reports_created_then_updated() {
        let repo = MemoryUserRepo::new();

        let outcome = repo
            .upsert_date_of_birth("alice", date(1990, 4, 12))
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);

        let outcome = repo
            .upsert_date_of_birth("alice", date(1991, 5, 13))
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);

        assert_eq!(
            repo.find_date_of_birth("alice").await.unwrap(),
            Some(date(1991, 5, 13))
        );
    }
}
