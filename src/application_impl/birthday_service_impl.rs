use crate::application_port::{BirthdayError, BirthdayService};
use crate::domain_model::{days_until_next_birthday, is_valid_username, parse_date_of_birth};
use crate::domain_port::{Clock, UpsertOutcome, UserRepo};
use std::sync::Arc;

pub struct RealBirthdayService {
    user_repo: Arc<dyn UserRepo>,
    clock: Arc<dyn Clock>,
}

impl RealBirthdayService {
    pub fn new(user_repo: Arc<dyn UserRepo>, clock: Arc<dyn Clock>) -> RealBirthdayService {
        RealBirthdayService { user_repo, clock }
    }
}

#[async_trait::async_trait]
impl BirthdayService for RealBirthdayService {
    async fn days_until_birthday(&self, username: &str) -> Result<i64, BirthdayError> {
        if !is_valid_username(username) {
            return Err(BirthdayError::InvalidUsername);
        }

        let date_of_birth = self
            .user_repo
            .find_date_of_birth(username)
            .await?
            .ok_or(BirthdayError::UserNotFound)?;

        Ok(days_until_next_birthday(date_of_birth, self.clock.today()))
    }

    async fn record_date_of_birth(
        &self,
        username: &str,
        date_of_birth: &str,
    ) -> Result<UpsertOutcome, BirthdayError> {
        if !is_valid_username(username) {
            return Err(BirthdayError::InvalidUsername);
        }

        let date_of_birth =
            parse_date_of_birth(date_of_birth).map_err(|_| BirthdayError::InvalidDate)?;

        // No time travelers.
        if date_of_birth > self.clock.today() {
            return Err(BirthdayError::InvalidDate);
        }

        self.user_repo
            .upsert_date_of_birth(username, date_of_birth)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra_memory::MemoryUserRepo;
    use chrono::NaiveDate;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn service_at(today: NaiveDate) -> (RealBirthdayService, Arc<MemoryUserRepo>) {
        let user_repo = Arc::new(MemoryUserRepo::new());
        let service = RealBirthdayService::new(user_repo.clone(), Arc::new(FixedClock(today)));
        (service, user_repo)
    }

    #[tokio::test]
    async fn first_write_creates_then_overwrites() {
        let (service, _) = service_at(date(2026, 8, 7));

        let outcome = service
            .record_date_of_birth("alice", "1990-04-12")
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);

        let outcome = service
            .record_date_of_birth("alice", "1991-05-13")
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);

        assert_eq!(
            service.user_repo.find_date_of_birth("alice").await.unwrap(),
            Some(date(1991, 5, 13))
        );
    }

    #[tokio::test]
    async fn recorded_date_round_trips_from_either_layout() {
        let (service, user_repo) = service_at(date(2026, 8, 7));

        service
            .record_date_of_birth("bob", "1987-06-05T00:00:00Z")
            .await
            .unwrap();

        assert_eq!(
            user_repo.find_date_of_birth("bob").await.unwrap(),
            Some(date(1987, 6, 5))
        );
    }

    #[tokio::test]
    async fn read_of_unknown_user_is_not_found() {
        let (service, _) = service_at(date(2026, 8, 7));

        let err = service.days_until_birthday("ghost").await.unwrap_err();
        assert!(matches!(err, BirthdayError::UserNotFound));
    }

    #[tokio::test]
    async fn bad_username_is_rejected_before_the_store_is_touched() {
        let (service, user_repo) = service_at(date(2026, 8, 7));

        let err = service
            .record_date_of_birth("alice99", "1990-04-12")
            .await
            .unwrap_err();
        assert!(matches!(err, BirthdayError::InvalidUsername));
        assert_eq!(user_repo.find_date_of_birth("alice99").await.unwrap(), None);

        let err = service.days_until_birthday("alice99").await.unwrap_err();
        assert!(matches!(err, BirthdayError::InvalidUsername));
    }

    #[tokio::test]
    async fn unparseable_date_is_rejected() {
        let (service, _) = service_at(date(2026, 8, 7));

        let err = service
            .record_date_of_birth("alice", "12/04/1990")
            .await
            .unwrap_err();
        assert!(matches!(err, BirthdayError::InvalidDate));
    }

    #[tokio::test]
    async fn future_date_is_rejected_but_today_is_accepted() {
        let (service, _) = service_at(date(2026, 8, 7));

        let err = service
            .record_date_of_birth("alice", "2026-08-08")
            .await
            .unwrap_err();
        assert!(matches!(err, BirthdayError::InvalidDate));

        let outcome = service
            .record_date_of_birth("alice", "2026-08-07")
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);
    }

    #[tokio::test]
    async fn counts_days_to_the_next_birthday() {
        let (service, _) = service_at(date(2026, 5, 8));
        service
            .record_date_of_birth("carol", "2000-05-10")
            .await
            .unwrap();
        assert_eq!(service.days_until_birthday("carol").await.unwrap(), 2);

        let (service, _) = service_at(date(2026, 5, 10));
        service
            .record_date_of_birth("carol", "2000-05-10")
            .await
            .unwrap();
        assert_eq!(service.days_until_birthday("carol").await.unwrap(), 0);
    }
}
