use crate::application_impl::RealBirthdayService;
use crate::application_port::BirthdayService;
use crate::domain_port::{Clock, SystemClock, UserRepo};
use crate::infra_memory::MemoryUserRepo;
use crate::infra_pg::{PgUserRepo, ensure_schema};
use crate::logger::*;
use crate::settings::Settings;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

pub struct Server {
    pub birthday_service: Arc<dyn BirthdayService>,
    pool: Option<PgPool>,
}

impl Server {
    /// Wires the store backend, clock, and birthday service from settings.
    /// The storage pool is acquired here, once, and released in `shutdown`.
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let (user_repo, pool): (Arc<dyn UserRepo>, Option<PgPool>) =
            match settings.database.backend.as_str() {
                "memory" => (Arc::new(MemoryUserRepo::new()), None),
                "postgres" => {
                    let pool = PgPoolOptions::new()
                        .max_connections(settings.database.max_connections)
                        .connect(&settings.database.url)
                        .await?;
                    ensure_schema(&pool).await?;
                    (Arc::new(PgUserRepo::new(pool.clone())), Some(pool))
                }
                other => return Err(anyhow::anyhow!("Unknown database backend: {}", other)),
            };

        let birthday_service: Arc<dyn BirthdayService> =
            Arc::new(RealBirthdayService::new(user_repo, clock));

        info!("server started");

        Ok(Server {
            birthday_service,
            pool,
        })
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
