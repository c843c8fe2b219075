mod user_repo_pg;

pub use user_repo_pg::*;

mod util;

use anyhow::Context;
use sqlx::PgPool;

/// Creates the users table if it does not exist. The unique index on
/// username is what surfaces the loser of a concurrent first write.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    date_of_birth DATE NOT NULL
)
"#,
    )
    .execute(pool)
    .await
    .context("create users table")?;

    Ok(())
}
