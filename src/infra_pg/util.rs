use sqlx::postgres::PgDatabaseError;

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db) = err {
        if let Some(pg_err) = db.try_downcast_ref::<PgDatabaseError>() {
            return pg_err.code() == "23505"; // unique_violation
        }
    }

    false
}
