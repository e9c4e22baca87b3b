use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::UserRecord;

const CREATE_USERS_TABLE: &str = "CREATE TABLE users
     (id integer primary key unique not null,
      name text,
      first text,
      last text,
      link text,
      username text,
      gender text,
      locale text)";

/// Database storage service for downloaded Graph users.
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Makes sure the database has the users table.
    ///
    /// Probes with a count query; only the missing-table condition leads to
    /// table creation. Any other probe failure propagates, and the caller
    /// treats it as fatal: a store that cannot be read makes the whole run
    /// meaningless.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if is_missing_table(&e) => {
                tracing::info!("creating users table");
                sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
                Ok(())
            }
            Err(e) => Err(AppError::Storage(e)),
        }
    }

    /// Saves a user to the database.
    ///
    /// Duplicate uids violate the primary key and surface as `Storage`;
    /// the caller reports and moves on, it never retries an insert.
    pub async fn store(&self, user: &UserRecord) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users VALUES (?, ?, ?, ?, ?, ?, ?, ?)")
            .bind(user.uid as i64)
            .bind(&user.name)
            .bind(&user.first)
            .bind(&user.last)
            .bind(&user.link)
            .bind(&user.username)
            .bind(&user.gender)
            .bind(&user.locale)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Returns the uid an interrupted run should resume from: 0 for an
    /// empty table, else the highest stored uid plus one.
    pub async fn next_uid(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            return Ok(0);
        }

        let max: i64 = sqlx::query_scalar("SELECT MAX(id) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(max as u64 + 1)
    }
}

fn is_missing_table(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.message().contains("no such table: users"))
}
