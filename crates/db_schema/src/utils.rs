use deadpool::Runtime;
use diesel::result::Error::QueryBuilderError;
use diesel_async::{
  pg::AsyncPgConnection,
  pooled_connection::{
    deadpool::{Object as PooledConnection, Pool},
    AsyncDieselConnectionManager,
  },
};
use scribe_utils::{
  error::{ScribeErrorType, ScribeResult},
  settings::SETTINGS,
};
use std::ops::{Deref, DerefMut};

pub const FETCH_LIMIT_DEFAULT: i64 = 10;
pub const FETCH_LIMIT_MAX: i64 = 50;

pub type ActualDbPool = Pool<AsyncPgConnection>;

/// References a pool or connection. Functions must take `&mut DbPool<'_>` to
/// allow implicit reborrowing.
///
/// https://github.com/rust-lang/rfcs/issues/1403
pub enum DbPool<'a> {
  Pool(&'a ActualDbPool),
  Conn(&'a mut AsyncPgConnection),
}

pub enum DbConn<'a> {
  Pool(PooledConnection<AsyncPgConnection>),
  Conn(&'a mut AsyncPgConnection),
}

pub async fn get_conn<'a, 'b: 'a>(pool: &'a mut DbPool<'b>) -> ScribeResult<DbConn<'a>> {
  Ok(match pool {
    DbPool::Pool(pool) => DbConn::Pool(
      pool
        .get()
        .await
        .map_err(|e| QueryBuilderError(e.into()))?,
    ),
    DbPool::Conn(conn) => DbConn::Conn(conn),
  })
}

impl Deref for DbConn<'_> {
  type Target = AsyncPgConnection;

  fn deref(&self) -> &Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref(),
      DbConn::Conn(conn) => conn.deref(),
    }
  }
}

impl DerefMut for DbConn<'_> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref_mut(),
      DbConn::Conn(conn) => conn.deref_mut(),
    }
  }
}

// Allows functions that take `DbPool<'_>` to be called in a transaction by
// passing `&mut conn.into()`
impl<'a> From<&'a mut AsyncPgConnection> for DbPool<'a> {
  fn from(value: &'a mut AsyncPgConnection) -> Self {
    DbPool::Conn(value)
  }
}

impl<'a> From<&'a ActualDbPool> for DbPool<'a> {
  fn from(value: &'a ActualDbPool) -> Self {
    DbPool::Pool(value)
  }
}

/// Converts a 1-indexed page into a (limit, offset) pair for a windowed query.
pub fn limit_and_offset(page: Option<i64>, limit: Option<i64>) -> ScribeResult<(i64, i64)> {
  let page = match page {
    Some(page) => {
      if page < 1 {
        return Err(QueryBuilderError("Page is < 1".into()).into());
      }
      page
    }
    None => 1,
  };
  let limit = match limit {
    Some(limit) => {
      if !(1..=FETCH_LIMIT_MAX).contains(&limit) {
        return Err(QueryBuilderError(format!("Fetch limit is > {FETCH_LIMIT_MAX}").into()).into());
      }
      limit
    }
    None => FETCH_LIMIT_DEFAULT,
  };
  let offset = limit
    .checked_mul(page - 1)
    .ok_or_else(|| QueryBuilderError("Page is too large".into()))?;
  Ok((limit, offset))
}

pub async fn build_db_pool() -> ScribeResult<ActualDbPool> {
  let db_url = SETTINGS.get_database_url();
  let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&db_url);
  let pool = Pool::builder(manager)
    .max_size(SETTINGS.database.pool_size)
    .runtime(Runtime::Tokio1)
    .build()
    .map_err(|_| ScribeErrorType::Unknown("Couldn't build db pool".into()))?;

  crate::schema_setup::run(&db_url)?;

  Ok(pool)
}

#[allow(clippy::expect_used)]
pub async fn build_db_pool_for_tests() -> ActualDbPool {
  build_db_pool()
    .await
    .expect("db pool missing for tests")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_limit_and_offset() -> ScribeResult<()> {
    assert_eq!((10, 0), limit_and_offset(None, None)?);
    assert_eq!((10, 10), limit_and_offset(Some(2), None)?);
    assert_eq!((5, 10), limit_and_offset(Some(3), Some(5))?);
    assert!(limit_and_offset(Some(0), None).is_err());
    assert!(limit_and_offset(None, Some(51)).is_err());
    assert!(limit_and_offset(Some(i64::MAX), Some(50)).is_err());
    Ok(())
  }
}
