use chrono::{DateTime, Utc};
use deadpool::Runtime;
use diesel::{
  dsl::AsExprOf,
  result::Error::QueryBuilderError,
  sql_types::Timestamptz,
  IntoSql,
};
use diesel_async::{
  pooled_connection::{
    deadpool::{Object as PooledConnection, Pool},
    AsyncDieselConnectionManager,
  },
  AsyncPgConnection,
};
use std::ops::{Deref, DerefMut};
use tracing::info;
use workboard_utils::{
  error::WorkboardResult,
  settings::SETTINGS,
};

const FETCH_LIMIT_DEFAULT: i64 = 10;
pub const FETCH_LIMIT_MAX: i64 = 50;

pub type ActualDbPool = Pool<AsyncPgConnection>;

/// References a pool or connection, functions must take `&mut DbPool<'_>` to allow implicit
/// reborrowing.
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

pub async fn get_conn<'a, 'b: 'a>(
  pool: &'a mut DbPool<'b>,
) -> Result<DbConn<'a>, diesel::result::Error> {
  Ok(match pool {
    DbPool::Pool(pool) => DbConn::Pool(pool.get().await.map_err(|e| QueryBuilderError(e.into()))?),
    DbPool::Conn(conn) => DbConn::Conn(conn),
  })
}

impl<'a> Deref for DbConn<'a> {
  type Target = AsyncPgConnection;

  fn deref(&self) -> &Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref(),
      DbConn::Conn(conn) => conn.deref(),
    }
  }
}

impl<'a> DerefMut for DbConn<'a> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref_mut(),
      DbConn::Conn(conn) => conn.deref_mut(),
    }
  }
}

// Allows functions that take `DbPool<'_>` to be called in a transaction by passing `&mut conn.into()`
impl<'a> From<&'a mut AsyncPgConnection> for DbPool<'a> {
  fn from(value: &'a mut AsyncPgConnection) -> Self {
    DbPool::Conn(value)
  }
}

impl<'a, 'b: 'a> From<&'a mut DbConn<'b>> for DbPool<'a> {
  fn from(value: &'a mut DbConn<'b>) -> Self {
    DbPool::Conn(value.deref_mut())
  }
}

impl<'a> From<&'a ActualDbPool> for DbPool<'a> {
  fn from(value: &'a ActualDbPool) -> Self {
    DbPool::Pool(value)
  }
}

pub async fn build_db_pool() -> WorkboardResult<ActualDbPool> {
  let db_url = SETTINGS.get_database_url();
  let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&db_url);
  let pool = Pool::builder(manager)
    .max_size(SETTINGS.database.pool_size)
    .runtime(Runtime::Tokio1)
    .build()?;
  info!("Database pool initialized");

  crate::schema_setup::run(&db_url)?;

  Ok(pool)
}

#[allow(clippy::expect_used)]
pub async fn build_db_pool_for_tests() -> ActualDbPool {
  build_db_pool().await.expect("db pool missing")
}

pub fn naive_now() -> DateTime<Utc> {
  Utc::now()
}

pub fn now() -> AsExprOf<diesel::dsl::now, Timestamptz> {
  // https://github.com/diesel-rs/diesel/issues/1514
  diesel::dsl::now.into_sql::<Timestamptz>()
}

pub fn limit_and_offset(
  page: Option<i64>,
  limit: Option<i64>,
) -> Result<(i64, i64), diesel::result::Error> {
  let page = match page {
    Some(page) => {
      if page < 1 {
        return Err(QueryBuilderError("Page is < 1".into()));
      } else {
        page
      }
    }
    None => 1,
  };
  let limit = match limit {
    Some(limit) => {
      if !(1..=FETCH_LIMIT_MAX).contains(&limit) {
        return Err(QueryBuilderError(
          format!("Fetch limit is > {FETCH_LIMIT_MAX}").into(),
        ));
      } else {
        limit
      }
    }
    None => FETCH_LIMIT_DEFAULT,
  };
  let offset = limit * (page - 1);
  Ok((limit, offset))
}

/// Takes an API text input, and converts it to an optional diesel DB update.
/// An empty string value marks the column to be set to null.
pub fn diesel_string_update(opt: Option<&str>) -> Option<Option<String>> {
  match opt {
    Some("") => Some(None),
    Some(str) => Some(Some(str.into())),
    None => None,
  }
}

pub mod functions {
  use diesel::sql_types::Text;

  sql_function!(fn lower(x: Text) -> Text);
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::{diesel_string_update, limit_and_offset};
  use pretty_assertions::assert_eq;

  #[test]
  fn test_diesel_string_update() {
    assert_eq!(None, diesel_string_update(None));
    assert_eq!(Some(None), diesel_string_update(Some("")));
    assert_eq!(
      Some(Some("hello".to_string())),
      diesel_string_update(Some("hello"))
    );
  }

  #[test]
  fn test_limit_and_offset() {
    assert_eq!((10, 0), limit_and_offset(None, None).unwrap());
    assert_eq!((20, 20), limit_and_offset(Some(2), Some(20)).unwrap());
    assert!(limit_and_offset(Some(0), None).is_err());
    assert!(limit_and_offset(None, Some(100)).is_err());
  }
}
