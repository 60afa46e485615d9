use scribe_db_schema::utils::{ActualDbPool, DbPool};
use scribe_utils::settings::{structs::Settings, SETTINGS};

#[derive(Clone)]
pub struct ScribeContext {
  pool: ActualDbPool,
}

impl ScribeContext {
  pub fn create(pool: ActualDbPool) -> ScribeContext {
    ScribeContext { pool }
  }

  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }

  pub fn inner_pool(&self) -> &ActualDbPool {
    &self.pool
  }

  pub fn settings(&self) -> &'static Settings {
    &SETTINGS
  }
}
