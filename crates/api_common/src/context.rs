use actix::Addr;
use workboard_db_schema::utils::{ActualDbPool, DbPool};
use workboard_utils::settings::{structs::Settings, SETTINGS};
use workboard_websocket::chat_server::ChatServer;

#[derive(Clone)]
pub struct WorkboardContext {
  pool: ActualDbPool,
  chat_server: Addr<ChatServer>,
}

impl WorkboardContext {
  pub fn create(pool: ActualDbPool, chat_server: Addr<ChatServer>) -> WorkboardContext {
    WorkboardContext { pool, chat_server }
  }

  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }

  pub fn inner_pool(&self) -> &ActualDbPool {
    &self.pool
  }

  pub fn chat_server(&self) -> &Addr<ChatServer> {
    &self.chat_server
  }

  pub fn settings(&self) -> &'static Settings {
    &SETTINGS
  }
}
