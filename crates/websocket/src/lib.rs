use serde::Serialize;
use strum::{Display, EnumString};
use workboard_utils::error::WorkboardError;

pub mod chat_server;
pub mod handlers;
pub mod messages;
pub mod send;
pub mod structs;

#[derive(Serialize)]
struct WebsocketResponse<T> {
  op: String,
  data: T,
}

pub fn serialize_websocket_message<OP, Response>(
  op: &OP,
  data: &Response,
) -> Result<String, WorkboardError>
where
  Response: Serialize,
  OP: ToString,
{
  let response = WebsocketResponse {
    op: op.to_string(),
    data,
  };
  Ok(serde_json::to_string(&response)?)
}

#[derive(EnumString, Display, Debug, Clone, Copy)]
pub enum UserOperation {
  UserJoin,
  Notification,
}
