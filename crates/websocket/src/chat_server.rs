use crate::{messages::WsMessage, serialize_websocket_message, UserOperation};
use actix::Recipient;
use rand::rngs::ThreadRng;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use workboard_db_schema::newtypes::UserId;
use workboard_utils::{error::WorkboardError, ConnectionId, IpAddr};

pub struct SessionInfo {
  pub addr: Recipient<WsMessage>,
  pub ip: IpAddr,
}

/// `ChatServer` manages the websocket sessions and the per-user rooms
/// notifications go out to.
pub struct ChatServer {
  /// A map from generated random ID to session addr
  pub sessions: HashMap<ConnectionId, SessionInfo>,

  /// A map from user id to its connection IDs, for sessions that authenticated
  pub user_rooms: HashMap<UserId, HashSet<ConnectionId>>,

  pub(super) rng: ThreadRng,
}

impl ChatServer {
  pub fn startup() -> ChatServer {
    ChatServer {
      sessions: HashMap::new(),
      user_rooms: HashMap::new(),
      rng: rand::thread_rng(),
    }
  }

  pub fn join_user_room(&mut self, user_id: UserId, id: ConnectionId) {
    // remove session from all rooms
    for sessions in self.user_rooms.values_mut() {
      sessions.remove(&id);
    }

    self.user_rooms.entry(user_id).or_default().insert(id);
  }

  pub(super) fn send_user_room_message<Response>(
    &self,
    op: &UserOperation,
    response: &Response,
    recipient_id: UserId,
    websocket_id: Option<ConnectionId>,
  ) -> Result<(), WorkboardError>
  where
    Response: Serialize,
  {
    let res_str = &serialize_websocket_message(op, response)?;
    if let Some(sessions) = self.user_rooms.get(&recipient_id) {
      for id in sessions {
        if let Some(my_id) = websocket_id {
          if *id == my_id {
            continue;
          }
        }
        self.sendit(res_str, *id);
      }
    }
    Ok(())
  }

  pub(super) fn send_all_message<Response>(
    &self,
    op: &UserOperation,
    response: &Response,
    websocket_id: Option<ConnectionId>,
  ) -> Result<(), WorkboardError>
  where
    Response: Serialize,
  {
    let res_str = &serialize_websocket_message(op, response)?;
    for id in self.sessions.keys() {
      if let Some(my_id) = websocket_id {
        if *id == my_id {
          continue;
        }
      }
      self.sendit(res_str, *id);
    }
    Ok(())
  }

  fn sendit(&self, message: &str, id: ConnectionId) {
    if let Some(info) = self.sessions.get(&id) {
      info.addr.do_send(WsMessage(message.to_owned()));
    }
  }
}
