use crate::{
  chat_server::ChatServer,
  messages::SendUserRoomMessage,
  structs::NotificationResponse,
  UserOperation,
};
use actix::Addr;
use workboard_db_schema::newtypes::UserId;
use workboard_utils::error::WorkboardResult;

pub const NOTIFICATION_MESSAGE: &str = "New notification";

/// Pushes the fixed notification payload to every joined session of the user.
/// Users without an open session simply receive nothing.
pub fn send_user_notification(
  chat_server: &Addr<ChatServer>,
  recipient_id: UserId,
) -> WorkboardResult<()> {
  chat_server.do_send(SendUserRoomMessage {
    op: UserOperation::Notification,
    response: NotificationResponse {
      message: NOTIFICATION_MESSAGE.to_string(),
    },
    recipient_id,
    websocket_id: None,
  });

  Ok(())
}
