use actix::{
  fut,
  Actor,
  ActorContext,
  ActorFutureExt,
  AsyncContext,
  ContextFutureSpawner,
  Handler,
  Running,
  StreamHandler,
  WrapFuture,
};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use serde_json::Value;
use std::{
  str::FromStr,
  time::{Duration, Instant},
};
use tracing::error;
use workboard_api_common::{context::WorkboardContext, utils::user_view_from_jwt};
use workboard_utils::{
  error::{WorkboardErrorType, WorkboardResult},
  ConnectionId,
  IpAddr,
};
use workboard_websocket::{
  messages::{Connect, Disconnect, JoinUserRoom, WsMessage},
  serialize_websocket_message,
  structs::{UserJoin, UserJoinResponse},
  UserOperation,
};

/// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(25);

/// How long before lack of client response causes a timeout
const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

pub struct WsChatSession {
  /// unique session id
  pub id: ConnectionId,

  pub ip: IpAddr,

  /// The client must answer pings, otherwise we drop the connection
  pub hb: Instant,

  pub context: web::Data<WorkboardContext>,
}

pub async fn websocket(
  req: HttpRequest,
  body: web::Payload,
  context: web::Data<WorkboardContext>,
) -> Result<HttpResponse, Error> {
  let client_ip = IpAddr(
    req
      .connection_info()
      .realip_remote_addr()
      .unwrap_or("blank_ip")
      .to_string(),
  );

  ws::start(
    WsChatSession {
      id: 0,
      ip: client_ip,
      hb: Instant::now(),
      context,
    },
    &req,
    body,
  )
}

/// helper method that sends ping to client every few seconds (HEARTBEAT_INTERVAL).
///
/// also this method checks heartbeats from client
fn hb(ctx: &mut ws::WebsocketContext<WsChatSession>) {
  ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
    // check client heartbeats
    if Instant::now().duration_since(act.hb) > CLIENT_TIMEOUT {
      // heartbeat timed out, notify chat server and stop the actor
      act.context.chat_server().do_send(Disconnect {
        id: act.id,
        ip: act.ip.clone(),
      });

      ctx.stop();

      // don't try to send a ping
      return;
    }

    ctx.ping(b"");
  });
}

impl Actor for WsChatSession {
  type Context = ws::WebsocketContext<Self>;

  /// Method is called on actor start.
  /// We register ws session with ChatServer
  fn started(&mut self, ctx: &mut Self::Context) {
    // we'll start heartbeat process on session start.
    hb(ctx);

    // register self in chat server. `AsyncContext::wait` registers the
    // future within context, and the context waits until it resolves
    // before processing any other events.
    let addr = ctx.address();
    self
      .context
      .chat_server()
      .send(Connect {
        addr: addr.recipient(),
        ip: self.ip.clone(),
      })
      .into_actor(self)
      .then(|res, act, ctx| {
        match res {
          Ok(res) => act.id = res,
          // something is wrong with chat server
          _ => ctx.stop(),
        }
        fut::ready(())
      })
      .wait(ctx);
  }

  fn stopping(&mut self, _: &mut Self::Context) -> Running {
    // notify chat server
    self.context.chat_server().do_send(Disconnect {
      id: self.id,
      ip: self.ip.clone(),
    });
    Running::Stop
  }
}

/// Handle messages from chat server, we simply send it to peer websocket
impl Handler<WsMessage> for WsChatSession {
  type Result = ();

  fn handle(&mut self, msg: WsMessage, ctx: &mut Self::Context) {
    ctx.text(msg.0);
  }
}

/// WebSocket message handler
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsChatSession {
  fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
    let msg = match msg {
      Err(_) => {
        ctx.stop();
        return;
      }
      Ok(msg) => msg,
    };

    match msg {
      ws::Message::Ping(msg) => {
        self.hb = Instant::now();
        ctx.pong(&msg);
      }
      ws::Message::Pong(_) => {
        self.hb = Instant::now();
      }
      ws::Message::Text(text) => {
        let id_clone = self.id.to_owned();
        let context_clone = self.context.clone();

        let fut = Box::pin(async move {
          let msg = text.trim().to_string();
          parse_json_message(msg, id_clone, context_clone).await
        });
        fut
          .into_actor(self)
          .then(|res, _, ctx| {
            match res {
              Ok(res) => ctx.text(res),
              Err(e) => error!("{}", &e),
            }
            actix::fut::ready(())
          })
          .spawn(ctx);
      }
      ws::Message::Binary(_) => println!("Unexpected binary"),
      ws::Message::Close(reason) => {
        ctx.close(reason);
        ctx.stop();
      }
      ws::Message::Continuation(_) => {
        ctx.stop();
      }
      ws::Message::Nop => (),
    }
  }
}

/// Entry point for the messages a client sends over the socket. `UserJoin` is
/// the only accepted operation, everything else the server pushes itself.
async fn parse_json_message(
  msg: String,
  connection_id: ConnectionId,
  context: web::Data<WorkboardContext>,
) -> WorkboardResult<String> {
  let json: Value = serde_json::from_str(&msg)?;
  let data = json
    .get("data")
    .cloned()
    .ok_or(WorkboardErrorType::WebsocketOperationUnknown(
      "missing data".into(),
    ))?;

  let op = json
    .get("op")
    .and_then(Value::as_str)
    .ok_or(WorkboardErrorType::WebsocketOperationUnknown(
      "missing op".into(),
    ))?;

  match UserOperation::from_str(op) {
    Ok(UserOperation::UserJoin) => {
      let user_join: UserJoin = serde_json::from_value(data)?;
      let user_view = user_view_from_jwt(&user_join.auth, &context).await?;

      context.chat_server().do_send(JoinUserRoom {
        user_id: user_view.user.id,
        id: connection_id,
      });

      serialize_websocket_message(&UserOperation::UserJoin, &UserJoinResponse { joined: true })
    }
    _ => Err(WorkboardErrorType::WebsocketOperationUnknown(op.to_string()).into()),
  }
}
