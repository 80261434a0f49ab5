use crate::structs::UserView;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use diesel::result::Error;
use std::future::{ready, Ready};
use uuid::Uuid;
use workboard_db_schema::{
  newtypes::UserId,
  source::user::User,
  traits::Crud,
  utils::DbPool,
};
use workboard_utils::error::{WorkboardError, WorkboardErrorType};

impl UserView {
  pub async fn read(pool: &mut DbPool<'_>, user_id: UserId) -> Result<Self, Error> {
    let user = User::read(pool, user_id).await?;
    Ok(Self { user })
  }

  pub async fn read_from_uid(pool: &mut DbPool<'_>, user_uid: Uuid) -> Result<Self, Error> {
    let user = User::read_from_uid(pool, user_uid).await?;
    Ok(Self { user })
  }
}

/// The session middleware stores the view in the request extensions. Handlers that
/// take a `UserView` argument reject unauthenticated requests with 401.
impl FromRequest for UserView {
  type Error = WorkboardError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<UserView>() {
      Some(c) => Ok(c.clone()),
      None => Err(WorkboardErrorType::IncorrectLogin.into()),
    })
  }
}
