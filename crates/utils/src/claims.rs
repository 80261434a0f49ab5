use crate::{error::WorkboardResult, settings::structs::Settings};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

type Jwt = String;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// user_ id, standard claim by RFC 7519.
  pub sub: i32,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  pub fn decode(jwt: &str, settings: &Settings) -> WorkboardResult<TokenData<Claims>> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.remove("exp");
    let key = DecodingKey::from_secret(settings.jwt_secret.as_ref());
    Ok(decode::<Claims>(jwt, &key, &validation)?)
  }

  pub fn jwt(user_id: i32, settings: &Settings) -> WorkboardResult<Jwt> {
    let claims = Claims {
      sub: user_id,
      iss: settings.hostname.clone(),
      iat: Utc::now().timestamp(),
    };
    let key = EncodingKey::from_secret(settings.jwt_secret.as_ref());
    Ok(encode(&Header::default(), &claims, &key)?)
  }
}
