use crate::{
  error::{ScribeErrorExt, ScribeErrorType, ScribeResult},
  settings::SETTINGS,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

type Jwt = String;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// Person id, standard claim by RFC 7519.
  pub sub: i32,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  pub fn decode(jwt: &str) -> ScribeResult<Claims> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.remove("exp");
    let key = DecodingKey::from_secret(SETTINGS.jwt_secret.as_ref());
    let claims = decode::<Claims>(jwt, &key, &validation)
      .with_scribe_type(ScribeErrorType::IncorrectLogin)?;
    Ok(claims.claims)
  }

  pub fn generate(person_id: i32) -> ScribeResult<Jwt> {
    let claims = Claims {
      sub: person_id,
      iss: SETTINGS.hostname.clone(),
      iat: Utc::now().timestamp(),
    };
    let key = EncodingKey::from_secret(SETTINGS.jwt_secret.as_ref());
    Ok(encode(&Header::default(), &claims, &key)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ScribeResult;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_roundtrip() -> ScribeResult<()> {
    let jwt = Claims::generate(42)?;
    let decoded = Claims::decode(&jwt)?;
    assert_eq!(42, decoded.sub);
    Ok(())
  }

  #[test]
  fn test_rejects_garbage() {
    assert!(Claims::decode("not.a.jwt").is_err());
  }
}
