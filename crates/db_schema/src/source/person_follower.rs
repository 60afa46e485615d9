use crate::{newtypes::PersonId, schema::person_follower};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = person_follower)]
#[diesel(primary_key(person_id, follower_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A directed subscription edge: `follower_id` follows `person_id`.
pub struct PersonFollower {
  pub person_id: PersonId,
  pub follower_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = person_follower)]
pub struct PersonFollowerForm {
  pub person_id: PersonId,
  pub follower_id: PersonId,
}
