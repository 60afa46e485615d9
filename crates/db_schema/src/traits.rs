use crate::utils::DbPool;
use scribe_utils::error::ScribeResult;

pub trait Crud {
  type InsertForm;
  type UpdateForm;
  type IdType;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> ScribeResult<Self>
  where
    Self: Sized;

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> ScribeResult<Self>
  where
    Self: Sized;

  /// when you want to null out a column, you have to send Some(None), since
  /// sending None means you just don't want to update that column.
  async fn update(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> ScribeResult<Self>
  where
    Self: Sized;

  async fn delete(pool: &mut DbPool<'_>, id: Self::IdType) -> ScribeResult<usize>
  where
    Self: Sized;
}

pub trait Followable {
  type Form;

  /// Idempotent: following someone who is already followed is a no-op.
  async fn follow(pool: &mut DbPool<'_>, form: &Self::Form) -> ScribeResult<usize>
  where
    Self: Sized;

  /// Unfollowing someone who was never followed is also a no-op.
  async fn unfollow(pool: &mut DbPool<'_>, form: &Self::Form) -> ScribeResult<usize>
  where
    Self: Sized;
}
