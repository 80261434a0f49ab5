use crate::{
  newtypes::{CommentId, JobId, UserId},
  schema::{comment, comment_like},
  source::comment::{Comment, CommentInsertForm, CommentLike, CommentLikeForm, CommentUpdateForm},
  traits::{Crud, Likeable},
  utils::{get_conn, naive_now, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

impl CommentInsertForm {
  pub fn new(creator_id: UserId, job_id: JobId, content: String) -> Self {
    Self {
      uid: Uuid::new_v4(),
      creator_id,
      job_id,
      parent_id: None,
      first_parent_id: None,
      content,
      published: naive_now(),
    }
  }
}

impl CommentLikeForm {
  pub fn new(user_id: UserId, comment_id: CommentId) -> Self {
    Self {
      user_id,
      comment_id,
      published: naive_now(),
    }
  }
}

impl Comment {
  /// Point lookup by the public identifier. Soft-deleted comments are treated as missing.
  pub async fn read_from_uid(pool: &mut DbPool<'_>, comment_uid: Uuid) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .filter(comment::uid.eq(comment_uid))
      .filter(comment::deleted.eq(false))
      .first::<Self>(conn)
      .await
  }

  /// Point lookup by the public identifier that also returns soft-deleted rows.
  pub async fn read_from_uid_include_deleted(
    pool: &mut DbPool<'_>,
    comment_uid: Uuid,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .filter(comment::uid.eq(comment_uid))
      .first::<Self>(conn)
      .await
  }

  /// Walks the parent references upward from the given comment and returns its non-deleted
  /// ancestors, nearest first. Soft-deleted ancestors are walked through but left out of the
  /// result. The walk is capped at `max_depth` lookups so a parent cycle in bad data cannot
  /// hang it. Callers must only rely on the length of the chain, not its order.
  pub async fn ancestor_chain(
    pool: &mut DbPool<'_>,
    comment: &Comment,
    max_depth: usize,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let mut chain = Vec::new();
    let mut next = comment.parent_id;
    let mut remaining = max_depth;
    while let Some(ancestor_id) = next {
      if remaining == 0 {
        break;
      }
      remaining -= 1;
      let Some(ancestor) = comment::table
        .find(ancestor_id)
        .first::<Self>(conn)
        .await
        .optional()?
      else {
        break;
      };
      next = ancestor.parent_id;
      if !ancestor.deleted {
        chain.push(ancestor);
      }
    }
    Ok(chain)
  }

  pub async fn soft_delete(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<Self, Error> {
    let form = CommentUpdateForm {
      deleted: Some(true),
      updated: Some(Some(naive_now())),
      ..Default::default()
    };
    Self::update(pool, comment_id, &form).await
  }

  /// All live comments of a job, oldest first.
  pub async fn for_job(pool: &mut DbPool<'_>, for_job_id: JobId) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .filter(comment::job_id.eq(for_job_id))
      .filter(comment::deleted.eq(false))
      .order(comment::published.asc())
      .load::<Self>(conn)
      .await
  }
}

#[async_trait]
impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type UpdateForm = CommentUpdateForm;
  type IdType = CommentId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table.find(comment_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    comment_id: CommentId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(comment::table.find(comment_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(comment::table.find(comment_id))
      .execute(conn)
      .await
  }
}

#[async_trait]
impl Likeable for CommentLike {
  type Form = CommentLikeForm;
  type IdType = CommentId;

  /// Re-liking an already liked comment keeps a single row per user.
  async fn like(pool: &mut DbPool<'_>, form: &CommentLikeForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment_like::table)
      .values(form)
      .on_conflict((comment_like::comment_id, comment_like::user_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn remove(
    pool: &mut DbPool<'_>,
    for_user_id: UserId,
    comment_id: CommentId,
  ) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      comment_like::table
        .filter(comment_like::comment_id.eq(comment_id))
        .filter(comment_like::user_id.eq(for_user_id)),
    )
    .execute(conn)
    .await
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use crate::{
    source::{
      comment::{Comment, CommentInsertForm, CommentLike, CommentLikeForm, CommentUpdateForm},
      job::{Job, JobInsertForm},
      user::{User, UserInsertForm},
    },
    traits::{Crud, Likeable},
    utils::{build_db_pool_for_tests, naive_now, DbPool},
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  async fn setup(pool: &mut DbPool<'_>) -> (User, Job) {
    let user_form = UserInsertForm::new(
      "terry comment".into(),
      "terry_comment@example.com".into(),
      None,
    );
    let user = User::create(pool, &user_form).await.unwrap();

    let job_form = JobInsertForm::new("Backend engineer".into(), user.id);
    let job = Job::create(pool, &job_form).await.unwrap();

    (user, job)
  }

  #[tokio::test]
  #[serial]
  async fn test_crud() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let (user, job) = setup(pool).await;

    let form = CommentInsertForm::new(user.id, job.id, "A comment".into());
    let comment = Comment::create(pool, &form).await.unwrap();
    assert_eq!("A comment", comment.content);
    assert_eq!(None, comment.parent_id);
    assert!(!comment.deleted);

    let read = Comment::read_from_uid(pool, comment.uid).await.unwrap();
    assert_eq!(comment, read);

    let update_form = CommentUpdateForm {
      content: Some("A comment, edited".into()),
      updated: Some(Some(naive_now())),
      ..Default::default()
    };
    let updated = Comment::update(pool, comment.id, &update_form).await.unwrap();
    assert_eq!("A comment, edited", updated.content);
    assert!(updated.updated.is_some());

    Comment::soft_delete(pool, comment.id).await.unwrap();
    assert!(Comment::read_from_uid(pool, comment.uid).await.is_err());
    let tombstone = Comment::read_from_uid_include_deleted(pool, comment.uid)
      .await
      .unwrap();
    assert!(tombstone.deleted);

    let num_deleted = Comment::delete(pool, comment.id).await.unwrap();
    assert_eq!(1, num_deleted);
    Job::delete(pool, job.id).await.unwrap();
    User::delete(pool, user.id).await.unwrap();
  }

  #[tokio::test]
  #[serial]
  async fn test_ancestor_chain() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let (user, job) = setup(pool).await;

    let c1 = Comment::create(pool, &CommentInsertForm::new(user.id, job.id, "c1".into()))
      .await
      .unwrap();
    let c2 = Comment::create(
      pool,
      &CommentInsertForm {
        parent_id: Some(c1.id),
        first_parent_id: Some(c1.id),
        ..CommentInsertForm::new(user.id, job.id, "c2".into())
      },
    )
    .await
    .unwrap();
    let c3 = Comment::create(
      pool,
      &CommentInsertForm {
        parent_id: Some(c2.id),
        first_parent_id: Some(c1.id),
        ..CommentInsertForm::new(user.id, job.id, "c3".into())
      },
    )
    .await
    .unwrap();

    let ids = |chain: &[Comment]| chain.iter().map(|c| c.id).collect::<Vec<_>>();

    let chain = Comment::ancestor_chain(pool, &c3, 10).await.unwrap();
    assert_eq!(vec![c2.id, c1.id], ids(&chain));

    let chain = Comment::ancestor_chain(pool, &c2, 10).await.unwrap();
    assert_eq!(vec![c1.id], ids(&chain));

    let chain = Comment::ancestor_chain(pool, &c1, 10).await.unwrap();
    assert!(chain.is_empty());

    // the cap bounds how far up the walk may go
    let chain = Comment::ancestor_chain(pool, &c3, 1).await.unwrap();
    assert_eq!(vec![c2.id], ids(&chain));

    // deleted ancestors are walked through but not counted
    Comment::soft_delete(pool, c2.id).await.unwrap();
    let chain = Comment::ancestor_chain(pool, &c3, 10).await.unwrap();
    assert_eq!(vec![c1.id], ids(&chain));

    for comment in [c3, c2, c1] {
      Comment::delete(pool, comment.id).await.unwrap();
    }
    Job::delete(pool, job.id).await.unwrap();
    User::delete(pool, user.id).await.unwrap();
  }

  #[tokio::test]
  #[serial]
  async fn test_likes() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let (user, job) = setup(pool).await;

    let comment = Comment::create(pool, &CommentInsertForm::new(user.id, job.id, "liked".into()))
      .await
      .unwrap();

    let form = CommentLikeForm::new(user.id, comment.id);
    let like = CommentLike::like(pool, &form).await.unwrap();
    assert_eq!(user.id, like.user_id);
    assert_eq!(comment.id, like.comment_id);

    // liking again must not create a second row
    let again = CommentLike::like(pool, &form).await.unwrap();
    assert_eq!(like.id, again.id);

    let removed = CommentLike::remove(pool, user.id, comment.id).await.unwrap();
    assert_eq!(1, removed);
    let removed_again = CommentLike::remove(pool, user.id, comment.id).await.unwrap();
    assert_eq!(0, removed_again);

    Comment::delete(pool, comment.id).await.unwrap();
    Job::delete(pool, job.id).await.unwrap();
    User::delete(pool, user.id).await.unwrap();
  }
}
