use crate::structs::CommentView;
use diesel::{result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;
use workboard_db_schema::{
  newtypes::{CommentId, JobId, UserId},
  schema::{comment, comment_like, job, user_},
  source::comment::{Comment, CommentLike},
  traits::Crud,
  utils::{get_conn, DbPool},
};

impl CommentView {
  pub async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<Self, Error> {
    let comment = Comment::read(pool, comment_id).await?;
    let views = assemble(pool, vec![comment]).await?;
    views.into_iter().next().ok_or(Error::NotFound)
  }

  /// All live comments of a job, oldest first.
  pub async fn for_job(pool: &mut DbPool<'_>, job_id: JobId) -> Result<Vec<Self>, Error> {
    let comments = Comment::for_job(pool, job_id).await?;
    assemble(pool, comments).await
  }
}

/// Resolves the row references of a batch of comments to public identifiers with
/// one query per referenced table.
async fn assemble(
  pool: &mut DbPool<'_>,
  comments: Vec<Comment>,
) -> Result<Vec<CommentView>, Error> {
  if comments.is_empty() {
    return Ok(Vec::new());
  }

  let comment_ids = comments.iter().map(|c| c.id).collect::<Vec<_>>();

  let conn = &mut get_conn(pool).await?;
  let likes = comment_like::table
    .filter(comment_like::comment_id.eq_any(&comment_ids))
    .order(comment_like::id.asc())
    .load::<CommentLike>(conn)
    .await?;

  let mut user_ids = comments.iter().map(|c| c.creator_id).collect::<HashSet<_>>();
  user_ids.extend(likes.iter().map(|l| l.user_id));
  let user_uids = user_::table
    .filter(user_::id.eq_any(user_ids))
    .select((user_::id, user_::uid))
    .load::<(UserId, Uuid)>(conn)
    .await?
    .into_iter()
    .collect::<HashMap<_, _>>();

  let job_ids = comments.iter().map(|c| c.job_id).collect::<HashSet<_>>();
  let job_uids = job::table
    .filter(job::id.eq_any(job_ids))
    .select((job::id, job::uid))
    .load::<(JobId, Uuid)>(conn)
    .await?
    .into_iter()
    .collect::<HashMap<_, _>>();

  // Parents of the batch that are not themselves in it, soft-deleted ones included,
  // so a reply below a removed comment still points at it.
  let mut comment_uids = comments
    .iter()
    .map(|c| (c.id, c.uid))
    .collect::<HashMap<_, _>>();
  let missing_parent_ids = comments
    .iter()
    .flat_map(|c| [c.parent_id, c.first_parent_id])
    .flatten()
    .filter(|id| !comment_uids.contains_key(id))
    .collect::<HashSet<_>>();
  if !missing_parent_ids.is_empty() {
    let parents = comment::table
      .filter(comment::id.eq_any(missing_parent_ids))
      .select((comment::id, comment::uid))
      .load::<(CommentId, Uuid)>(conn)
      .await?;
    comment_uids.extend(parents);
  }

  let mut likes_of = HashMap::<CommentId, Vec<Uuid>>::new();
  for like in likes {
    if let Some(user_uid) = user_uids.get(&like.user_id) {
      likes_of.entry(like.comment_id).or_default().push(*user_uid);
    }
  }

  comments
    .into_iter()
    .map(|c| {
      Ok(CommentView {
        uid: c.uid,
        content: c.content,
        creator_uid: *user_uids.get(&c.creator_id).ok_or(Error::NotFound)?,
        job_uid: *job_uids.get(&c.job_id).ok_or(Error::NotFound)?,
        parent_uid: c.parent_id.and_then(|id| comment_uids.get(&id)).copied(),
        first_parent_uid: c.first_parent_id.and_then(|id| comment_uids.get(&id)).copied(),
        users_likes: likes_of.remove(&c.id).unwrap_or_default(),
        published: c.published,
        updated: c.updated,
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use crate::structs::CommentView;
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use workboard_db_schema::{
    source::{
      comment::{Comment, CommentInsertForm, CommentLike, CommentLikeForm},
      job::{Job, JobInsertForm},
      user::{User, UserInsertForm},
    },
    traits::{Crud, Likeable},
    utils::build_db_pool_for_tests,
  };

  #[tokio::test]
  #[serial]
  async fn test_for_job() {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = User::create(
      pool,
      &UserInsertForm::new("view author".into(), "view_author@example.com".into(), None),
    )
    .await
    .unwrap();
    let liker = User::create(
      pool,
      &UserInsertForm::new("view liker".into(), "view_liker@example.com".into(), None),
    )
    .await
    .unwrap();
    let job = Job::create(pool, &JobInsertForm::new("Data engineer".into(), author.id))
      .await
      .unwrap();

    let top = Comment::create(
      pool,
      &CommentInsertForm::new(author.id, job.id, "top".into()),
    )
    .await
    .unwrap();
    let reply = Comment::create(
      pool,
      &CommentInsertForm {
        parent_id: Some(top.id),
        first_parent_id: Some(top.id),
        ..CommentInsertForm::new(author.id, job.id, "reply".into())
      },
    )
    .await
    .unwrap();

    CommentLike::like(pool, &CommentLikeForm::new(author.id, reply.id))
      .await
      .unwrap();
    CommentLike::like(pool, &CommentLikeForm::new(liker.id, reply.id))
      .await
      .unwrap();

    let views = CommentView::for_job(pool, job.id).await.unwrap();
    assert_eq!(2, views.len());
    assert_eq!(top.uid, views[0].uid);
    assert_eq!(None, views[0].parent_uid);
    assert!(views[0].users_likes.is_empty());
    assert_eq!(Some(top.uid), views[1].parent_uid);
    assert_eq!(Some(top.uid), views[1].first_parent_uid);
    assert_eq!(vec![author.uid, liker.uid], views[1].users_likes);
    assert_eq!(job.uid, views[1].job_uid);
    assert_eq!(author.uid, views[1].creator_uid);

    // a deleted parent disappears from the listing but replies still reference it
    Comment::soft_delete(pool, top.id).await.unwrap();
    let views = CommentView::for_job(pool, job.id).await.unwrap();
    assert_eq!(1, views.len());
    assert_eq!(Some(top.uid), views[0].parent_uid);

    let single = CommentView::read(pool, reply.id).await.unwrap();
    assert_eq!(views[0], single);

    for comment in [reply, top] {
      Comment::delete(pool, comment.id).await.unwrap();
    }
    Job::delete(pool, job.id).await.unwrap();
    for user in [author, liker] {
      User::delete(pool, user.id).await.unwrap();
    }
  }
}
