use actix_web::{
  http::StatusCode,
  web::{Data, Json},
};
use workboard_api_common::{comment::CreateComment, context::WorkboardContext, utils::notify_user};
use workboard_db_schema::{
  source::{
    comment::{Comment, CommentInsertForm},
    job::Job,
  },
  traits::Crud,
};
use workboard_db_views::structs::{CommentView, UserView};
use workboard_utils::error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult};

#[tracing::instrument(skip(context))]
pub async fn create_comment(
  data: Json<CreateComment>,
  context: Data<WorkboardContext>,
  user_view: UserView,
) -> WorkboardResult<(Json<CommentView>, StatusCode)> {
  let job = Job::read_from_uid(&mut context.pool(), data.job_uid).await?;
  let max_depth = context.settings().comment_max_depth;

  // The parent is resolved and the depth checked before anything is written,
  // so a rejected reply leaves no row behind.
  let parent = match data.parent_uid {
    Some(parent_uid) => Some(Comment::read_from_uid(&mut context.pool(), parent_uid).await?),
    None => None,
  };
  if let Some(parent) = &parent {
    let chain = Comment::ancestor_chain(&mut context.pool(), parent, max_depth).await?;
    check_nesting_depth(chain.len(), max_depth)?;
  }

  let first_parent = match data.first_parent_uid {
    Some(first_parent_uid) => {
      Some(Comment::read_from_uid(&mut context.pool(), first_parent_uid).await?)
    }
    None => None,
  };

  let comment_form = CommentInsertForm {
    parent_id: parent.as_ref().map(|c| c.id),
    first_parent_id: first_parent.as_ref().map(|c| c.id),
    ..CommentInsertForm::new(user_view.user.id, job.id, data.content.clone())
  };
  let inserted_comment = Comment::create(&mut context.pool(), &comment_form)
    .await
    .with_workboard_type(WorkboardErrorType::CouldntCreateComment)?;

  notify_user(job.creator_id, &context);

  Ok((
    Json(CommentView::read(&mut context.pool(), inserted_comment.id).await?),
    StatusCode::CREATED,
  ))
}

/// The chain holds the ancestors of the parent, so the reply itself sits one
/// level further down.
fn check_nesting_depth(parent_chain_len: usize, max_depth: usize) -> WorkboardResult<()> {
  let depth = parent_chain_len + 1;
  if depth >= max_depth {
    Err(WorkboardErrorType::MaxCommentDepthReached)?
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::check_nesting_depth;

  #[test]
  fn test_nesting_depth() {
    // a reply under a root comment has one ancestor
    assert!(check_nesting_depth(0, 3).is_ok());
    assert!(check_nesting_depth(1, 3).is_ok());
    // the third nesting level is full
    assert!(check_nesting_depth(2, 3).is_err());
    assert!(check_nesting_depth(7, 3).is_err());
  }
}
