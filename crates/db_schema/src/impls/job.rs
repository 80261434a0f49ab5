use crate::{
  newtypes::{JobId, UserId},
  schema::job,
  source::job::{Job, JobInsertForm, JobUpdateForm},
  traits::Crud,
  utils::{get_conn, naive_now, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

impl JobInsertForm {
  pub fn new(title: String, creator_id: UserId) -> Self {
    Self {
      uid: Uuid::new_v4(),
      title,
      creator_id,
      published: naive_now(),
    }
  }
}

impl Job {
  pub async fn read_from_uid(pool: &mut DbPool<'_>, job_uid: Uuid) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    job::table
      .filter(job::uid.eq(job_uid))
      .filter(job::deleted.eq(false))
      .first::<Self>(conn)
      .await
  }
}

#[async_trait]
impl Crud for Job {
  type InsertForm = JobInsertForm;
  type UpdateForm = JobUpdateForm;
  type IdType = JobId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(job::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, job_id: JobId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    job::table.find(job_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    job_id: JobId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(job::table.find(job_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, job_id: JobId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(job::table.find(job_id))
      .execute(conn)
      .await
  }
}
