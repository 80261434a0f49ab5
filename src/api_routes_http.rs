use actix_web::web;
use workboard_api::{
  comment::{add_like::add_like, remove_like::remove_like},
  password::{
    check::check_password_set,
    reset::reset_password,
    send_login_email::send_login_email,
    send_reset_email::send_reset_email,
    set::set_password,
  },
  user::{login::login, verify_email::verify_email},
};
use workboard_api_crud::{
  account::{create::create_account, read::get_account},
  comment::{
    create::create_comment,
    delete::delete_comment,
    list::list_comments,
    read::get_comment,
    update::update_comment,
  },
  folder::{
    create::create_folder,
    delete::delete_folder,
    read::get_folder_tree,
    update::update_folder,
  },
  job::{create::create_job, read::get_job},
  user::{
    create::register,
    delete::delete_user,
    list::list_users,
    read::{get_profile, get_user, get_user_email},
    update::update_user,
  },
};

/// Trailing slashes are part of the URL contract, the clients send them.
pub fn config(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Comment
      .service(
        web::scope("/comment")
          .route("/", web::post().to(create_comment))
          .route("/job/{job_uid}/", web::get().to(list_comments))
          .route("/add_like/{uid}/", web::post().to(add_like))
          .route("/remove_like/{uid}/", web::post().to(remove_like))
          .route("/{uid}/", web::get().to(get_comment))
          .route("/{uid}/", web::patch().to(update_comment))
          .route("/{uid}/", web::delete().to(delete_comment)),
      )
      // User
      .service(
        web::scope("/users")
          .route("/", web::get().to(list_users))
          .route("/", web::post().to(register))
          .route("/", web::patch().to(update_user))
          .route("/", web::delete().to(delete_user))
          // fixed segments go first so they never parse as a uid
          .route("/login/", web::post().to(login))
          .route("/profile/", web::get().to(get_profile))
          .route("/verifyemail/{uid}/{token}/", web::get().to(verify_email))
          .route("/{uid}/email/", web::get().to(get_user_email))
          .route("/{uid}/", web::get().to(get_user)),
      )
      // Password flows, reachable without a session
      .service(
        web::scope("/password")
          .route("/set_password/{uid}/", web::post().to(set_password))
          .route("/reset_password_email/", web::post().to(send_reset_email))
          .route("/reset_password/", web::post().to(reset_password))
          .route("/check/", web::post().to(check_password_set))
          .route("/send_login_email/{id}/", web::get().to(send_login_email)),
      )
      // Folder
      .service(
        web::scope("/folders")
          .route("/", web::post().to(create_folder))
          .route("/{account_uid}/", web::get().to(get_folder_tree))
          .route("/{uid}/", web::patch().to(update_folder))
          .route("/{uid}/", web::delete().to(delete_folder)),
      )
      // Account
      .service(
        web::scope("/accounts")
          .route("/", web::post().to(create_account))
          .route("/{uid}/", web::get().to(get_account)),
      )
      // Job
      .service(
        web::scope("/jobs")
          .route("/", web::post().to(create_job))
          .route("/{uid}/", web::get().to(get_job)),
      ),
  );
}
