#![allow(clippy::unwrap_used)]

use actix::Actor;
use actix_web::{
  http::StatusCode,
  test::{call_service, init_service, read_body_json, TestRequest},
  web::Data,
  App,
};
use serde_json::{json, Value};
use serial_test::serial;
use workboard_api_common::context::WorkboardContext;
use workboard_db_schema::utils::build_db_pool_for_tests;
use workboard_server::{api_routes_http, session_middleware::SessionMiddleware};
use workboard_websocket::chat_server::ChatServer;

async fn create_test_context() -> WorkboardContext {
  let pool = build_db_pool_for_tests().await;
  let chat_server = ChatServer::startup().start();
  WorkboardContext::create(pool, chat_server)
}

/// Emails are unique in the database, tests must not collide across runs.
fn unique(name: &str) -> String {
  let nanos = std::time::SystemTime::now()
    .duration_since(std::time::UNIX_EPOCH)
    .map(|d| d.as_nanos())
    .unwrap_or_default();
  format!("{name}_{nanos}")
}

#[actix_web::test]
#[serial]
async fn test_threaded_comments_follow_the_depth_limit() {
  let context = create_test_context().await;
  let app = init_service(
    App::new()
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context.clone()))
      .configure(api_routes_http::config),
  )
  .await;

  let name = unique("rosa");
  let email = format!("{name}@example.com");
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/")
      .set_json(json!({
        "nickname": name,
        "email": email,
        "password": "longenough password",
      }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::CREATED, resp.status());

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/login/")
      .set_json(json!({ "email": email, "password": "longenough password" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());
  let body: Value = read_body_json(resp).await;
  let jwt = body["jwt"].as_str().unwrap().to_string();

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/jobs/")
      .insert_header(("auth", jwt.clone()))
      .set_json(json!({ "title": "Field engineer" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::CREATED, resp.status());
  let job: Value = read_body_json(resp).await;
  let job_uid = job["uid"].as_str().unwrap().to_string();

  // the default depth limit allows a thread of three levels
  let mut parent_uid: Option<String> = None;
  let mut comment_uids: Vec<String> = Vec::new();
  for content in ["first", "second", "third"] {
    let resp = call_service(
      &app,
      TestRequest::post()
        .uri("/api/v1/comment/")
        .insert_header(("auth", jwt.clone()))
        .set_json(json!({
          "content": content,
          "job_uid": job_uid,
          "parent_uid": parent_uid,
          "first_parent_uid": comment_uids.first(),
        }))
        .to_request(),
    )
    .await;
    assert_eq!(StatusCode::CREATED, resp.status());
    let comment: Value = read_body_json(resp).await;
    let uid = comment["uid"].as_str().unwrap().to_string();
    parent_uid = Some(uid.clone());
    comment_uids.push(uid);
  }

  // one level deeper is rejected before anything is written
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/comment/")
      .insert_header(("auth", jwt.clone()))
      .set_json(json!({
        "content": "too deep",
        "job_uid": job_uid,
        "parent_uid": parent_uid,
        "first_parent_uid": comment_uids.first(),
      }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::BAD_REQUEST, resp.status());
  let body: Value = read_body_json(resp).await;
  assert_eq!("max_comment_depth_reached", body["error"]);

  // the thread lists all three, oldest first, as a plain array
  let resp = call_service(
    &app,
    TestRequest::get()
      .uri(&format!("/api/v1/comment/job/{job_uid}/"))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());
  let listed: Value = read_body_json(resp).await;
  let listed = listed.as_array().unwrap();
  assert_eq!(3, listed.len());
  assert_eq!("first", listed[0]["content"]);
  assert_eq!(comment_uids[0], listed[1]["parent_uid"].as_str().unwrap());
  assert_eq!(
    comment_uids[0],
    listed[2]["first_parent_uid"].as_str().unwrap()
  );

  // the author deletes the deepest reply, the thread shrinks
  let deepest = comment_uids.last().unwrap();
  let resp = call_service(
    &app,
    TestRequest::delete()
      .uri(&format!("/api/v1/comment/{deepest}/"))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::NO_CONTENT, resp.status());

  let resp = call_service(
    &app,
    TestRequest::get()
      .uri(&format!("/api/v1/comment/job/{job_uid}/"))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  let listed: Value = read_body_json(resp).await;
  assert_eq!(2, listed.as_array().unwrap().len());

  // a deleted comment reads as gone
  let resp = call_service(
    &app,
    TestRequest::get()
      .uri(&format!("/api/v1/comment/{deepest}/"))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::NOT_FOUND, resp.status());
}

#[actix_web::test]
#[serial]
async fn test_comment_likes_and_edit_permissions() {
  let context = create_test_context().await;
  let app = init_service(
    App::new()
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context.clone()))
      .configure(api_routes_http::config),
  )
  .await;

  // the profile endpoint needs a session
  let resp = call_service(
    &app,
    TestRequest::get().uri("/api/v1/users/profile/").to_request(),
  )
  .await;
  assert_eq!(StatusCode::UNAUTHORIZED, resp.status());

  let mut jwts = Vec::new();
  let mut uids = Vec::new();
  for name in ["ines", "jamal"] {
    let name = unique(name);
    let email = format!("{name}@example.com");
    let resp = call_service(
      &app,
      TestRequest::post()
        .uri("/api/v1/users/")
        .set_json(json!({
          "nickname": name,
          "email": email,
          "password": "longenough password",
        }))
        .to_request(),
    )
    .await;
    assert_eq!(StatusCode::CREATED, resp.status());
    let body: Value = read_body_json(resp).await;
    uids.push(body["uid"].as_str().unwrap().to_string());

    let resp = call_service(
      &app,
      TestRequest::post()
        .uri("/api/v1/users/login/")
        .set_json(json!({ "email": email, "password": "longenough password" }))
        .to_request(),
    )
    .await;
    assert_eq!(StatusCode::OK, resp.status());
    let body: Value = read_body_json(resp).await;
    jwts.push(body["jwt"].as_str().unwrap().to_string());
  }

  // the second user joined after the first, so they cannot be the admin
  let resp = call_service(
    &app,
    TestRequest::get()
      .uri("/api/v1/users/")
      .insert_header(("auth", jwts[1].clone()))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::FORBIDDEN, resp.status());

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/jobs/")
      .insert_header(("auth", jwts[0].clone()))
      .set_json(json!({ "title": "Staff chemist" }))
      .to_request(),
  )
  .await;
  let job: Value = read_body_json(resp).await;

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/comment/")
      .insert_header(("auth", jwts[0].clone()))
      .set_json(json!({ "content": "strong resume", "job_uid": job["uid"] }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::CREATED, resp.status());
  let comment: Value = read_body_json(resp).await;
  let comment_uid = comment["uid"].as_str().unwrap().to_string();
  assert_eq!(0, comment["users_likes"].as_array().unwrap().len());

  // the second user likes it, and liking twice keeps a single entry
  for _ in 0..2 {
    let resp = call_service(
      &app,
      TestRequest::post()
        .uri(&format!("/api/v1/comment/add_like/{comment_uid}/"))
        .insert_header(("auth", jwts[1].clone()))
        .to_request(),
    )
    .await;
    assert_eq!(StatusCode::OK, resp.status());
    let liked: Value = read_body_json(resp).await;
    assert_eq!(json!([uids[1]]), liked["users_likes"]);
  }

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri(&format!("/api/v1/comment/remove_like/{comment_uid}/"))
      .insert_header(("auth", jwts[1].clone()))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());
  let unliked: Value = read_body_json(resp).await;
  assert_eq!(0, unliked["users_likes"].as_array().unwrap().len());

  // liking something that does not exist is a 404
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/comment/add_like/00000000-0000-0000-0000-000000000000/")
      .insert_header(("auth", jwts[1].clone()))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::NOT_FOUND, resp.status());

  // only the author may edit or delete
  let resp = call_service(
    &app,
    TestRequest::patch()
      .uri(&format!("/api/v1/comment/{comment_uid}/"))
      .insert_header(("auth", jwts[1].clone()))
      .set_json(json!({ "content": "defaced" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::FORBIDDEN, resp.status());

  let resp = call_service(
    &app,
    TestRequest::patch()
      .uri(&format!("/api/v1/comment/{comment_uid}/"))
      .insert_header(("auth", jwts[0].clone()))
      .set_json(json!({ "content": "strong resume, weak cover letter" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());
  let edited: Value = read_body_json(resp).await;
  assert_eq!("strong resume, weak cover letter", edited["content"]);
  assert!(edited["updated"].is_string());
}

#[actix_web::test]
#[serial]
async fn test_folder_tree_nests_under_the_account_root() {
  let context = create_test_context().await;
  let app = init_service(
    App::new()
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context.clone()))
      .configure(api_routes_http::config),
  )
  .await;

  let name = unique("marta");
  let email = format!("{name}@example.com");
  call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/")
      .set_json(json!({
        "nickname": name,
        "email": email,
        "password": "longenough password",
      }))
      .to_request(),
  )
  .await;
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/login/")
      .set_json(json!({ "email": email, "password": "longenough password" }))
      .to_request(),
  )
  .await;
  let body: Value = read_body_json(resp).await;
  let jwt = body["jwt"].as_str().unwrap().to_string();

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/accounts/")
      .insert_header(("auth", jwt.clone()))
      .set_json(json!({ "name": "Acme" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::CREATED, resp.status());
  let account: Value = read_body_json(resp).await;
  let account_uid = account["uid"].as_str().unwrap().to_string();

  // a fresh account has a root folder named after it
  let resp = call_service(
    &app,
    TestRequest::get()
      .uri(&format!("/api/v1/folders/{account_uid}/"))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());
  let tree: Value = read_body_json(resp).await;
  assert_eq!("Acme", tree["name"]);
  assert_eq!(0, tree["children"].as_array().unwrap().len());
  let root_uid = tree["uid"].as_str().unwrap().to_string();

  let mut folder_uids = Vec::new();
  for (name, child_order) in [("inbox", 2), ("archive", 1)] {
    let resp = call_service(
      &app,
      TestRequest::post()
        .uri("/api/v1/folders/")
        .insert_header(("auth", jwt.clone()))
        .set_json(json!({
          "name": name,
          "account_uid": account_uid,
          "parent_uid": root_uid,
          "child_order": child_order,
        }))
        .to_request(),
    )
    .await;
    assert_eq!(StatusCode::CREATED, resp.status());
    let folder: Value = read_body_json(resp).await;
    assert_eq!(root_uid, folder["parent_uid"].as_str().unwrap());
    folder_uids.push(folder["uid"].as_str().unwrap().to_string());
  }

  // siblings come back sorted by child_order
  let resp = call_service(
    &app,
    TestRequest::get()
      .uri(&format!("/api/v1/folders/{account_uid}/"))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  let tree: Value = read_body_json(resp).await;
  let children = tree["children"].as_array().unwrap();
  assert_eq!(2, children.len());
  assert_eq!("archive", children[0]["name"]);
  assert_eq!("inbox", children[1]["name"]);

  // moving inbox under archive reshapes the tree
  let resp = call_service(
    &app,
    TestRequest::patch()
      .uri(&format!("/api/v1/folders/{}/", folder_uids[0]))
      .insert_header(("auth", jwt.clone()))
      .set_json(json!({ "parent_uid": folder_uids[1] }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());
  let moved: Value = read_body_json(resp).await;
  assert_eq!(folder_uids[1], moved["parent_uid"].as_str().unwrap());

  let resp = call_service(
    &app,
    TestRequest::get()
      .uri(&format!("/api/v1/folders/{account_uid}/"))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  let tree: Value = read_body_json(resp).await;
  let children = tree["children"].as_array().unwrap();
  assert_eq!(1, children.len());
  assert_eq!("inbox", children[0]["children"][0]["name"]);

  // a parent from a different account reads as unknown
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/accounts/")
      .insert_header(("auth", jwt.clone()))
      .set_json(json!({ "name": "Globex" }))
      .to_request(),
  )
  .await;
  let other_account: Value = read_body_json(resp).await;
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/folders/")
      .insert_header(("auth", jwt.clone()))
      .set_json(json!({
        "name": "stray",
        "account_uid": other_account["uid"],
        "parent_uid": root_uid,
      }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::NOT_FOUND, resp.status());

  // deleting a folder drops it from the tree
  let resp = call_service(
    &app,
    TestRequest::delete()
      .uri(&format!("/api/v1/folders/{}/", folder_uids[0]))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::NO_CONTENT, resp.status());

  let resp = call_service(
    &app,
    TestRequest::get()
      .uri(&format!("/api/v1/folders/{account_uid}/"))
      .insert_header(("auth", jwt.clone()))
      .to_request(),
  )
  .await;
  let tree: Value = read_body_json(resp).await;
  assert!(tree["children"][0]["children"]
    .as_array()
    .unwrap()
    .is_empty());
}

#[actix_web::test]
#[serial]
async fn test_password_flows() {
  let context = create_test_context().await;
  let app = init_service(
    App::new()
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context.clone()))
      .configure(api_routes_http::config),
  )
  .await;

  let name = unique("viktor");
  let email = format!("{name}@example.com");
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/")
      .set_json(json!({
        "nickname": name,
        "email": email,
        "password": "first password",
      }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::CREATED, resp.status());
  let user: Value = read_body_json(resp).await;
  let user_uid = user["uid"].as_str().unwrap().to_string();

  // the address is taken now
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/")
      .set_json(json!({
        "nickname": unique("viktor"),
        "email": email,
        "password": "first password",
      }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::BAD_REQUEST, resp.status());
  let body: Value = read_body_json(resp).await;
  assert_eq!("email_already_exists", body["error"]);

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/password/check/")
      .set_json(json!({ "email": email }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());

  // too short to be accepted
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri(&format!("/api/v1/password/set_password/{user_uid}/"))
      .set_json(json!({ "password": "short" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::BAD_REQUEST, resp.status());

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri(&format!("/api/v1/password/set_password/{user_uid}/"))
      .set_json(json!({ "password": "second password" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());
  let body: Value = read_body_json(resp).await;
  assert_eq!(user_uid, body.as_str().unwrap());

  // the old password no longer opens the account, the new one does
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/login/")
      .set_json(json!({ "email": email, "password": "first password" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::UNAUTHORIZED, resp.status());

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/login/")
      .set_json(json!({ "email": email, "password": "second password" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());

  // resetting requires knowing the current password
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/password/reset_password/")
      .set_json(json!({
        "email": email,
        "old_password": "first password",
        "new_password": "third password",
      }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::NOT_FOUND, resp.status());

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/password/reset_password/")
      .set_json(json!({
        "email": email,
        "old_password": "second password",
        "new_password": "third password",
      }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());
  let body: Value = read_body_json(resp).await;
  assert_eq!("OK", body["Result"]);

  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/users/login/")
      .set_json(json!({ "email": email, "password": "third password" }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::OK, resp.status());

  // reset mails only go to verified addresses
  let resp = call_service(
    &app,
    TestRequest::post()
      .uri("/api/v1/password/reset_password_email/")
      .set_json(json!({ "email": email }))
      .to_request(),
  )
  .await;
  assert_eq!(StatusCode::FORBIDDEN, resp.status());
  let body: Value = read_body_json(resp).await;
  assert_eq!("email_not_verified", body["error"]);
}
