use crate::{
  error::{WorkboardErrorExt, WorkboardErrorType, WorkboardResult},
  settings::structs::Settings,
};
use lettre::{
  message::{Mailbox, MultiPart},
  transport::smtp::{authentication::Credentials, extension::ClientId},
  Address,
  AsyncTransport,
  Message,
};
use std::str::FromStr;
use uuid::Uuid;

type AsyncSmtpTransport = lettre::AsyncSmtpTransport<lettre::Tokio1Executor>;

pub async fn send_email(
  subject: &str,
  to_email: &str,
  to_username: &str,
  html: &str,
  settings: &Settings,
) -> WorkboardResult<()> {
  let email_config = settings
    .email
    .clone()
    .ok_or(WorkboardErrorType::NoEmailSetup)?;
  let domain = settings.hostname.clone();

  let (smtp_server, smtp_port) = {
    let email_and_port = email_config.smtp_server.split(':').collect::<Vec<&str>>();
    let server = *email_and_port
      .first()
      .ok_or(WorkboardErrorType::EmailSmtpServerNeedsAPort)?;
    let port = email_and_port
      .get(1)
      .ok_or(WorkboardErrorType::EmailSmtpServerNeedsAPort)?
      .parse::<u16>()?;
    (server, port)
  };

  // the message length before wrap, 78, is somewhat arbitrary but looks good
  let plain_text = html2text::from_read(html.as_bytes(), 78);

  let email = Message::builder()
    .from(
      email_config
        .smtp_from_address
        .parse::<Mailbox>()
        .with_workboard_type(WorkboardErrorType::EmailSendFailed)?,
    )
    .to(Mailbox::new(
      Some(to_username.to_string()),
      Address::from_str(to_email).with_workboard_type(WorkboardErrorType::EmailSendFailed)?,
    ))
    .message_id(Some(format!("<{}@{}>", Uuid::new_v4(), settings.hostname)))
    .subject(subject)
    .multipart(MultiPart::alternative_plain_html(
      plain_text,
      html.to_string(),
    ))
    .with_workboard_type(WorkboardErrorType::EmailSendFailed)?;

  let mut builder = match email_config.tls_type.as_str() {
    "starttls" => AsyncSmtpTransport::starttls_relay(smtp_server)?,
    "tls" => AsyncSmtpTransport::relay(smtp_server)?,
    _ => AsyncSmtpTransport::builder_dangerous(smtp_server).port(smtp_port),
  };

  if let (Some(login), Some(password)) = (&email_config.smtp_login, &email_config.smtp_password())
  {
    builder = builder.credentials(Credentials::new(login.clone(), password.clone()));
  }

  let mailer = builder.hello_name(ClientId::Domain(domain)).build();

  mailer
    .send(email)
    .await
    .with_workboard_type(WorkboardErrorType::EmailSendFailed)?;

  Ok(())
}
