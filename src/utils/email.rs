use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, instrument};

use crate::config::email::EmailConfig;
use crate::utils::errors::AppError;

/// Out-of-band delivery capability for verification codes.
///
/// The implementation is selected once at startup: `Smtp` sends real
/// mail; `Noop` logs the delivery and reports success, so environments
/// without an SMTP relay exercise the same issuing path. Any non-success
/// is a delivery failure signal; no retry happens here.
#[derive(Clone)]
pub enum Notifier {
    Smtp(SmtpNotifier),
    Noop,
}

impl Notifier {
    pub fn from_config(config: &EmailConfig) -> Self {
        if config.enabled {
            Notifier::Smtp(SmtpNotifier::new(config.clone()))
        } else {
            Notifier::Noop
        }
    }

    pub async fn send_verification_code(&self, to_email: &str, code: &str) -> Result<(), AppError> {
        match self {
            Notifier::Smtp(smtp) => smtp.send_verification_code(to_email, code).await,
            Notifier::Noop => {
                info!(email = %to_email, "SMTP disabled, skipping code delivery");
                Ok(())
            }
        }
    }
}

#[derive(Clone)]
pub struct SmtpNotifier {
    config: EmailConfig,
}

impl SmtpNotifier {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    #[instrument(skip(self, code))]
    pub async fn send_verification_code(&self, to_email: &str, code: &str) -> Result<(), AppError> {
        let html_body = self.verification_code_template(code);
        let text_body = format!(
            "Hi,\n\n\
             Your Wardpass verification code is:\n\n\
             {}\n\n\
             Enter it on the verification page to confirm your email address.\n\n\
             If you didn't request this code, you can ignore this email.\n\n\
             Best regards,\n\
             Wardpass Team",
            code
        );

        self.send_email(to_email, "Your verification code", &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal_error(format!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal_error(format!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal_error(format!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal_error(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::bad_gateway(format!("Failed to deliver code: {}", e)))?;

        Ok(())
    }

    fn verification_code_template(&self, code: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Your verification code</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
                    <tr>
                        <td style="background-color: #0F766E; padding: 30px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Wardpass</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px 30px;">
                            <h2 style="margin: 0 0 20px 0; color: #333333; font-size: 24px;">Your verification code</h2>
                            <p style="margin: 0 0 20px 0; color: #666666; font-size: 16px; line-height: 1.5;">
                                Enter this code on the verification page to confirm your email address:
                            </p>
                            <table width="100%" cellpadding="0" cellspacing="0" style="margin: 30px 0;">
                                <tr>
                                    <td align="center">
                                        <span style="display: inline-block; padding: 14px 40px; background-color: #F0FDFA; color: #0F766E; border-radius: 6px; font-size: 32px; font-weight: bold; letter-spacing: 8px;">{}</span>
                                    </td>
                                </tr>
                            </table>
                            <p style="margin: 0; color: #666666; font-size: 14px; line-height: 1.5;">
                                If you didn't request this code, you can ignore this email or contact support if you have concerns.
                            </p>
                        </td>
                    </tr>
                    <tr>
                        <td style="background-color: #f8f9fa; padding: 20px 30px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0; color: #999999; font-size: 12px;">
                                This is an automated email from Wardpass. Please do not reply.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
            code
        )
    }
}
