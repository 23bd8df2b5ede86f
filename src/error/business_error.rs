use crate::error::AuthError;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // NATIVE FORM CONSTRAINTS
    #[error("Please fill out the email field.")]
    EmailIsMissing,

    #[error("Please enter a valid email address.")]
    EmailFormatIsIncorrect,

    #[error("Please fill out the password field.")]
    PasswordIsMissing,

    // AUTHENTICATION
    #[error(transparent)]
    AuthenticationFailed(#[from] AuthError),

    // OTHER
    #[error("Failed to bind TcpListener.")]
    BindTcpListenerError(#[source] std::io::Error),

    #[error("Failed to get the local address of TcpListener.")]
    LocalAddrError(#[source] std::io::Error),

    #[error("Failed to listen TcpListener.")]
    ListenTcpListenerError(#[source] std::io::Error),

    #[error("Failed to run server.")]
    RunServerError(#[source] std::io::Error),

    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ResponseError for BizErrorEnum {
    fn status_code(&self) -> StatusCode {
        match self {
            BizErrorEnum::EmailIsMissing
            | BizErrorEnum::EmailFormatIsIncorrect
            | BizErrorEnum::PasswordIsMissing => StatusCode::BAD_REQUEST,

            BizErrorEnum::AuthenticationFailed(AuthError::InvalidCredentials) => {
                StatusCode::UNAUTHORIZED
            }
            BizErrorEnum::AuthenticationFailed(AuthError::Network(_)) => StatusCode::BAD_GATEWAY,

            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::new(self.status_code())
    }
}
