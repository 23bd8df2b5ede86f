use crate::auth::{Authenticator, DiagnosticAuthenticator};
use crate::configuration::{Settings, SignInSettings};
use crate::constant::{LOGIN_PATH, VISIBILITY_PATH};
use crate::error::BizErrorEnum;
use crate::routes;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build the application with the diagnostic stand-in for authentication.
    pub fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let authenticator =
            DiagnosticAuthenticator::new(config.sign_in.expose_password_in_diagnostics);
        Self::build_with_authenticator(config, Arc::new(authenticator))
    }

    pub fn build_with_authenticator(
        config: Settings,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, BizErrorEnum> {
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::LocalAddrError)?
            .port();

        let server = run(listener, config.sign_in, authenticator)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

fn run(
    listener: TcpListener,
    sign_in: SignInSettings,
    authenticator: Arc<dyn Authenticator>,
) -> Result<Server, BizErrorEnum> {
    let sign_in = web::Data::new(sign_in);
    let authenticator: web::Data<dyn Authenticator> = web::Data::from(authenticator);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(sign_in.clone())
            .app_data(authenticator.clone())
            .route("/", web::get().to(routes::home))
            .route(LOGIN_PATH, web::get().to(routes::sign_in_form))
            .route(LOGIN_PATH, web::post().to(routes::sign_in))
            .route(
                VISIBILITY_PATH,
                web::post().to(routes::toggle_password_visibility),
            )
            .route("/health_check", web::get().to(routes::health_check))
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}
