use sign_in_form::configuration;
use sign_in_form::error::BizErrorEnum;
use sign_in_form::startup::Application;
use sign_in_form::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let subscriber =
        telemetry::get_subscriber("sign-in-form".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config)?;
    tracing::info!("Serving the sign-in form on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
