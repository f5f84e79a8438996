use std::process::ExitCode;

use booking_client::{
    app::App, backend::BookingBackend, configuration::Configuration,
    configuration_handler::ConfigurationHandler, http::HttpBackend, local_backend::LocalBackend,
    screens::ScreenSettings, types::User,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const OFFLINE_PASSWORD: &str = "123456";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configuration = ConfigurationHandler::parse_arguments();
    let settings = ScreenSettings::from_configuration(&configuration);

    if configuration.offline() {
        info!("Using the in-memory booking service");
        let backend = LocalBackend::new(settings.offset, offline_user(), OFFLINE_PASSWORD.into());
        backend.insert_example_data();
        return run(backend, settings, configuration).await;
    }

    let api_url = configuration.api_url();
    match HttpBackend::new(&api_url, configuration.api_token(), configuration.timeout()) {
        Ok(backend) => {
            info!(%api_url, "Using the booking service");
            run(backend, settings, configuration).await
        }
        Err(err) => {
            error!(?err, "Failed to set up the HTTP client");
            ExitCode::FAILURE
        }
    }
}

async fn run<B: BookingBackend>(
    backend: B,
    settings: ScreenSettings,
    configuration: ConfigurationHandler,
) -> ExitCode {
    let mut app = App::new(backend, settings);
    match app.run(configuration.command).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("{failure}");
            ExitCode::FAILURE
        }
    }
}

fn offline_user() -> User {
    User {
        id: "offline".into(),
        name: "Guest".into(),
        email: "guest@example.com".into(),
        avatar_url: None,
    }
}
