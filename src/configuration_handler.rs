use crate::configuration::Configuration;
use crate::messages::Locale;
use crate::selection::DatePickerMode;
use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "booking_client", about = "Book appointments with your barber")]
pub struct ConfigurationHandler {
    /// Base URL of the booking service
    #[arg(long, env = "BOOKING_API_URL", default_value = "http://localhost:3333")]
    api_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "BOOKING_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Request timeout in seconds. Without it the HTTP client default applies
    #[arg(long, env = "BOOKING_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[arg(long, env = "BOOKING_LOCALE", value_enum, default_value_t = Locale::PtBr)]
    locale: Locale,

    #[arg(long, env = "BOOKING_DATE_PICKER", value_enum, default_value_t = DatePickerMode::CloseOnChange)]
    date_picker: DatePickerMode,

    /// Offset used for appointment times, e.g. "-03:00". Defaults to the system offset
    #[arg(long, env = "BOOKING_UTC_OFFSET", value_parser = parse_utc_offset)]
    utc_offset: Option<FixedOffset>,

    /// Use the in-memory booking service instead of the remote one
    #[arg(long, env = "BOOKING_OFFLINE")]
    offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Greet the user and list providers
    Providers,
    /// Show a provider's morning and afternoon slots
    Availability {
        #[arg(long)]
        provider: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Book an appointment
    Book {
        #[arg(long)]
        provider: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        hour: u32,
    },
    /// Update name, e-mail and optionally the password
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        old_password: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        password_confirmation: String,
    },
    /// Upload a new avatar image
    Avatar { path: PathBuf },
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        // A missing .env file is fine, the environment and flags still apply.
        let _ = dotenvy::dotenv();
        Self::parse()
    }
}

fn parse_utc_offset(value: &str) -> Result<FixedOffset, String> {
    DateTime::parse_from_rfc3339(&format!("2000-01-01T00:00:00{value}"))
        .map(|datetime| *datetime.offset())
        .map_err(|err| format!("invalid UTC offset \"{value}\": {err}"))
}

impl Configuration for ConfigurationHandler {
    fn api_url(&self) -> String {
        self.api_url.clone()
    }

    fn api_token(&self) -> Option<String> {
        self.api_token.clone()
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn date_picker_mode(&self) -> DatePickerMode {
        self.date_picker
    }

    fn utc_offset(&self) -> FixedOffset {
        self.utc_offset.unwrap_or_else(|| *Local::now().offset())
    }

    fn offline(&self) -> bool {
        self.offline
    }
}
