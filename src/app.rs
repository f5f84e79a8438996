use crate::availability::LabeledSlot;
use crate::backend::BookingBackend;
use crate::configuration_handler::Command;
use crate::error::ClientError;
use crate::messages::Alert;
use crate::navigation::{Navigator, Route};
use crate::profile_form::{FieldErrors, ProfileForm};
use crate::screens::appointment_created::AppointmentCreatedScreen;
use crate::screens::create_appointment::CreateAppointmentScreen;
use crate::screens::dashboard::DashboardScreen;
use crate::screens::profile::{ProfileError, ProfileScreen};
use crate::screens::ScreenSettings;
use chrono::NaiveDate;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum Failure {
    Alert(Alert),
    Fields(FieldErrors),
    Client(ClientError),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Alert(alert) if alert.message.is_empty() => write!(f, "{}", alert.title),
            Failure::Alert(alert) => write!(f, "{}\n{}", alert.title, alert.message),
            Failure::Fields(errors) => {
                let lines: Vec<String> = errors
                    .iter()
                    .map(|(field, message)| format!("{field}: {message}"))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Failure::Client(err) => write!(f, "{err}"),
        }
    }
}

/// Walks the screens for one command and collects what they display.
pub struct App<B: BookingBackend> {
    backend: B,
    settings: ScreenSettings,
    navigator: Navigator,
}

impl<B: BookingBackend> App<B> {
    pub fn new(backend: B, settings: ScreenSettings) -> Self {
        Self {
            backend,
            settings,
            navigator: Navigator::default(),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub async fn run(&mut self, command: Command) -> Result<Vec<String>, Failure> {
        debug!(?command, "Running command");
        match command {
            Command::Providers => self.providers().await,
            Command::Availability { provider, date } => self.availability(provider, date).await,
            Command::Book {
                provider,
                date,
                hour,
            } => self.book(provider, date, hour).await,
            Command::Profile {
                name,
                email,
                old_password,
                password,
                password_confirmation,
            } => {
                let form = ProfileForm {
                    name,
                    email,
                    old_password,
                    password,
                    password_confirmation,
                };
                self.profile(form).await
            }
            Command::Avatar { path } => self.avatar(&path).await,
        }
    }

    async fn providers(&mut self) -> Result<Vec<String>, Failure> {
        let mut dashboard = DashboardScreen::new(self.backend.clone(), self.settings.locale);
        dashboard.load().await.map_err(Failure::Client)?;

        let mut lines: Vec<String> = dashboard.greeting().into_iter().collect();
        lines.extend(
            dashboard
                .providers()
                .iter()
                .map(|provider| format!("{:<12} {}", provider.id, provider.name)),
        );
        Ok(lines)
    }

    async fn open_booking(
        &mut self,
        provider: String,
        date: Option<NaiveDate>,
    ) -> (CreateAppointmentScreen<B>, Result<(), ClientError>) {
        let dashboard = DashboardScreen::new(self.backend.clone(), self.settings.locale);
        self.navigator.apply(dashboard.select_provider(&provider));

        let date = date.unwrap_or_else(|| self.settings.today());
        let mut screen =
            CreateAppointmentScreen::new(self.backend.clone(), provider, date, self.settings);
        let result = screen.open().await;
        (screen, result)
    }

    async fn availability(
        &mut self,
        provider: String,
        date: Option<NaiveDate>,
    ) -> Result<Vec<String>, Failure> {
        let (screen, result) = self.open_booking(provider, date).await;
        result.map_err(Failure::Client)?;

        let locale = self.settings.locale;
        let selection = screen.state().selection();
        let name = screen
            .providers()
            .iter()
            .find(|provider| provider.id == selection.provider_id)
            .map_or(selection.provider_id.as_str(), |provider| provider.name.as_str());
        let schedule = screen.schedule();
        self.navigator.apply(screen.go_back());

        let mut lines = vec![format!("{name} {}", selection.date)];
        lines.push(locale.morning().to_string());
        lines.extend(schedule.morning.iter().map(slot_line));
        lines.push(locale.afternoon().to_string());
        lines.extend(schedule.afternoon.iter().map(slot_line));
        Ok(lines)
    }

    async fn book(
        &mut self,
        provider: String,
        date: Option<NaiveDate>,
        hour: u32,
    ) -> Result<Vec<String>, Failure> {
        let (mut screen, result) = self.open_booking(provider, date).await;
        if let Err(err) = result {
            warn!(?err, "Booking without current availability");
        }
        if !screen.select_hour(hour) {
            return Err(Failure::Alert(self.settings.locale.appointment_failed()));
        }

        let navigation = screen.create_appointment().await.map_err(Failure::Alert)?;
        self.navigator.apply(navigation);

        let Route::AppointmentCreated { date } = *self.navigator.current() else {
            return Ok(vec![]);
        };
        let confirmation = AppointmentCreatedScreen::new(date, self.settings);
        let lines = vec![
            confirmation.title().to_string(),
            confirmation.description(),
        ];
        self.navigator.apply(confirmation.acknowledge());
        Ok(lines)
    }

    async fn open_profile(&mut self) -> Result<ProfileScreen<B>, Failure> {
        let dashboard = DashboardScreen::new(self.backend.clone(), self.settings.locale);
        self.navigator.apply(dashboard.open_profile());
        ProfileScreen::open(self.backend.clone(), self.settings.locale)
            .await
            .map_err(Failure::Alert)
    }

    async fn profile(&mut self, form: ProfileForm) -> Result<Vec<String>, Failure> {
        let mut screen = self.open_profile().await?;
        match screen.submit(&form).await {
            Ok(saved) => {
                self.navigator.apply(saved.navigation);
                Ok(vec![saved.notice.title])
            }
            Err(ProfileError::Invalid(errors)) => Err(Failure::Fields(errors)),
            Err(ProfileError::Failed(alert)) => Err(Failure::Alert(alert)),
        }
    }

    async fn avatar(&mut self, path: &std::path::Path) -> Result<Vec<String>, Failure> {
        let mut screen = self.open_profile().await?;
        screen.update_avatar(path).await.map_err(Failure::Alert)?;
        self.navigator.apply(screen.go_back());
        Ok(screen.user().avatar_url.clone().into_iter().collect())
    }
}

fn slot_line(slot: &LabeledSlot) -> String {
    let marker = if slot.available { "[ ]" } else { "[x]" };
    format!("  {marker} {}", slot.label)
}
