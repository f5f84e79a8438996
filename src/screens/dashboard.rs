use crate::backend::BookingBackend;
use crate::error::ClientError;
use crate::messages::Locale;
use crate::navigation::{Navigation, Route};
use crate::types::{Provider, User};
use tracing::error;

pub struct DashboardScreen<B: BookingBackend> {
    backend: B,
    locale: Locale,
    user: Option<User>,
    providers: Vec<Provider>,
}

impl<B: BookingBackend> DashboardScreen<B> {
    pub fn new(backend: B, locale: Locale) -> Self {
        Self {
            backend,
            locale,
            user: None,
            providers: vec![],
        }
    }

    /// Fetches the signed-in user and the provider list. Whatever loaded
    /// is kept even if the other request failed.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let (user, providers) = tokio::join!(self.backend.profile(), self.backend.providers());

        match user {
            Ok(user) => self.user = Some(user),
            Err(err) => error!(?err, "Failed to load profile"),
        }
        match providers {
            Ok(providers) => {
                self.providers = providers;
                Ok(())
            }
            Err(err) => {
                error!(?err, "Failed to load providers");
                Err(err)
            }
        }
    }

    pub fn greeting(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|user| self.locale.welcome(&user.name))
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn select_provider(&self, provider_id: &str) -> Navigation {
        Navigation::Push(Route::CreateAppointment {
            provider_id: provider_id.to_string(),
        })
    }

    pub fn open_profile(&self) -> Navigation {
        Navigation::Push(Route::Profile)
    }
}
