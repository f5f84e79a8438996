use crate::{
    backend::BookingBackend,
    error::ClientError,
    types::{
        Appointment, AvailabilitySlot, AvatarUpload, NewAppointment, ProfileUpdate, Provider, User,
    },
};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use std::{
    ops::RangeInclusive,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{error, info};
use uuid::Uuid;

const OPENING_HOURS: RangeInclusive<u32> = 8..=17;

#[derive(Debug)]
struct LocalState {
    providers: Vec<Provider>,
    appointments: Vec<Appointment>,
    user: User,
    password: String,
}

/// In-memory booking service with the same rules as the remote one.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    state: Arc<Mutex<LocalState>>,
    offset: FixedOffset,
}

impl LocalBackend {
    pub fn new(offset: FixedOffset, user: User, password: String) -> Self {
        Self {
            state: Arc::new(Mutex::new(LocalState {
                providers: vec![],
                appointments: vec![],
                user,
                password,
            })),
            offset,
        }
    }

    pub fn insert_example_data(&self) {
        const EXAMPLE_PROVIDERS: [(&str, &str); 3] =
            [("ana", "Ana Souza"), ("bruno", "Bruno Lima"), ("carla", "Carla Dias")];
        for (id, name) in EXAMPLE_PROVIDERS {
            self.add_provider(Provider {
                id: id.into(),
                name: name.into(),
                avatar_url: None,
            });
        }
    }

    pub fn add_provider(&self, provider: Provider) {
        self.state().providers.push(provider);
    }

    fn state(&self) -> MutexGuard<'_, LocalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reject(err: &str) -> ClientError {
        error!(reason = err, "Request rejected");
        ClientError::Rejected(err.into())
    }

    fn is_booked(state: &LocalState, provider_id: &str, date: &DateTime<FixedOffset>) -> bool {
        state
            .appointments
            .iter()
            .any(|appointment| appointment.provider_id == provider_id && appointment.date == *date)
    }
}

impl BookingBackend for LocalBackend {
    async fn providers(&self) -> Result<Vec<Provider>, ClientError> {
        Ok(self.state().providers.clone())
    }

    async fn day_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, ClientError> {
        let state = self.state();
        if !state.providers.iter().any(|provider| provider.id == provider_id) {
            return Err(Self::reject("Provider not found"));
        }

        let now = Utc::now();
        let slots = OPENING_HOURS
            .filter_map(|hour| {
                let start = self
                    .offset
                    .from_local_datetime(&date.and_hms_opt(hour, 0, 0)?)
                    .single()?;
                Some(AvailabilitySlot {
                    hour,
                    available: start > now && !Self::is_booked(&state, provider_id, &start),
                })
            })
            .collect();
        Ok(slots)
    }

    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, ClientError> {
        let mut state = self.state();
        let date = appointment.date.with_timezone(&self.offset);

        if !state
            .providers
            .iter()
            .any(|provider| provider.id == appointment.provider_id)
        {
            return Err(Self::reject("Provider not found"));
        }
        if date <= Utc::now() {
            return Err(Self::reject("You can't create an appointment on a past date"));
        }
        if !OPENING_HOURS.contains(&date.hour()) || date.minute() != 0 {
            return Err(Self::reject(
                "You can only create appointments on the hour between 8am and 5pm",
            ));
        }
        if Self::is_booked(&state, &appointment.provider_id, &date) {
            return Err(Self::reject("This appointment is already booked"));
        }

        let created = Appointment {
            id: Uuid::new_v4().to_string(),
            provider_id: appointment.provider_id.clone(),
            date,
        };
        info!(id = %created.id, date = %created.date, "Appointment stored locally");
        state.appointments.push(created.clone());
        Ok(created)
    }

    async fn profile(&self) -> Result<User, ClientError> {
        Ok(self.state().user.clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ClientError> {
        let mut state = self.state();
        if let Some(change) = &update.password {
            if change.old_password != state.password {
                return Err(Self::reject("Old password does not match"));
            }
            state.password = change.password.clone();
        }
        state.user.name = update.name.clone();
        state.user.email = update.email.clone();
        Ok(state.user.clone())
    }

    async fn update_avatar(&self, avatar: AvatarUpload) -> Result<User, ClientError> {
        let mut state = self.state();
        state.user.avatar_url = Some(format!("local://avatars/{}", avatar.file_name));
        Ok(state.user.clone())
    }
}
