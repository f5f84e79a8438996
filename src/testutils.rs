use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use chrono::NaiveDate;

use crate::{
    backend::BookingBackend,
    error::ClientError,
    types::{
        Appointment, AvailabilitySlot, AvatarUpload, NewAppointment, ProfileUpdate, Provider, User,
    },
};

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_providers: AtomicU64,
    pub calls_to_day_availability: AtomicU64,
    pub calls_to_create_appointment: AtomicU64,
    pub calls_to_profile: AtomicU64,
    pub calls_to_update_profile: AtomicU64,
    pub calls_to_update_avatar: AtomicU64,
    pub providers: Mutex<Vec<Provider>>,
    pub availability: Mutex<HashMap<(String, NaiveDate), Vec<AvailabilitySlot>>>,
    pub availability_requests: Mutex<Vec<(String, NaiveDate)>>,
    pub created_appointments: Mutex<Vec<NewAppointment>>,
    pub profile_updates: Mutex<Vec<ProfileUpdate>>,
    pub avatar_uploads: Mutex<Vec<AvatarUpload>>,
    pub user: Mutex<User>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_providers: AtomicU64::default(),
            calls_to_day_availability: AtomicU64::default(),
            calls_to_create_appointment: AtomicU64::default(),
            calls_to_profile: AtomicU64::default(),
            calls_to_update_profile: AtomicU64::default(),
            calls_to_update_avatar: AtomicU64::default(),
            providers: Mutex::default(),
            availability: Mutex::default(),
            availability_requests: Mutex::default(),
            created_appointments: Mutex::default(),
            profile_updates: Mutex::default(),
            avatar_uploads: Mutex::default(),
            user: Mutex::new(example_user()),
        }
    }
}

pub fn example_user() -> User {
    User {
        id: "U1".into(),
        name: "Stefan".into(),
        email: "stefan@example.com".into(),
        avatar_url: None,
    }
}

pub fn example_providers() -> Vec<Provider> {
    vec![
        Provider {
            id: "P1".into(),
            name: "Ana".into(),
            avatar_url: Some("http://barber.test/ana.png".into()),
        },
        Provider {
            id: "P2".into(),
            name: "Bruno".into(),
            avatar_url: None,
        },
    ]
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    pub fn set_availability(&self, provider_id: &str, date: NaiveDate, slots: Vec<AvailabilitySlot>) {
        self.0
            .availability
            .lock()
            .unwrap()
            .insert((provider_id.to_string(), date), slots);
    }

    fn result(&self) -> Result<(), ClientError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(ClientError::Status {
                status: 500,
                message: "Supposed to fail".into(),
            }),
        }
    }
}

impl BookingBackend for MockBookingBackend {
    async fn providers(&self) -> Result<Vec<Provider>, ClientError> {
        self.0.calls_to_providers.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        Ok(self.0.providers.lock().unwrap().clone())
    }

    async fn day_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, ClientError> {
        self.0
            .calls_to_day_availability
            .fetch_add(1, Ordering::SeqCst);
        self.0
            .availability_requests
            .lock()
            .unwrap()
            .push((provider_id.to_string(), date));
        self.result()?;
        Ok(self
            .0
            .availability
            .lock()
            .unwrap()
            .get(&(provider_id.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }

    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, ClientError> {
        self.0
            .calls_to_create_appointment
            .fetch_add(1, Ordering::SeqCst);
        self.result()?;
        self.0
            .created_appointments
            .lock()
            .unwrap()
            .push(appointment.clone());
        Ok(Appointment {
            id: "A1".into(),
            provider_id: appointment.provider_id.clone(),
            date: appointment.date,
        })
    }

    async fn profile(&self) -> Result<User, ClientError> {
        self.0.calls_to_profile.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        Ok(self.0.user.lock().unwrap().clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ClientError> {
        self.0.calls_to_update_profile.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        self.0.profile_updates.lock().unwrap().push(update.clone());
        let mut user = self.0.user.lock().unwrap();
        user.name = update.name.clone();
        user.email = update.email.clone();
        Ok(user.clone())
    }

    async fn update_avatar(&self, avatar: AvatarUpload) -> Result<User, ClientError> {
        self.0.calls_to_update_avatar.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        let mut user = self.0.user.lock().unwrap();
        user.avatar_url = Some(format!("http://barber.test/avatars/{}", avatar.file_name));
        self.0.avatar_uploads.lock().unwrap().push(avatar);
        Ok(user.clone())
    }
}
