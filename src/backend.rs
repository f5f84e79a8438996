use crate::error::ClientError;
use crate::types::{
    Appointment, AvailabilitySlot, AvatarUpload, NewAppointment, ProfileUpdate, Provider, User,
};
use chrono::NaiveDate;
use std::future::Future;

pub trait BookingBackend: Clone + Send + Sync + 'static {
    fn providers(&self) -> impl Future<Output = Result<Vec<Provider>, ClientError>> + Send;
    fn day_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<AvailabilitySlot>, ClientError>> + Send;
    fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> impl Future<Output = Result<Appointment, ClientError>> + Send;
    fn profile(&self) -> impl Future<Output = Result<User, ClientError>> + Send;
    fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<User, ClientError>> + Send;
    fn update_avatar(
        &self,
        avatar: AvatarUpload,
    ) -> impl Future<Output = Result<User, ClientError>> + Send;
}
