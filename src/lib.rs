//! Client for a barbershop booking service: screen controllers, the
//! selection state behind the booking screen, and the backends that talk to
//! the service.

pub mod app;
pub mod availability;
pub mod backend;
pub mod configuration;
pub mod configuration_handler;
pub mod confirmation;
pub mod error;
pub mod http;
pub mod local_backend;
pub mod messages;
pub mod navigation;
pub mod profile_form;
pub mod screens;
pub mod selection;
pub mod submitter;
#[cfg(test)]
mod testutils;
pub mod types;
