//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`UserDirectory`]) describe what the domain
//! needs from storage. Driving ports (`*Command`, `*Query`, [`LoginService`])
//! are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_command;
mod booking_query;
mod booking_repository;
mod catalogue_query;
mod login_service;
mod review_command;
mod review_query;
mod review_repository;
mod tour_repository;
mod user_directory;
mod vehicle_repository;

#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::BookingCommand;
#[cfg(test)]
pub use booking_query::MockBookingQuery;
pub use booking_query::BookingQuery;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FIXTURE_ADMIN_EMAIL, FIXTURE_ADMIN_ID, FIXTURE_TRAVELLER_EMAIL, FIXTURE_TRAVELLER_ID,
    FixtureLoginService, LoginService,
};
#[cfg(test)]
pub use review_command::MockReviewCommand;
pub use review_command::ReviewCommand;
#[cfg(test)]
pub use review_query::MockReviewQuery;
pub use review_query::ReviewQuery;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use review_repository::{ReviewRepository, ReviewRepositoryError};
#[cfg(test)]
pub use tour_repository::MockTourRepository;
pub use tour_repository::{TourRepository, TourRepositoryError};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory, UserDirectoryError};
#[cfg(test)]
pub use vehicle_repository::MockVehicleRepository;
pub use vehicle_repository::{VehicleRepository, VehicleRepositoryError};
