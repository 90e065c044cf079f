//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the driven repository ports, backed by
//! PostgreSQL through `diesel-async` and a `bb8` connection pool.
//!
//! - Repositories translate between Diesel rows and domain records; no
//!   booking or review rules live here.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Every Diesel and pool failure is mapped to the owning port's error
//!   enum. Unique violations on review insert become `DuplicateReview`.
//!
//! # Example
//!
//! ```no_run
//! use tourbook::outbound::persistence::{DbPool, DieselBookingRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), tourbook::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tourbook")).await?;
//! let bookings = DieselBookingRepository::new(pool);
//! # let _ = bookings;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_booking_repository;
mod diesel_review_repository;
mod diesel_tour_repository;
mod diesel_user_directory;
mod diesel_vehicle_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_review_repository::DieselReviewRepository;
pub use diesel_tour_repository::DieselTourRepository;
pub use diesel_user_directory::DieselUserDirectory;
pub use diesel_vehicle_repository::DieselVehicleRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
