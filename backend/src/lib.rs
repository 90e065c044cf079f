//! Tour and vehicle booking backend.
//!
//! Hexagonal layout: [`domain`] holds the booking ledger, review aggregator
//! and their ports; [`inbound`] adapts HTTP onto the driving ports;
//! [`outbound`] implements the repository ports over PostgreSQL or memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
