//! Response envelopes shared by the booking, review, and catalogue handlers.
//!
//! Lists carry `{ success, count, data }`, single records `{ success, data }`
//! and confirmations `{ success, message }`.

use serde::Serialize;
use utoipa::ToSchema;

/// List payload with its length.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListEnvelope<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListEnvelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

impl<T> FromIterator<T> for ListEnvelope<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Single record payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Confirmation payload for deletions and cancellations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageEnvelope {
    pub success: bool,
    #[schema(example = "Booking cancelled successfully")]
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
