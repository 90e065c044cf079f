//! Tour reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ReviewId, TourId, UserId};

/// Validation failures for review input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewValidationError {
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("comment must not be empty")]
    EmptyComment,
}

impl ReviewValidationError {
    /// Machine code placed in error details.
    pub const fn code(self) -> &'static str {
        match self {
            Self::RatingOutOfRange => "rating_out_of_range",
            Self::EmptyComment => "empty_comment",
        }
    }

    /// Payload field the failure refers to.
    pub const fn field(self) -> &'static str {
        match self {
            Self::RatingOutOfRange => "rating",
            Self::EmptyComment => "comment",
        }
    }
}

/// Star rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw star count.
    pub fn new(value: u8) -> Result<Self, ReviewValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReviewValidationError::RatingOutOfRange)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Review payload after validation, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub tour_id: TourId,
    pub rating: Rating,
    pub comment: String,
}

impl NewReview {
    /// Validate the rating and trim the comment.
    pub fn try_new(
        tour_id: TourId,
        rating: u8,
        comment: &str,
    ) -> Result<Self, ReviewValidationError> {
        let rating = Rating::new(rating)?;
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReviewValidationError::EmptyComment);
        }
        Ok(Self {
            tour_id,
            rating,
            comment: comment.to_owned(),
        })
    }

    /// Stamp the draft with its author and identity.
    pub fn into_review(self, id: ReviewId, user_id: UserId, now: DateTime<Utc>) -> Review {
        Review {
            id,
            tour_id: self.tour_id,
            user_id,
            rating: self.rating,
            comment: self.comment,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Stored review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub tour_id: TourId,
    pub user_id: UserId,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review joined with its author's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourReview {
    #[serde(flatten)]
    pub review: Review,
    /// `None` when the author account no longer resolves.
    pub author_name: Option<String>,
}
