//! Tour catalogue records and their review-derived aggregate.
//!
//! Tours are maintained by the tour-management side of the platform. Two
//! fields, `rating` and `reviews_count`, are derived from the tour's reviews
//! and only ever written through [`recompute`] by the review aggregator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::labels::define_label_enum;
use super::{Rating, TourId};

/// Rating a tour shows while it has no reviews.
pub const DEFAULT_TOUR_RATING: f64 = 4.5;

define_label_enum! {
    /// Tour theme used for catalogue filtering.
    TourCategory, "tour category" {
        Adventure => "Adventure",
        Cultural => "Cultural",
        Beach => "Beach",
        Wildlife => "Wildlife",
        HillCountry => "Hill Country",
        CityTour => "City Tour",
    }
}

define_label_enum! {
    /// Physical demand of a tour.
    Difficulty, "difficulty" {
        Easy => "Easy",
        Moderate => "Moderate",
        Challenging => "Challenging",
    }
}

/// Review-derived fields of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourAggregate {
    /// Arithmetic mean of review ratings, or [`DEFAULT_TOUR_RATING`].
    pub rating: f64,
    /// Number of reviews referencing the tour.
    pub reviews_count: u32,
}

impl Default for TourAggregate {
    fn default() -> Self {
        Self {
            rating: DEFAULT_TOUR_RATING,
            reviews_count: 0,
        }
    }
}

/// Compute a tour's aggregate from the ratings of its current reviews.
///
/// The mean is not rounded. An empty set yields the default aggregate.
///
/// # Examples
/// ```
/// use tourbook::domain::{Rating, TourAggregate, recompute};
///
/// let ratings = [Rating::new(5).expect("rating"), Rating::new(3).expect("rating")];
/// let aggregate = recompute(&ratings);
/// assert_eq!(aggregate.rating, 4.0);
/// assert_eq!(aggregate.reviews_count, 2);
/// assert_eq!(recompute(&[]), TourAggregate::default());
/// ```
pub fn recompute(ratings: &[Rating]) -> TourAggregate {
    if ratings.is_empty() {
        return TourAggregate::default();
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.value())).sum();
    let count = u32::try_from(ratings.len()).unwrap_or(u32::MAX);
    TourAggregate {
        rating: f64::from(sum) / f64::from(count),
        reviews_count: count,
    }
}

/// Catalogue entry for a guided tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: TourId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Length in days.
    pub duration: u32,
    pub category: TourCategory,
    pub max_group_size: u32,
    pub difficulty: Difficulty,
    pub locations: Vec<String>,
    pub included: Vec<String>,
    pub images: Vec<String>,
    pub featured: bool,
    #[serde(flatten)]
    pub aggregate: TourAggregate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tour {
    /// Project the fields shown next to a booking.
    pub fn summary(&self) -> TourSummary {
        TourSummary {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            duration: self.duration,
        }
    }
}

/// Display subset of a tour used in booking listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSummary {
    pub id: TourId,
    pub name: String,
    pub price: f64,
    pub duration: u32,
}

/// Catalogue query. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourFilter {
    pub category: Option<TourCategory>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
    pub featured: Option<bool>,
}

impl TourFilter {
    /// Whether `tour` satisfies every set bound. Bounds are inclusive.
    pub fn matches(&self, tour: &Tour) -> bool {
        self.category.is_none_or(|c| tour.category == c)
            && self.min_price.is_none_or(|min| tour.price >= min)
            && self.max_price.is_none_or(|max| tour.price <= max)
            && self.min_duration.is_none_or(|min| tour.duration >= min)
            && self.max_duration.is_none_or(|max| tour.duration <= max)
            && self.featured.is_none_or(|f| tour.featured == f)
    }
}
