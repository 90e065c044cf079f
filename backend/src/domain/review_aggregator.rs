//! Review aggregator service.
//!
//! Owns review creation and deletion and keeps each tour's `rating` and
//! `reviews_count` in step with its review set. After every successful
//! mutation the service re-reads the tour's reviews, feeds their ratings to
//! [`recompute`], and writes both fields in a single update.
//!
//! The read-then-write is not isolated from concurrent mutations of the same
//! tour; the last recompute to write wins. Replaying a history serially
//! always converges to the same aggregate because the computation depends
//! only on the review set.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info, warn};

use super::authorization::require_owner_or_admin;
use super::ports::{
    ReviewCommand, ReviewQuery, ReviewRepository, ReviewRepositoryError, TourRepository,
    UserDirectory,
};
use super::store_errors::{duplicate_review, map_review_error, map_tour_error, map_user_error};
use super::{
    Error, NewReview, Rating, Requester, Review, ReviewId, ReviewValidationError, TourAggregate,
    TourId, TourReview, UserId, recompute,
};

/// Review service implementing [`ReviewCommand`] and [`ReviewQuery`].
#[derive(Clone)]
pub struct ReviewAggregatorService<R, T, U> {
    reviews: Arc<R>,
    tours: Arc<T>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<R, T, U> ReviewAggregatorService<R, T, U> {
    /// Create a service that writes tour aggregates with `clock` timestamps.
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use tourbook::domain::ports::ReviewQuery;
    /// use tourbook::domain::{ReviewAggregatorService, TourId};
    /// use tourbook::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let service = ReviewAggregatorService::new(
    ///     store.clone(),
    ///     store.clone(),
    ///     store,
    ///     Arc::new(DefaultClock),
    /// );
    /// let runtime = tokio::runtime::Runtime::new()?;
    /// let reviews = runtime.block_on(service.list_for_tour(&TourId::random()))?;
    /// assert!(reviews.is_empty());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(reviews: Arc<R>, tours: Arc<T>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reviews,
            tours,
            users,
            clock,
        }
    }
}

fn tour_not_found(tour_id: TourId) -> Error {
    Error::not_found("tour not found").with_details(json!({ "tourId": tour_id }))
}

fn validation_error(err: ReviewValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": err.code(),
    }))
}

impl<R, T, U> ReviewAggregatorService<R, T, U>
where
    R: ReviewRepository,
    T: TourRepository,
    U: UserDirectory,
{
    /// Recompute and store the aggregate of `tour_id` from its current reviews.
    async fn refresh_aggregate(&self, tour_id: &TourId) -> Result<TourAggregate, Error> {
        let reviews = self
            .reviews
            .list_for_tour(tour_id)
            .await
            .map_err(map_review_error)?;
        let ratings: Vec<Rating> = reviews.iter().map(|r| r.rating).collect();
        let aggregate = recompute(&ratings);

        let written = self
            .tours
            .update_aggregate(tour_id, aggregate, self.clock.utc())
            .await
            .map_err(map_tour_error)?;
        if written {
            debug!(
                tour_id = %tour_id,
                rating = aggregate.rating,
                reviews_count = aggregate.reviews_count,
                "tour aggregate recomputed"
            );
        } else {
            warn!(tour_id = %tour_id, "tour vanished before aggregate write");
        }
        Ok(aggregate)
    }
}

#[async_trait]
impl<R, T, U> ReviewCommand for ReviewAggregatorService<R, T, U>
where
    R: ReviewRepository,
    T: TourRepository,
    U: UserDirectory,
{
    async fn create(
        &self,
        requester: &Requester,
        tour_id: TourId,
        rating: u8,
        comment: String,
    ) -> Result<Review, Error> {
        let draft = NewReview::try_new(tour_id, rating, &comment).map_err(validation_error)?;

        if self
            .tours
            .find_by_id(&tour_id)
            .await
            .map_err(map_tour_error)?
            .is_none()
        {
            return Err(tour_not_found(tour_id));
        }

        let author = requester.user_id();
        if self
            .reviews
            .find_by_tour_and_user(&tour_id, &author)
            .await
            .map_err(map_review_error)?
            .is_some()
        {
            return Err(duplicate_review());
        }

        let review = draft.into_review(ReviewId::random(), author, self.clock.utc());
        match self.reviews.insert(&review).await {
            Ok(()) => {}
            Err(ReviewRepositoryError::DuplicateReview { message }) => {
                warn!(
                    tour_id = %tour_id,
                    user_id = %author,
                    reason = %message,
                    "concurrent duplicate review rejected by store"
                );
                return Err(duplicate_review());
            }
            Err(ReviewRepositoryError::MissingTour { .. }) => {
                warn!(tour_id = %tour_id, "tour deleted before review insert");
                return Err(tour_not_found(tour_id));
            }
            Err(err) => return Err(map_review_error(err)),
        }
        info!(review_id = %review.id, tour_id = %tour_id, user_id = %author, "review created");

        self.refresh_aggregate(&tour_id).await?;
        Ok(review)
    }

    async fn delete(&self, requester: &Requester, id: &ReviewId) -> Result<(), Error> {
        let not_found =
            || Error::not_found("review not found").with_details(json!({ "reviewId": id }));
        let review = self
            .reviews
            .find_by_id(id)
            .await
            .map_err(map_review_error)?
            .ok_or_else(not_found)?;
        require_owner_or_admin(requester, &review.user_id).into_result()?;

        if !self.reviews.delete(id).await.map_err(map_review_error)? {
            return Err(not_found());
        }
        info!(
            review_id = %id,
            tour_id = %review.tour_id,
            by = %requester.user_id(),
            "review deleted"
        );

        self.refresh_aggregate(&review.tour_id).await?;
        Ok(())
    }
}

#[async_trait]
impl<R, T, U> ReviewQuery for ReviewAggregatorService<R, T, U>
where
    R: ReviewRepository,
    T: TourRepository,
    U: UserDirectory,
{
    async fn list_for_tour(&self, tour_id: &TourId) -> Result<Vec<TourReview>, Error> {
        let reviews = self
            .reviews
            .list_for_tour(tour_id)
            .await
            .map_err(map_review_error)?;
        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<UserId> = reviews
            .iter()
            .map(|r| r.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let names: HashMap<UserId, String> = self
            .users
            .find_by_ids(&author_ids)
            .await
            .map_err(map_user_error)?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(reviews
            .into_iter()
            .map(|review| {
                let author_name = names.get(&review.user_id).cloned();
                TourReview {
                    review,
                    author_name,
                }
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "review_aggregator_tests.rs"]
mod tests;
