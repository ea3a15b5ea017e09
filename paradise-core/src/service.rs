use std::sync::Arc;
use tracing::{info, warn};

use crate::booking::{BookingOutcome, BookingRequest};
use crate::catalog::{CatalogEntry, Category, Listing};
use crate::repository::{BookingRepository, CatalogRepository};
use crate::{CoreError, CoreResult};

fn entries<T: Listing>(items: Vec<T>) -> Vec<CatalogEntry> {
    items.iter().map(Listing::entry).collect()
}

/// Produces `(id, details)` listings for each catalog category.
#[derive(Clone)]
pub struct CatalogReader {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogReader {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub async fn flights(&self) -> CoreResult<Vec<CatalogEntry>> {
        let rows = self.repo.list_flights().await.map_err(CoreError::Storage)?;
        Ok(entries(rows))
    }

    pub async fn hotels(&self) -> CoreResult<Vec<CatalogEntry>> {
        let rows = self.repo.list_hotels().await.map_err(CoreError::Storage)?;
        Ok(entries(rows))
    }

    pub async fn rental_cars(&self) -> CoreResult<Vec<CatalogEntry>> {
        let rows = self.repo.list_rental_cars().await.map_err(CoreError::Storage)?;
        Ok(entries(rows))
    }

    pub async fn restaurants(&self) -> CoreResult<Vec<CatalogEntry>> {
        let rows = self.repo.list_restaurants().await.map_err(CoreError::Storage)?;
        Ok(entries(rows))
    }

    pub async fn list(&self, category: Category) -> CoreResult<Vec<CatalogEntry>> {
        match category {
            Category::Flight => self.flights().await,
            Category::Hotel => self.hotels().await,
            Category::RentalCar => self.rental_cars().await,
            Category::Restaurant => self.restaurants().await,
        }
    }
}

/// Records bookings. Storage failures become a `Failed` outcome, never an `Err`.
#[derive(Clone)]
pub struct BookingWriter {
    repo: Arc<dyn BookingRepository>,
}

impl BookingWriter {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    pub async fn submit(&self, request: &BookingRequest) -> BookingOutcome {
        match self.repo.create_booking(request).await {
            Ok(receipt) => {
                info!(
                    booking_id = receipt.booking_id,
                    customer_id = receipt.customer_id,
                    "Booking confirmed"
                );
                BookingOutcome::Confirmed(receipt)
            }
            Err(e) => {
                warn!(card = %request.customer.card_number, "Booking rolled back: {}", e);
                BookingOutcome::Failed(e.to_string())
            }
        }
    }
}
