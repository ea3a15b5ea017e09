use async_trait::async_trait;

use crate::booking::{BookingReceipt, BookingRequest};
use crate::catalog::{Flight, Hotel, RentalCar, Restaurant};

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Read access to the four catalog tables.
///
/// Rows come back in storage order; implementations must not filter or sort.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_flights(&self) -> Result<Vec<Flight>, RepoError>;

    async fn list_hotels(&self) -> Result<Vec<Hotel>, RepoError>;

    async fn list_rental_cars(&self) -> Result<Vec<RentalCar>, RepoError>;

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RepoError>;
}

/// Write access for bookings
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert the customer and then the booking inside one transaction.
    ///
    /// On `Err` nothing from this call may remain in storage.
    async fn create_booking(&self, request: &BookingRequest) -> Result<BookingReceipt, RepoError>;
}
