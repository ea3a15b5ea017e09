pub mod booking;
pub mod catalog;
pub mod ids;
pub mod repository;
pub mod service;

pub use booking::{BookingForm, BookingOutcome, BookingReceipt, BookingRequest, BookingSelection, NewCustomer};
pub use catalog::{CatalogEntry, Category, Flight, Hotel, Listing, RentalCar, Restaurant};
pub use ids::parse_optional_id;
pub use service::{BookingWriter, CatalogReader};

/// Display name of the storefront.
pub const STOREFRONT_NAME: &str = "Paradise Tours";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown catalog category: {0}")]
    UnknownCategory(String),
    #[error("Catalog read failed: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type CoreResult<T> = Result<T, CoreError>;
