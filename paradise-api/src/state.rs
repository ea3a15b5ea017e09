use paradise_core::{BookingWriter, CatalogReader};
use paradise_core::repository::{BookingRepository, CatalogRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogReader,
    pub bookings: BookingWriter,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self {
            catalog: CatalogReader::new(catalog),
            bookings: BookingWriter::new(bookings),
        }
    }
}
