use async_trait::async_trait;
use chrono::NaiveDate;
use paradise_core::booking::{BookingReceipt, BookingRequest, BookingSelection, NewCustomer};
use paradise_core::repository::{BookingRepository, RepoError};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, warn};

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_customer(
        tx: &mut Transaction<'_, Postgres>,
        customer: &NewCustomer,
    ) -> Result<i32, sqlx::Error> {
        let customer_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO Customers (Name, Email, PhoneNumber, CardNumber)
            VALUES ($1, $2, $3, $4)
            RETURNING CustomerID
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.card_number.expose())
        .fetch_one(&mut **tx)
        .await?;

        Ok(customer_id)
    }

    async fn insert_booking(
        tx: &mut Transaction<'_, Postgres>,
        customer_id: i32,
        selection: &BookingSelection,
    ) -> Result<(i32, NaiveDate), sqlx::Error> {
        // Item IDs bind as BIGINT; Postgres narrows them to INTEGER and rejects overflow.
        sqlx::query_as::<_, (i32, NaiveDate)>(
            r#"
            INSERT INTO Bookings (CustomerID, FlightID, HotelID, RentalID, RestaurantID, BookingDate)
            VALUES ($1, $2, $3, $4, $5, CURRENT_DATE)
            RETURNING BookingID, BookingDate
            "#,
        )
        .bind(customer_id)
        .bind(selection.flight_id)
        .bind(selection.hotel_id)
        .bind(selection.rental_id)
        .bind(selection.restaurant_id)
        .fetch_one(&mut **tx)
        .await
    }

    async fn insert_pair(
        tx: &mut Transaction<'_, Postgres>,
        request: &BookingRequest,
    ) -> Result<BookingReceipt, sqlx::Error> {
        let customer_id = Self::insert_customer(tx, &request.customer).await?;
        debug!(customer_id, "Customer inserted");

        let (booking_id, booking_date) = Self::insert_booking(tx, customer_id, &request.selection).await?;

        Ok(BookingReceipt {
            booking_id,
            customer_id,
            booking_date,
        })
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create_booking(&self, request: &BookingRequest) -> Result<BookingReceipt, RepoError> {
        let mut tx = self.pool.begin().await?;

        match Self::insert_pair(&mut tx, request).await {
            Ok(receipt) => {
                tx.commit().await?;
                Ok(receipt)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    // The connection is discarded either way, so nothing was committed.
                    warn!("Rollback failed: {}", rollback_err);
                }
                Err(e.into())
            }
        }
    }
}
