use async_trait::async_trait;
use chrono::NaiveDateTime;
use paradise_core::catalog::{Flight, Hotel, RentalCar, Restaurant};
use paradise_core::repository::{CatalogRepository, RepoError};
use sqlx::PgPool;

pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying. NUMERIC columns are cast to TEXT
// so listings show them the way Postgres prints them.

#[derive(sqlx::FromRow)]
struct FlightRow {
    flight_id: i32,
    airline: String,
    origin: String,
    destination: String,
    departure_time: NaiveDateTime,
    arrival_time: NaiveDateTime,
    price: String,
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    hotel_id: i32,
    name: String,
    location: String,
    price_per_night: String,
    person_per_room: i32,
}

#[derive(sqlx::FromRow)]
struct RentalCarRow {
    rental_id: i32,
    company: String,
    model: String,
    location: String,
    price_per_day: String,
    passenger_capacity: i32,
}

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    restaurant_id: i32,
    name: String,
    location: String,
    cuisine: String,
    price_range: String,
    rating: String,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            flight_id: row.flight_id,
            airline: row.airline,
            origin: row.origin,
            destination: row.destination,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            price: row.price,
        }
    }
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            hotel_id: row.hotel_id,
            name: row.name,
            location: row.location,
            price_per_night: row.price_per_night,
            person_per_room: row.person_per_room,
        }
    }
}

impl From<RentalCarRow> for RentalCar {
    fn from(row: RentalCarRow) -> Self {
        RentalCar {
            rental_id: row.rental_id,
            company: row.company,
            model: row.model,
            location: row.location,
            price_per_day: row.price_per_day,
            passenger_capacity: row.passenger_capacity,
        }
    }
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant {
            restaurant_id: row.restaurant_id,
            name: row.name,
            location: row.location,
            cuisine: row.cuisine,
            price_range: row.price_range,
            rating: row.rating,
        }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_flights(&self) -> Result<Vec<Flight>, RepoError> {
        let rows = sqlx::query_as::<_, FlightRow>(
            r#"
            SELECT FlightID AS flight_id, Airline AS airline, Origin AS origin, Destination AS destination,
                   DepartureTime AS departure_time, ArrivalTime AS arrival_time, Price::TEXT AS price
            FROM Flight
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, RepoError> {
        let rows = sqlx::query_as::<_, HotelRow>(
            r#"
            SELECT HotelID AS hotel_id, Name AS name, Location AS location,
                   PricePerNight::TEXT AS price_per_night, PersonPerRoom AS person_per_room
            FROM Hotel
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn list_rental_cars(&self) -> Result<Vec<RentalCar>, RepoError> {
        let rows = sqlx::query_as::<_, RentalCarRow>(
            r#"
            SELECT RentalID AS rental_id, Company AS company, Model AS model, Location AS location,
                   PricePerDay::TEXT AS price_per_day, PassengerCapacity AS passenger_capacity
            FROM RentalCar
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RentalCar::from).collect())
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RepoError> {
        let rows = sqlx::query_as::<_, RestaurantRow>(
            r#"
            SELECT RestaurantID AS restaurant_id, Name AS name, Location AS location, Cuisine AS cuisine,
                   PriceRange AS price_range, Rating::TEXT AS rating
            FROM Restaurant
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }
}
