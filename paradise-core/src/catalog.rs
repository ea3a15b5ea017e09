use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Timestamp layout used in flight listings (`YYYY-MM-DD HH24:MI`).
const LISTING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Bookable categories, in the order the storefront presents them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Flight,
    Hotel,
    RentalCar,
    Restaurant,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Flight,
        Category::Hotel,
        Category::RentalCar,
        Category::Restaurant,
    ];

    /// Path segment / wire name.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Flight => "flight",
            Category::Hotel => "hotel",
            Category::RentalCar => "rental-car",
            Category::Restaurant => "restaurant",
        }
    }

    /// Heading shown above a listing.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Flight => "Available Flights",
            Category::Hotel => "Available Hotels",
            Category::RentalCar => "Available Rental Cars",
            Category::Restaurant => "Available Restaurants",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flight" | "flights" => Ok(Category::Flight),
            "hotel" | "hotels" => Ok(Category::Hotel),
            "rental-car" | "rental_car" | "rentalcar" | "rental car" => Ok(Category::RentalCar),
            "restaurant" | "restaurants" => Ok(Category::Restaurant),
            _ => Err(CoreError::UnknownCategory(s.to_string())),
        }
    }
}

/// One row of a catalog listing: the item's identifier and its display text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: i32,
    pub details: String,
}

/// A catalog item that can be shown as a single line of text.
pub trait Listing {
    fn id(&self) -> i32;

    fn details(&self) -> String;

    fn entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id(),
            details: self.details(),
        }
    }
}

// Money and rating columns are kept as the text storage renders for them,
// so `NUMERIC(10,2)` 250 reads `250.00` in listings.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub flight_id: i32,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub price: String,
}

impl Listing for Flight {
    fn id(&self) -> i32 {
        self.flight_id
    }

    fn details(&self) -> String {
        format!(
            "{} from {} to {} departs at {} arrives at {}, Price: ${}",
            self.airline,
            self.origin,
            self.destination,
            self.departure_time.format(LISTING_TIME_FORMAT),
            self.arrival_time.format(LISTING_TIME_FORMAT),
            self.price
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub hotel_id: i32,
    pub name: String,
    pub location: String,
    pub price_per_night: String,
    pub person_per_room: i32,
}

impl Listing for Hotel {
    fn id(&self) -> i32 {
        self.hotel_id
    }

    fn details(&self) -> String {
        format!(
            "{}, {}, ${} per night,{} person per room",
            self.name, self.location, self.price_per_night, self.person_per_room
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalCar {
    pub rental_id: i32,
    pub company: String,
    pub model: String,
    pub location: String,
    pub price_per_day: String,
    pub passenger_capacity: i32,
}

impl Listing for RentalCar {
    fn id(&self) -> i32 {
        self.rental_id
    }

    fn details(&self) -> String {
        format!(
            "{} - {}, {}, ${} per day,{} person capacity",
            self.company, self.model, self.location, self.price_per_day, self.passenger_capacity
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub restaurant_id: i32,
    pub name: String,
    pub location: String,
    pub cuisine: String,
    pub price_range: String,
    pub rating: String,
}

impl Listing for Restaurant {
    fn id(&self) -> i32 {
        self.restaurant_id
    }

    fn details(&self) -> String {
        format!(
            "{}, {}, {}, {}, Rating: {}",
            self.name, self.location, self.cuisine, self.price_range, self.rating
        )
    }
}
