use chrono::NaiveDate;
use paradise_shared::Masked;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::parse_optional_id;

/// Customer fields captured by the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub card_number: Masked<String>,
}

/// The catalog items picked for a booking, at most one per category.
///
/// IDs are not checked against the catalog tables before insert.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSelection {
    pub flight_id: Option<i64>,
    pub hotel_id: Option<i64>,
    pub rental_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub customer: NewCustomer,
    pub selection: BookingSelection,
}

/// Raw booking form submission.
///
/// Customer fields are text. Item IDs are kept as text too; a JSON number is
/// rendered to its digits, and any other JSON value becomes an empty field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cardnumber: Masked<String>,
    #[serde(deserialize_with = "id_field")]
    pub flight_id: String,
    #[serde(deserialize_with = "id_field")]
    pub hotel_id: String,
    #[serde(deserialize_with = "id_field")]
    pub rental_id: String,
    #[serde(deserialize_with = "id_field")]
    pub restaurant_id: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdField {
    Text(String),
    Unsigned(u64),
    Other(serde::de::IgnoredAny),
}

fn id_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawIdField::deserialize(deserializer)? {
        RawIdField::Text(text) => text,
        RawIdField::Unsigned(n) => n.to_string(),
        RawIdField::Other(_) => String::new(),
    })
}

impl BookingForm {
    /// Turn the form into a request, dropping item IDs that are not plain digits.
    pub fn into_request(self) -> BookingRequest {
        let selection = BookingSelection {
            flight_id: parse_optional_id(&self.flight_id),
            hotel_id: parse_optional_id(&self.hotel_id),
            rental_id: parse_optional_id(&self.rental_id),
            restaurant_id: parse_optional_id(&self.restaurant_id),
        };

        BookingRequest {
            customer: NewCustomer {
                name: self.name,
                email: self.email,
                phone: self.phone,
                card_number: self.cardnumber,
            },
            selection,
        }
    }
}

/// What storage hands back after a committed booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingReceipt {
    pub booking_id: i32,
    pub customer_id: i32,
    pub booking_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Confirmed(BookingReceipt),
    /// Rolled back; carries the underlying error text.
    Failed(String),
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed(_))
    }

    pub fn booking_id(&self) -> Option<i32> {
        match self {
            BookingOutcome::Confirmed(receipt) => Some(receipt.booking_id),
            BookingOutcome::Failed(_) => None,
        }
    }

    /// Human readable notification for the visitor.
    pub fn message(&self) -> String {
        match self {
            BookingOutcome::Confirmed(receipt) => {
                format!("Booking successful! Booking ID: {}", receipt.booking_id)
            }
            BookingOutcome::Failed(reason) => {
                format!("An error occurred while making the booking: {}", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_form() -> BookingForm {
        BookingForm {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "555-1234".to_string(),
            cardnumber: Masked("4111111111111111".to_string()),
            flight_id: "3".to_string(),
            hotel_id: "".to_string(),
            rental_id: "7".to_string(),
            restaurant_id: "n/a".to_string(),
        }
    }

    #[test]
    fn test_form_coerces_ids() {
        let request = alice_form().into_request();

        assert_eq!(request.customer.name, "Alice");
        assert_eq!(request.customer.card_number.expose(), "4111111111111111");
        assert_eq!(
            request.selection,
            BookingSelection {
                flight_id: Some(3),
                hotel_id: None,
                rental_id: Some(7),
                restaurant_id: None,
            }
        );
    }

    #[test]
    fn test_form_debug_hides_card_number() {
        let rendered = format!("{:?}", alice_form().into_request());
        assert!(!rendered.contains("4111111111111111"));
        assert!(rendered.contains("1111"));
    }

    #[test]
    fn test_form_missing_fields_default_to_empty() {
        let form: BookingForm = serde_json::from_str(r#"{"name": "Bob", "hotel_id": "12"}"#).unwrap();
        let request = form.into_request();

        assert_eq!(request.customer.email, "");
        assert_eq!(request.selection.hotel_id, Some(12));
        assert_eq!(request.selection.flight_id, None);
    }

    #[test]
    fn test_form_accepts_numeric_ids() {
        let form: BookingForm = serde_json::from_str(
            r#"{"flight_id": 3, "hotel_id": -2, "rental_id": 7.5, "restaurant_id": null}"#,
        )
        .unwrap();
        let request = form.into_request();

        assert_eq!(
            request.selection,
            BookingSelection {
                flight_id: Some(3),
                hotel_id: None,
                rental_id: None,
                restaurant_id: None,
            }
        );
    }

    #[test]
    fn test_form_keeps_out_of_range_ids() {
        let form = BookingForm {
            flight_id: "2147483648".to_string(),
            ..alice_form()
        };

        assert_eq!(form.into_request().selection.flight_id, Some(2147483648));
    }

    #[test]
    fn test_outcome_messages() {
        let confirmed = BookingOutcome::Confirmed(BookingReceipt {
            booking_id: 42,
            customer_id: 9,
            booking_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        });
        assert!(confirmed.is_confirmed());
        assert_eq!(confirmed.booking_id(), Some(42));
        assert_eq!(confirmed.message(), "Booking successful! Booking ID: 42");

        let failed = BookingOutcome::Failed("connection refused".to_string());
        assert!(!failed.is_confirmed());
        assert_eq!(failed.booking_id(), None);
        assert_eq!(
            failed.message(),
            "An error occurred while making the booking: connection refused"
        );
    }
}
