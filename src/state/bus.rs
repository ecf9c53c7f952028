//! Bus records and the create-bus request body

use super::forms::ChoiceOption;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BUS_TYPE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "Non_AC",
        label: "Non-AC",
    },
    ChoiceOption {
        value: "AC",
        label: "AC",
    },
];

pub const SEAT_TYPE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "SEATER",
        label: "Seater",
    },
    ChoiceOption {
        value: "SLEEPER",
        label: "Sleeper",
    },
];

pub const DECK_TYPE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "SINGLE",
        label: "Single",
    },
    ChoiceOption {
        value: "DOUBLE",
        label: "Double",
    },
];

pub const SEAT_LAYOUT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "TWO_BY_ONE",
        label: "2x1",
    },
    ChoiceOption {
        value: "TWO_BY_TWO",
        label: "2x2",
    },
    ChoiceOption {
        value: "ONE_BY_ONE",
        label: "1x1",
    },
];

/// JSON body of `POST /api/buses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusRequest {
    pub name: String,
    pub number: String,
    pub description: String,
    #[serde(rename = "type")]
    pub bus_type: String,
    pub seat_type: String,
    pub deck_type: String,
    pub seat_layout: String,
    pub seats: i64,
    pub total_seaters: Option<i64>,
    pub total_sleeper: Option<i64>,
    pub is_active: bool,
    pub image: String,
    pub vendor_id: Option<String>,
}

/// A bus as listed by `GET /api/buses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub bus_type: String,
    #[serde(default)]
    pub seat_type: String,
    #[serde(default)]
    pub seats: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Bus {
    /// Display label of the bus type wire value
    pub fn type_label(&self) -> &str {
        option_label(BUS_TYPE_OPTIONS, &self.bus_type).unwrap_or(&self.bus_type)
    }
}

/// Look up the display label for a wire value
pub fn option_label(options: &'static [ChoiceOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}

/// Parse the leading integer of `raw`: optional whitespace, an optional
/// sign, then digits. Trailing garbage is ignored; no digits yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Seat count sent to the API: unparsable input becomes 0
pub fn coerce_count(raw: &str) -> i64 {
    parse_leading_int(raw).unwrap_or(0)
}

/// Optional count sent to the API: unparsable or zero becomes `null`
pub fn coerce_optional_count(raw: &str) -> Option<i64> {
    parse_leading_int(raw).filter(|n| *n != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 seats"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_coerce_count_defaults_to_zero() {
        assert_eq!(coerce_count("40"), 40);
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("many"), 0);
    }

    #[test]
    fn test_coerce_optional_count_drops_zero() {
        assert_eq!(coerce_optional_count("12"), Some(12));
        assert_eq!(coerce_optional_count("0"), None);
        assert_eq!(coerce_optional_count(""), None);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = CreateBusRequest {
            name: "Night Rider".to_string(),
            number: "KA01AB1234".to_string(),
            description: String::new(),
            bus_type: "AC".to_string(),
            seat_type: "SLEEPER".to_string(),
            deck_type: "DOUBLE".to_string(),
            seat_layout: "TWO_BY_ONE".to_string(),
            seats: 36,
            total_seaters: None,
            total_sleeper: Some(36),
            is_active: true,
            image: String::new(),
            vendor_id: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Night Rider",
                "number": "KA01AB1234",
                "description": "",
                "type": "AC",
                "seatType": "SLEEPER",
                "deckType": "DOUBLE",
                "seatLayout": "TWO_BY_ONE",
                "seats": 36,
                "totalSeaters": null,
                "totalSleeper": 36,
                "isActive": true,
                "image": "",
                "vendorId": null
            })
        );
    }

    #[test]
    fn test_bus_deserializes_with_missing_fields() {
        let json = r#"{"name": "City Hopper", "number": "MH12", "type": "Non_AC"}"#;
        let bus: Bus = serde_json::from_str(json).unwrap();
        assert_eq!(bus.name, "City Hopper");
        assert_eq!(bus.type_label(), "Non-AC");
        assert!(bus.is_active);
        assert_eq!(bus.seats, 0);
        assert!(bus.created_at.is_none());
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(SEAT_LAYOUT_OPTIONS, "TWO_BY_TWO"), Some("2x2"));
        assert_eq!(option_label(SEAT_LAYOUT_OPTIONS, "THREE"), None);
    }
}
