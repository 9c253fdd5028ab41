use crate::{
    serde_helpers::double_option,
    validation::{
        BLANK, INVALID_DATE, INVALID_EMAIL, INVALID_TIME, REQUIRED, ValidationErrors,
        is_valid_email, too_long,
    },
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Maximum length of the `name` field, in characters
pub const NAME_MAX_LENGTH: usize = 100;
/// Maximum length of the `email` field, in characters
pub const EMAIL_MAX_LENGTH: usize = 254;
/// Maximum length of the `phone` field, in characters
pub const PHONE_MAX_LENGTH: usize = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// A fully validated reservation, ready to be written to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub message: String,
}

/// A submitted field: `None` when absent, `Some(None)` for an explicit `null`
pub type Field = Option<Option<String>>;

/// Raw reservation input as submitted by a client.
///
/// Absent fields, explicit nulls and values are kept apart so that a
/// partial update only fills fields the client left out, and every
/// missing value is reported alongside malformed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPayload {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Field,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Field,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Field,
    #[serde(default, deserialize_with = "double_option")]
    pub date: Field,
    #[serde(default, deserialize_with = "double_option")]
    pub time: Field,
    #[serde(default, deserialize_with = "double_option")]
    pub message: Field,
}

impl From<NewReservation> for ReservationPayload {
    fn from(reservation: NewReservation) -> Self {
        Self {
            name: Some(Some(reservation.name)),
            email: Some(Some(reservation.email)),
            phone: Some(Some(reservation.phone)),
            date: Some(Some(reservation.date.format(DATE_FORMAT).to_string())),
            time: Some(Some(reservation.time.format("%H:%M:%S%.f").to_string())),
            message: Some(Some(reservation.message)),
        }
    }
}

impl ReservationPayload {
    /// Fills every absent field from `existing`, for partial updates.
    /// Explicit nulls are kept and fail validation.
    pub fn merge_onto(self, existing: NewReservation) -> Self {
        let existing = Self::from(existing);
        Self {
            name: self.name.or(existing.name),
            email: self.email.or(existing.email),
            phone: self.phone.or(existing.phone),
            date: self.date.or(existing.date),
            time: self.time.or(existing.time),
            message: self.message.or(existing.message),
        }
    }

    /// Validates every field, collecting all failures before returning
    pub fn validate(self) -> Result<NewReservation, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = text_field(&mut errors, "name", self.name, Some(NAME_MAX_LENGTH));
        let email = text_field(&mut errors, "email", self.email, Some(EMAIL_MAX_LENGTH));
        let phone = text_field(&mut errors, "phone", self.phone, Some(PHONE_MAX_LENGTH));
        let message = text_field(&mut errors, "message", self.message, None);

        if let Some(email) = email.as_deref() {
            if !is_valid_email(email) {
                errors.add("email", INVALID_EMAIL);
            }
        }

        let date = required(&mut errors, "date", self.date).and_then(|raw| {
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map_err(|_| errors.add("date", INVALID_DATE))
                .ok()
        });

        let time = required(&mut errors, "time", self.time).and_then(|raw| {
            let parsed = parse_time(raw.trim());
            if parsed.is_none() {
                errors.add("time", INVALID_TIME);
            }
            parsed
        });

        match (name, email, phone, date, time, message) {
            (Some(name), Some(email), Some(phone), Some(date), Some(time), Some(message))
                if errors.is_empty() =>
            {
                Ok(NewReservation {
                    name,
                    email,
                    phone,
                    date,
                    time,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Missing and null values are both reported as required
fn required(errors: &mut ValidationErrors, field: &str, value: Field) -> Option<String> {
    let value = value.flatten();
    if value.is_none() {
        errors.add(field, REQUIRED);
    }
    value
}

/// Trims a text field and checks it is present, non-blank and within `max` characters
fn text_field(
    errors: &mut ValidationErrors,
    field: &str,
    value: Field,
    max: Option<usize>,
) -> Option<String> {
    let value = required(errors, field, value)?.trim().to_string();

    if value.is_empty() {
        errors.add(field, BLANK);
        return None;
    }

    if let Some(max) = max {
        if value.chars().count() > max {
            errors.add(field, too_long(max));
            return None;
        }
    }

    Some(value)
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(value: impl Into<String>) -> Field {
        Some(Some(value.into()))
    }

    fn payload() -> ReservationPayload {
        ReservationPayload {
            name: set("John Doe"),
            email: set("john@example.com"),
            phone: set("1234567890"),
            date: set("2025-06-01"),
            time: set("19:30:00"),
            message: set("Test reservation"),
        }
    }

    #[test]
    fn test_valid_payload() {
        let reservation = payload().validate().unwrap();

        assert_eq!(reservation.name, "John Doe");
        assert_eq!(reservation.email, "john@example.com");
        assert_eq!(reservation.phone, "1234567890");
        assert_eq!(reservation.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(reservation.time, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
        assert_eq!(reservation.message, "Test reservation");
    }

    #[test]
    fn test_time_formats() {
        for (raw, expected) in [
            ("08:15", NaiveTime::from_hms_opt(8, 15, 0)),
            ("08:15:42", NaiveTime::from_hms_opt(8, 15, 42)),
            ("08:15:42.123456", NaiveTime::from_hms_micro_opt(8, 15, 42, 123_456)),
        ] {
            let reservation = ReservationPayload {
                time: set(raw.to_string()),
                ..payload()
            }
            .validate()
            .unwrap();
            assert_eq!(Some(reservation.time), expected, "parsing {raw}");
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let reservation = ReservationPayload {
            name: set("  John Doe "),
            email: set(" john@example.com"),
            ..payload()
        }
        .validate()
        .unwrap();

        assert_eq!(reservation.name, "John Doe");
        assert_eq!(reservation.email, "john@example.com");
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let errors = ReservationPayload::default().validate().unwrap_err();

        for field in ["name", "email", "phone", "date", "time", "message"] {
            assert_eq!(errors.messages(field), [REQUIRED], "field {field}");
        }
    }

    #[test]
    fn test_empty_email_is_blank() {
        let errors = ReservationPayload {
            email: set(String::new()),
            ..payload()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.messages("email"), [BLANK]);
        assert_eq!(errors.fields().count(), 1);
    }

    #[test]
    fn test_malformed_email() {
        let errors = ReservationPayload {
            email: set("john.example.com"),
            ..payload()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.messages("email"), [INVALID_EMAIL]);
    }

    #[test]
    fn test_max_lengths() {
        let ok = ReservationPayload {
            name: set("n".repeat(NAME_MAX_LENGTH)),
            phone: set("9".repeat(PHONE_MAX_LENGTH)),
            message: set("m".repeat(10_000)),
            ..payload()
        };
        assert!(ok.validate().is_ok());

        let errors = ReservationPayload {
            name: set("n".repeat(NAME_MAX_LENGTH + 1)),
            phone: set("9".repeat(PHONE_MAX_LENGTH + 1)),
            ..payload()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.messages("name"), [too_long(NAME_MAX_LENGTH)]);
        assert_eq!(errors.messages("phone"), [too_long(PHONE_MAX_LENGTH)]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let reservation = ReservationPayload {
            name: set("é".repeat(NAME_MAX_LENGTH)),
            ..payload()
        };
        assert!(reservation.validate().is_ok());
    }

    #[test]
    fn test_phone_has_no_format() {
        let reservation = ReservationPayload {
            phone: set("call the front desk"),
            ..payload()
        }
        .validate()
        .unwrap();

        assert_eq!(reservation.phone, "call the front desk");
    }

    #[test]
    fn test_bad_date_and_time() {
        let errors = ReservationPayload {
            date: set("01/06/2025"),
            time: set("7pm"),
            ..payload()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.messages("date"), [INVALID_DATE]);
        assert_eq!(errors.messages("time"), [INVALID_TIME]);
    }

    #[test]
    fn test_merge_onto_keeps_stored_values() {
        let existing = payload().validate().unwrap();
        let patch = ReservationPayload {
            phone: set("555-0100"),
            time: set("20:00"),
            ..Default::default()
        };

        let merged = patch.merge_onto(existing.clone()).validate().unwrap();

        assert_eq!(merged.name, existing.name);
        assert_eq!(merged.email, existing.email);
        assert_eq!(merged.date, existing.date);
        assert_eq!(merged.message, existing.message);
        assert_eq!(merged.phone, "555-0100");
        assert_eq!(merged.time, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
    }

    #[test]
    fn test_merge_onto_round_trips_sub_second_time() {
        let existing = ReservationPayload {
            time: set("08:15:42.123456"),
            ..payload()
        }
        .validate()
        .unwrap();

        let merged = ReservationPayload::default()
            .merge_onto(existing.clone())
            .validate()
            .unwrap();

        assert_eq!(merged, existing);
    }

    #[test]
    fn test_merge_onto_keeps_explicit_nulls() {
        let existing = payload().validate().unwrap();
        let patch = ReservationPayload {
            name: Some(None),
            email: Some(None),
            ..Default::default()
        };

        let errors = patch.merge_onto(existing).validate().unwrap_err();

        assert_eq!(errors.messages("name"), [REQUIRED]);
        assert_eq!(errors.messages("email"), [REQUIRED]);
        assert_eq!(errors.fields().count(), 2);
    }

    #[test]
    fn test_deserialize_tells_null_from_missing() {
        let payload: ReservationPayload =
            serde_json::from_str(r#"{"name": null, "phone": "555"}"#).unwrap();

        assert_eq!(payload.name, Some(None));
        assert_eq!(payload.phone, set("555"));
        assert_eq!(payload.email, None);
    }
}
