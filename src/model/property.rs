//! Property record and form input validation
//!
//! `RawPropertyInput` holds whatever the user typed or toggled.
//! `PropertyRecord` only exists once every constraint has passed; it is the
//! immutable payload of one estimation request and serializes directly into
//! the wire format the prediction service expects.

use crate::i18n::Msg;
use crate::model::options;
use serde::Serialize;

/// Validated attributes of a single estimation request.
///
/// Field names double as the JSON keys of the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub location: String,
    pub size_m2: f64,
    pub rooms: f64,
    pub floor: i32,
    pub bathrooms: u32,
    pub year_built: String,
    pub condition: String,
    pub furnished: String,
    pub heating_type: String,
    pub has_balcony: bool,
    pub has_garage: bool,
    pub has_parking: bool,
    pub has_elevator: bool,
    pub is_registered: bool,
    pub has_armored_door: bool,
}

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Location,
    Size,
    Rooms,
    Floor,
    Bathrooms,
    YearBuilt,
    Condition,
    Furnished,
    Heating,
}

/// A single field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    /// Message key, resolved against the active locale at render time
    pub message: Msg,
}

/// Unvalidated form state as the user entered it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPropertyInput {
    pub location: String,
    pub size_m2: String,
    pub rooms: String,
    pub floor: String,
    pub bathrooms: String,
    /// Wire codes from the option catalogs; empty until chosen
    pub year_built: String,
    pub condition: String,
    pub furnished: String,
    pub heating_type: String,
    pub has_balcony: bool,
    pub has_garage: bool,
    pub has_parking: bool,
    pub has_elevator: bool,
    pub is_registered: bool,
    pub has_armored_door: bool,
}

impl RawPropertyInput {
    /// Validate every field, collecting all failures rather than stopping
    /// at the first. A `PropertyRecord` is only built when the error list
    /// stays empty.
    pub fn validate(&self) -> Result<PropertyRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.location.is_empty() {
            errors.push(FieldError { field: FieldId::Location, message: Msg::LocationRequired });
        } else if !options::is_valid_location(&self.location) {
            errors.push(FieldError { field: FieldId::Location, message: Msg::LocationUnknown });
        }

        let size_m2 = parse_number(&self.size_m2, FieldId::Size, &mut errors);
        if let Some(v) = size_m2 {
            if !(15.0..=1000.0).contains(&v) {
                errors.push(FieldError { field: FieldId::Size, message: Msg::SizeRange });
            }
        }

        let rooms = parse_number(&self.rooms, FieldId::Rooms, &mut errors);
        if let Some(v) = rooms {
            if !(1.0..=20.0).contains(&v) {
                errors.push(FieldError { field: FieldId::Rooms, message: Msg::RoomsRange });
            }
        }

        let floor = parse_integer(&self.floor, FieldId::Floor, &mut errors);
        if let Some(v) = floor {
            if !(-4..=100).contains(&v) {
                errors.push(FieldError { field: FieldId::Floor, message: Msg::FloorRange });
            }
        }

        let bathrooms = parse_integer(&self.bathrooms, FieldId::Bathrooms, &mut errors);
        if let Some(v) = bathrooms {
            if !(1..=10).contains(&v) {
                errors.push(FieldError { field: FieldId::Bathrooms, message: Msg::BathroomsRange });
            }
        }

        if self.year_built.is_empty() {
            errors.push(FieldError { field: FieldId::YearBuilt, message: Msg::YearRequired });
        }
        if self.condition.is_empty() {
            errors.push(FieldError { field: FieldId::Condition, message: Msg::ConditionRequired });
        }
        if self.furnished.is_empty() {
            errors.push(FieldError { field: FieldId::Furnished, message: Msg::FurnishedRequired });
        }
        if self.heating_type.is_empty() {
            errors.push(FieldError { field: FieldId::Heating, message: Msg::HeatingRequired });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PropertyRecord {
            location: self.location.clone(),
            size_m2: size_m2.unwrap_or_default(),
            rooms: rooms.unwrap_or_default(),
            floor: floor.unwrap_or_default(),
            bathrooms: bathrooms.unwrap_or_default() as u32,
            year_built: self.year_built.clone(),
            condition: self.condition.clone(),
            furnished: self.furnished.clone(),
            heating_type: self.heating_type.clone(),
            has_balcony: self.has_balcony,
            has_garage: self.has_garage,
            has_parking: self.has_parking,
            has_elevator: self.has_elevator,
            is_registered: self.is_registered,
            has_armored_door: self.has_armored_door,
        })
    }
}

fn parse_number(input: &str, field: FieldId, errors: &mut Vec<FieldError>) -> Option<f64> {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            errors.push(FieldError { field, message: Msg::NotANumber });
            None
        }
    }
}

fn parse_integer(input: &str, field: FieldId, errors: &mut Vec<FieldError>) -> Option<i32> {
    match input.trim().parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(FieldError { field, message: Msg::NotANumber });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawPropertyInput {
        RawPropertyInput {
            location: "Sarajevo - Centar".to_string(),
            size_m2: "65".to_string(),
            rooms: "3".to_string(),
            floor: "2".to_string(),
            bathrooms: "1".to_string(),
            year_built: "2015+".to_string(),
            condition: "Dobro stanje".to_string(),
            furnished: "Namješten".to_string(),
            heating_type: "Centralno (gradsko)".to_string(),
            has_balcony: true,
            has_garage: false,
            has_parking: true,
            has_elevator: true,
            is_registered: true,
            has_armored_door: false,
        }
    }

    #[test]
    fn test_valid_input_builds_record() {
        let record = valid_input().validate().expect("input should validate");
        assert_eq!(record.location, "Sarajevo - Centar");
        assert_eq!(record.size_m2, 65.0);
        assert_eq!(record.rooms, 3.0);
        assert_eq!(record.floor, 2);
        assert_eq!(record.bathrooms, 1);
        assert!(record.has_balcony);
        assert!(!record.has_garage);
    }

    #[test]
    fn test_fractional_rooms_allowed() {
        let mut input = valid_input();
        input.rooms = "2.5".to_string();
        let record = input.validate().expect("half rooms are valid");
        assert_eq!(record.rooms, 2.5);
    }

    #[test]
    fn test_size_bounds() {
        for (value, ok) in [("14.9", false), ("15", true), ("1000", true), ("1001", false)] {
            let mut input = valid_input();
            input.size_m2 = value.to_string();
            assert_eq!(input.validate().is_ok(), ok, "size {value}");
        }
    }

    #[test]
    fn test_floor_bounds_and_integrality() {
        for (value, ok) in [("-5", false), ("-4", true), ("100", true), ("101", false)] {
            let mut input = valid_input();
            input.floor = value.to_string();
            assert_eq!(input.validate().is_ok(), ok, "floor {value}");
        }
        let mut input = valid_input();
        input.floor = "2.5".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == FieldId::Floor));
    }

    #[test]
    fn test_bathrooms_bounds() {
        for (value, ok) in [("0", false), ("1", true), ("10", true), ("11", false)] {
            let mut input = valid_input();
            input.bathrooms = value.to_string();
            assert_eq!(input.validate().is_ok(), ok, "bathrooms {value}");
        }
    }

    #[test]
    fn test_unknown_location_rejected() {
        let mut input = valid_input();
        input.location = "Atlantis".to_string();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError { field: FieldId::Location, message: Msg::LocationUnknown }]);
    }

    #[test]
    fn test_empty_form_collects_all_errors() {
        let errors = RawPropertyInput::default().validate().unwrap_err();
        let fields: Vec<FieldId> = errors.iter().map(|e| e.field).collect();
        for field in [
            FieldId::Location,
            FieldId::Size,
            FieldId::Rooms,
            FieldId::Floor,
            FieldId::Bathrooms,
            FieldId::YearBuilt,
            FieldId::Condition,
            FieldId::Furnished,
            FieldId::Heating,
        ] {
            assert!(fields.contains(&field), "missing error for {field:?}");
        }
    }

    #[test]
    fn test_wire_field_names() {
        let record = valid_input().validate().unwrap();
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "location",
            "size_m2",
            "rooms",
            "floor",
            "bathrooms",
            "year_built",
            "condition",
            "furnished",
            "heating_type",
            "has_balcony",
            "has_garage",
            "has_parking",
            "has_elevator",
            "is_registered",
            "has_armored_door",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 15);
        assert_eq!(json["size_m2"], 65.0);
        assert_eq!(json["has_balcony"], true);
    }
}
