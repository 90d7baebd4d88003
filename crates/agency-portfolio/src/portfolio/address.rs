use super::validation::{check_char_len, check_not_blank, check_range, ValidationError};
use serde::Serialize;
use std::fmt;

const MAX_STREET_NUMBER: i64 = 999_999;
const MAX_STREET_NAME_LENGTH: usize = 20;
const MAX_CITY_LENGTH: usize = 30;
const MIN_POSTAL_CODE_LENGTH: usize = 5;
const MAX_POSTAL_CODE_LENGTH: usize = 6;
const MIN_UNIT_NUMBER_LENGTH: usize = 1;
const MAX_UNIT_NUMBER_LENGTH: usize = 4;

/// Validated postal address. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    unit_number: String,
    street_number: u32,
    street_name: String,
    postal_code: String,
    city: String,
}

impl Address {
    pub fn new(
        unit_number: impl Into<String>,
        street_number: i64,
        street_name: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let unit_number = unit_number.into();
        let street_name = street_name.into();
        let postal_code = postal_code.into();
        let city = city.into();

        let street_number = check_range("street number", street_number, 0, MAX_STREET_NUMBER)?;
        check_not_blank("street name", &street_name, MAX_STREET_NAME_LENGTH)?;
        check_not_blank("city", &city, MAX_CITY_LENGTH)?;
        check_char_len(
            "postal code",
            &postal_code,
            MIN_POSTAL_CODE_LENGTH,
            MAX_POSTAL_CODE_LENGTH,
        )?;
        check_char_len(
            "unit number",
            &unit_number,
            MIN_UNIT_NUMBER_LENGTH,
            MAX_UNIT_NUMBER_LENGTH,
        )?;

        Ok(Self {
            unit_number,
            // bounded by MAX_STREET_NUMBER above
            street_number: street_number as u32,
            street_name,
            postal_code,
            city,
        })
    }

    pub fn unit_number(&self) -> &str {
        &self.unit_number
    }

    pub fn street_number(&self) -> u32 {
        self.street_number
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Address [unitNumber: {}, streetNumber: {}, streetName: {}, postalCode: {}, city: {}]",
            self.unit_number, self.street_number, self.street_name, self.postal_code, self.city
        )
    }
}
