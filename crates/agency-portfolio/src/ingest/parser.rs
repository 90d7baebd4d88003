use super::{DataFile, IngestError};
use crate::portfolio::{Address, Commercial, PropertyKind, Residence, Retail, ValidationError};
use std::io::Read;
use std::str::FromStr;

const UNIT_NUMBER_INDEX: usize = 0;
const STREET_NUMBER_INDEX: usize = 1;
const STREET_NAME_INDEX: usize = 2;
const POSTAL_CODE_INDEX: usize = 3;
const CITY_INDEX: usize = 4;

const PRICE_INDEX: usize = 0;

const RESIDENCE_BEDROOMS_INDEX: usize = 1;
const RESIDENCE_POOL_INDEX: usize = 2;
const RESIDENCE_TYPE_INDEX: usize = 3;
const RESIDENCE_ID_INDEX: usize = 4;
const RESIDENCE_STRATA_INDEX: usize = 5;

const COMMERCIAL_TYPE_INDEX: usize = 1;
const COMMERCIAL_ID_INDEX: usize = 2;
const COMMERCIAL_LOADING_DOCK_INDEX: usize = 3;
const COMMERCIAL_HIGHWAY_ACCESS_INDEX: usize = 4;

const RETAIL_TYPE_INDEX: usize = 1;
const RETAIL_ID_INDEX: usize = 2;
const RETAIL_SQUARE_FOOTAGE_INDEX: usize = 3;
const RETAIL_CUSTOMER_PARKING_INDEX: usize = 4;

/// One property line with its amenities validated but not yet paired with an address.
#[derive(Debug)]
pub(crate) struct PropertyRecord {
    pub(crate) line: u64,
    pub(crate) price_usd: f64,
    pub(crate) type_tag: String,
    pub(crate) property_id: String,
    pub(crate) kind: PropertyKind,
}

pub(crate) fn parse_addresses<R: Read>(reader: R) -> Result<Vec<Address>, IngestError> {
    let mut addresses = Vec::new();

    for row in rows(reader, DataFile::Addresses) {
        let row = row?;
        let address = Address::new(
            row.text(UNIT_NUMBER_INDEX, "unit number")?,
            row.number(STREET_NUMBER_INDEX, "street number")?,
            row.text(STREET_NAME_INDEX, "street name")?,
            row.text(POSTAL_CODE_INDEX, "postal code")?,
            row.text(CITY_INDEX, "city")?,
        )
        .map_err(|source| row.invalid(source))?;

        addresses.push(address);
    }

    Ok(addresses)
}

pub(crate) fn parse_properties<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, IngestError> {
    let mut records = Vec::new();

    for row in rows(reader, DataFile::Properties) {
        let row = row?;
        let price_usd = row.number(PRICE_INDEX, "price")?;

        // Residences carry their tag in the fourth column; the other layouts keep it second
        // and anything that is not commercial falls through to retail.
        let record = if row.tag_at(RESIDENCE_TYPE_INDEX, "residence") {
            let residence = Residence::new(
                row.number(RESIDENCE_BEDROOMS_INDEX, "number of bedrooms")?,
                row.flag(RESIDENCE_POOL_INDEX),
                row.flag(RESIDENCE_STRATA_INDEX),
            )
            .map_err(|source| row.invalid(source))?;
            row.record(price_usd, RESIDENCE_TYPE_INDEX, RESIDENCE_ID_INDEX, residence)?
        } else if row.tag_at(COMMERCIAL_TYPE_INDEX, "commercial") {
            let commercial = Commercial::new(
                row.flag(COMMERCIAL_LOADING_DOCK_INDEX),
                row.flag(COMMERCIAL_HIGHWAY_ACCESS_INDEX),
            );
            row.record(price_usd, COMMERCIAL_TYPE_INDEX, COMMERCIAL_ID_INDEX, commercial)?
        } else {
            let retail = Retail::new(
                row.number(RETAIL_SQUARE_FOOTAGE_INDEX, "square footage")?,
                row.flag(RETAIL_CUSTOMER_PARKING_INDEX),
            )
            .map_err(|source| row.invalid(source))?;
            row.record(price_usd, RETAIL_TYPE_INDEX, RETAIL_ID_INDEX, retail)?
        };

        records.push(record);
    }

    Ok(records)
}

fn rows<R: Read>(reader: R, file: DataFile) -> impl Iterator<Item = Result<Row, IngestError>> {
    csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_records()
        .map(move |record| -> Result<Row, IngestError> {
            let record = record.map_err(|source| IngestError::Csv { file, source })?;
            let line = record.position().map(|position| position.line()).unwrap_or(0);
            Ok(Row { file, line, record })
        })
}

struct Row {
    file: DataFile,
    line: u64,
    record: csv::StringRecord,
}

impl Row {
    fn text(&self, index: usize, field: &'static str) -> Result<&str, IngestError> {
        self.record
            .get(index)
            .ok_or_else(|| self.invalid(ValidationError::Missing { field }))
    }

    fn number<T: FromStr>(&self, index: usize, field: &'static str) -> Result<T, IngestError> {
        let raw = self.text(index, field)?;
        raw.parse().map_err(|_| IngestError::InvalidNumber {
            file: self.file,
            line: self.line,
            field,
            value: raw.to_string(),
        })
    }

    /// Only a case-insensitive `true` counts as set; anything else, including a missing
    /// column, reads as false.
    fn flag(&self, index: usize) -> bool {
        self.record
            .get(index)
            .is_some_and(|raw| raw.eq_ignore_ascii_case("true"))
    }

    fn tag_at(&self, index: usize, tag: &str) -> bool {
        self.record
            .get(index)
            .is_some_and(|raw| raw.eq_ignore_ascii_case(tag))
    }

    fn record(
        &self,
        price_usd: f64,
        type_index: usize,
        id_index: usize,
        kind: impl Into<PropertyKind>,
    ) -> Result<PropertyRecord, IngestError> {
        Ok(PropertyRecord {
            line: self.line,
            price_usd,
            type_tag: self.text(type_index, "property type")?.to_string(),
            property_id: self.text(id_index, "property id")?.to_string(),
            kind: kind.into(),
        })
    }

    fn invalid(&self, source: ValidationError) -> IngestError {
        IngestError::Validation {
            file: self.file,
            line: self.line,
            source,
        }
    }
}
