//! Loading of listings from the pipe-delimited address and property files.
//!
//! Line `n` of the address file belongs to line `n` of the property file. Both files are
//! read and validated in full before anything is handed to an [`Agency`], so a failed
//! load leaves the agency untouched.

mod parser;

use crate::portfolio::{Address, Agency, Property, ValidationError};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use parser::PropertyRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Addresses,
    Properties,
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFile::Addresses => f.write_str("address file"),
            DataFile::Properties => f.write_str("property file"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open {file} {path:?}: {source}")]
    Open {
        file: DataFile,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unreadable {file}: {source}")]
    Csv {
        file: DataFile,
        #[source]
        source: csv::Error,
    },
    #[error("{file} line {line}: {field} '{value}' is not a number")]
    InvalidNumber {
        file: DataFile,
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("{file} line {line}: {source}")]
    Validation {
        file: DataFile,
        line: u64,
        #[source]
        source: ValidationError,
    },
    #[error("address file has {addresses} records but property file has {properties}")]
    CountMismatch { addresses: usize, properties: usize },
}

pub struct PortfolioImporter;

impl PortfolioImporter {
    pub fn from_paths<A: AsRef<Path>, P: AsRef<Path>>(
        addresses: A,
        properties: P,
    ) -> Result<Vec<Property>, IngestError> {
        let address_file = open(addresses.as_ref(), DataFile::Addresses)?;
        let property_file = open(properties.as_ref(), DataFile::Properties)?;
        Self::from_readers(address_file, property_file)
    }

    pub fn from_readers<A: Read, P: Read>(
        addresses: A,
        properties: P,
    ) -> Result<Vec<Property>, IngestError> {
        let addresses = parser::parse_addresses(addresses)?;
        let records = parser::parse_properties(properties)?;

        if addresses.len() != records.len() {
            return Err(IngestError::CountMismatch {
                addresses: addresses.len(),
                properties: records.len(),
            });
        }

        let listings = records
            .into_iter()
            .zip(addresses)
            .map(|(record, address)| assemble(record, address))
            .collect::<Result<Vec<_>, _>>()?;

        info!(listings = listings.len(), "loaded property listings");
        Ok(listings)
    }

    /// Loads both files and adds every listing to `agency`. Returns how many were added.
    pub fn load_into<A: AsRef<Path>, P: AsRef<Path>>(
        agency: &mut Agency,
        addresses: A,
        properties: P,
    ) -> Result<usize, IngestError> {
        let listings = Self::from_paths(addresses, properties)?;
        let count = listings.len();
        agency.extend(listings);
        Ok(count)
    }
}

fn open(path: &Path, file: DataFile) -> Result<File, IngestError> {
    File::open(path).map_err(|source| IngestError::Open {
        file,
        path: path.to_path_buf(),
        source,
    })
}

fn assemble(record: PropertyRecord, address: Address) -> Result<Property, IngestError> {
    let PropertyRecord {
        line,
        price_usd,
        type_tag,
        property_id,
        kind,
    } = record;

    let property = Property::new(price_usd, address, &type_tag, &property_id, kind).map_err(
        |source| IngestError::Validation {
            file: DataFile::Properties,
            line,
            source,
        },
    )?;

    debug!(
        line,
        property_id = %property.property_id(),
        property_type = %property.property_type(),
        "parsed listing"
    );
    Ok(property)
}
