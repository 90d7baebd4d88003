use super::address::Address;
use super::property::{
    Commercial, Property, PropertyId, PropertyKind, PropertyType, Residence, Retail,
};
use super::validation::{check_char_len, ValidationError};
use std::collections::BTreeMap;
use tracing::debug;

const MIN_NAME_LENGTH: usize = 1;
const MAX_NAME_LENGTH: usize = 30;

/// In-memory portfolio of an agency, keyed by property id.
///
/// Every query is a read-only scan. Results come back in ascending property-id order and
/// an empty container means nothing matched.
#[derive(Debug, Clone)]
pub struct Agency {
    name: String,
    properties: BTreeMap<PropertyId, Property>,
}

impl Agency {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate_name(&name)?;

        Ok(Self {
            name,
            properties: BTreeMap::new(),
        })
    }

    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        check_char_len("agency name", name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Stores `property` under its id. A property already listed under the same id is
    /// replaced and handed back.
    pub fn add_property(&mut self, property: Property) -> Option<Property> {
        let replaced = self
            .properties
            .insert(property.property_id().clone(), property);
        if let Some(previous) = &replaced {
            debug!(property_id = %previous.property_id(), "replaced existing listing");
        }
        replaced
    }

    pub fn remove_property(&mut self, property_id: &str) -> Option<Property> {
        self.properties.remove(property_id)
    }

    pub fn get_property(&self, property_id: &str) -> Option<&Property> {
        self.properties.get(property_id)
    }

    pub fn get_property_mut(&mut self, property_id: &str) -> Option<&mut Property> {
        self.properties.get_mut(property_id)
    }

    /// Sum of all asking prices, dropping the cents of each price before it is added.
    /// Saturates at `u64::MAX`.
    pub fn total_property_values(&self) -> u64 {
        self.properties.values().fold(0, |total, property| {
            total.saturating_add(property.price_usd().trunc() as u64)
        })
    }

    pub fn properties_with_pools(&self) -> Vec<&Property> {
        self.residences_where(|residence| residence.has_swimming_pool())
    }

    pub fn properties_with_strata(&self) -> Vec<&Property> {
        self.residences_where(|residence| residence.has_strata())
    }

    /// Properties priced within `[min_usd, max_usd]`.
    pub fn properties_between(&self, min_usd: f64, max_usd: f64) -> Vec<&Property> {
        self.properties
            .values()
            .filter(|property| {
                let price = property.price_usd();
                price >= min_usd && price <= max_usd
            })
            .collect()
    }

    /// Addresses of listings on `street_name`. The match is exact and case-sensitive.
    pub fn properties_on(&self, street_name: &str) -> Vec<&Address> {
        self.properties
            .values()
            .map(Property::address)
            .filter(|address| address.street_name() == street_name)
            .collect()
    }

    /// Residences with a bedroom count within `[min_bedrooms, max_bedrooms]`.
    pub fn properties_with_bedrooms(
        &self,
        min_bedrooms: u32,
        max_bedrooms: u32,
    ) -> BTreeMap<&str, &Property> {
        self.properties
            .iter()
            .filter(|(_, property)| {
                property.as_residence().is_some_and(|residence| {
                    let bedrooms = u32::from(residence.number_of_bedrooms());
                    bedrooms >= min_bedrooms && bedrooms <= max_bedrooms
                })
            })
            .map(|(id, property)| (id.as_str(), property))
            .collect()
    }

    /// Listings whose type matches `property_type`, ignoring case. Unknown types match
    /// nothing.
    pub fn properties_of_type(&self, property_type: &str) -> Vec<&Property> {
        match property_type.parse::<PropertyType>() {
            Ok(property_type) => self.properties_of(property_type),
            Err(_) => Vec::new(),
        }
    }

    pub fn properties_of(&self, property_type: PropertyType) -> Vec<&Property> {
        self.properties
            .values()
            .filter(|property| property.property_type() == property_type)
            .collect()
    }

    pub fn properties_with_loading_docks(&self) -> Vec<&Property> {
        self.commercial_where(|commercial| commercial.has_loading_dock())
    }

    pub fn properties_with_highway_access(&self) -> Vec<&Property> {
        self.commercial_where(|commercial| commercial.has_highway_access())
    }

    pub fn properties_square_footage(&self, square_footage: u32) -> Vec<&Property> {
        self.retail_where(|retail| retail.square_footage() == square_footage)
    }

    pub fn properties_with_customer_parking(&self) -> Vec<&Property> {
        self.retail_where(|retail| retail.has_customer_parking())
    }

    fn residences_where(&self, predicate: impl Fn(&Residence) -> bool) -> Vec<&Property> {
        self.matching(|kind| match kind {
            PropertyKind::Residence(residence) => predicate(residence),
            PropertyKind::Commercial(_) | PropertyKind::Retail(_) => false,
        })
    }

    fn commercial_where(&self, predicate: impl Fn(&Commercial) -> bool) -> Vec<&Property> {
        self.matching(|kind| match kind {
            PropertyKind::Commercial(commercial) => predicate(commercial),
            PropertyKind::Residence(_) | PropertyKind::Retail(_) => false,
        })
    }

    fn retail_where(&self, predicate: impl Fn(&Retail) -> bool) -> Vec<&Property> {
        self.matching(|kind| match kind {
            PropertyKind::Retail(retail) => predicate(retail),
            PropertyKind::Residence(_) | PropertyKind::Commercial(_) => false,
        })
    }

    fn matching(&self, predicate: impl Fn(&PropertyKind) -> bool) -> Vec<&Property> {
        self.properties
            .values()
            .filter(|property| predicate(property.kind()))
            .collect()
    }
}

impl Extend<Property> for Agency {
    fn extend<T: IntoIterator<Item = Property>>(&mut self, iter: T) {
        for property in iter {
            self.add_property(property);
        }
    }
}

/// Capitalizes the first letter of every space-separated word and lowercases the rest.
/// Runs of spaces collapse to one.
pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
