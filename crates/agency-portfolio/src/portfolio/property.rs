use super::address::Address;
use super::validation::{check_char_len, check_price, check_range, ValidationError};
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

const MIN_PRICE_USD: f64 = 0.0;
const MIN_PROPERTY_ID_LENGTH: usize = 1;
const MAX_PROPERTY_ID_LENGTH: usize = 6;
const MIN_BEDROOMS: i64 = 1;
const MAX_BEDROOMS: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Residence,
    Commercial,
    Retail,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Residence, Self::Commercial, Self::Retail]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Residence => "residence",
            Self::Commercial => "commercial",
            Self::Retail => "retail",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "property type",
                    value,
                    "expected residence, commercial, or retail",
                )
            })
    }
}

/// Agency-unique key of a property, 1 to 6 characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_char_len(
            "property id",
            &value,
            MIN_PROPERTY_ID_LENGTH,
            MAX_PROPERTY_ID_LENGTH,
        )?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PropertyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Residence {
    number_of_bedrooms: u8,
    swimming_pool: bool,
    strata: bool,
}

impl Residence {
    pub fn new(
        number_of_bedrooms: i64,
        swimming_pool: bool,
        strata: bool,
    ) -> Result<Self, ValidationError> {
        let number_of_bedrooms =
            check_range("number of bedrooms", number_of_bedrooms, MIN_BEDROOMS, MAX_BEDROOMS)?;

        Ok(Self {
            number_of_bedrooms: number_of_bedrooms as u8,
            swimming_pool,
            strata,
        })
    }

    pub fn number_of_bedrooms(&self) -> u8 {
        self.number_of_bedrooms
    }

    pub fn has_swimming_pool(&self) -> bool {
        self.swimming_pool
    }

    pub fn has_strata(&self) -> bool {
        self.strata
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commercial {
    loading_dock: bool,
    highway_access: bool,
}

impl Commercial {
    pub fn new(loading_dock: bool, highway_access: bool) -> Self {
        Self {
            loading_dock,
            highway_access,
        }
    }

    pub fn has_loading_dock(&self) -> bool {
        self.loading_dock
    }

    pub fn has_highway_access(&self) -> bool {
        self.highway_access
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Retail {
    square_footage: u32,
    customer_parking: bool,
}

impl Retail {
    pub fn new(square_footage: i64, customer_parking: bool) -> Result<Self, ValidationError> {
        let square_footage =
            check_range("square footage", square_footage, 0, i64::from(u32::MAX))?;

        Ok(Self {
            square_footage: square_footage as u32,
            customer_parking,
        })
    }

    pub fn square_footage(&self) -> u32 {
        self.square_footage
    }

    pub fn has_customer_parking(&self) -> bool {
        self.customer_parking
    }
}

/// Amenities specific to each kind of property. The property type is derived from the
/// variant, so a stored property can never disagree with its own tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyKind {
    Residence(Residence),
    Commercial(Commercial),
    Retail(Retail),
}

impl PropertyKind {
    pub const fn property_type(&self) -> PropertyType {
        match self {
            Self::Residence(_) => PropertyType::Residence,
            Self::Commercial(_) => PropertyType::Commercial,
            Self::Retail(_) => PropertyType::Retail,
        }
    }
}

impl From<Residence> for PropertyKind {
    fn from(value: Residence) -> Self {
        Self::Residence(value)
    }
}

impl From<Commercial> for PropertyKind {
    fn from(value: Commercial) -> Self {
        Self::Commercial(value)
    }
}

impl From<Retail> for PropertyKind {
    fn from(value: Retail) -> Self {
        Self::Retail(value)
    }
}

/// A listed property. Everything but the asking price is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    property_id: PropertyId,
    price_usd: f64,
    address: Address,
    /// Type tag as written by whoever listed the property, kept for the listing text.
    #[serde(skip)]
    type_tag: String,
    #[serde(flatten)]
    kind: PropertyKind,
}

impl Property {
    /// Builds a property from a textual type tag, as found in listing files.
    ///
    /// The tag is matched case-insensitively and must describe the same variant as `kind`.
    pub fn new(
        price_usd: f64,
        address: Address,
        property_type: &str,
        property_id: &str,
        kind: impl Into<PropertyKind>,
    ) -> Result<Self, ValidationError> {
        let price_usd = check_price("price", price_usd, MIN_PRICE_USD)?;
        let tag: PropertyType = property_type.parse()?;
        let property_id = PropertyId::new(property_id)?;
        let kind = kind.into();

        if tag != kind.property_type() {
            return Err(ValidationError::TypeMismatch {
                tag: property_type.to_string(),
                expected: kind.property_type(),
            });
        }

        Ok(Self {
            property_id,
            price_usd,
            address,
            type_tag: property_type.to_string(),
            kind,
        })
    }

    pub fn residence(
        price_usd: f64,
        address: Address,
        property_id: &str,
        residence: Residence,
    ) -> Result<Self, ValidationError> {
        Self::typed(price_usd, address, property_id, residence.into())
    }

    pub fn commercial(
        price_usd: f64,
        address: Address,
        property_id: &str,
        commercial: Commercial,
    ) -> Result<Self, ValidationError> {
        Self::typed(price_usd, address, property_id, commercial.into())
    }

    pub fn retail(
        price_usd: f64,
        address: Address,
        property_id: &str,
        retail: Retail,
    ) -> Result<Self, ValidationError> {
        Self::typed(price_usd, address, property_id, retail.into())
    }

    fn typed(
        price_usd: f64,
        address: Address,
        property_id: &str,
        kind: PropertyKind,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            price_usd: check_price("price", price_usd, MIN_PRICE_USD)?,
            property_id: PropertyId::new(property_id)?,
            address,
            type_tag: kind.property_type().label().to_string(),
            kind,
        })
    }

    pub fn price_usd(&self) -> f64 {
        self.price_usd
    }

    /// Reprices the property. The previous price is kept when the new one is rejected.
    pub fn set_price_usd(&mut self, price_usd: f64) -> Result<(), ValidationError> {
        self.price_usd = check_price("price", price_usd, MIN_PRICE_USD)?;
        Ok(())
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn property_type(&self) -> PropertyType {
        self.kind.property_type()
    }

    /// The type tag in its listed spelling, e.g. `Residence`.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    pub fn as_residence(&self) -> Option<&Residence> {
        match &self.kind {
            PropertyKind::Residence(residence) => Some(residence),
            _ => None,
        }
    }

    pub fn as_commercial(&self) -> Option<&Commercial> {
        match &self.kind {
            PropertyKind::Commercial(commercial) => Some(commercial),
            _ => None,
        }
    }

    pub fn as_retail(&self) -> Option<&Retail> {
        match &self.kind {
            PropertyKind::Retail(retail) => Some(retail),
            _ => None,
        }
    }
}

/// Whole amounts keep a trailing `.0`. Large prices stay in plain decimal notation
/// (`10000000.0`), never exponent form.
fn format_price(price_usd: f64) -> String {
    if price_usd.fract() == 0.0 && price_usd < 1e15 {
        format!("{price_usd:.1}")
    } else {
        price_usd.to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nPROPERTY\npriceUsd: {}\naddress: {}\ntype: '{}'\npropertyId: '{}'\n",
            format_price(self.price_usd),
            self.address,
            self.type_tag,
            self.property_id
        )?;

        match &self.kind {
            PropertyKind::Residence(residence) => write!(
                f,
                "Number of bedrooms: {}\nSwimming pool: {}\nStrata: {}",
                residence.number_of_bedrooms,
                yes_no(residence.swimming_pool),
                yes_no(residence.strata)
            ),
            PropertyKind::Commercial(commercial) => write!(
                f,
                "Loading Dock: {}\nHighway Access: {}",
                commercial.loading_dock, commercial.highway_access
            ),
            PropertyKind::Retail(retail) => write!(
                f,
                "Square Footage: {}\nCustomer Parking: {}",
                retail.square_footage, retail.customer_parking
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("101", 1234, "Main St", "V5K0A1", "Vancouver").expect("valid address")
    }

    fn residence(bedrooms: i64) -> Residence {
        Residence::new(bedrooms, true, false).expect("valid residence")
    }

    #[test]
    fn property_type_parses_case_insensitively() {
        assert_eq!("RESIDENCE".parse::<PropertyType>(), Ok(PropertyType::Residence));
        assert_eq!("Commercial".parse::<PropertyType>(), Ok(PropertyType::Commercial));
        assert_eq!("retail".parse::<PropertyType>(), Ok(PropertyType::Retail));
        assert!("warehouse".parse::<PropertyType>().is_err());
        assert!("".parse::<PropertyType>().is_err());
    }

    #[test]
    fn new_round_trips_every_field() {
        let property = Property::new(850_000.0, address(), "Residence", "R001", residence(3))
            .expect("valid property");

        assert_eq!(property.price_usd(), 850_000.0);
        assert_eq!(property.address(), &address());
        assert_eq!(property.property_type(), PropertyType::Residence);
        assert_eq!(property.property_id().as_str(), "R001");
        let details = property.as_residence().expect("residence variant");
        assert_eq!(details.number_of_bedrooms(), 3);
        assert!(details.has_swimming_pool());
        assert!(!details.has_strata());
        assert!(property.as_commercial().is_none());
        assert!(property.as_retail().is_none());
    }

    #[test]
    fn new_rejects_out_of_bound_input() {
        let negative = Property::new(-1.0, address(), "residence", "R001", residence(3));
        assert_eq!(negative.expect_err("negative price").field(), "price");

        let unknown = Property::new(1.0, address(), "warehouse", "R001", residence(3));
        assert_eq!(unknown.expect_err("unknown type").field(), "property type");

        let empty_id = Property::new(1.0, address(), "residence", "", residence(3));
        assert_eq!(empty_id.expect_err("empty id").field(), "property id");

        let long_id = Property::new(1.0, address(), "residence", "R00001X", residence(3));
        assert_eq!(long_id.expect_err("seven char id").field(), "property id");
    }

    #[test]
    fn new_rejects_tag_that_disagrees_with_variant() {
        let err = Property::new(1.0, address(), "commercial", "C001", residence(2))
            .expect_err("tag mismatch");
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                tag: "commercial".to_string(),
                expected: PropertyType::Residence,
            }
        );
    }

    #[test]
    fn bedroom_bounds_are_inclusive() {
        assert!(Residence::new(1, false, false).is_ok());
        assert!(Residence::new(20, false, false).is_ok());
        assert!(Residence::new(0, false, false).is_err());
        assert!(Residence::new(21, false, false).is_err());
    }

    #[test]
    fn square_footage_must_not_be_negative() {
        assert_eq!(Retail::new(0, false).expect("zero allowed").square_footage(), 0);
        assert_eq!(
            Retail::new(-1, true).expect_err("negative").field(),
            "square footage"
        );
    }

    #[test]
    fn set_price_keeps_previous_value_on_rejection() {
        let mut property =
            Property::commercial(100.0, address(), "C001", Commercial::new(true, false))
                .expect("valid property");

        property.set_price_usd(250.5).expect("price accepted");
        assert_eq!(property.price_usd(), 250.5);

        assert!(property.set_price_usd(-10.0).is_err());
        assert!(property.set_price_usd(f64::NAN).is_err());
        assert_eq!(property.price_usd(), 250.5);
    }

    #[test]
    fn renders_residence_listing() {
        let property = Property::residence(
            850_000.0,
            address(),
            "R001",
            Residence::new(3, true, false).expect("valid residence"),
        )
        .expect("valid property");

        assert_eq!(
            property.to_string(),
            "\nPROPERTY\n\
             priceUsd: 850000.0\n\
             address: Address [unitNumber: 101, streetNumber: 1234, streetName: Main St, postalCode: V5K0A1, city: Vancouver]\n\
             type: 'residence'\n\
             propertyId: 'R001'\n\
             Number of bedrooms: 3\n\
             Swimming pool: Yes\n\
             Strata: No"
        );
    }

    #[test]
    fn listing_keeps_type_tag_spelling() {
        let property = Property::new(1.0, address(), "Residence", "R2", residence(2))
            .expect("valid property");

        assert_eq!(property.type_tag(), "Residence");
        assert_eq!(property.property_type(), PropertyType::Residence);
        assert!(property
            .to_string()
            .contains("type: 'Residence'\npropertyId: 'R2'\n"));

        let built =
            Property::residence(1.0, address(), "R3", residence(2)).expect("valid property");
        assert_eq!(built.type_tag(), "residence");
    }

    #[test]
    fn large_prices_render_without_exponent() {
        let property = Property::commercial(
            10_000_000.0,
            address(),
            "C010",
            Commercial::new(false, false),
        )
        .expect("valid property");
        assert!(property.to_string().contains("priceUsd: 10000000.0\n"));
    }

    #[test]
    fn renders_commercial_and_retail_amenities() {
        let commercial =
            Property::commercial(975_000.75, address(), "C003", Commercial::new(true, false))
                .expect("valid commercial");
        let rendered = commercial.to_string();
        assert!(rendered.contains("priceUsd: 975000.75\n"));
        assert!(rendered.ends_with("Loading Dock: true\nHighway Access: false"));

        let retail = Property::retail(
            560_000.0,
            address(),
            "T001",
            Retail::new(1500, true).expect("valid retail"),
        )
        .expect("valid retail property");
        assert!(retail
            .to_string()
            .ends_with("type: 'retail'\npropertyId: 'T001'\nSquare Footage: 1500\nCustomer Parking: true"));
    }

    #[test]
    fn serializes_with_type_tag() {
        let property = Property::retail(
            410_000.0,
            address(),
            "T003",
            Retail::new(1500, true).expect("valid retail"),
        )
        .expect("valid property");

        let value = serde_json::to_value(&property).expect("serializes");
        assert_eq!(value["type"], "retail");
        assert_eq!(value["property_id"], "T003");
        assert_eq!(value["square_footage"], 1500);
        assert_eq!(value["customer_parking"], true);
        assert_eq!(value["address"]["street_name"], "Main St");
    }
}
