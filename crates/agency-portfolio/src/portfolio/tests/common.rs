use crate::portfolio::{Address, Agency, Commercial, Property, Residence, Retail};

pub(super) fn address_on(street_name: &str) -> Address {
    Address::new("7", 1200, street_name, "V5K0A1", "Vancouver").expect("valid address")
}

pub(super) fn residence(
    property_id: &str,
    price_usd: f64,
    bedrooms: i64,
    swimming_pool: bool,
    strata: bool,
) -> Property {
    Property::residence(
        price_usd,
        address_on("Main St"),
        property_id,
        Residence::new(bedrooms, swimming_pool, strata).expect("valid residence"),
    )
    .expect("valid residence listing")
}

pub(super) fn commercial(
    property_id: &str,
    price_usd: f64,
    loading_dock: bool,
    highway_access: bool,
) -> Property {
    Property::commercial(
        price_usd,
        address_on("Kingsway"),
        property_id,
        Commercial::new(loading_dock, highway_access),
    )
    .expect("valid commercial listing")
}

pub(super) fn retail(
    property_id: &str,
    price_usd: f64,
    square_footage: i64,
    customer_parking: bool,
) -> Property {
    Property::retail(
        price_usd,
        address_on("Robson St"),
        property_id,
        Retail::new(square_footage, customer_parking).expect("valid retail"),
    )
    .expect("valid retail listing")
}

/// Three listings of every kind with amenities spread across them.
pub(super) fn mixed_agency() -> Agency {
    let mut agency = Agency::new("VancoVista").expect("valid agency name");
    agency.extend([
        residence("R1", 850_000.0, 3, true, false),
        residence("R2", 1_200_000.5, 5, true, true),
        residence("R3", 640_000.0, 2, false, true),
        commercial("C1", 2_450_000.0, true, true),
        commercial("C2", 1_800_000.0, false, true),
        commercial("C3", 975_000.75, true, false),
        retail("T1", 560_000.0, 1500, true),
        retail("T2", 720_000.0, 2400, false),
        retail("T3", 410_000.0, 1500, true),
    ]);
    agency
}

pub(super) fn ids(properties: &[&Property]) -> Vec<String> {
    properties
        .iter()
        .map(|property| property.property_id().to_string())
        .collect()
}
