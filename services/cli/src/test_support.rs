use agency_portfolio::ingest::PortfolioImporter;
use agency_portfolio::portfolio::Agency;

const ADDRESSES: &str = include_str!("../../../crates/agency-portfolio/data/address_data.txt");
const PROPERTIES: &str = include_str!("../../../crates/agency-portfolio/data/property_data.txt");

pub(crate) fn sample_agency() -> Agency {
    let listings = PortfolioImporter::from_readers(ADDRESSES.as_bytes(), PROPERTIES.as_bytes())
        .expect("sample data loads");
    let mut agency = Agency::new("VancoVista").expect("valid agency name");
    agency.extend(listings);
    agency
}
