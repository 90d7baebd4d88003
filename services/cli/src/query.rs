use crate::render::Renderer;
use agency_portfolio::error::AppError;
use agency_portfolio::portfolio::Agency;
use std::io::Write;
use tracing::debug;

/// A single question asked of the agency, whether it came from a subcommand or the menu.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Query {
    Show { property_id: String },
    Street { street_name: String },
    Price { min_usd: f64, max_usd: f64 },
    Type { property_type: String },
    Pools,
    Bedrooms { min: u32, max: u32 },
    Strata,
    LoadingDocks,
    HighwayAccess,
    SquareFootage { square_footage: u32 },
    CustomerParking,
    Total,
}

pub(crate) fn execute<W: Write>(
    agency: &Agency,
    query: &Query,
    renderer: &mut Renderer<W>,
) -> Result<(), AppError> {
    debug!(?query, "running query");

    match query {
        Query::Show { property_id } => renderer.property(agency.get_property(property_id)),
        Query::Street { street_name } => renderer.addresses(&agency.properties_on(street_name)),
        Query::Price { min_usd, max_usd } => {
            renderer.listings(&agency.properties_between(*min_usd, *max_usd))
        }
        Query::Type { property_type } => {
            renderer.listings(&agency.properties_of_type(property_type))
        }
        Query::Pools => renderer.listings(&agency.properties_with_pools()),
        Query::Bedrooms { min, max } => {
            renderer.keyed_listings(&agency.properties_with_bedrooms(*min, *max))
        }
        Query::Strata => renderer.listings(&agency.properties_with_strata()),
        Query::LoadingDocks => renderer.listings(&agency.properties_with_loading_docks()),
        Query::HighwayAccess => renderer.listings(&agency.properties_with_highway_access()),
        Query::SquareFootage { square_footage } => {
            renderer.listings(&agency.properties_square_footage(*square_footage))
        }
        Query::CustomerParking => renderer.listings(&agency.properties_with_customer_parking()),
        Query::Total => renderer.total(agency.total_property_values()),
    }
}
