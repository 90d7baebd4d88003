use crate::menu::Menu;
use crate::query::{self, Query};
use crate::render::{OutputFormat, Renderer};
use agency_portfolio::config::{AgencyConfig, AppConfig};
use agency_portfolio::error::AppError;
use agency_portfolio::ingest::PortfolioImporter;
use agency_portfolio::portfolio::Agency;
use agency_portfolio::telemetry;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "agency-portfolio",
    about = "Search an agency's property listings from the command line",
    version
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    /// Print results as JSON instead of listing text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Override the configured address file
    #[arg(long, global = true)]
    addresses: Option<PathBuf>,
    /// Override the configured property file
    #[arg(long, global = true)]
    properties: Option<PathBuf>,
    /// Override the configured agency name
    #[arg(long, global = true)]
    name: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse listings through the interactive menu (default command)
    Menu,
    /// Show one listing by property id
    Show { property_id: String },
    /// List the addresses of listings on a street (exact, case-sensitive)
    Street { street_name: String },
    /// List listings priced within an inclusive USD range
    Price { min_usd: f64, max_usd: f64 },
    /// List listings of one type: residence, commercial, or retail
    Type { property_type: String },
    /// List residences with a swimming pool
    Pools,
    /// List residences with a bedroom count in an inclusive range
    Bedrooms { min: u32, max: u32 },
    /// List strata residences
    Strata,
    /// List commercial listings with a loading dock
    LoadingDocks,
    /// List commercial listings with highway access
    HighwayAccess,
    /// List retail listings of an exact square footage
    SquareFootage { square_footage: u32 },
    /// List retail listings with customer parking
    CustomerParking,
    /// Print the combined value of every listing
    Total,
}

impl Command {
    fn into_query(self) -> Option<Query> {
        let query = match self {
            Command::Menu => return None,
            Command::Show { property_id } => Query::Show { property_id },
            Command::Street { street_name } => Query::Street { street_name },
            Command::Price { min_usd, max_usd } => Query::Price { min_usd, max_usd },
            Command::Type { property_type } => Query::Type { property_type },
            Command::Pools => Query::Pools,
            Command::Bedrooms { min, max } => Query::Bedrooms { min, max },
            Command::Strata => Query::Strata,
            Command::LoadingDocks => Query::LoadingDocks,
            Command::HighwayAccess => Query::HighwayAccess,
            Command::SquareFootage { square_footage } => Query::SquareFootage { square_footage },
            Command::CustomerParking => Query::CustomerParking,
            Command::Total => Query::Total,
        };
        Some(query)
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let agency = load_agency(&config.agency, cli.source)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdout = io::stdout();

    match cli.command.unwrap_or(Command::Menu).into_query() {
        Some(query) => {
            let mut renderer = Renderer::new(stdout.lock(), format);
            query::execute(&agency, &query, &mut renderer)
        }
        None => {
            if format == OutputFormat::Json {
                warn!("--json is ignored by the interactive menu");
            }
            let renderer = Renderer::new(stdout.lock(), OutputFormat::Text);
            Menu::new(&agency, io::stdin().lock(), renderer).run()?;
            Ok(())
        }
    }
}

fn load_agency(config: &AgencyConfig, source: SourceArgs) -> Result<Agency, AppError> {
    let SourceArgs {
        addresses,
        properties,
        name,
    } = source;

    let name = name.unwrap_or_else(|| config.name.clone());
    let addresses = addresses.unwrap_or_else(|| config.address_file.clone());
    let properties = properties.unwrap_or_else(|| config.property_file.clone());

    let mut agency = Agency::new(name)?;
    let loaded = PortfolioImporter::load_into(&mut agency, &addresses, &properties)?;
    info!(
        agency = agency.name(),
        loaded,
        listed = agency.len(),
        "agency ready"
    );

    Ok(agency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments parse")
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_menu() {
        let cli = parse(&["agency-portfolio"]);
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn query_subcommands_map_to_queries() {
        let cli = parse(&["agency-portfolio", "price", "100", "200.5", "--json"]);
        assert!(cli.json);
        assert_eq!(
            cli.command.and_then(Command::into_query),
            Some(Query::Price {
                min_usd: 100.0,
                max_usd: 200.5
            })
        );

        let cli = parse(&["agency-portfolio", "square-footage", "1500"]);
        assert_eq!(
            cli.command.and_then(Command::into_query),
            Some(Query::SquareFootage {
                square_footage: 1500
            })
        );

        let cli = parse(&["agency-portfolio", "menu"]);
        assert_eq!(cli.command.and_then(Command::into_query), None);
    }

    #[test]
    fn source_overrides_are_global() {
        let cli = parse(&[
            "agency-portfolio",
            "loading-docks",
            "--addresses",
            "a.txt",
            "--properties",
            "p.txt",
            "--name",
            "Harbourfront",
        ]);
        assert_eq!(cli.source.addresses, Some(PathBuf::from("a.txt")));
        assert_eq!(cli.source.properties, Some(PathBuf::from("p.txt")));
        assert_eq!(cli.source.name.as_deref(), Some("Harbourfront"));
    }

    #[test]
    fn load_agency_prefers_cli_overrides() {
        let data = concat!(env!("CARGO_MANIFEST_DIR"), "/../../crates/agency-portfolio/data");
        let config = AgencyConfig {
            name: "VancoVista".to_string(),
            address_file: PathBuf::from("missing_addresses.txt"),
            property_file: PathBuf::from("missing_properties.txt"),
        };
        let source = SourceArgs {
            addresses: Some(PathBuf::from(data).join("address_data.txt")),
            properties: Some(PathBuf::from(data).join("property_data.txt")),
            name: Some("Harbourfront".to_string()),
        };

        let agency = load_agency(&config, source).expect("agency loads");
        assert_eq!(agency.name(), "Harbourfront");
        assert_eq!(agency.len(), 10);
    }

    #[test]
    fn load_agency_rejects_invalid_name() {
        let config = AgencyConfig {
            name: String::new(),
            address_file: PathBuf::from("address_data.txt"),
            property_file: PathBuf::from("property_data.txt"),
        };

        let err = load_agency(&config, SourceArgs::default()).expect_err("empty name");
        assert!(matches!(err, AppError::Validation(_)));
    }
}
