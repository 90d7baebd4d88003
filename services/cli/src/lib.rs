mod cli;
mod menu;
mod query;
mod render;

#[cfg(test)]
mod test_support;

use agency_portfolio::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
