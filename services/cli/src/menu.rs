use crate::query::{self, Query};
use crate::render::Renderer;
use agency_portfolio::error::AppError;
use agency_portfolio::portfolio::{title_case, Agency, PropertyType};
use std::io::{BufRead, Write};
use std::str::FromStr;

const GENERAL_OPTIONS: [&str; 5] = [
    "By Property ID",
    "By Street",
    "By Price",
    "By Type",
    "Back",
];
const RESIDENCE_OPTIONS: [&str; 4] = ["By Pool", "By Bedroom", "By Strata", "Back"];
const COMMERCIAL_OPTIONS: [&str; 3] = ["By Loading Dock", "By Highway Access", "Back"];
const RETAIL_OPTIONS: [&str; 3] = ["By Square Footage", "By Customer Parking", "Back"];

/// Whether the input source is still open after a submenu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Open,
    Closed,
}

/// Reasons a submenu choice did not produce a query.
enum Interrupt {
    Reprompt,
    Closed,
    Failed(AppError),
}

impl From<AppError> for Interrupt {
    fn from(value: AppError) -> Self {
        Self::Failed(value)
    }
}

type SubmenuStep<'a, R, W> = fn(&mut Menu<'a, R, W>, u32) -> Result<Option<Query>, Interrupt>;

/// Line-oriented interactive search over an agency. Every prompt reads one line; end of
/// input ends the session.
pub(crate) struct Menu<'a, R, W> {
    agency: &'a Agency,
    input: R,
    renderer: Renderer<W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub(crate) fn new(agency: &'a Agency, input: R, renderer: Renderer<W>) -> Self {
        Self {
            agency,
            input,
            renderer,
        }
    }

    pub(crate) fn run(mut self) -> Result<Renderer<W>, AppError> {
        let variant_headings = PropertyType::ordered().map(queries_heading);

        loop {
            self.renderer.line(" ")?;
            self.renderer.line("Welcome to our Property search.")?;
            self.options(&[
                "General Queries",
                variant_headings[0].as_str(),
                variant_headings[1].as_str(),
                variant_headings[2].as_str(),
                "Exit",
            ])?;

            let choice = match self.read_choice() {
                Ok(choice) => choice,
                Err(Interrupt::Reprompt) => 0,
                Err(Interrupt::Closed) => break,
                Err(Interrupt::Failed(err)) => return Err(err),
            };

            let session = match choice {
                1 => self.submenu("General Queries", &GENERAL_OPTIONS, Self::general_query)?,
                2 => self.submenu(
                    &variant_headings[0],
                    &RESIDENCE_OPTIONS,
                    Self::residence_query,
                )?,
                3 => self.submenu(
                    &variant_headings[1],
                    &COMMERCIAL_OPTIONS,
                    Self::commercial_query,
                )?,
                4 => self.submenu(&variant_headings[2], &RETAIL_OPTIONS, Self::retail_query)?,
                5 => {
                    self.renderer.line("Goodbye for now!")?;
                    break;
                }
                _ => {
                    self.renderer.line("Invalid choice. Please try again.")?;
                    Session::Open
                }
            };

            if session == Session::Closed {
                break;
            }
        }

        Ok(self.renderer)
    }

    fn submenu(
        &mut self,
        heading: &str,
        options: &[&str],
        step: SubmenuStep<'a, R, W>,
    ) -> Result<Session, AppError> {
        loop {
            self.renderer.line(" ")?;
            self.renderer.line(heading)?;
            self.options(options)?;

            let outcome = self.read_choice().and_then(|choice| step(self, choice));
            match outcome {
                Ok(Some(query)) => query::execute(self.agency, &query, &mut self.renderer)?,
                Ok(None) => return Ok(Session::Open),
                Err(Interrupt::Reprompt) => {}
                Err(Interrupt::Closed) => return Ok(Session::Closed),
                Err(Interrupt::Failed(err)) => return Err(err),
            }
        }
    }

    fn general_query(&mut self, choice: u32) -> Result<Option<Query>, Interrupt> {
        let query = match choice {
            1 => Query::Show {
                property_id: self.ask("Enter the property ID:")?,
            },
            2 => Query::Street {
                street_name: self.ask("Enter the street:")?,
            },
            3 => Query::Price {
                min_usd: self.ask_number("Enter the min price:")?,
                max_usd: self.ask_number("Enter the max price:")?,
            },
            4 => Query::Type {
                property_type: self.ask("Enter the type:")?,
            },
            5 => return Ok(None),
            _ => return Err(Interrupt::Reprompt),
        };
        Ok(Some(query))
    }

    fn residence_query(&mut self, choice: u32) -> Result<Option<Query>, Interrupt> {
        let query = match choice {
            1 => Query::Pools,
            2 => Query::Bedrooms {
                min: self.ask_number("Enter the minimum number of bedrooms:")?,
                max: self.ask_number("Enter the maximum number of bedrooms:")?,
            },
            3 => Query::Strata,
            4 => return Ok(None),
            _ => return Err(Interrupt::Reprompt),
        };
        Ok(Some(query))
    }

    fn commercial_query(&mut self, choice: u32) -> Result<Option<Query>, Interrupt> {
        match choice {
            1 => Ok(Some(Query::LoadingDocks)),
            2 => Ok(Some(Query::HighwayAccess)),
            3 => Ok(None),
            _ => Err(Interrupt::Reprompt),
        }
    }

    fn retail_query(&mut self, choice: u32) -> Result<Option<Query>, Interrupt> {
        let query = match choice {
            1 => Query::SquareFootage {
                square_footage: self.ask_number("Enter the square footage:")?,
            },
            2 => Query::CustomerParking,
            3 => return Ok(None),
            _ => return Err(Interrupt::Reprompt),
        };
        Ok(Some(query))
    }

    fn options(&mut self, options: &[&str]) -> Result<(), AppError> {
        for (index, option) in options.iter().enumerate() {
            self.renderer.line(format_args!("{}. {}", index + 1, option))?;
        }
        Ok(())
    }

    fn read_choice(&mut self) -> Result<u32, Interrupt> {
        let line = self.read_line()?;
        line.parse().map_err(|_| Interrupt::Reprompt)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, Interrupt> {
        self.renderer.line(prompt)?;
        self.read_line()
    }

    fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, Interrupt> {
        let answer = self.ask(prompt)?;
        match answer.parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                self.renderer
                    .line(format_args!("'{answer}' is not a valid number."))?;
                Err(Interrupt::Reprompt)
            }
        }
    }

    fn read_line(&mut self) -> Result<String, Interrupt> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|err| Interrupt::Failed(err.into()))?;
        if read == 0 {
            return Err(Interrupt::Closed);
        }
        Ok(line.trim().to_string())
    }
}

fn queries_heading(property_type: PropertyType) -> String {
    format!("{} Queries", title_case(property_type.label()))
}
