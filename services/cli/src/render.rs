use agency_portfolio::error::AppError;
use agency_portfolio::portfolio::{Address, Property};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Write;

const NO_MATCHES: &str = "No matching properties.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Writes query results either as the listing text blocks or as pretty JSON.
pub(crate) struct Renderer<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Renderer<W> {
    pub(crate) fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    pub(crate) fn line(&mut self, text: impl Display) -> Result<(), AppError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub(crate) fn property(&mut self, property: Option<&Property>) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => self.json(&property),
            OutputFormat::Text => match property {
                Some(property) => self.line(property),
                None => self.line("No property with that id."),
            },
        }
    }

    pub(crate) fn listings(&mut self, properties: &[&Property]) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => self.json(properties),
            OutputFormat::Text => self.each(properties),
        }
    }

    pub(crate) fn keyed_listings(
        &mut self,
        properties: &BTreeMap<&str, &Property>,
    ) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => self.json(properties),
            OutputFormat::Text => {
                let values: Vec<_> = properties.values().copied().collect();
                self.each(&values)
            }
        }
    }

    pub(crate) fn addresses(&mut self, addresses: &[&Address]) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => self.json(addresses),
            OutputFormat::Text => self.each(addresses),
        }
    }

    pub(crate) fn total(&mut self, total_usd: u64) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "total_usd": total_usd })),
            OutputFormat::Text => self.line(format_args!("Total property value (USD): {total_usd}")),
        }
    }

    fn each<T: Display>(&mut self, items: &[T]) -> Result<(), AppError> {
        if items.is_empty() {
            return self.line(NO_MATCHES);
        }
        for item in items {
            self.line(item)?;
        }
        Ok(())
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}
