//! Property listings of an agency and the queries run over them.

mod address;
mod agency;
mod property;
mod validation;

#[cfg(test)]
mod tests;

pub use address::Address;
pub use agency::{title_case, Agency};
pub use property::{
    Commercial, Property, PropertyId, PropertyKind, PropertyType, Residence, Retail,
};
pub use validation::ValidationError;
