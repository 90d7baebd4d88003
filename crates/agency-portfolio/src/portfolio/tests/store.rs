use super::common::*;
use crate::portfolio::Agency;

#[test]
fn agency_name_must_be_one_to_thirty_characters() {
    assert!(Agency::new("V").is_ok());
    assert!(Agency::new("A".repeat(30)).is_ok());

    let err = Agency::new("").expect_err("empty name rejected");
    assert_eq!(err.field(), "agency name");
    assert!(Agency::new("A".repeat(31)).is_err());
}

#[test]
fn new_agency_is_empty() {
    let agency = Agency::new("VancoVista").expect("valid agency");
    assert_eq!(agency.name(), "VancoVista");
    assert!(agency.is_empty());
    assert_eq!(agency.total_property_values(), 0);
    assert!(agency.get_property("R1").is_none());
}

#[test]
fn add_property_overwrites_same_id() {
    let mut agency = Agency::new("VancoVista").expect("valid agency");
    assert!(agency.add_property(residence("P1", 100.0, 2, false, false)).is_none());

    let replaced = agency
        .add_property(commercial("P1", 200.0, true, false))
        .expect("previous listing returned");
    assert_eq!(replaced.price_usd(), 100.0);

    assert_eq!(agency.len(), 1);
    let stored = agency.get_property("P1").expect("listing present");
    assert_eq!(stored.price_usd(), 200.0);
    assert!(stored.as_commercial().is_some());
}

#[test]
fn remove_missing_id_is_a_no_op() {
    let mut agency = mixed_agency();
    let before: Vec<_> = agency.properties().cloned().collect();

    assert!(agency.remove_property("NOPE").is_none());

    let after: Vec<_> = agency.properties().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn remove_existing_id_drops_listing() {
    let mut agency = mixed_agency();
    let removed = agency.remove_property("C2").expect("listing removed");
    assert_eq!(removed.property_id().as_str(), "C2");
    assert_eq!(agency.len(), 8);
    assert!(agency.get_property("C2").is_none());
}

#[test]
fn get_property_is_case_sensitive() {
    let agency = mixed_agency();
    assert!(agency.get_property("R1").is_some());
    assert!(agency.get_property("r1").is_none());
}

#[test]
fn total_drops_cents_of_each_price() {
    let mut agency = Agency::new("VancoVista").expect("valid agency");
    agency.add_property(residence("A", 100.40, 1, false, false));
    agency.add_property(retail("B", 200.60, 10, false));

    assert_eq!(agency.total_property_values(), 300);
}

#[test]
fn total_saturates_instead_of_overflowing() {
    let mut agency = Agency::new("VancoVista").expect("valid agency");
    agency.add_property(retail("A", 1e19, 10, false));
    agency.add_property(retail("B", 1e19, 10, false));

    assert_eq!(agency.total_property_values(), u64::MAX);
}

#[test]
fn total_covers_every_listing() {
    let agency = mixed_agency();
    assert_eq!(agency.total_property_values(), 9_605_000);
}

#[test]
fn repricing_through_agency_updates_queries() {
    let mut agency = mixed_agency();
    agency
        .get_property_mut("T3")
        .expect("listing present")
        .set_price_usd(5_000_000.0)
        .expect("valid price");

    let expensive = agency.properties_between(4_000_000.0, 6_000_000.0);
    assert_eq!(ids(&expensive), vec!["T3"]);

    let rejected = agency
        .get_property_mut("T3")
        .expect("listing present")
        .set_price_usd(-1.0);
    assert!(rejected.is_err());
    assert_eq!(
        agency.get_property("T3").expect("listing present").price_usd(),
        5_000_000.0
    );
}
