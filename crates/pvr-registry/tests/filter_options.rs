mod common;

use pvr_registry::{Catalog, FilterOptions};

#[test]
fn members_merge_prompts_then_schemas() {
    let options = common::catalog().filter_options();
    assert_eq!(
        options.members,
        ["john.doe", "jane.smith", "mike.johnson", "alex.brown"]
    );
    assert_eq!(
        options.agents,
        ["customer-support", "data-analyst", "qa-assistant"]
    );
    assert_eq!(options.types, ["qa", "summary"]);
    assert_eq!(options.names, ["customer-data", "product-info"]);
}

#[test]
fn empty_catalog_offers_no_choices() {
    assert_eq!(Catalog::default().filter_options(), FilterOptions::default());
}
