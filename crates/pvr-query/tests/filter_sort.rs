mod common;

use pvr_core::{Field, Status};
use pvr_query::{evaluate, unique_values, FilterSpec, SortDirection, SortSpec, VersionSort};

use common::{prompt, prompt_fixture, schema};

#[test]
fn status_and_search_compose_with_and() {
    let prompts = vec![
        prompt("qa", "customer-support", "1.0.0", Status::Stable, "john.doe"),
        prompt("qa", "customer-support", "1.1.0", Status::Unstable, "john.doe"),
        prompt("summary", "QA-assistant", "0.1.0", Status::Stable, "jane.smith"),
        prompt("summary", "data-analyst", "0.2.0", Status::Stable, "jane.smith"),
    ];
    let filters = FilterSpec::default()
        .with_status([Status::Stable])
        .with_search("qa");
    let outcome = evaluate(&prompts, &filters, None);
    let versions: Vec<String> = outcome.iter().map(|p| p.version.to_string()).collect();
    assert_eq!(versions, vec!["1.0.0", "0.1.0"]);
    assert!(outcome.constrained);
}

#[test]
fn search_matches_template_text() {
    let mut prompts = prompt_fixture();
    prompts[1].template = "Condense the QUARTERLY report".into();
    let outcome = evaluate(&prompts, &FilterSpec::default().with_search("quarterly"), None);
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.items[0].agent, "data-analyst");
}

#[test]
fn schema_search_covers_definition() {
    let schemas = vec![
        schema("customer-data", "1.0.0", Status::Stable, "john.doe"),
        schema("product-info", "1.0.0", Status::Draft, "jane.smith"),
    ];
    let by_definition = evaluate(&schemas, &FilterSpec::default().with_search("EMAIL"), None);
    assert_eq!(by_definition.len(), 2);
    let by_name = evaluate(&schemas, &FilterSpec::default().with_search("product"), None);
    assert_eq!(by_name.len(), 1);
}

#[test]
fn agent_and_type_filters_ignore_schemas() {
    let schemas = vec![schema("customer-data", "1.0.0", Status::Stable, "john.doe")];
    let filters = FilterSpec::default()
        .with_agents(["data-analyst"])
        .with_types(["qa"]);
    assert_eq!(evaluate(&schemas, &filters, None).len(), 1);

    let prompts = prompt_fixture();
    let outcome = evaluate(&prompts, &filters, None);
    assert!(outcome.is_empty());
    assert!(outcome.matched_nothing());
}

#[test]
fn member_and_type_membership() {
    let prompts = prompt_fixture();
    let filters = FilterSpec::default()
        .with_members(["jane.smith", "john.doe"])
        .with_types(["qa", "generation"]);
    let outcome = evaluate(&prompts, &filters, None);
    assert_eq!(outcome.len(), 3);
}

#[test]
fn empty_result_differs_from_unfiltered() {
    let empty: Vec<pvr_core::Prompt> = Vec::new();
    let unfiltered = evaluate(&empty, &FilterSpec::default(), None);
    assert!(unfiltered.is_empty());
    assert!(!unfiltered.matched_nothing());

    let prompts = prompt_fixture();
    let none = evaluate(&prompts, &FilterSpec::default().with_search("zzz"), None);
    assert!(none.matched_nothing());
    assert_eq!(none.scanned, prompts.len());
}

#[test]
fn latest_only_runs_after_predicates() {
    let prompts = prompt_fixture();
    // The 1.10.0 qa prompt is a draft; excluding drafts leaves 1.2.0 as latest.
    let filters = FilterSpec::default()
        .with_status([Status::Stable, Status::Unstable])
        .with_types(["qa"])
        .latest_only(true);
    let outcome = evaluate(&prompts, &filters, None);
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.items[0].version.to_string(), "1.2.0");
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let prompts = prompt_fixture();
    let asc = evaluate(&prompts, &FilterSpec::default(), Some(&SortSpec::ascending(Field::Member)));
    let members: Vec<&str> = asc.iter().map(|p| p.member.as_str()).collect();
    assert_eq!(
        members,
        vec!["alex.brown", "jane.smith", "jane.smith", "john.doe", "john.doe", "mike.johnson", "sarah.williams"]
    );
    // jane.smith rows keep input order (summary before qa), as do john.doe rows.
    assert_eq!(asc.items[1].prompt_type, "summary");
    assert_eq!(asc.items[2].prompt_type, "qa");
    assert_eq!(asc.items[3].prompt_type, "qa");
    assert_eq!(asc.items[4].prompt_type, "generation");

    let desc = evaluate(&prompts, &FilterSpec::default(), Some(&SortSpec::descending(Field::Member)));
    assert_eq!(desc.items[0].member, "sarah.williams");
    // Descending order still keeps equal members in input order.
    assert_eq!(desc.items[2].prompt_type, "qa");
    assert_eq!(desc.items[3].prompt_type, "generation");
    assert_eq!(desc.items[4].prompt_type, "summary");
    assert_eq!(desc.items[5].prompt_type, "qa");
}

#[test]
fn version_sort_is_lexical_unless_semantic_requested() {
    let prompts = prompt_fixture();
    let lexical = evaluate(&prompts, &FilterSpec::default().with_types(["qa"]), Some(&SortSpec::ascending(Field::Version)));
    let lexical: Vec<String> = lexical.iter().map(|p| p.version.to_string()).collect();
    assert_eq!(lexical, vec!["1.0.0", "1.10.0", "1.2.0"]);

    let spec = SortSpec::ascending(Field::Version).with_version_sort(VersionSort::Semantic);
    let semantic = evaluate(&prompts, &FilterSpec::default().with_types(["qa"]), Some(&spec));
    let semantic: Vec<String> = semantic.iter().map(|p| p.version.to_string()).collect();
    assert_eq!(semantic, vec!["1.0.0", "1.2.0", "1.10.0"]);
}

#[test]
fn status_sorts_by_label_text() {
    let prompts = prompt_fixture();
    let spec = SortSpec::parse_for::<pvr_core::Prompt>("status", SortDirection::Asc).unwrap();
    let sorted = evaluate(&prompts, &FilterSpec::default(), Some(&spec));
    assert_eq!(sorted.items.first().map(|p| p.status), Some(Status::Deprecated));
    assert_eq!(sorted.items.last().map(|p| p.status), Some(Status::Unstable));
}

#[test]
fn absent_owner_sorts_first() {
    let mut prompts = prompt_fixture();
    prompts[0].owner = Some("zed".into());
    prompts[3].owner = Some("amy".into());
    let sorted = evaluate(&prompts, &FilterSpec::default(), Some(&SortSpec::ascending(Field::Owner)));
    assert_eq!(sorted.items[5].owner.as_deref(), Some("amy"));
    assert_eq!(sorted.items[6].owner.as_deref(), Some("zed"));
}

#[test]
fn input_is_not_mutated() {
    let prompts = prompt_fixture();
    let before = prompts.clone();
    let _ = evaluate(
        &prompts,
        &FilterSpec::default().latest_only(true),
        Some(&SortSpec::descending(Field::Agent)),
    );
    assert_eq!(prompts, before);
}

#[test]
fn unique_values_keep_first_seen_order() {
    let prompts = prompt_fixture();
    assert_eq!(
        unique_values(&prompts, Field::Agent),
        vec!["customer-support", "data-analyst", "qa-assistant", "content-moderator"]
    );
    assert!(unique_values(&prompts, Field::Owner).is_empty());
    assert!(unique_values(&prompts, Field::Name).is_empty());
}
