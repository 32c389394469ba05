mod common;

use pvr_core::{Status, Version, Versioned};
use pvr_query::{filter_latest_versions, find_latest_version, latest_per_group};

#[derive(Debug, PartialEq)]
struct Item {
    key: &'static str,
    version: Version,
    id: u32,
}

impl Versioned for Item {
    fn version(&self) -> &Version {
        &self.version
    }
}

fn item(key: &'static str, version: &str, id: u32) -> Item {
    Item {
        key,
        version: Version::parse(version).unwrap(),
        id,
    }
}

#[test]
fn keeps_highest_version_per_group() {
    let items = vec![item("a", "1.0.0", 1), item("a", "1.2.0", 2), item("b", "0.9.0", 3)];
    let latest = filter_latest_versions(&items, |item| item.key);
    let ids: Vec<u32> = latest.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn first_seen_wins_on_exact_tie() {
    let items = vec![item("a", "1.0.0", 1), item("a", "1.0.0", 2)];
    let latest = filter_latest_versions(&items, |item| item.key);
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].id, 1);
}

#[test]
fn groups_follow_first_encounter_order() {
    let items = vec![
        item("b", "0.1.0", 1),
        item("a", "0.1.0", 2),
        item("b", "3.0.0", 3),
        item("c", "1.0.0", 4),
        item("a", "0.2.0", 5),
    ];
    let keys: Vec<&str> = filter_latest_versions(&items, |item| item.key)
        .iter()
        .map(|item| item.key)
        .collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn output_borrows_input_items() {
    let items = vec![item("a", "1.0.0", 1), item("a", "2.0.0", 2)];
    let latest = filter_latest_versions(&items, |item| item.key);
    assert!(std::ptr::eq(latest[0], &items[1]));
}

#[test]
fn reduction_is_idempotent() {
    let prompts = common::prompt_fixture();
    let once = latest_per_group(&prompts);
    let twice = latest_per_group(once.iter().copied());
    assert_eq!(once, twice);
}

#[test]
fn prompt_groups_use_numeric_versions() {
    let prompts = common::prompt_fixture();
    let latest = latest_per_group(&prompts);
    let qa = latest
        .iter()
        .find(|prompt| prompt.prompt_type == "qa")
        .expect("qa group");
    assert_eq!(qa.version, Version::new(1, 10, 0));
    let summary = latest
        .iter()
        .find(|prompt| prompt.prompt_type == "summary")
        .expect("summary group");
    // Identical versions: the earlier record is retained.
    assert_eq!(summary.status, Status::Unstable);
}

#[test]
fn find_latest_defaults_to_initial_version() {
    let prompts = common::prompt_fixture();
    assert_eq!(
        find_latest_version(&prompts, |prompt| prompt.agent == "customer-support"),
        Version::new(1, 10, 0)
    );
    assert_eq!(
        find_latest_version(&prompts, |prompt| prompt.agent == "nobody"),
        Version::INITIAL
    );
}
