use rubbish::error::ErrorKind;
use rubbish::fixity::disk::DiskFixity;
use rubbish::fixity::Fixity;
use rubbish::model::Item;
use rubbish::store::whala::{Whala, DOCUMENT_KEY};
use rubbish::store::{Store, SEARCH_LIMIT};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, Whala<DiskFixity>) {
    let dir = TempDir::new().unwrap();
    let store = Whala::new(DiskFixity::new(dir.path()));
    (dir, store)
}

#[test]
fn test_sequential_adds_derive_increasing_ids() {
    let (_dir, mut store) = setup();
    assert_eq!(store.add(Item::new("n")).unwrap(), "n_1");
    assert_eq!(store.add(Item::new("n")).unwrap(), "n_2");
    assert_eq!(store.add(Item::new("n")).unwrap(), "n_3");
}

#[test]
fn test_ids_keep_counting_after_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = Whala::new(DiskFixity::new(dir.path()));
        store.add(Item::new("jar")).unwrap();
        store.add(Item::new("jar")).unwrap();
    }

    let mut reopened = Whala::new(DiskFixity::new(dir.path()));
    assert_eq!(reopened.add(Item::new("jar")).unwrap(), "jar_3");
}

#[test]
fn test_ambiguous_name_after_one_hundred() {
    let (_dir, mut store) = setup();
    for i in 0..100 {
        store
            .add(Item::new("bolt").with_id(format!("bolt-{}", i)))
            .unwrap();
    }
    let err = store.add(Item::new("bolt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousIdentifier);
}

#[test]
fn test_body_on_disk_has_no_id() {
    let (dir, mut store) = setup();
    let id = store
        .add(Item::new("lantern").with_id("camp-lantern"))
        .unwrap();

    let hashes = store
        .fixity()
        .search(&rubbish::fixity::Query::new().constrain(rubbish::fixity::Constraint::eq(
            "name", "lantern",
        )))
        .unwrap();
    assert_eq!(hashes.len(), 1);

    let version = store.fixity().read_hash(&hashes[0]).unwrap();
    assert_eq!(version.id, id);
    let body = &version.document.part(DOCUMENT_KEY).unwrap().json;
    assert!(body.get("id").is_none());

    // And the raw file agrees.
    let raw = fs::read_to_string(
        dir.path()
            .join("store")
            .join(format!("{}.json", hashes[0])),
    )
    .unwrap();
    let raw: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(raw["document"][DOCUMENT_KEY]["json"].get("id").is_none());
}

#[test]
fn test_conditional_field_declarations_on_disk() {
    let (_dir, mut store) = setup();
    let bare = store.add(Item::new("spoon")).unwrap();
    let full = store
        .add(
            Item::new("fork")
                .with_description("silver")
                .with_tags(["kitchen"]),
        )
        .unwrap();

    let found = store.search("spoon", &[]).unwrap();
    assert_eq!(found[0].id, bare);
    let hashes = store
        .fixity()
        .search(&rubbish::fixity::Query::new().constrain(rubbish::fixity::Constraint::eq(
            "name", "spoon",
        )))
        .unwrap();
    let fields = &store
        .fixity()
        .read_hash(&hashes[0])
        .unwrap()
        .document
        .part(DOCUMENT_KEY)
        .unwrap()
        .fields
        .clone();
    assert_eq!(fields.names(), vec!["name"]);

    let hashes = store
        .fixity()
        .search(&rubbish::fixity::Query::new().constrain(rubbish::fixity::Constraint::eq(
            "name", "fork",
        )))
        .unwrap();
    let version = store.fixity().read_hash(&hashes[0]).unwrap();
    assert_eq!(version.id, full);
    let fields = &version.document.part(DOCUMENT_KEY).unwrap().fields;
    assert!(fields.contains("description"));
    assert!(fields.contains("tags"));
}

#[test]
fn test_empty_queries_rejected_and_tag_only_allowed() {
    let (_dir, mut store) = setup();
    store.add(Item::new("rake").with_tags(["x"])).unwrap();
    store.add(Item::new("hoe")).unwrap();

    assert_eq!(
        store.search("", &[]).unwrap_err().kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        store.search_description("", &[]).unwrap_err().kind(),
        ErrorKind::Validation
    );

    let found = store.search("", &["x".to_string()]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "rake");
}

#[test]
fn test_round_trip_through_disk() {
    let (_dir, mut store) = setup();
    let original = Item::new("sleeping bag")
        .with_container("closet_1")
        .with_description("down, rated to -5C")
        .with_tags(["camping", "winter"]);
    let id = store.add(original.clone()).unwrap();

    let found = store.search("sleeping bag", &[]).unwrap();
    assert!(found.contains(&original.with_id(id)));
}

#[test]
fn test_search_returns_at_most_the_limit() {
    let (_dir, mut store) = setup();
    for _ in 0..30 {
        store.add(Item::new("marble")).unwrap();
    }
    assert_eq!(store.search("marble", &[]).unwrap().len(), SEARCH_LIMIT);
}

#[test]
fn test_text_and_tags_must_all_match() {
    let (_dir, mut store) = setup();
    store
        .add(Item::new("lamp").with_description("red shade").with_tags(["office"]))
        .unwrap();
    store
        .add(Item::new("lamp").with_description("red shade").with_tags(["bedroom"]))
        .unwrap();
    store
        .add(Item::new("chair").with_description("red leather").with_tags(["office"]))
        .unwrap();

    let office = vec!["office".to_string()];

    let lamps: Vec<String> = store
        .search("lamp", &office)
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(lamps, vec!["lamp_1"]);

    let red: Vec<String> = store
        .search_description("red", &office)
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(red.len(), 2);
    assert!(red.contains(&"lamp_1".to_string()));
    assert!(red.contains(&"chair_1".to_string()));

    let leather: Vec<String> = store
        .search_description("leather", &office)
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(leather, vec!["chair_1"]);

    let both = vec!["office".to_string(), "bedroom".to_string()];
    assert!(store.search("lamp", &both).unwrap().is_empty());
}
