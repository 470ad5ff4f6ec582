//! End-to-end rolling behaviour across tables, registries and collections.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rt_tables::{
    Action, Collection, Item, List, Registry, Reroll, RollConfig, Roller, ScriptedSource, Table,
    TableError, WeightedItem,
};

/// A 2d6 table with one item per outcome.
fn two_d6() -> Table {
    Table::dice_match(
        "2d6",
        "2d6",
        (2..=12).map(|n| Item::new([n], format!("result {n}"))).collect(),
    )
}

/// Two die faces that sum to `total` on 2d6.
fn faces_for(total: i64) -> [i64; 2] {
    let first = (total - 1).min(6);
    [first, total - first]
}

#[test]
fn full_coverage_table_returns_matching_item_for_every_outcome() {
    let table = two_d6();
    assert!(table.coverage().unwrap().is_exact());

    for total in 2..=12 {
        let mut source = ScriptedSource::new(faces_for(total));
        assert_eq!(table.roll(&mut source).unwrap(), format!("result {total}"));
    }
}

#[test]
fn weighted_table_follows_slot_order() {
    let table = Table::weighted(
        "abc",
        vec![
            WeightedItem::new(2, "A"),
            WeightedItem::new(1, "B"),
            WeightedItem::new(1, "C"),
        ],
    );
    let mut source = ScriptedSource::new([0, 1, 2, 3]);
    let rolled: Vec<String> = (0..4).map(|_| table.roll(&mut source).unwrap()).collect();
    assert_eq!(rolled, vec!["A", "A", "B", "C"]);
}

#[test]
fn reroll_is_applied_at_most_once() {
    let table = Table::dice_match(
        "coin",
        "1d2",
        vec![Item::new([1], "one"), Item::new([2], "two")],
    )
    .with_reroll(Reroll::new([1], "1d2"));
    let mut source = ScriptedSource::new([1, 1, 2]);
    assert_eq!(table.roll(&mut source).unwrap(), "one");
    assert_eq!(source.consumed(), 2);
}

#[test]
fn registry_conflicts() {
    let registry = Registry::new();
    registry.add(Table::uniform("t", ["x"])).unwrap();
    assert!(matches!(
        registry.add(Table::uniform("t", ["y"])),
        Err(TableError::AlreadyRegistered(_))
    ));
    registry.remove("t").unwrap();
    assert!(matches!(
        registry.get("t"),
        Err(TableError::NotRegistered(_))
    ));
}

#[test]
fn list_rolls() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(List::default().roll(&mut rng), "");
    let single = List::new("single", ["lonely"]);
    for _ in 0..10 {
        assert_eq!(single.roll(&mut rng), "lonely");
    }
}

#[test]
fn collection_names_are_verbatim() {
    let collection: Collection = ["A", "", "C"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Table::uniform(format!("t{i}"), ["x"]).with_name(name))
        .collect();
    assert_eq!(collection.names(), vec!["A", "", "C"]);
}

#[test]
fn same_source_sequence_gives_same_results() {
    let table = two_d6();
    let script = [3, 4, 6, 6, 1, 1, 2, 5];

    let mut first = ScriptedSource::new(script);
    let a: Vec<String> = (0..4).map(|_| table.roll(&mut first).unwrap()).collect();
    let mut second = ScriptedSource::new(script);
    let b: Vec<String> = (0..4).map(|_| table.roll(&mut second).unwrap()).collect();
    assert_eq!(a, b);
    assert_eq!(a, vec!["result 7", "result 12", "result 2", "result 7"]);

    let config = RollConfig::default().with_seed(2024);
    let mut rng1 = config.rng();
    let mut rng2 = config.rng();
    for _ in 0..20 {
        assert_eq!(table.roll(&mut rng1).unwrap(), table.roll(&mut rng2).unwrap());
    }
}

#[test]
fn sub_tables_chain_with_arguments() {
    let registry = Registry::new();
    registry
        .add(
            Table::dice_match(
                "encounter",
                "1d6",
                vec![
                    Item::new(1..=3, "Travellers").with_action(Action::invoke_with(
                        "people",
                        ["dwarven"],
                    )),
                    Item::new(4..=6, "Nothing"),
                ],
            )
            .with_name("Road Encounters"),
        )
        .unwrap();
    registry
        .add(Table::uniform(
            "people",
            ["a {0} merchant", "a {0} pilgrim"],
        ))
        .unwrap();

    let mut source = ScriptedSource::new([2, 1]);
    assert_eq!(
        registry.roll("encounter", &mut source).unwrap(),
        "Travellers; a dwarven pilgrim"
    );
}

#[test]
fn caller_arguments_follow_action_arguments() {
    let registry = Registry::new();
    registry
        .add(Table::uniform("greeting", ["{0} greets {1}"]))
        .unwrap();
    let table = Table::dice_match(
        "meet",
        "1d1",
        vec![Item::new([1], "{0} arrives").with_action(Action::invoke_with("greeting", ["The innkeeper"]))],
    );
    let roller = Roller::new().with_registry(&registry);
    let mut source = ScriptedSource::new([1, 0]);
    let out = roller
        .roll_with_args(&table, &["Mira".to_string()], &mut source)
        .unwrap();
    assert_eq!(out, "Mira arrives; The innkeeper greets Mira");
}

#[test]
fn nested_sub_table_with_empty_result() {
    let registry = Registry::new();
    registry
        .add(Table::dice_match("gappy", "1d2", vec![Item::new([1], "found")]))
        .unwrap();
    let table = Table::dice_match(
        "outer",
        "1d1",
        vec![Item::new([1], "Searched").with_action(Action::invoke("gappy"))],
    );
    let mut source = ScriptedSource::new([1, 2]);
    assert_eq!(table.roll_with(&registry, &mut source).unwrap(), "Searched; ");
}

#[test]
fn self_referencing_table_hits_depth_limit() {
    let registry = Registry::new();
    registry
        .add(Table::dice_match(
            "ouroboros",
            "1d1",
            vec![Item::new([1], "again").with_action(Action::invoke("ouroboros"))],
        ))
        .unwrap();

    let roller = Roller::from_config(&RollConfig::default().with_max_depth(3)).with_registry(&registry);
    let mut source = ScriptedSource::new([1]);
    let err = roller.roll_id("ouroboros", &mut source).unwrap_err();
    assert!(matches!(
        err,
        TableError::RecursionLimit { ref table, depth: 3 } if table == "ouroboros"
    ));
}

#[test]
fn depth_limit_allows_chains_within_it() {
    let registry = Registry::new();
    registry
        .add(Table::dice_match(
            "a",
            "1d1",
            vec![Item::new([1], "A").with_action(Action::invoke("b"))],
        ))
        .unwrap();
    registry.add(Table::uniform("b", ["B"])).unwrap();

    let mut source = ScriptedSource::new([1, 0]);
    let roller = Roller::new().with_registry(&registry).with_max_depth(1);
    assert_eq!(roller.roll_id("a", &mut source).unwrap(), "A; B");

    let roller = Roller::new().with_registry(&registry).with_max_depth(0);
    assert!(matches!(
        roller.roll_id("a", &mut source),
        Err(TableError::RecursionLimit { .. })
    ));
}

#[test]
fn missing_sub_table_is_reported() {
    let registry = Registry::new();
    registry
        .add(Table::dice_match(
            "parent",
            "1d1",
            vec![Item::new([1], "x").with_action(Action::invoke("missing"))],
        ))
        .unwrap();
    let mut source = ScriptedSource::new([1]);
    assert!(matches!(
        registry.roll("parent", &mut source),
        Err(TableError::NotRegistered(id)) if id == "missing"
    ));
}

#[test]
fn collection_loaded_from_json() {
    let json = r#"[
        {
            "id": "weather",
            "name": "Weather",
            "category": "travel",
            "kind": "weighted",
            "items": [
                { "weight": 3, "text": "Clear" },
                { "weight": 1, "text": "Storm",
                  "action": { "kind": "invoke_table", "table": "storm" } }
            ]
        },
        {
            "id": "storm",
            "name": "Storm Severity",
            "category": "travel",
            "kind": "uniform",
            "items": ["Drizzle", "Gale"]
        }
    ]"#;
    let collection: Collection = serde_json::from_str(json).unwrap();
    assert_eq!(collection.names(), vec!["Weather", "Storm Severity"]);
    assert_eq!(collection.categories(), vec!["travel", "travel"]);

    let registry = collection.into_registry().unwrap();
    let mut source = ScriptedSource::new([3, 1]);
    assert_eq!(registry.roll("weather", &mut source).unwrap(), "Storm; Gale");
}
