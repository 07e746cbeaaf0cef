use puckcorr::correlation::{CorrelationTable, GoalEvent};

fn goal(scorer: &str, assist1: Option<&str>, assist2: Option<&str>) -> GoalEvent {
    GoalEvent {
        game_id: 2025020001,
        date: "2025-10-08".to_string(),
        scorer: Some(scorer.to_string()),
        assist1: assist1.map(str::to_string),
        assist2: assist2.map(str::to_string),
    }
}

#[test]
fn single_two_assist_goal() {
    // One goal, X from Y and Z: both assisters count the scorer and the
    // other assister once each, and never themselves.
    let table = CorrelationTable::build(&[goal("X", Some("Y"), Some("Z"))]);

    assert_eq!(table.rows(), ["Y".to_string(), "Z".to_string()]);
    assert_eq!(
        table.columns(),
        ["X".to_string(), "Y".to_string(), "Z".to_string()]
    );

    assert_eq!(table.cell("Y", "X"), Some(1.0));
    assert_eq!(table.cell("Y", "Z"), Some(1.0));
    assert_eq!(table.cell("Y", "Y"), Some(0.0));

    assert_eq!(table.cell("Z", "X"), Some(1.0));
    assert_eq!(table.cell("Z", "Y"), Some(1.0));
    assert_eq!(table.cell("Z", "Z"), Some(0.0));

    assert!(!table.has_row("X"), "X never assists");
}

#[test]
fn assist_on_half_the_goals() {
    let events = [goal("X", Some("Y"), None), goal("Z", Some("Y"), None)];
    let table = CorrelationTable::build(&events);

    assert_eq!(table.rows(), ["Y".to_string()]);
    assert_eq!(table.cell("Y", "X"), Some(0.5));
    assert_eq!(table.cell("Y", "Z"), Some(0.5));
    assert_eq!(table.cell("Y", "Y"), Some(0.0));
}

#[test]
fn empty_events_yield_empty_table() {
    let table = CorrelationTable::build(&[]);
    assert!(table.is_empty());
    assert!(table.rows().is_empty());
    assert!(table.columns().is_empty());
}

#[test]
fn cells_are_probabilities_and_diagonal_is_zero() {
    let events = [
        goal("A", Some("B"), Some("C")),
        goal("B", Some("C"), None),
        goal("C", Some("A"), Some("B")),
        goal("A", None, None),
        goal("D", Some("B"), Some("A")),
    ];
    let table = CorrelationTable::build(&events);

    for assister in table.rows() {
        let values = table.row_values(assister).expect("row should exist");
        for value in values {
            assert!((0.0..=1.0).contains(value), "cell out of range: {value}");
        }
        assert_eq!(table.cell(assister, assister), Some(0.0));
    }
}

#[test]
fn building_twice_is_identical() {
    let events = [
        goal("A", Some("B"), Some("C")),
        goal("B", Some("C"), None),
        goal("C", Some("A"), Some("B")),
    ];
    assert_eq!(
        CorrelationTable::build(&events),
        CorrelationTable::build(&events)
    );
}

#[test]
fn missing_identities_are_excluded_from_sets() {
    let events = [GoalEvent {
        game_id: 1,
        date: "2025-10-08".to_string(),
        scorer: None,
        assist1: Some("Y".to_string()),
        assist2: None,
    }];
    let table = CorrelationTable::build(&events);
    assert_eq!(table.rows(), ["Y".to_string()]);
    assert_eq!(table.columns(), ["Y".to_string()]);
    assert_eq!(table.cell("Y", "Y"), Some(0.0));
}

#[test]
fn row_counts_shared_credit_per_event() {
    // Y assists three goals; X scores two of them, Z shares one of them.
    let events = [
        goal("X", Some("Y"), None),
        goal("X", Some("Y"), Some("Z")),
        goal("W", Some("Y"), None),
    ];
    let table = CorrelationTable::build(&events);

    let x = table.cell("Y", "X").expect("cell should exist");
    let z = table.cell("Y", "Z").expect("cell should exist");
    let w = table.cell("Y", "W").expect("cell should exist");
    assert!((x - 2.0 / 3.0).abs() < 1e-12);
    assert!((z - 1.0 / 3.0).abs() < 1e-12);
    assert!((w - 1.0 / 3.0).abs() < 1e-12);
}
