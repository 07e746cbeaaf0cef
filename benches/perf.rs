use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use puckcorr::correlation::{CorrelationTable, GoalEvent};
use puckcorr::nhl_fetch::parse_goal_plays_json;
use puckcorr::props::{parse_props_json, PropListing};
use puckcorr::suggest::suggest_combos;

fn sample_events() -> Vec<GoalEvent> {
    // A season's worth of goals over a 20-man rotation.
    let players: Vec<String> = (0..20).map(|idx| format!("Player {idx}")).collect();
    (0..300u64)
        .map(|n| {
            let scorer = (n % 20) as usize;
            let assist1 = ((n / 3) % 20) as usize;
            let assist2 = ((n / 7) % 20) as usize;
            GoalEvent {
                game_id: 2025020001 + n / 4,
                date: "2025-10-08".to_string(),
                scorer: Some(players[scorer].clone()),
                assist1: (assist1 != scorer).then(|| players[assist1].clone()),
                assist2: (assist2 != scorer && assist2 != assist1)
                    .then(|| players[assist2].clone()),
            }
        })
        .collect()
}

fn bench_goal_plays_parse(c: &mut Criterion) {
    c.bench_function("goal_plays_parse", |b| {
        b.iter(|| {
            let plays = parse_goal_plays_json(black_box(PLAY_BY_PLAY_JSON), 22).unwrap();
            black_box(plays.len());
        })
    });
}

fn bench_props_parse(c: &mut Criterion) {
    c.bench_function("props_parse", |b| {
        b.iter(|| {
            let games = parse_props_json(black_box(PROPS_JSON)).unwrap();
            black_box(games.len());
        })
    });
}

fn bench_table_build(c: &mut Criterion) {
    let events = sample_events();
    c.bench_function("table_build", |b| {
        b.iter(|| {
            let table = CorrelationTable::build(black_box(&events));
            black_box(table.rows().len());
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let table = CorrelationTable::build(&sample_events());
    let tables = HashMap::from([("Edmonton Oilers".to_string(), table)]);
    let listings = HashMap::from([(
        "Edmonton Oilers @ Calgary Flames".to_string(),
        (0..20)
            .map(|idx| PropListing {
                player: format!("Player {idx}"),
                market: "Player Points".to_string(),
                selection: "Over 0.5".to_string(),
            })
            .collect::<Vec<_>>(),
    )]);

    c.bench_function("suggest_combos", |b| {
        b.iter(|| {
            let out = suggest_combos(black_box(&tables), black_box(&listings), 3);
            black_box(out.len());
        })
    });
}

criterion_group!(
    perf,
    bench_goal_plays_parse,
    bench_props_parse,
    bench_table_build,
    bench_suggest
);
criterion_main!(perf);

static PLAY_BY_PLAY_JSON: &str = include_str!("../tests/fixtures/play_by_play.json");
static PROPS_JSON: &str = include_str!("../tests/fixtures/dabble_props.json");
