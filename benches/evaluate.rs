use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_mafia::core::{Player, StatusEffect};
use rust_mafia::roles::{RolePreset, INFECTED};
use rust_mafia::victory::VictoryEvaluator;

/// A 30-player mid-game roster where no tier fires, so every tier runs.
fn mid_game_roster() -> Vec<Player> {
    (0..30)
        .map(|i| {
            let role = match i % 10 {
                0 | 1 => RolePreset::Mafioso,
                2 => RolePreset::Infector,
                3 => RolePreset::Survivor,
                4 => RolePreset::Diplomat,
                _ => RolePreset::Villager,
            };
            let player = Player::from_role(format!("p{}", i), role);
            let player = if i % 3 == 0 {
                player.with_effect(StatusEffect::permanent(INFECTED))
            } else {
                player
            };
            if i % 7 == 6 { player.dead() } else { player }
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = VictoryEvaluator::default();
    let players = mid_game_roster();
    let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

    c.bench_function("evaluate_30_players", |b| {
        b.iter(|| evaluator.evaluate_at(black_box(&players), now))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
