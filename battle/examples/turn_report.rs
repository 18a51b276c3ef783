//! Drive a session from JSON updates and print the reports
//!
//! Usage:
//!   RUST_LOG=debug cargo run --example turn_report -p scout-battle

use anyhow::Result;
use scout_battle::{BattleSession, CombatantSeed, ReferenceTable, Side, TurnAdvisor};
use scout_protocol::{parse_team_export, parse_update_request};
use tracing_subscriber::EnvFilter;

const TEAM: &str = "\
Flutter Mane @ Choice Specs
Ability: Protosynthesis
Level: 50
Tera Type: Fairy
EVs: 4 HP / 252 SpA / 252 Spe
Timid Nature
IVs: 0 Atk
- Moonblast
- Shadow Ball
- Dazzling Gleam
- Protect

Rillaboom @ Assault Vest
Ability: Grassy Surge
Level: 50
EVs: 252 HP / 252 Atk / 4 SpD
Adamant Nature
- Grassy Glide
- Wood Hammer
- Fake Out
- Knock Off
";

const PREVIEW: [&str; 4] = ["Urshifu", "Incineroar", "Amoonguss", "Tornadus"];

const UPDATES: [&str; 2] = [
    r#"{ "mine": { "switch_to": "Flutter Mane" }, "opponent": { "switch_to": "Urshifu" } }"#,
    r#"```json
{
  "mine": { "move_used": "Moonblast" },
  "opponent": { "move_used": "Close Combat", "item": "Choice Scarf" },
  "field": { "terrain": "grassy" },
  "turn_end": true
}
```"#,
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let table = ReferenceTable::builtin();
    let advisor = TurnAdvisor::new(&table);
    let mut session = BattleSession::default();
    let config = session.config.clone();

    for member in parse_team_export(TEAM)? {
        session.register(Side::Mine, CombatantSeed::from_team_member(&member, &table, &config));
    }
    for name in PREVIEW {
        session.register(Side::Opponent, CombatantSeed::from_reference(name, &table, &config));
    }

    println!("=== Lead matchups ===");
    for matchup in advisor.lead_matchups(&session, &PREVIEW) {
        println!("{matchup}");
    }

    for update in UPDATES {
        let request = parse_update_request(update)?;
        let (summary, auto_damage) = advisor.apply_with_auto_damage(&mut session, &request);
        println!("\n=== Update: {} changes ===", summary.changes);
        for damage in &auto_damage {
            println!("{} took ~{:.1}% from {}", damage.target, damage.percent, damage.move_name);
        }

        println!("{}", session.snapshot());
        match advisor.turn_report(&session, Some(true)) {
            Ok(report) => println!("{report}"),
            Err(e) => println!("No report: {e}"),
        }
    }

    Ok(())
}
