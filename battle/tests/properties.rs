//! Property tests for the combatant model and the calculators

use proptest::prelude::*;
use scout_battle::calc::{base_damage, Screens};
use scout_battle::types::Reveal;
use scout_battle::{
    calculate_damage, turn_order, AttackerSpec, BattleSession, CombatantSeed, CombatantState,
    DamageOptions, DefenderSpec, FieldSpec, KoOutcome, MoveCategory, MoveData, Side, SpeedSpec,
    Stat, StatBlock, TurnOrder, Type,
};
use scout_protocol::parse_update_request;

fn stat() -> impl Strategy<Value = Stat> {
    prop::sample::select(Stat::ALL.to_vec())
}

fn combatant() -> CombatantState {
    CombatantState::new(Side::Opponent, "Incineroar", StatBlock::uniform(100), vec![Type::Fire])
}

fn physical_move(power: u16) -> MoveData {
    MoveData {
        name: "Test Strike".to_string(),
        power,
        move_type: Type::Normal,
        category: MoveCategory::Physical,
        priority: 0,
    }
}

fn attacker(atk: u32) -> AttackerSpec {
    AttackerSpec::new(50, StatBlock::new(150, atk, 100, 100, 100, 100), Vec::new())
}

fn defender(def: u32, max_hp: u32, health: f32) -> DefenderSpec {
    DefenderSpec {
        health,
        max_hp: Some(max_hp),
        screens: Screens::default(),
        ..DefenderSpec::new(StatBlock::new(max_hp, 100, def, 100, 100, 100), vec![Type::Normal])
    }
}

proptest! {
    #[test]
    fn stages_stay_in_bounds(deltas in prop::collection::vec((stat(), any::<i8>()), 0..40)) {
        let mut c = combatant();
        for (stat, delta) in deltas {
            let before = c.stages.get(stat);
            let applied = c.adjust_stage(stat, delta);
            let after = c.stages.get(stat);
            prop_assert!((-6..=6).contains(&after));
            prop_assert_eq!(i16::from(after) - i16::from(before), i16::from(applied));
            prop_assert_eq!(after, (i16::from(before) + i16::from(delta)).clamp(-6, 6) as i8);
        }
    }

    #[test]
    fn health_stays_in_bounds(deltas in prop::collection::vec(-150.0f32..150.0, 0..40)) {
        let mut c = combatant();
        let mut fainted = false;
        for delta in deltas {
            c.apply_health_delta(delta);
            prop_assert!((0.0..=100.0).contains(&c.health()));
            if fainted {
                prop_assert!(c.is_fainted());
            }
            fainted = c.is_fainted();
            prop_assert_eq!(fainted, c.health() == 0.0);
        }
    }

    #[test]
    fn one_decimal_splits_of_full_health_faint(first in 1u16..1000) {
        let mut c = combatant();
        c.apply_health_delta(-f32::from(first) / 10.0);
        prop_assert!(c.is_alive());

        c.apply_health_delta(-f32::from(1000 - first) / 10.0);
        prop_assert!(c.is_fainted());
        prop_assert_eq!(c.health(), 0.0);
    }

    #[test]
    fn three_way_splits_of_full_health_faint(a in 1u16..999, b in 1u16..999) {
        prop_assume!(a + b < 1000);
        let mut c = combatant();
        for tenths in [a, b, 1000 - a - b] {
            prop_assert!(c.is_alive());
            c.apply_health_delta(-f32::from(tenths) / 10.0);
        }
        prop_assert!(c.is_fainted());
    }

    #[test]
    fn confirmation_is_monotonic(items in prop::collection::vec("[A-Z][a-z]{2,10}", 1..10)) {
        let mut c = combatant();
        c.reveal(Reveal::Item(items[0].clone()));
        for item in &items[1..] {
            let berry = format!("{item} Berry");
            prop_assert!(!c.estimate(Reveal::Item(berry)));
            c.reveal(Reveal::Item(item.clone()));
            prop_assert!(c.info.item.is_confirmed());
            prop_assert_eq!(c.info.item.value(), Some(item));
        }
    }

    #[test]
    fn identical_speeds_tie(
        speed in 1u32..400,
        stage in -6i8..=6,
        priority in -7i8..=5,
        trick_room: bool,
    ) {
        let spec = SpeedSpec { stage, priority, ..SpeedSpec::new(speed) };
        let result = turn_order(&spec, &spec, trick_room);
        prop_assert_eq!(result.order, TurnOrder::Tie);
        prop_assert_eq!(result.attacker_speed, result.defender_speed);
    }

    #[test]
    fn trick_room_reverses_order(a in 1u32..400, b in 1u32..400) {
        prop_assume!(a != b);
        let (fast, slow) = (SpeedSpec::new(a.max(b)), SpeedSpec::new(a.min(b)));

        prop_assert_eq!(turn_order(&fast, &slow, false).order, TurnOrder::Attacker);
        prop_assert_eq!(turn_order(&fast, &slow, true).order, TurnOrder::Defender);
        prop_assert_eq!(turn_order(&slow, &fast, true).order, TurnOrder::Attacker);
    }

    #[test]
    fn damage_is_monotonic_in_attack(
        atk in 10u32..400,
        boost in 0u32..200,
        def in 10u32..400,
        power in 10u16..200,
    ) {
        let mv = physical_move(power);
        let target = defender(def, 200, 100.0);
        let field = FieldSpec::default();
        let options = DamageOptions::default();

        let weak = calculate_damage(&attacker(atk), &target, &mv, &field, &options);
        let strong = calculate_damage(&attacker(atk + boost), &target, &mv, &field, &options);

        prop_assert!(weak.min <= weak.max);
        prop_assert!(weak.min <= strong.min);
        prop_assert!(weak.max <= strong.max);
        prop_assert_eq!(weak.rolls.len(), 16);
    }

    #[test]
    fn extreme_attack_saturates_monotonically(atk in (1u32 << 24).., boost in any::<u32>()) {
        let mv = physical_move(250);
        let target = defender(1, 200, 100.0);
        let field = FieldSpec::default();
        let options = DamageOptions { critical: true, ..DamageOptions::default() };
        let strong = AttackerSpec {
            item: Some("Life Orb".to_string()),
            ..attacker(atk)
        };
        let stronger = AttackerSpec {
            item: Some("Life Orb".to_string()),
            ..attacker(atk.saturating_add(boost))
        };

        let weak = calculate_damage(&strong, &target, &mv, &field, &options);
        let boosted = calculate_damage(&stronger, &target, &mv, &field, &options);
        prop_assert!(weak.min <= weak.max);
        prop_assert!(weak.max <= boosted.max);
        prop_assert_eq!(weak.outcome, KoOutcome::GuaranteedKo);
    }

    #[test]
    fn ko_classification_matches_bounds(
        atk in 10u32..400,
        power in 10u16..200,
        max_hp in 50u32..400,
        health in 0.0f32..=100.0,
    ) {
        let result = calculate_damage(
            &attacker(atk),
            &defender(100, max_hp, health),
            &physical_move(power),
            &FieldSpec::default(),
            &DamageOptions::default(),
        );

        match result.outcome {
            KoOutcome::GuaranteedKo => prop_assert!(result.min_percent >= health),
            KoOutcome::GuaranteedSurvival => prop_assert!(result.max_percent < health),
            KoOutcome::PossibleKo { ko_rolls } => {
                prop_assert!(result.min_percent < health && result.max_percent >= health);
                prop_assert!((1..16).contains(&ko_rolls));
            }
            KoOutcome::NoDamage => prop_assert!(false, "damaging move reported no damage"),
        }
    }
}

#[test]
fn scenario_boosted_speed_moves_first() {
    let attacker = SpeedSpec { stage: 2, ..SpeedSpec::new(100) };
    let result = turn_order(&attacker, &SpeedSpec::new(100), false);

    assert_eq!(result.order, TurnOrder::Attacker);
    assert_eq!((result.attacker_speed, result.defender_speed), (200, 100));
}

#[test]
fn scenario_neutral_physical_hit() {
    let base = base_damage(50, 100, 150, 100);
    let result = calculate_damage(
        &attacker(150),
        &defender(100, 180, 100.0),
        &physical_move(100),
        &FieldSpec::default(),
        &DamageOptions::default(),
    );

    assert!(!result.rolls.is_empty());
    assert!(result.max <= base && result.max >= base * 85 / 100);
    assert_eq!(result.max_hp, 180);
    assert!((result.max_percent - result.max as f32 * 100.0 / 180.0).abs() < 1e-4);
}

#[test]
fn scenario_confirmed_item_is_last_write_wins() {
    let mut c = combatant();
    assert!(!c.info.item.is_confirmed());

    c.reveal(Reveal::Item("Choice Scarf".to_string()));
    c.reveal(Reveal::Item("Sitrus Berry".to_string()));

    assert!(c.info.item.is_confirmed());
    assert_eq!(c.info.item.value().map(String::as_str), Some("Sitrus Berry"));
}

#[test]
fn scenario_deltas_summing_to_full_health_faint() {
    let mut session = BattleSession::default();
    for name in ["Incineroar", "Rillaboom"] {
        let seed = CombatantSeed::new(name, StatBlock::uniform(100), vec![Type::Fire]);
        session.register(Side::Opponent, seed);
    }
    session.set_active(Side::Opponent, "Incineroar");

    let mut fainted = Vec::new();
    for delta in ["-64.2", "-35.8"] {
        let request = format!(r#"{{ "opponent": {{ "hp_delta": {delta} }} }}"#);
        let summary = session.apply_update(&parse_update_request(&request).unwrap());
        fainted.extend(summary.fainted);
    }

    assert_eq!(fainted, vec![(Side::Opponent, "Incineroar".to_string())]);
    let side = session.side(Side::Opponent);
    assert_eq!(side.active().map(|c| c.health()), Some(0.0));
    assert_eq!(side.bench().count(), 1);
    assert_eq!(session.snapshot().opponent.fainted, vec!["Incineroar".to_string()]);
}
