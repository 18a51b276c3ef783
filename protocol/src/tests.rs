#[cfg(test)]
mod tests {
    use crate::update::StatusChange;
    use crate::{parse_team_export, parse_update_request, Side, Stat, UpdateRequest};

    #[test]
    fn test_parse_update_request() {
        let json = r#"{
            "opponent": { "switch_to": "Flutter Mane", "item": "Choice Specs" },
            "mine": { "hp_delta": -42.5, "stages": { "atk": 2, "spe": -1 } },
            "field": { "weather": "RainDance", "trick_room": true },
            "turn_end": true
        }"#;
        let request = parse_update_request(json).unwrap();

        assert_eq!(request.opponent.switch_to.as_deref(), Some("Flutter Mane"));
        assert_eq!(request.opponent.item.as_deref(), Some("Choice Specs"));
        assert_eq!(request.mine.hp_delta, Some(-42.5));
        assert_eq!(request.mine.stages.get(&Stat::Atk), Some(&2));
        assert_eq!(request.mine.stages.get(&Stat::Spe), Some(&-1));
        assert_eq!(request.field.weather.as_deref(), Some("RainDance"));
        assert_eq!(request.field.trick_room, Some(true));
        assert!(request.turn_end);
    }

    #[test]
    fn test_parse_update_request_absent_fields_are_none() {
        let request = parse_update_request(r#"{ "turn_end": false }"#).unwrap();

        assert_eq!(request, UpdateRequest::default());
        assert!(request.is_empty());
        assert!(request.side(Side::Mine).is_empty());
    }

    #[test]
    fn test_parse_update_request_rejects_unknown_keys() {
        let result = parse_update_request(r#"{ "opponent": { "swtich_to": "Miraidon" } }"#);
        assert!(result.is_err());

        let result = parse_update_request(r#"{ "wether": "sun" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_update_request_code_fence() {
        let input = "```json\n{ \"opponent\": { \"move_used\": \"Draco Meteor\" } }\n```";
        let request = parse_update_request(input).unwrap();

        assert_eq!(request.opponent.move_used.as_deref(), Some("Draco Meteor"));
    }

    #[test]
    fn test_parse_update_request_empty() {
        assert!(parse_update_request("").is_err());
        assert!(parse_update_request("   ").is_err());
        assert!(parse_update_request("not json").is_err());
    }

    #[test]
    fn test_status_change() {
        let request = parse_update_request(
            r#"{ "mine": { "status": "par" }, "opponent": { "status": "none" } }"#,
        )
        .unwrap();

        assert_eq!(request.mine.status_change(), Some(StatusChange::Set("par")));
        assert_eq!(request.opponent.status_change(), Some(StatusChange::Clear));

        let untouched = parse_update_request("{}").unwrap();
        assert_eq!(untouched.mine.status_change(), None);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Mine.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Mine);
        assert_eq!(Side::Opponent.index(), 1);
        assert_eq!(Stat::parse("speed"), Some(Stat::Spe));
        assert_eq!(Stat::parse("Sp. Atk"), Some(Stat::Spa));
        assert_eq!(Stat::parse("hp"), None);
    }

    #[test]
    fn test_stage_keys_accept_stat_names() {
        let request = parse_update_request(
            r#"{ "opponent": { "stages": { "Attack": -1, "special_defense": 1, "spe": 2 } } }"#,
        )
        .unwrap();

        let stages = &request.opponent.stages;
        assert_eq!(stages.get(&Stat::Atk), Some(&-1));
        assert_eq!(stages.get(&Stat::Spd), Some(&1));
        assert_eq!(stages.get(&Stat::Spe), Some(&2));

        assert!(parse_update_request(r#"{ "mine": { "stages": { "hp": 1 } } }"#).is_err());
    }

    const EXPORT: &str = "
Roaring Moon @ Booster Energy
Ability: Protosynthesis
Shiny: Yes
Tera Type: Flying
EVs: 252 Atk / 252 Spe
Jolly Nature
- Acrobatics
- Knock Off
- Tailwind
- Protect

Goldy (Gholdengo) (M) @ Choice Specs
Ability: Good as Gold
Level: 50
EVs: 4 HP / 252 SpA / 4 SpD / 244 Spe
Modest Nature
IVs: 0 Atk
- Make It Rain
- Shadow Ball
";

    #[test]
    fn test_parse_team_export() {
        let team = parse_team_export(EXPORT).unwrap();
        assert_eq!(team.len(), 2);

        let moon = &team[0];
        assert_eq!(moon.species, "Roaring Moon");
        assert_eq!(moon.name(), "Roaring Moon");
        assert_eq!(moon.item.as_deref(), Some("Booster Energy"));
        assert_eq!(moon.ability.as_deref(), Some("Protosynthesis"));
        assert_eq!(moon.tera_type.as_deref(), Some("Flying"));
        assert_eq!(moon.nature.as_deref(), Some("Jolly"));
        assert_eq!(moon.evs.atk, 252);
        assert_eq!(moon.evs.spe, 252);
        assert_eq!(moon.evs.hp, 0);
        assert_eq!(moon.ivs.atk, 31);
        assert_eq!(moon.moves, vec!["Acrobatics", "Knock Off", "Tailwind", "Protect"]);

        let goldy = &team[1];
        assert_eq!(goldy.species, "Gholdengo");
        assert_eq!(goldy.nickname.as_deref(), Some("Goldy"));
        assert_eq!(goldy.name(), "Goldy");
        assert_eq!(goldy.level, Some(50));
        assert_eq!(goldy.ivs.atk, 0);
        assert_eq!(goldy.evs.spe, 244);
    }

    #[test]
    fn test_parse_team_export_invalid() {
        assert!(parse_team_export("").is_err());
        assert!(parse_team_export("Pikachu\nEVs: lots Atk").is_err());
        assert!(parse_team_export("Pikachu\nEVs: 252 Luck").is_err());
    }
}
