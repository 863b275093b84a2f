use everest_engine as ee;
use ee::*;

fn new_game() -> EverestGame {
    EverestGame::new().expect("stock world should load")
}

/// Feed each command, asserting none of them ends the run.
fn play(game: &mut EverestGame, commands: &[&str]) {
    for cmd in commands {
        let turn = game.handle_input(cmd);
        assert!(!turn.terminated, "'{cmd}' unexpectedly ended the game: {:?}", turn.lines);
    }
}

fn has_line(turn: &TurnOutput, needle: &str) -> bool {
    turn.lines.iter().any(|line| line.text.contains(needle))
}

fn has_style(turn: &TurnOutput, style: Style) -> bool {
    turn.lines.iter().any(|line| line.style == style)
}

/// Basecamp to Camp III with the radio, radio checked and ready to leave.
const TO_CAMP_III: &[&str] = &[
    "north",
    "take weather radio",
    "use weather radio",
    "north",
    "use radio",
    "north",
];

/// From Camp III (with at least one tank) up to the South Summit, carrying the rope.
const CAMP_III_TO_SOUTH_SUMMIT: &[&str] = &[
    "take oxygen tank",
    "take oxygen tank",
    "take oxygen tank",
    "use radio",
    "north",
    "use radio",
    "west",
    "take rope",
    "east",
    "use radio",
    "north",
];

#[test]
fn start_shows_title_intro_and_help() {
    let game = new_game();
    let lines = game.start();
    assert_eq!(lines[0].style, Style::Title);
    assert_eq!(lines[0].text, game.title());
    assert!(lines.iter().any(|l| l.text.contains("Welcome to the Mt. Everest")));
    assert!(lines.iter().any(|l| l.text.contains("Available commands")));
}

#[test]
fn initial_state() {
    let game = new_game();
    let state = game.state();
    assert_eq!(state.current_location, "Basecamp");
    assert_eq!(state.phase, Phase::AtBasecamp);
    assert!(state.inventory.is_empty());
    assert!(!state.weather_checked && !state.has_reached_summit);
    assert!(!state.has_rested_during_descent && !state.has_used_oxygen);
    assert!(!game.is_over());
}

#[test]
fn fatal_weather() {
    let mut game = new_game();
    let first = game.handle_input("north");
    assert!(!first.terminated);
    assert_eq!(game.state().current_location, "Camp I");

    let second = game.handle_input("north");
    assert!(second.terminated);
    assert!(has_line(&second, "avalanche"));
    assert!(has_style(&second, Style::GameOver));
    assert_eq!(game.state().current_location, "Camp I");
    assert_eq!(game.state().ending, Some(Ending::Death(DeathCause::Avalanche)));
}

#[test]
fn safe_passage_resets_weather_check() {
    let mut game = new_game();
    play(&mut game, &["north", "take weather radio", "use weather radio"]);
    assert!(game.state().weather_checked);

    let turn = game.handle_input("north");
    assert!(!turn.terminated);
    assert_eq!(game.state().current_location, "Camp II");
    assert!(!game.state().weather_checked);
    assert!(has_line(&turn, "Camp II"));
}

#[test]
fn hillary_step_without_rope() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    play(&mut game, &["take oxygen", "use radio", "north", "use radio", "north"]);
    assert_eq!(game.state().current_location, "South Summit");

    play(&mut game, &["use radio"]);
    let turn = game.handle_input("east");
    assert!(turn.terminated);
    assert!(has_line(&turn, "fall"));
    assert_eq!(game.state().ending, Some(Ending::Death(DeathCause::Fall)));
    assert_eq!(game.state().current_location, "South Summit");
}

#[test]
fn death_zone_without_oxygen() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    play(&mut game, &["use radio"]);

    let turn = game.handle_input("north");
    assert!(turn.terminated);
    assert!(has_line(&turn, "death zone"));
    assert_eq!(game.state().current_location, "Camp IV");
    assert_eq!(game.state().ending, Some(Ending::Death(DeathCause::Hypoxia)));
    assert_eq!(game.state().phase, Phase::GameOver);
}

#[test]
fn exhaustion_without_rest() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    play(&mut game, CAMP_III_TO_SOUTH_SUMMIT);
    play(&mut game, &["use radio", "east", "use radio", "north"]);
    assert!(game.state().has_reached_summit);
    play(&mut game, &["south", "use radio", "west", "use radio", "south", "use radio"]);
    assert_eq!(game.state().current_location, "Camp IV");

    let turn = game.handle_input("south");
    assert!(turn.terminated);
    assert!(has_line(&turn, "exhaustion"));
    assert_eq!(game.state().ending, Some(Ending::Death(DeathCause::Exhaustion)));
}

#[test]
fn returning_to_the_summit_undoes_the_rest() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    play(&mut game, CAMP_III_TO_SOUTH_SUMMIT);
    play(&mut game, &["use radio", "east", "use radio", "north"]);
    play(&mut game, &["south", "use radio", "west", "use radio", "south", "use radio", "west"]);
    assert_eq!(game.state().current_location, "Sherpa Tent");
    assert!(game.state().has_rested_during_descent);

    play(&mut game, &["east", "use radio", "north", "use radio", "east", "use radio", "north"]);
    assert_eq!(game.state().current_location, "Summit");
    assert!(game.state().has_reached_summit);
    assert!(!game.state().has_rested_during_descent);

    play(&mut game, &["south", "use radio", "west", "use radio", "south", "use radio"]);
    assert_eq!(game.state().current_location, "Camp IV");
    let turn = game.handle_input("south");
    assert!(turn.terminated);
    assert!(has_line(&turn, "exhaustion"));
    assert_eq!(game.state().ending, Some(Ending::Death(DeathCause::Exhaustion)));
}

#[test]
fn victory() {
    let mut game = new_game();
    play(&mut game, &["take map", "use map"]);
    play(&mut game, TO_CAMP_III);
    play(&mut game, CAMP_III_TO_SOUTH_SUMMIT);
    assert!(!game.state().has_rested_during_descent, "resting before the summit counts for nothing");

    let rope = game.handle_input("use radio");
    assert!(!rope.terminated);
    let step = game.handle_input("east");
    assert!(has_line(&step, "affix the rope"));
    assert_eq!(game.state().current_location, "Hillary Step");

    play(&mut game, &["use oxygen tank", "use radio"]);
    let summit = game.handle_input("north");
    assert!(has_line(&summit, "top of the world"));
    assert_eq!(game.state().phase, Phase::AtSummit);

    play(&mut game, &["south"]);
    assert_eq!(game.state().phase, Phase::Descending);
    play(&mut game, &["use radio", "west", "use radio", "south", "use radio", "west"]);
    assert!(game.state().has_rested_during_descent);
    play(&mut game, &[
        "east",
        "use radio",
        "south",
        "use radio",
        "south",
        "use radio",
        "south",
        "use radio",
    ]);
    assert_eq!(game.state().current_location, "Camp I");

    let last = game.handle_input("south");
    assert!(last.terminated);
    assert!(has_style(&last, Style::Success));
    assert_eq!(game.state().ending, Some(Ending::Victory));
    assert_eq!(game.state().current_location, "Basecamp");
}

#[test]
fn input_after_game_over_is_ignored() {
    let mut game = new_game();
    play(&mut game, &["north"]);
    assert!(game.handle_input("north").terminated);

    let after = game.handle_input("south");
    assert!(after.terminated);
    assert_eq!(after.lines.len(), 1);
    assert_eq!(game.state().current_location, "Camp I");
}

#[test]
fn reset_restores_initial_world() {
    let mut game = new_game();
    let total = game.total_items();
    play(&mut game, &["take map", "north"]);
    assert!(game.handle_input("north").terminated);

    game.reset();
    assert!(!game.is_over());
    assert_eq!(game.state().current_location, "Basecamp");
    assert!(game.state().inventory.is_empty());
    assert_eq!(game.world().location("Basecamp").unwrap().count_named("Map"), 1);
    assert_eq!(game.total_items(), total);
}

#[test]
fn blocked_exit_lists_valid_exits() {
    let mut game = new_game();
    let turn = game.handle_input("west");
    assert!(!turn.terminated);
    assert!(has_line(&turn, "can't go that way"));
    assert!(has_line(&turn, "Exits: north"));
    assert_eq!(game.state().current_location, "Basecamp");
}

#[test]
fn look_and_inventory_never_change_state() {
    let mut game = new_game();
    play(&mut game, &["north", "take radio"]);
    let before = format!("{:?}", game.state());
    let items_before = game.total_items();
    for cmd in ["look", "inventory", "look", "inv", "help"] {
        game.handle_input(cmd);
    }
    assert_eq!(format!("{:?}", game.state()), before);
    assert_eq!(game.total_items(), items_before);
}

#[test]
fn look_lists_hints_items_and_exits() {
    let mut game = new_game();
    let turn = game.handle_input("look");
    assert!(has_line(&turn, "Basecamp"));
    assert!(has_line(&turn, "- Map"));
    assert!(has_line(&turn, "Exits: north"));
}

#[test]
fn take_moves_exactly_one_item() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    let total = game.total_items();
    assert_eq!(game.world().location("Camp III").unwrap().count_kind(ItemKind::OxygenTank), 5);

    let turn = game.handle_input("take oxygen tank");
    assert!(has_line(&turn, "You have taken the Oxygen Tank"));
    assert_eq!(game.world().location("Camp III").unwrap().count_kind(ItemKind::OxygenTank), 4);
    assert_eq!(game.state().count_kind(ItemKind::OxygenTank), 1);
    assert_eq!(game.total_items(), total);
    assert!(game.state().inventory.iter().all(|item| item.picked_up));
}

#[test]
fn take_unknown_item_changes_nothing() {
    let mut game = new_game();
    let total = game.total_items();
    let turn = game.handle_input("take ice axe");
    assert!(has_line(&turn, "no ice axe here"));
    assert!(game.state().inventory.is_empty());
    assert_eq!(game.total_items(), total);
}

#[test]
fn oxygen_is_saved_at_low_altitude_and_consumed_high() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    play(&mut game, &["take oxygen", "take oxygen"]);
    let total = game.total_items();

    let low = game.handle_input("use oxygen");
    assert!(has_line(&low, "Save the oxygen tank"));
    assert_eq!(game.state().count_kind(ItemKind::OxygenTank), 2);
    assert!(!game.state().has_used_oxygen);

    play(&mut game, &["use radio", "north"]);
    assert_eq!(game.state().current_location, "Camp IV");
    let high = game.handle_input("use oxygen tank");
    assert!(has_line(&high, "helps you breathe"));
    assert_eq!(game.state().count_kind(ItemKind::OxygenTank), 1);
    assert!(game.state().has_used_oxygen);
    assert_eq!(game.total_items(), total - 1);
}

#[test]
fn high_altitude_move_without_oxygen_warns() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    play(&mut game, &["take oxygen", "take oxygen", "use radio"]);
    let arrive = game.handle_input("north");
    assert!(has_style(&arrive, Style::Warning));

    play(&mut game, &["use oxygen", "use radio"]);
    let tent = game.handle_input("west");
    assert!(!has_style(&tent, Style::Warning));
    assert!(!game.state().has_used_oxygen);
}

#[test]
fn use_items_without_effect() {
    let mut game = new_game();
    let none = game.handle_input("use map");
    assert!(has_line(&none, "don't have a map"));

    play(&mut game, &["take map"]);
    let map = game.handle_input("use map");
    assert!(has_line(&map, "Camp I in the Western Cwm"));
    assert_eq!(game.state().count_named("Map"), 1);
}

#[test]
fn rope_is_passive() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    play(&mut game, &["take oxygen", "use radio", "north", "use radio", "west", "take rope"]);
    let turn = game.handle_input("use rope");
    assert!(has_line(&turn, "can't use the Rope"));
    assert!(game.state().has_kind(ItemKind::Rope));
}

#[test]
fn resting_before_the_summit_does_nothing() {
    let mut game = new_game();
    play(&mut game, TO_CAMP_III);
    play(&mut game, &["take oxygen", "use radio", "north", "use radio"]);
    let tent = game.handle_input("west");
    assert!(!has_line(&tent, "rest on the comfortable bed"));
    assert!(!game.state().has_rested_during_descent);
}

#[test]
fn examine_checks_inventory_then_surroundings() {
    let mut game = new_game();
    let here = game.handle_input("examine map");
    assert!(has_line(&here, "detailed map"));

    play(&mut game, &["take map", "north"]);
    let carried = game.handle_input("x map");
    assert!(has_line(&carried, "detailed map"));

    let missing = game.handle_input("examine rope");
    assert!(has_line(&missing, "don't see any rope"));
}

#[test]
fn user_input_errors_never_end_the_game() {
    let mut game = new_game();
    for (cmd, needle) in [
        ("", "Please enter a command"),
        ("dance", "doesn't exist"),
        ("take", "item you want to take"),
        ("use", "item you want to use"),
        ("examine", "item you want to examine"),
    ] {
        let turn = game.handle_input(cmd);
        assert!(!turn.terminated);
        assert!(has_line(&turn, needle), "'{cmd}' should mention '{needle}'");
        assert!(has_style(&turn, Style::Error));
    }
    assert_eq!(game.state().current_location, "Basecamp");
}

#[test]
fn missing_location_is_reported_not_fatal() {
    let mut world = load_world().unwrap();
    world.landmarks.start = "Nowhere".into();
    let help = ee::loader::help::load_help_commands().unwrap();
    let mut game = EverestGame::from_world(world, help);

    let turn = game.handle_input("north");
    assert!(!turn.terminated);
    assert_eq!(turn.lines.len(), 1);
    assert_eq!(turn.lines[0].style, Style::Error);
    assert_eq!(game.state().current_location, "Nowhere");
}

#[test]
fn initialize_matches_session_start() {
    let def = ee::loader::load_worlddef().unwrap();
    let (world, state) = initialize(&def).unwrap();
    let game = new_game();
    assert_eq!(state.current_location, game.state().current_location);
    assert_eq!(world.item_count(), game.world().item_count());
}
