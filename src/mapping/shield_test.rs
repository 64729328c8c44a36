use super::*;

#[test]
fn test_shielded_spans_contain_no_letters() {
    let table = MappingTable::from_pairs([("program", "program")]);
    let mut shield = Shield::new();

    let shielded = shield.apply(&table, "The program and the PROGRAM");

    assert_eq!(shield.len(), 2);
    assert!(!shielded.to_lowercase().contains("program"));
    assert!(shielded.starts_with("The "));
}

#[test]
fn test_restore_round_trip_with_case() {
    let table = MappingTable::from_pairs([("program", "program"), ("inquiry", "inquiry")]);
    let mut shield = Shield::new();

    let shielded = shield.apply(&table, "Program inquiry: PROGRAM.");
    // Simulate a later stage rewriting everything it can see
    let mangled = shielded.replace(':', " -");

    assert_eq!(shield.restore(&mangled), "Program inquiry - PROGRAM.");
}

#[test]
fn test_empty_shield_is_identity() {
    let shield = Shield::new();
    assert!(shield.is_empty());
    assert_eq!(shield.restore("plain text"), "plain text");
}

#[test]
fn test_unknown_placeholder_left_alone() {
    let table = MappingTable::from_pairs([("program", "program")]);
    let mut shield = Shield::new();
    let shielded = shield.apply(&table, "program");

    let stray = format!("{} \u{E000}7\u{E001} \u{E000}x", shielded);
    assert_eq!(shield.restore(&stray), "program \u{E000}7\u{E001} \u{E000}x");
}

#[test]
fn test_placeholder_lookalike_in_input_is_kept() {
    let table = MappingTable::from_pairs([("program", "program")]);
    let mut shield = Shield::new();

    let input = "icon \u{E000}0\u{E001} then program";
    let shielded = shield.apply(&table, input);

    assert_eq!(shield.len(), 1);
    assert!(shielded.starts_with("icon \u{E000}0\u{E001} then "));
    assert_eq!(shield.restore(&shielded), input);
}

#[test]
fn test_delimiters_skip_every_character_in_input() {
    let table = MappingTable::from_pairs([("program", "program")]);
    let mut shield = Shield::new();

    let input = "\u{E000} \u{E003} \u{E005}0\u{E004} program";
    let shielded = shield.apply(&table, input);

    assert!(shielded.ends_with("\u{E006}0\u{E007}"));
    assert_eq!(shield.restore(&shielded), input);
}
