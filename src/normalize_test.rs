use super::*;

#[test]
fn test_em_dash_becomes_spaced_hyphen() {
    assert_eq!(normalize("colour\u{2014}centre"), "colour - centre");
    assert_eq!(normalize("no dashes - here"), "no dashes - here");
    assert_eq!(normalize(""), "");
}

#[test]
fn test_protect_hides_every_dollar() {
    let protected = protect("It costs $5 or $$10");
    assert!(!protected.text().contains('$'));
    assert_eq!(protected.restore(protected.text()), "It costs $5 or $$10");
}

#[test]
fn test_restore_after_translation() {
    let protected = protect("The color costs $5");
    let translated = protected.text().replace("color", "colour");
    assert_eq!(protected.restore(&translated), "The colour costs $5");
}

#[test]
fn test_restore_never_expands_group_references() {
    let protected = protect("$1 and $0 and ${name}");
    assert_eq!(protected.restore(protected.text()), "$1 and $0 and ${name}");
}

#[test]
fn test_sentinel_already_in_input_is_preserved() {
    let input = "literal \u{E0F0}0\u{E0F1} and $3";
    let protected = protect(input);

    assert!(protected.text().contains("\u{E0F0}0\u{E0F1}"));
    assert!(protected.text().contains("\u{E0F0}1\u{E0F1}"));
    assert_eq!(protected.restore(protected.text()), input);
}

#[test]
fn test_sentinel_has_no_letters() {
    let protected = protect("costs $5");
    assert!(!protected.text().contains('$'));
    let words: Vec<&str> = crate::lexicon::re_word()
        .find_iter(protected.text())
        .map(|m| m.as_str())
        .collect();
    assert_eq!(words, vec!["costs"]);
}

#[test]
fn test_text_without_dollar_is_untouched() {
    let protected = protect("plain colour");
    assert_eq!(protected.text(), "plain colour");
    assert_eq!(protected.restore("plain colour"), "plain colour");
}
