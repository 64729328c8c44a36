use super::*;

#[test]
fn test_upper_source_uppercases_replacement() {
    assert_eq!(match_case("COLOR", "colour"), "COLOUR");
    assert_eq!(match_phrase_case("ZIP CODE", "postcode"), "POSTCODE");
    assert_eq!(match_phrase_case("CELL PHONE", "mobile phone"), "MOBILE PHONE");
}

#[test]
fn test_lower_source_differs_between_variants() {
    // Phrase variant forces lowercase, single-word variant keeps the replacement as written
    assert_eq!(match_phrase_case("api", "API"), "api");
    assert_eq!(match_case("api", "API"), "API");
    assert_eq!(match_case("color", "colour"), "colour");
}

#[test]
fn test_title_source_capitalises_every_word() {
    assert_eq!(match_phrase_case("Zip Code", "postcode"), "Postcode");
    assert_eq!(match_phrase_case("Parking Lot", "car park"), "Car Park");
    assert_eq!(match_case("Color", "colour"), "Colour");
    // A single capitalised word is title case, so every replacement word is capitalised
    assert_eq!(match_phrase_case("Popsicle", "ice block"), "Ice Block");
}

#[test]
fn test_title_source_lowercases_rest_of_each_word() {
    assert_eq!(match_case("Sidewalk", "FOOTPATH"), "Footpath");
    assert_eq!(match_phrase_case("Zip Code", "POST code"), "Post Code");
    assert_eq!(match_phrase_case("Cell Phone", "moBILE phone"), "Mobile Phone");
}

#[test]
fn test_sentence_source_capitalises_first_letter_only() {
    assert_eq!(match_phrase_case("Parking lot", "car park"), "Car park");
    assert_eq!(match_phrase_case("Cell phone", "mobile phone"), "Mobile phone");
}

#[test]
fn test_mixed_source_returns_replacement_unchanged() {
    assert_eq!(match_phrase_case("iPhone", "mobile"), "mobile");
    assert_eq!(match_case("zIP", "postcode"), "postcode");
    assert_eq!(match_phrase_case("ZIP code", "postcode"), "postcode");
}

#[test]
fn test_source_without_letters() {
    assert_eq!(match_case("123", "abc"), "abc");
    assert_eq!(match_phrase_case("", "Abc"), "Abc");
}

#[test]
fn test_whitespace_in_replacement_is_kept() {
    assert_eq!(match_phrase_case("Gas Station", "petrol  station"), "Petrol  Station");
}

#[test]
fn test_non_ascii_letters() {
    assert_eq!(match_case("ÉTÉ", "été"), "ÉTÉ");
    assert_eq!(match_case("Été", "été"), "Été");
}
