//! End-to-end date composition tests against the embedded lexicon

use wuertzuel_core::{date_to_num, DateGrammarError, NumberNormalizer};

#[test]
fn test_dates_without_year_keep_the_trailing_period() {
    assert_eq!(date_to_num("éischten Abrëll").unwrap(), "1.4.");
    assert_eq!(date_to_num("fënneften August").unwrap(), "5.8.");
    assert_eq!(date_to_num("sechsten August").unwrap(), "6.8.");
    assert_eq!(date_to_num("zéngten Abrëll").unwrap(), "10.4.");
}

#[test]
fn test_dates_with_compounded_years() {
    assert_eq!(
        date_to_num("éischte Januar zweedausendvéier").unwrap(),
        "1.1.2004"
    );
    assert_eq!(
        date_to_num("drëtte Mäerz nonnzénghonnertnénganzwanzeg").unwrap(),
        "3.3.1929"
    );
    assert_eq!(
        date_to_num("éischte Juli zweedausendzwee").unwrap(),
        "1.7.2002"
    );
    assert_eq!(
        date_to_num("zweete Februar nonnzénghonnertaachtasechzeg").unwrap(),
        "2.2.1968"
    );
    assert_eq!(
        date_to_num("éischte Januar nonnzénghonnertfofzéng").unwrap(),
        "1.1.1915"
    );
    assert_eq!(
        date_to_num("drëtte Mäerz zweedausenddräizéng").unwrap(),
        "3.3.2013"
    );
}

#[test]
fn test_year_words_may_be_spaced_or_fused() {
    assert_eq!(
        date_to_num("drëtte Mäerz nonnzéng honnert néng an zwanzeg").unwrap(),
        "3.3.1929"
    );
    assert_eq!(
        date_to_num("drëtte Mäerz zweedausend-dräizéng").unwrap(),
        "3.3.2013"
    );
}

#[test]
fn test_n_rule_agreement_in_both_directions() {
    let normalizer = NumberNormalizer::new().unwrap();

    // Kept before vowels and h/n/d/z/t/r
    for phrase in [
        "drëtten Abrëll",
        "véierten Oktober",
        "zéngten Dezember",
        "siwenten November",
    ] {
        assert!(!normalizer.parse_date(phrase).unwrap().suffix_mismatch);
    }

    // Dropped before other consonants
    for phrase in [
        "éischte Februar",
        "aachte September",
        "zweete Mäerz",
        "véierte Juni",
    ] {
        assert!(!normalizer.parse_date(phrase).unwrap().suffix_mismatch);
    }

    // Mismatches are flagged but still produce the value
    let result = normalizer.parse_date("éischten Juli").unwrap();
    assert!(result.suffix_mismatch);
    assert_eq!(result.to_numeric(), "1.7.");
}

#[test]
fn test_month_abbreviations() {
    assert_eq!(date_to_num("éischte Jan").unwrap(), "1.1.");
    assert_eq!(date_to_num("zweete Feb").unwrap(), "2.2.");
    assert_eq!(date_to_num("néngten Dez").unwrap(), "9.12.");
    assert_eq!(date_to_num("éischten Abr.").unwrap(), "1.4.");
}

#[test]
fn test_non_month_words_fail() {
    for phrase in [
        "aachten Zuch",
        "néngten Dag",
        "drëtten Hond",
        "fënneften Tour",
        "sechsten Rees",
    ] {
        assert!(matches!(
            date_to_num(phrase),
            Err(DateGrammarError::UnknownMonth { .. })
        ));
    }
}

#[test]
fn test_determinism() {
    for _ in 0..3 {
        assert_eq!(date_to_num("éischten Abrëll").unwrap(), "1.4.");
    }
}
