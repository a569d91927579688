use pmicbase::catalog::Catalog;
use pmicbase::model::PartRecord;

fn part(reference: &str, vcc: &str, scl: &str, sda: &str) -> PartRecord {
    PartRecord {
        reference: reference.to_string(),
        vcc: vcc.to_string(),
        scl: scl.to_string(),
        sda: sda.to_string(),
        model: None,
    }
}

fn fixture() -> Catalog {
    Catalog::new(vec![
        part("MT6358VW", "VBAT", "1.8V", "1.8V"),
        part("MAX77705C", "3.0V", "1.8V", "1.8V"),
        part("PM8998", "VPH_PWR", "1.8V", "1.8V"),
        part("mt6323lga", "VBAT", "1.8V", "1.8V"),
        part("BQ25890H", "VBUS", "1.8V", "1.8V"),
    ])
}

#[test]
fn empty_term_and_prefix_match_every_record() {
    let catalog = fixture();
    let results = catalog.search("", "");
    assert_eq!(results.len(), catalog.len());
    // Identity search keeps the original order
    let references: Vec<&str> = results.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(
        references,
        vec!["MT6358VW", "MAX77705C", "PM8998", "mt6323lga", "BQ25890H"]
    );
}

#[test]
fn term_matches_substrings_case_insensitively() {
    let catalog = fixture();

    let results = catalog.search("6358", "");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].reference, "MT6358VW");

    // Lowercase query against uppercase reference and vice versa
    let results = catalog.search("max", "");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].reference, "MAX77705C");

    let results = catalog.search("MT6323", "");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].reference, "mt6323lga");
}

#[test]
fn prefix_must_match_the_start_of_the_reference() {
    let catalog = fixture();

    let results = catalog.search("", "MT63");
    let references: Vec<&str> = results.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(references, vec!["MT6358VW", "mt6323lga"]);

    // "8998" occurs inside PM8998 but not at the start
    assert!(catalog.search("", "8998").is_empty());
}

#[test]
fn prefix_is_case_insensitive() {
    let catalog = fixture();
    let results = catalog.search("", "mt63");
    assert_eq!(results.len(), 2);
    let results = catalog.search("", "Bq25");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].reference, "BQ25890H");
}

#[test]
fn term_and_prefix_combine_conjunctively() {
    let catalog = fixture();

    // Both conditions hold for exactly one record
    let results = catalog.search("lga", "MT63");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].reference, "mt6323lga");

    // Each condition alone matches something, the conjunction does not
    assert!(!catalog.search("max", "").is_empty());
    assert!(!catalog.search("", "MT63").is_empty());
    assert!(catalog.search("max", "MT63").is_empty());
}

#[test]
fn results_keep_catalog_order() {
    let catalog = Catalog::new(vec![
        part("PM8998", "", "", ""),
        part("PM8916", "", "", ""),
        part("PM8150", "", "", ""),
        part("PM8937", "", "", ""),
    ]);
    let references: Vec<&str> = catalog
        .search("", "PM8")
        .iter()
        .map(|p| p.reference.as_str())
        .collect();
    // Catalog order, not sorted order
    assert_eq!(references, vec!["PM8998", "PM8916", "PM8150", "PM8937"]);
}

#[test]
fn unmatched_query_returns_empty() {
    let catalog = fixture();
    assert!(catalog.search("does-not-exist", "").is_empty());
    assert!(catalog.search("", "ZZZZ").is_empty());
}

#[test]
fn search_on_empty_catalog_is_empty() {
    let catalog = Catalog::new(Vec::new());
    assert!(catalog.search("", "").is_empty());
}
