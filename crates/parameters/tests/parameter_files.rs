//! Integration tests reading complete parameters.in files

use pfmc_parameters::{Error, NumericalValue, Parameters};
use rstest::{fixture, rstest};

#[fixture]
fn allen_cahn() -> Parameters {
    Parameters::from_file("./data/parameters.in").unwrap()
}

#[rstest]
fn every_entry_is_kept(allen_cahn: Parameters) {
    // 19 top level entries, 3 inside the refinement subsection
    assert_eq!(allen_cahn.len(), 22);
    assert_eq!(allen_cahn.get("Mesh adaptivity"), Some("true"));
    assert_eq!(allen_cahn.get("Value lower bound"), None);
    assert_eq!(
        allen_cahn.get_in(Some("Refinement criterion: n"), "Value lower bound"),
        Some("0.001")
    );
}

#[rstest]
#[case("MnV", "1.0", "DOUBLE")]
#[case("KnV", "2.5", "DOUBLE")]
#[case("Dc", "(1.0, 0, 0, 1.0)", "TENSOR")]
#[case("Refine", "4", "INT")]
fn model_constants(
    allen_cahn: Parameters,
    #[case] description: &str,
    #[case] value: &str,
    #[case] kind: &str,
) {
    let constants = allen_cahn.model_constants();
    assert_eq!(constants.len(), 4);

    let constant = constants
        .iter()
        .find(|c| c.description == description)
        .unwrap();
    assert_eq!(constant.value, value);
    assert_eq!(constant.kind, kind);
}

#[rstest]
fn model_constants_keep_first_appearance_order(allen_cahn: Parameters) {
    let order: Vec<String> = allen_cahn
        .model_constants()
        .into_iter()
        .map(|c| c.description)
        .collect();
    assert_eq!(order, ["MnV", "KnV", "Dc", "Refine"]);
}

#[rstest]
fn numerical_parameters(allen_cahn: Parameters) {
    let numerical = allen_cahn.numerical_parameters().unwrap();

    // Number of time steps is not set in this file
    assert_eq!(numerical.len(), 11);
    assert!(numerical
        .iter()
        .all(|p| p.description != "Number of time steps"));

    assert_eq!(numerical[0].value, NumericalValue::Integer(2));
    assert_eq!(numerical[1].value, NumericalValue::Number(100.0));
    assert_eq!(numerical[7].description, "Refine factor");
    assert_eq!(numerical[7].value, NumericalValue::Integer(5));
}

#[rstest]
fn integer_with_fraction_is_invalid() {
    let parameters = Parameters::from_file("./data/bad_subdivisions.in").unwrap();
    let result = parameters.numerical_parameters();
    assert!(matches!(result, Err(Error::InvalidValue { .. })));
}

#[rstest]
fn missing_file_is_fatal() {
    let result = Parameters::from_file("./data/does_not_exist.in");
    assert!(matches!(result, Err(Error::Io(_))));
}
