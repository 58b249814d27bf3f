//! Integration tests for reading cross-section files from disk

use approx::assert_relative_eq;
use ntrans_xs::{read_xs_file, CrossSectionSeries, Error};
use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::NamedTempFile;

/// Several isotopes sharing one file, as the evaluated libraries are shipped
const MULTI_ISOTOPE: &str = "\
Cross-section library, total cross sections
Generated for testing

Fe-56 total
#data...
# energy(MeV) xs(barns)
1.0000E-06    1.2000E+01
1.0000E-03    1.1000E+01
1.0000E+00    3.0000E+00
//

Ta-181 total
#data...
# energy(MeV) xs(barns)
1.0E-06 2.0E+01
4.1E-06 1.2E+03
1.0E-05 1.5E+01
//

C-12 total
#data...
2.0E-06 4.7
//
";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[fixture]
fn library() -> NamedTempFile {
    write_temp(MULTI_ISOTOPE)
}

#[rstest]
#[case("Fe-56", 3)]
#[case("Ta-181", 3)]
#[case("C-12", 1)]
fn block_lengths(library: NamedTempFile, #[case] isotope: &str, #[case] expected: usize) {
    let series = read_xs_file(library.path(), isotope).unwrap();
    assert_eq!(series.len(), expected);
}

#[rstest]
fn energies_converted_to_ev(library: NamedTempFile) {
    let series = read_xs_file(library.path(), "Ta-181").unwrap();
    let expected = [(1.0, 20.0), (4.1, 1200.0), (10.0, 15.0)];

    for ((energy, xs), (e_ref, xs_ref)) in series.iter().zip(expected) {
        assert_relative_eq!(*energy, e_ref, max_relative = 1e-12);
        assert_relative_eq!(*xs, xs_ref, max_relative = 1e-12);
    }
}

#[rstest]
fn synthetic_round_trip() {
    let file = write_temp("A\n#data...\n1.0 2.5\n2.0 3.0\n//\n");
    let series = read_xs_file(file.path(), "A").unwrap();
    assert_eq!(series, CrossSectionSeries::from(vec![(1e6, 2.5), (2e6, 3.0)]));
}

#[rstest]
fn missing_isotope_names_file(library: NamedTempFile) {
    let err = read_xs_file(library.path(), "Z").unwrap_err();
    match &err {
        Error::IsotopeNotFound { isotope, path } => {
            assert_eq!(isotope, "Z");
            assert_eq!(path, library.path());
        }
        e => panic!("unexpected error {e:?}"),
    }

    // message is enough to find the fault
    let message = err.to_string();
    assert!(message.contains("\"Z\""));
    assert!(message.contains(&library.path().display().to_string()));
}

#[rstest]
#[case("A\n#data...\n1.0\n//\n")]
#[case("A\n#data...\n1.0 2.0 3.0\n//\n")]
#[case("A\n#data...\none two\n//\n")]
#[case("A\n#data...\n1.0 2.0\n\n//\n")]
fn malformed_blocks(#[case] content: &str) {
    let file = write_temp(content);
    let err = read_xs_file(file.path(), "A").unwrap_err();
    assert!(matches!(err, Error::InvalidDataLine { .. }));
}
