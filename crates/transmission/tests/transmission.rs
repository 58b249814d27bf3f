//! Integration tests from configuration files through to transmission curves

use approx::assert_relative_eq;
use ntrans_transmission::*;
use rstest::{fixture, rstest};
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

const LIBRARY: &str = "\
Test library, total cross sections

Fe-56 total
#data...
# energy(MeV) xs(barns)
1.0E-06 12.0
1.0E-05 11.0
1.0E-04 3.0
//

Ta-181 total
#data...
1.0E-06 20.0
4.1E-06 1200.0
1.0E-05 15.0
//

H-1 total
#data...
1.0 1.0
//
";

fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[fixture]
fn library() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(LIBRARY.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn sample(library: &Path, name: &str, thickness: f64, unit: &str) -> LoadedIsotope {
    Isotope {
        name: name.to_string(),
        atomic_mass: 55.93,
        thickness,
        thickness_unit: unit.to_string(),
        density: 7.87,
        xs_file_location: library.to_path_buf(),
        ..Default::default()
    }
    .load()
    .unwrap()
}

#[rstest]
fn attenuation_of_unit_sample(library: NamedTempFile) {
    let isotope = Isotope {
        name: "H-1".to_string(),
        atomic_mass: 1.0,
        thickness: 1.0,
        thickness_unit: "cm".to_string(),
        density: 1.0,
        xs_file_location: library.path().to_path_buf(),
        ..Default::default()
    }
    .load()
    .unwrap();

    assert_relative_eq!(isotope.areal_density().unwrap(), 0.602214076, max_relative = 1e-12);

    let curve = compute_transmission(&[1.0e6], &isotope).unwrap();
    assert_eq!(curve.isotope, "H-1");
    assert_relative_eq!(curve.points[0].1, (-0.602214076f64).exp(), max_relative = 1e-12);
    assert_relative_eq!(curve.points[0].1, 0.5476, epsilon = 1e-4);
}

#[rstest]
fn curve_follows_grid(library: NamedTempFile) {
    let isotope = sample(library.path(), "Ta-181", 0.1, "mm");
    // unordered and repeated energies are fine
    let grid = [10.0, 1.0, 4.1, 4.1, 2.0, 7.5, 3.3];

    let curve = compute_transmission(&grid, &isotope).unwrap();
    assert_eq!(curve.len(), grid.len());
    assert_eq!(curve.energies(), grid.to_vec());
    for t in curve.transmissions() {
        assert!(t > 0.0 && t <= 1.0, "transmission {t} outside (0, 1]");
    }
}

#[rstest]
fn exact_at_tabulated_energies(library: NamedTempFile) {
    let isotope = sample(library.path(), "Fe-56", 1.0, "mm");
    let atoms = isotope.areal_density().unwrap();
    let grid = isotope.cross_section().energies();

    let curve = isotope.transmission(&grid).unwrap();
    for ((_, t), (_, xs)) in curve.iter().zip(isotope.cross_section()) {
        assert_relative_eq!(*t, (-xs * atoms).exp(), max_relative = 1e-12);
    }
}

#[rstest]
fn millimetres_match_centimetres(library: NamedTempFile) {
    let grid = log_grid(0.5, 20.0, 50).unwrap();
    let mm = compute_transmission(&grid, &sample(library.path(), "Ta-181", 2.5, "mm")).unwrap();
    let cm = compute_transmission(&grid, &sample(library.path(), "Ta-181", 0.25, "cm")).unwrap();

    for ((e_mm, t_mm), (e_cm, t_cm)) in mm.iter().zip(cm.iter()) {
        assert_eq!(e_mm, e_cm);
        assert_relative_eq!(*t_mm, *t_cm, max_relative = 1e-12);
    }
}

#[rstest]
fn empty_grid(library: NamedTempFile) {
    let isotope = sample(library.path(), "Fe-56", 1.0, "cm");
    let curve = compute_transmission(&[], &isotope).unwrap();
    assert!(curve.is_empty());
    assert_eq!(curve.isotope, "Fe-56");
}

#[rstest]
#[case("cm", "kg/m3")]
#[case("mm", "g/cc")]
#[case("cm", "G/CM3")]
fn density_unit_rejected(library: NamedTempFile, #[case] thickness: &str, #[case] density: &str) {
    let isotope = Isotope {
        name: "Fe-56".to_string(),
        atomic_mass: 55.93,
        thickness: 1.0,
        thickness_unit: thickness.to_string(),
        density: 7.87,
        density_unit: density.to_string(),
        xs_file_location: library.path().to_path_buf(),
        ..Default::default()
    }
    .load()
    .unwrap();

    // an empty grid does not skip the check
    for grid in [vec![], vec![1.0, 2.0]] {
        assert!(matches!(
            compute_transmission(&grid, &isotope),
            Err(Error::UnsupportedDensityUnit { .. })
        ));
    }
}

#[rstest]
fn missing_isotope(library: NamedTempFile) {
    let result = Isotope {
        name: "Z".to_string(),
        xs_file_location: library.path().to_path_buf(),
        ..Default::default()
    }
    .load();

    assert!(matches!(
        result,
        Err(Error::Xs(ntrans_xs::Error::IsotopeNotFound { .. }))
    ));
}

#[test]
fn config_to_curves() {
    let dir = TempDir::new().unwrap();
    let xs = write_file(dir.path(), "xs.dat", LIBRARY);
    let masses = write_file(
        dir.path(),
        "masses.json",
        r#"{"Fe-56": 55.93, "Ta-181": 180.948}"#,
    );
    let config = write_file(
        dir.path(),
        "stack.ini",
        &format!(
            "\
[DEFAULT]
xs_file_location = {}
thickness_unit = mm
density_unit = g/cm3

[iron]
name = Fe-56
thickness = 1.0
density = 7.87

[tantalum]
name = Ta-181
thickness = 0.1
density = 16.69

[hydrogen]
name = H-1
ignore = true
",
            xs.display()
        ),
    );

    let configs = read_config(&config).unwrap();
    let masses = MassTable::from_json_file(&masses).unwrap();
    let isotopes = load_isotopes(&configs, &masses).unwrap();
    assert_eq!(isotopes.len(), 2);

    let grid = linear_grid(1.0, 10.0, 10).unwrap();
    let curves = transmission_curves(&isotopes, &grid).unwrap();

    let names: Vec<&str> = curves.iter().map(|c| c.isotope.as_str()).collect();
    assert_eq!(names, ["Fe-56", "Ta-181"]);

    // same answer one at a time
    for (isotope, curve) in isotopes.iter().zip(&curves) {
        assert_eq!(&compute_transmission(&grid, isotope).unwrap(), curve);
    }

    // JSON output can be read back
    let json = serde_json::to_string(&curves).unwrap();
    let back: Vec<TransmissionCurve> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), curves.len());
    for (a, b) in back.iter().zip(&curves) {
        assert_eq!(a.isotope, b.isotope);
        for ((ea, ta), (eb, tb)) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*ea, *eb, max_relative = 1e-15);
            assert_relative_eq!(*ta, *tb, max_relative = 1e-15);
        }
    }
}

#[test]
fn json_config_with_closure_masses() {
    let dir = TempDir::new().unwrap();
    let xs = write_file(dir.path(), "xs.dat", LIBRARY);
    let config = serde_json::json!([
        {
            "name": "Fe-56",
            "thickness": 1.0,
            "thickness_unit": "cm",
            "density": 7.87,
            "xs_file_location": xs
        }
    ]);
    let config = write_file(dir.path(), "stack.json", &config.to_string());

    let configs = read_config(config).unwrap();
    let lookup = |name: &str| (name == "Fe-56").then_some(55.93);
    let isotopes = load_isotopes(&configs, &lookup).unwrap();

    assert_eq!(isotopes[0].isotope().atomic_mass, 55.93);
    assert_eq!(isotopes[0].cross_section().len(), 3);
}
