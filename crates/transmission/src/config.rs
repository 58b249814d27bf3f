//! Isotope descriptions from INI or JSON configuration files
//!
//! An INI configuration has one section per isotope. Section names are only
//! labels, the isotope is identified by its `name` key. Values in a
//! `[DEFAULT]` section apply to every isotope that does not set them.
//!
//! ```ini
//! [DEFAULT]
//! thickness_unit = mm
//! density_unit = g/cm3
//! xs_file_location = data/xs.dat
//!
//! [uranium]
//! name = U-238
//! thickness = 0.5
//! density = 19.1
//! abundance = 0.9927
//!
//! [carbon]
//! name = C-12
//! thickness = 2
//! density = 2.26
//! ignore = yes
//! ```
//!
//! JSON configurations are an array of objects with the same keys. Missing
//! keys take the same defaults as an INI section.
//!
//! Entries with `ignore` set are dropped when the file is read.
//!
//! Every line stands alone. Values never continue onto indented lines, an
//! indented `key = value` is a normal entry and any other indented text is a
//! [MalformedConfig](Error::MalformedConfig) error. Keys may only appear once
//! per section, repeats are a [DuplicateOption](Error::DuplicateOption) error.

// standard library
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::isotope::Isotope;
use crate::mass::AtomicMass;
use crate::parsers::{ini_bool, ini_line, IniLine};

// external crates
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Keys understood in an isotope section
const KNOWN_KEYS: [&str; 9] = [
    "name",
    "thickness",
    "thickness_unit",
    "abundance",
    "xs_file_location",
    "density",
    "density_unit",
    "atomic_mass",
    "ignore",
];

/// Isotope entry as written in a configuration file
///
/// Converted to an [Isotope] by [IsotopeConfig::resolve()], which fills in the
/// atomic mass if the configuration does not give one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsotopeConfig {
    /// Isotope name, also used to find the cross-section block
    pub name: String,
    /// Sample thickness in `thickness_unit`
    pub thickness: f64,
    /// One of `cm`, `mm`, `atoms/cm2`
    pub thickness_unit: String,
    /// Fractional abundance
    pub abundance: f64,
    /// Path to the cross-section file
    pub xs_file_location: PathBuf,
    /// Sample density in `density_unit`
    pub density: f64,
    /// Should be `g/cm3`
    pub density_unit: String,
    /// Overrides the atomic mass lookup (g/mol)
    pub atomic_mass: Option<f64>,
    /// Skip this entry entirely
    pub ignore: bool,
}

impl Default for IsotopeConfig {
    fn default() -> Self {
        let isotope = Isotope::default();
        Self {
            name: isotope.name,
            thickness: isotope.thickness,
            thickness_unit: isotope.thickness_unit,
            abundance: isotope.abundance,
            xs_file_location: isotope.xs_file_location,
            density: isotope.density,
            density_unit: isotope.density_unit,
            atomic_mass: None,
            ignore: false,
        }
    }
}

impl IsotopeConfig {
    /// Build the [Isotope], looking up the atomic mass if needed
    ///
    /// A mass given in the configuration always wins over the lookup. Either
    /// way it has to be a finite positive number.
    ///
    /// ```rust
    /// # use ntrans_transmission::{IsotopeConfig, MassTable};
    /// let config = IsotopeConfig {
    ///     name: "C-12".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// let masses: MassTable = [("C-12", 12.0)].into_iter().collect();
    /// let isotope = config.resolve(&masses).unwrap();
    /// assert_eq!(isotope.atomic_mass, 12.0);
    ///
    /// // nothing known about the mass
    /// assert!(config.resolve(&MassTable::new()).is_err());
    /// ```
    pub fn resolve<M: AtomicMass + ?Sized>(&self, masses: &M) -> Result<Isotope> {
        let atomic_mass = match self.atomic_mass {
            Some(mass) => mass,
            None => {
                masses
                    .atomic_mass(&self.name)
                    .ok_or_else(|| Error::AtomicMassNotFound {
                        isotope: self.name.clone(),
                    })?
            }
        };

        if !atomic_mass.is_finite() || atomic_mass <= 0.0 {
            return Err(Error::InvalidAtomicMass {
                isotope: self.name.clone(),
                mass: atomic_mass,
            });
        }

        Ok(Isotope {
            name: self.name.clone(),
            atomic_mass,
            thickness: self.thickness,
            thickness_unit: self.thickness_unit.clone(),
            abundance: self.abundance,
            xs_file_location: self.xs_file_location.clone(),
            density: self.density,
            density_unit: self.density_unit.clone(),
        })
    }
}

/// Read isotopes from a configuration file
///
/// Files with a `.json` extension are read as JSON, anything else as INI.
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<Vec<IsotopeConfig>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        read_config_json(path)
    } else {
        read_config_ini(path)
    }
}

/// Read isotopes from an INI configuration file
///
/// ```rust, no_run
/// # use ntrans_transmission::read_config_ini;
/// let isotopes = read_config_ini("path/to/config.ini").unwrap();
/// ```
pub fn read_config_ini<P: AsRef<Path>>(path: P) -> Result<Vec<IsotopeConfig>> {
    let path = path.as_ref();
    info!("Reading {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| Error::FailedToRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_ini(&content, path)
}

/// Read isotopes from INI formatted text
///
/// ```rust
/// # use ntrans_transmission::parse_config_ini;
/// let isotopes = parse_config_ini(
///     "[a]\nname = U-238\nthickness = 1.0\n\n[b]\nname = C-12\nignore = true",
/// )
/// .unwrap();
///
/// assert_eq!(isotopes.len(), 1);
/// assert_eq!(isotopes[0].name, "U-238");
/// ```
pub fn parse_config_ini(content: &str) -> Result<Vec<IsotopeConfig>> {
    parse_ini(content, Path::new("<memory>"))
}

/// Read isotopes from a JSON configuration file
///
/// ```rust, no_run
/// # use ntrans_transmission::read_config_json;
/// let isotopes = read_config_json("path/to/config.json").unwrap();
/// ```
pub fn read_config_json<P: AsRef<Path>>(path: P) -> Result<Vec<IsotopeConfig>> {
    let path = path.as_ref();
    info!("Reading {}", path.display());
    let file = File::open(path).map_err(|source| Error::FailedToRead {
        path: path.to_path_buf(),
        source,
    })?;
    let configs: Vec<IsotopeConfig> = serde_json::from_reader(BufReader::new(file))?;
    Ok(drop_ignored(configs))
}

fn drop_ignored(configs: Vec<IsotopeConfig>) -> Vec<IsotopeConfig> {
    configs
        .into_iter()
        .filter(|c| {
            if c.ignore {
                debug!("Ignoring {}", c.name);
            }
            !c.ignore
        })
        .collect()
}

/// Raw `key = value` entries of one section
#[derive(Debug, Default)]
struct RawSection {
    name: String,
    entries: HashMap<String, String>,
}

fn parse_ini(content: &str, path: &Path) -> Result<Vec<IsotopeConfig>> {
    let mut defaults = HashMap::new();
    let mut sections: Vec<RawSection> = Vec::new();
    let mut in_defaults = false;

    for (n, line) in content.lines().enumerate() {
        let malformed = || Error::MalformedConfig {
            path: path.to_path_buf(),
            line_number: n + 1,
            line: line.to_string(),
        };

        let (_, kind) = ini_line(line).map_err(|_| malformed())?;

        match kind {
            IniLine::Blank | IniLine::Comment => continue,
            IniLine::Section("DEFAULT") => {
                in_defaults = true;
            }
            IniLine::Section(name) => {
                if sections.iter().any(|s| s.name == name) {
                    return Err(Error::DuplicateSection {
                        path: path.to_path_buf(),
                        section: name.to_string(),
                    });
                }
                in_defaults = false;
                sections.push(RawSection {
                    name: name.to_string(),
                    ..Default::default()
                });
            }
            IniLine::Entry(key, value) => {
                let (section, entries) = match (in_defaults, sections.last_mut()) {
                    (true, _) => ("DEFAULT", &mut defaults),
                    (false, Some(section)) => (section.name.as_str(), &mut section.entries),
                    (false, None) => return Err(malformed()),
                };
                let key = key.to_lowercase();
                if entries.contains_key(&key) {
                    return Err(Error::DuplicateOption {
                        path: path.to_path_buf(),
                        section: section.to_string(),
                        key,
                    });
                }
                entries.insert(key, value.to_string());
            }
        }
    }

    let mut configs = Vec::with_capacity(sections.len());
    for section in &sections {
        if let Some(config) = section_to_config(section, &defaults, path)? {
            configs.push(config);
        }
    }
    Ok(configs)
}

/// Convert a section to a config, `None` for ignored sections
fn section_to_config(
    section: &RawSection,
    defaults: &HashMap<String, String>,
    path: &Path,
) -> Result<Option<IsotopeConfig>> {
    let get = |key: &str| {
        section
            .entries
            .get(key)
            .or_else(|| defaults.get(key))
            .map(String::as_str)
    };

    let invalid = |key: &str, value: &str| Error::InvalidConfigValue {
        path: path.to_path_buf(),
        section: section.name.clone(),
        key: key.to_string(),
        value: value.to_string(),
    };

    let boolean = |key: &str| -> Result<Option<bool>> {
        get(key)
            .map(|v| ini_bool(v).ok_or_else(|| invalid(key, v)))
            .transpose()
    };

    let number = |key: &str| -> Result<Option<f64>> {
        get(key)
            .map(|v| v.parse::<f64>().map_err(|_| invalid(key, v)))
            .transpose()
    };

    if boolean("ignore")?.unwrap_or(false) {
        debug!("Ignoring [{}]", section.name);
        return Ok(None);
    }

    for key in section.entries.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            debug!("Unused key \"{key}\" in [{}]", section.name);
        }
    }

    let mut config = IsotopeConfig::default();
    if let Some(name) = get("name") {
        config.name = name.to_string();
    }
    if let Some(thickness) = number("thickness")? {
        config.thickness = thickness;
    }
    if let Some(unit) = get("thickness_unit") {
        config.thickness_unit = unit.to_string();
    }
    if let Some(abundance) = number("abundance")? {
        config.abundance = abundance;
    }
    if let Some(location) = get("xs_file_location") {
        config.xs_file_location = PathBuf::from(location);
    }
    if let Some(density) = number("density")? {
        config.density = density;
    }
    if let Some(unit) = get("density_unit") {
        config.density_unit = unit.to_string();
    }
    config.atomic_mass = number("atomic_mass")?;

    Ok(Some(config))
}
