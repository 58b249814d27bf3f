//! Buffered reader for cross-section files
//!
//! The file is opened per call and read line-by-line, so at most a single
//! line is held in memory alongside the captured data. The handle is dropped
//! on every exit path, including errors.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parsers::data_line;
use crate::scanner::BlockScanner;
use crate::series::CrossSectionSeries;

// external crates
use log::{debug, info};

/// Placeholder source name for in-memory content
const IN_MEMORY: &str = "<memory>";

/// Read the cross-section block for one isotope from a file
///
/// Returns the `(energy, cross-section)` pairs found between the `#data...`
/// marker and the `//` sentinel that follow the first line mentioning
/// `isotope`. Energies are converted from MeV to eV.
///
/// - `path` - Path to the cross-section file, can be [&str], [String], [Path], etc...
/// - `isotope` - Name used to find the block, matched as a substring
///
/// A file that never mentions the isotope is an
/// [IsotopeNotFound](Error::IsotopeNotFound) error. If the name is found but
/// no data follows, the series is empty and it is up to the caller to decide
/// what that means.
///
/// Example
/// ```rust, no_run
/// # use ntrans_xs::{read_xs_file, CrossSectionSeries};
/// let series: CrossSectionSeries = read_xs_file("path/to/xs.dat", "U-235").unwrap();
/// println!("{series}");
/// ```
pub fn read_xs_file<P: AsRef<Path>>(path: P, isotope: &str) -> Result<CrossSectionSeries> {
    let path = path.as_ref();
    info!("Reading {isotope} cross-sections from {path:?}");

    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    scan_lines(BufReader::new(file).lines(), isotope, path)
}

/// Parse the cross-section block for one isotope from a string
///
/// Same rules as [read_xs_file()], useful when the content is already in
/// memory.
///
/// ```rust
/// # use ntrans_xs::parse_xs_str;
/// let content = "A\n#data...\n1.0 2.5\n2.0 3.0\n//\n";
/// let series = parse_xs_str(content, "A").unwrap();
/// assert_eq!(series.as_slice(), &[(1.0e6, 2.5), (2.0e6, 3.0)]);
/// ```
pub fn parse_xs_str(content: &str, isotope: &str) -> Result<CrossSectionSeries> {
    let lines = content.lines().map(|l| Ok(l.to_string()));
    scan_lines(lines, isotope, Path::new(IN_MEMORY))
}

/// Drive the scanner over a stream of lines
fn scan_lines<I>(lines: I, isotope: &str, source: &Path) -> Result<CrossSectionSeries>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut scanner = BlockScanner::new(isotope);
    let mut series = CrossSectionSeries::new();

    for (idx, line) in lines.enumerate() {
        let line = line.map_err(|source_err| Error::Io {
            path: source.to_path_buf(),
            source: source_err,
        })?;

        if let Some(data) = scanner.step(&line) {
            let (energy, xs) = parse_data(data, isotope, source, idx + 1)?;
            series.push(energy * 1.0e6, xs);
        }

        if scanner.is_done() {
            break;
        }
    }

    if !scanner.is_found() {
        return Err(Error::IsotopeNotFound {
            isotope: isotope.to_string(),
            path: source.to_path_buf(),
        });
    }

    debug!("{isotope}: captured {} points from {source:?}", series.len());
    Ok(series)
}

/// Convert a captured line to `(energy MeV, xs barns)`
fn parse_data(line: &str, isotope: &str, source: &Path, line_number: usize) -> Result<(f64, f64)> {
    match data_line(line) {
        Ok((_, pair)) => Ok(pair),
        Err(_) => Err(Error::InvalidDataLine {
            isotope: isotope.to_string(),
            path: source.to_path_buf(),
            line_number,
            line: line.to_string(),
        }),
    }
}
