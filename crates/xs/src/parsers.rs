//! Library of parser functions for cross-section files

// nom parser combinators
use nom::character::complete::{multispace0, multispace1};
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

/// Marker that opens the numeric block of an isotope
pub(crate) const DATA_MARKER: &str = "#data...";

/// Sentinel that closes the block and ends the scan
pub(crate) const END_MARKER: &str = "//";

// ! Boolean checks
/// Check for the `#data...` marker anywhere in the line
pub(crate) fn is_data_marker(i: &str) -> bool {
    i.contains(DATA_MARKER)
}

/// Check for the `//` sentinel anywhere in the line
pub(crate) fn is_end_marker(i: &str) -> bool {
    i.contains(END_MARKER)
}

/// Comment lines start with `#`, leading whitespace is not stripped
pub(crate) fn is_comment(i: &str) -> bool {
    i.starts_with('#')
}

/// Check for any mention of the isotope name, as a plain substring
pub(crate) fn mentions_isotope(i: &str, isotope: &str) -> bool {
    i.contains(isotope)
}

// ! Parsers
/// Exactly two whitespace separated doubles, `<energy MeV> <xs barns>`
///
/// Anything else on the line is a failure, including blank lines.
pub(crate) fn data_line(i: &str) -> IResult<&str, (f64, f64)> {
    all_consuming(delimited(
        multispace0,
        separated_pair(double, multispace1, double),
        multispace0,
    ))(i)
}
