//! Parsers for INI style isotope configuration files

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::take_till1;
use nom::character::complete::{char, one_of, space0};
use nom::combinator::{all_consuming, map, rest, verify};
use nom::sequence::{delimited, separated_pair, terminated};
use nom::IResult;

/// Classification of a single configuration line
#[derive(Debug, PartialEq)]
pub(crate) enum IniLine<'a> {
    Blank,
    Comment,
    Section(&'a str),
    Entry(&'a str, &'a str),
}

/// Work out what a configuration line is
///
/// Whitespace around the line, keys and values is ignored. Comments are full
/// lines starting with `#` or `;`, there are no inline comments.
pub(crate) fn ini_line(i: &str) -> IResult<&str, IniLine<'_>> {
    let i = i.trim();
    if i.is_empty() {
        Ok((i, IniLine::Blank))
    } else if i.starts_with('#') || i.starts_with(';') {
        Ok((i, IniLine::Comment))
    } else {
        alt((
            map(all_consuming(section_header), IniLine::Section),
            map(entry, |(key, value)| IniLine::Entry(key, value)),
        ))(i)
    }
}

/// Section header, e.g. `[U-235]`
fn section_header(i: &str) -> IResult<&str, &str> {
    terminated(
        delimited(char('['), take_till1(|c| c == ']'), char(']')),
        space0,
    )(i)
}

/// Key value pair separated by `=` or `:`, e.g. `thickness = 0.5`
fn entry(i: &str) -> IResult<&str, (&str, &str)> {
    let key = verify(take_till1(|c| c == '=' || c == ':'), |k: &str| {
        !k.trim().is_empty()
    });
    let (i, (key, value)) = separated_pair(key, one_of("=:"), rest)(i)?;
    Ok((i, (key.trim(), value.trim())))
}

/// Boolean words, e.g. `yes`/`no`, `on`/`off`, `1`/`0`
pub(crate) fn ini_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(i: &str) -> IniLine<'_> {
        ini_line(i).unwrap().1
    }

    #[test]
    fn classify_lines() {
        assert_eq!(kind(""), IniLine::Blank);
        assert_eq!(kind("   \t"), IniLine::Blank);
        assert_eq!(kind("# comment"), IniLine::Comment);
        assert_eq!(kind("  ; comment"), IniLine::Comment);
        assert_eq!(kind("[U-235]"), IniLine::Section("U-235"));
        assert_eq!(kind(" [DEFAULT]  "), IniLine::Section("DEFAULT"));
        assert_eq!(kind("thickness = 0.5"), IniLine::Entry("thickness", "0.5"));
        assert_eq!(kind("density_unit: g/cm3"), IniLine::Entry("density_unit", "g/cm3"));
        assert_eq!(kind("name ="), IniLine::Entry("name", ""));
    }

    #[test]
    fn value_keeps_separators() {
        // only the first separator splits the key from the value
        assert_eq!(
            kind("xs_file_location = C:/data/xs.dat"),
            IniLine::Entry("xs_file_location", "C:/data/xs.dat")
        );
        assert_eq!(
            kind("thickness_unit = atoms/cm2 # not a comment"),
            IniLine::Entry("thickness_unit", "atoms/cm2 # not a comment")
        );
    }

    #[test]
    fn reject_garbage() {
        assert!(ini_line("just some words").is_err());
        assert!(ini_line("= 0.5").is_err());
        assert!(ini_line("[unterminated").is_err());
    }

    #[test]
    fn booleans() {
        assert_eq!(ini_bool("True"), Some(true));
        assert_eq!(ini_bool("on"), Some(true));
        assert_eq!(ini_bool("0"), Some(false));
        assert_eq!(ini_bool("NO"), Some(false));
        assert_eq!(ini_bool("maybe"), None);
    }
}
