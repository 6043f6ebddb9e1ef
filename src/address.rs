//! Address text, normalized into the lines that get printed.

use serde::{Deserialize, Serialize};

/// An ordered list of printable lines. Every line is trimmed and non-empty;
/// blank input lines (a missing second street line, say) are dropped rather
/// than printed as gaps.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressBlock {
    lines: Vec<String>,
}

impl AddressBlock {
    /// A block with no lines
    pub fn empty() -> AddressBlock {
        AddressBlock::default()
    }

    /// Build a block from individual lines, trimming each and skipping blanks
    pub fn from_lines<I, S>(lines: I) -> AddressBlock
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .map(|line| line.as_ref().replace('\t', " ").trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        AddressBlock { lines }
    }

    /// Build a block from free text, one line per newline (`\n`, `\r\n` or `\r`)
    pub fn parse(text: &str) -> AddressBlock {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        AddressBlock::from_lines(text.split('\n'))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AddressBlock {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        AddressBlock::from_lines(iter)
    }
}

/// A structured postal address as carriers (and the label form) describe it
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    pub name: Option<String>,
    pub company: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Join city, state and postal code the way US addresses are written:
/// `City, ST 12345`. Missing parts are left out along with their separators.
pub fn locality_line(city: Option<&str>, state: Option<&str>, zip: Option<&str>) -> String {
    let region = [state, zip]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    match city.map(str::trim).filter(|s| !s.is_empty()) {
        Some(city) if !region.is_empty() => format!("{city}, {region}"),
        Some(city) => city.to_string(),
        None => region,
    }
}

impl PostalAddress {
    /// The printable lines of this address: name, company, street lines and the
    /// locality line. Country and phone are not printed.
    pub fn to_block(&self) -> AddressBlock {
        let locality = locality_line(
            non_blank(&self.city),
            non_blank(&self.state),
            non_blank(&self.zip),
        );
        [
            non_blank(&self.name),
            non_blank(&self.company),
            non_blank(&self.street1),
            non_blank(&self.street2),
            Some(locality.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let block = AddressBlock::from_lines(["  Jane Doe ", "", "   ", "\t", "123 Main St"]);
        assert_eq!(block.lines(), &["Jane Doe", "123 Main St"]);
    }

    #[test]
    fn parses_mixed_newlines() {
        let block = AddressBlock::parse("\n Jane Doe\r\n123 Main St\r\rSpringfield, IL 62701\n\n");
        assert_eq!(
            block.lines(),
            &["Jane Doe", "123 Main St", "Springfield, IL 62701"]
        );
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        assert!(AddressBlock::parse(" \n\t\n  ").is_empty());
        assert!(AddressBlock::empty().is_empty());
    }

    #[test]
    fn tabs_inside_lines_become_spaces() {
        let block = AddressBlock::from_lines(["Suite\t4"]);
        assert_eq!(block.lines(), &["Suite 4"]);
    }

    #[test]
    fn postal_address_skips_missing_street2() {
        let address = PostalAddress {
            name: Some("Jane Doe".into()),
            street1: Some("123 Main St".into()),
            street2: Some("  ".into()),
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            zip: Some("62701".into()),
            country: Some("US".into()),
            phone: Some("555-0100".into()),
            ..Default::default()
        };
        assert_eq!(
            address.to_block().lines(),
            &["Jane Doe", "123 Main St", "Springfield, IL 62701"]
        );
    }

    #[test]
    fn postal_address_keeps_street2_and_company() {
        let address = PostalAddress {
            name: Some("Jane Doe".into()),
            company: Some("Acme".into()),
            street1: Some("123 Main St".into()),
            street2: Some("Apt 4".into()),
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            zip: Some("62701".into()),
            ..Default::default()
        };
        assert_eq!(
            address.to_block().lines(),
            &[
                "Jane Doe",
                "Acme",
                "123 Main St",
                "Apt 4",
                "Springfield, IL 62701"
            ]
        );
    }

    #[test]
    fn locality_line_omits_missing_parts() {
        assert_eq!(
            locality_line(Some("Springfield"), Some("IL"), Some("62701")),
            "Springfield, IL 62701"
        );
        assert_eq!(locality_line(Some("Springfield"), None, None), "Springfield");
        assert_eq!(locality_line(None, Some("IL"), Some("62701")), "IL 62701");
        assert_eq!(locality_line(Some(" "), Some(""), None), "");
    }

    #[test]
    fn empty_postal_address_has_no_lines() {
        assert!(PostalAddress::default().to_block().is_empty());
    }
}
