//! US phone number extraction from page text.

use regex::Regex;

pub struct PhoneExtractor {
    patterns: Vec<Regex>,
}

impl PhoneExtractor {
    pub fn new() -> Self {
        let patterns = [
            // (409) 123-4567
            r"\((\d{3})\)\s*(\d{3})-(\d{4})",
            // 409-123-4567
            r"(\d{3})-(\d{3})-(\d{4})",
            // 409.123.4567
            r"(\d{3})\.(\d{3})\.(\d{4})",
            // 409 123 4567
            r"(\d{3})\s+(\d{3})\s+(\d{4})",
            // anything else, optional leading 1
            r"1?[-.\s]?\(?(\d{3})\)?[-.\s]?(\d{3})[-.\s]?(\d{4})",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid phone pattern"))
        .collect();

        Self { patterns }
    }

    /// First phone number found, formatted as "(XXX) XXX-XXXX"
    pub fn extract(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|pattern| {
            let found = pattern.find(text)?;
            let digits: String = found
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();

            match digits.len() {
                10 => Some(format_digits(&digits)),
                11 if digits.starts_with('1') => Some(format_digits(&digits[1..])),
                _ => None,
            }
        })
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn format_digits(digits: &str) -> String {
    format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
}
