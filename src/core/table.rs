//! Static character to Morse mark table
//!
//! Letters are matched case-insensitively. Characters missing from the
//! table have an empty encoding.

use serde::{Deserialize, Serialize};

/// One unit of a Morse signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Short signal
    Dot,
    /// Long signal
    Dash,
    /// Gap after each encoded character
    Separator,
}

use Mark::{Dash, Dot, Separator};

/// Marks for every supported character
///
/// `L` keeps an extra trailing separator inside its own encoding.
static TABLE: &[(char, &[Mark])] = &[
    ('A', &[Dot, Dash]),
    ('B', &[Dash, Dot, Dot, Dot]),
    ('C', &[Dash, Dot, Dash, Dot]),
    ('D', &[Dash, Dot, Dot]),
    ('E', &[Dot]),
    ('F', &[Dot, Dot, Dash, Dot]),
    ('G', &[Dash, Dash, Dot]),
    ('H', &[Dot, Dot, Dot, Dot]),
    ('I', &[Dot, Dot]),
    ('J', &[Dot, Dash, Dash, Dash]),
    ('K', &[Dash, Dot, Dash]),
    ('L', &[Dot, Dash, Dot, Dot, Separator]),
    ('M', &[Dash, Dash]),
    ('N', &[Dash, Dot]),
    ('O', &[Dash, Dash, Dash]),
    ('P', &[Dot, Dash, Dash, Dot]),
    ('Q', &[Dash, Dash, Dot, Dash]),
    ('R', &[Dot, Dash, Dot]),
    ('S', &[Dot, Dot, Dot]),
    ('T', &[Dash]),
    ('U', &[Dot, Dot, Dash]),
    ('V', &[Dot, Dot, Dot, Dash]),
    ('W', &[Dot, Dash, Dash]),
    ('X', &[Dash, Dot, Dot, Dash]),
    ('Y', &[Dash, Dot, Dash, Dash]),
    ('Z', &[Dash, Dash, Dot, Dot]),
    ('0', &[Dash, Dash, Dash, Dash, Dash]),
    ('1', &[Dot, Dash, Dash, Dash, Dash]),
    ('2', &[Dot, Dot, Dash, Dash, Dash]),
    ('3', &[Dot, Dot, Dot, Dash, Dash]),
    ('4', &[Dot, Dot, Dot, Dot, Dash]),
    ('5', &[Dot, Dot, Dot, Dot, Dot]),
    ('6', &[Dash, Dot, Dot, Dot, Dot]),
    ('7', &[Dash, Dash, Dot, Dot, Dot]),
    ('8', &[Dash, Dash, Dash, Dot, Dot]),
    ('9', &[Dash, Dash, Dash, Dash, Dot]),
    ('.', &[Dot, Dash, Dot, Dash, Dot, Dash]),
    (',', &[Dash, Dash, Dot, Dot, Dash, Dash]),
    (':', &[Dash, Dash, Dash, Dot, Dot, Dot]),
    ('?', &[Dot, Dot, Dash, Dash, Dot, Dot]),
    ('\'', &[Dot, Dash, Dash, Dash, Dash, Dot]),
    ('-', &[Dash, Dot, Dot, Dot, Dot, Dash]),
    (';', &[Dash, Dot, Dash, Dot, Dash, Dot]),
    ('"', &[Dot, Dash, Dot, Dot, Dash, Dot]),
    ('+', &[Dot, Dash, Dot, Dash, Dot]),
    ('/', &[Dash, Dot, Dot, Dash, Dot]),
    ('&', &[Dot, Dash, Dot, Dot, Dot]),
    ('$', &[Dot, Dot, Dot, Dash, Dot, Dot, Dash]),
    ('@', &[Dot, Dash, Dash, Dot, Dash, Dot]),
    ('=', &[Dash, Dot, Dot, Dot, Dash]),
];

/// Look up the marks for a character, empty if it is not supported
pub fn lookup(c: char) -> &'static [Mark] {
    let c = c.to_ascii_uppercase();
    TABLE
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, marks)| *marks)
        .unwrap_or(&[])
}

/// Check whether a character has an encoding
pub fn is_supported(c: char) -> bool {
    !lookup(c).is_empty()
}

/// All characters present in the table, in table order
pub fn supported_chars() -> impl Iterator<Item = char> {
    TABLE.iter().map(|(c, _)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pattern(c: char) -> String {
        lookup(c)
            .iter()
            .map(|mark| match mark {
                Mark::Dot => '.',
                Mark::Dash => '-',
                Mark::Separator => ' ',
            })
            .collect()
    }

    #[test]
    fn test_golden_encodings() {
        let golden = [
            ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
            ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
            ('K', "-.-"), ('L', ".-.. "), ('M', "--"), ('N', "-."), ('O', "---"),
            ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
            ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
            ('Z', "--.."),
            ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
            ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
            ('.', ".-.-.-"), (',', "--..--"), (':', "---..."), ('?', "..--.."),
            ('\'', ".----."), ('-', "-....-"), (';', "-.-.-."), ('"', ".-..-."),
            ('+', ".-.-."), ('/', "-..-."), ('&', ".-..."), ('$', "...-..-"),
            ('@', ".--.-."), ('=', "-...-"),
        ];

        assert_eq!(golden.len(), supported_chars().count());
        for (c, expected) in golden {
            assert_eq!(pattern(c), expected, "encoding of {:?}", c);
        }
    }

    #[test]
    fn test_l_carries_its_own_separator() {
        assert_eq!(lookup('l'), &[Mark::Dot, Mark::Dash, Mark::Dot, Mark::Dot, Mark::Separator]);
        let with_separator: Vec<char> = supported_chars()
            .filter(|c| lookup(*c).contains(&Mark::Separator))
            .collect();
        assert_eq!(with_separator, vec!['L']);
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        for c in 'a'..='z' {
            assert_eq!(lookup(c), lookup(c.to_ascii_uppercase()));
            assert!(is_supported(c));
        }
    }

    #[test]
    fn test_unsupported_characters_are_empty() {
        for c in ['!', '#', '%', '(', ' ', '\n', '\u{7}', 'é', '日'] {
            assert!(lookup(c).is_empty(), "{:?} should not be encoded", c);
            assert!(!is_supported(c));
        }
    }

    #[test]
    fn test_table_has_no_duplicates_or_empty_entries() {
        let mut seen = HashSet::new();
        for (c, marks) in TABLE {
            assert!(seen.insert(*c), "duplicate entry for {:?}", c);
            assert!(!marks.is_empty());
            assert_ne!(marks.first(), Some(&Mark::Separator));
        }
    }
}
