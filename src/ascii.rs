//! ASCII-only character classification.
//!
//! Only `A`-`Z`, `a`-`z` and `0`-`9` are recognised. Every other character,
//! including non-ASCII letters, is punctuation as far as the scanner is
//! concerned.

/// The letter case a character is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Casing {
    Upper,
    Lower,
}

impl Casing {
    /// Re-cases an ASCII letter. Anything else is returned unchanged.
    pub fn apply(self, ch: char) -> char {
        match self {
            Casing::Upper => ch.to_ascii_uppercase(),
            Casing::Lower => ch.to_ascii_lowercase(),
        }
    }

    pub fn of(ch: char) -> Option<Casing> {
        if ch.is_ascii_uppercase() {
            Some(Casing::Upper)
        } else if ch.is_ascii_lowercase() {
            Some(Casing::Lower)
        } else {
            None
        }
    }
}

pub(crate) fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[test]
fn classify() {
    assert_eq!(Casing::of('A'), Some(Casing::Upper));
    assert_eq!(Casing::of('Z'), Some(Casing::Upper));
    assert_eq!(Casing::of('a'), Some(Casing::Lower));
    assert_eq!(Casing::of('z'), Some(Casing::Lower));
    assert_eq!(Casing::of('@'), None);
    assert_eq!(Casing::of('['), None);
    assert_eq!(Casing::of('`'), None);
    assert_eq!(Casing::of('{'), None);
    assert_eq!(Casing::of('5'), None);
    assert_eq!(Casing::of('Ä'), None);
    assert_eq!(Casing::of('ä'), None);

    assert!(is_digit('0'));
    assert!(is_digit('9'));
    assert!(!is_digit('/'));
    assert!(!is_digit(':'));
    assert!(!is_digit('٣'));
}

#[test]
fn apply() {
    assert_eq!(Casing::Upper.apply('a'), 'A');
    assert_eq!(Casing::Upper.apply('z'), 'Z');
    assert_eq!(Casing::Upper.apply('A'), 'A');
    assert_eq!(Casing::Upper.apply('1'), '1');
    assert_eq!(Casing::Upper.apply('ß'), 'ß');
    assert_eq!(Casing::Upper.apply('é'), 'é');

    assert_eq!(Casing::Lower.apply('A'), 'a');
    assert_eq!(Casing::Lower.apply('Z'), 'z');
    assert_eq!(Casing::Lower.apply('a'), 'a');
    assert_eq!(Casing::Lower.apply('_'), '_');
    assert_eq!(Casing::Lower.apply('É'), 'É');
}
