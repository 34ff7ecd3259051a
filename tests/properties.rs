use identcase::{
    camel_case, cobol_case, kebab_case, macro_case, pascal_case, snake_case, train_case, Case,
};
use proptest::prelude::*;

/// Renders the same sequence of lower-case words in every supported case.
fn spellings(words: &[String]) -> Vec<String> {
    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    let upper: Vec<String> = words.iter().map(|w| w.to_ascii_uppercase()).collect();
    let capitalized: Vec<String> = words.iter().map(|w| capitalize(w)).collect();

    vec![
        words[0].clone() + &capitalized[1..].concat(),
        capitalized.concat(),
        words.join("_"),
        words.join("-"),
        upper.join("_"),
        upper.join("-"),
        capitalized.join("-"),
    ]
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{2,6}", 1..5)
}

proptest! {
    #[test]
    fn source_case_does_not_matter(words in words()) {
        let spellings = spellings(&words);
        for case in Case::ALL {
            let expected = case.convert(&spellings[0]);
            for spelling in &spellings[1..] {
                prop_assert_eq!(&case.convert(spelling), &expected, "{} from {:?}", case, spelling);
            }
        }
    }

    #[test]
    fn words_are_idempotent(words in words()) {
        for case in Case::ALL {
            for spelling in spellings(&words) {
                let once = case.convert(&spelling);
                prop_assert_eq!(case.convert(&once), once);
            }
        }
    }

    #[test]
    fn separated_styles_are_idempotent(s in any::<String>()) {
        let once = snake_case(&s);
        prop_assert_eq!(snake_case(&once), once);
        let once = kebab_case(&s);
        prop_assert_eq!(kebab_case(&once), once);
        let once = train_case(&s);
        prop_assert_eq!(train_case(&once), once);
    }

    #[test]
    fn digits_are_retained(s in "[a-zA-Z0-9_.-]{0,24}") {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        for case in Case::ALL {
            let converted = case.convert(&s);
            let converted_digits: String = converted.chars().filter(char::is_ascii_digit).collect();
            prop_assert_eq!(&converted_digits, &digits);
        }
    }

    #[test]
    fn letters_are_retained(s in any::<String>()) {
        let letters: String = s
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        for case in Case::ALL {
            let converted: String = case
                .convert(&s)
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|ch| ch.to_ascii_lowercase())
                .collect();
            prop_assert_eq!(&converted, &letters);
        }
    }

    #[test]
    fn no_separator_at_either_end(s in any::<String>()) {
        for converted in [snake_case(&s), macro_case(&s)] {
            prop_assert!(!converted.starts_with('_') && !converted.ends_with('_'));
            prop_assert!(!converted.contains("__"));
        }
        for converted in [kebab_case(&s), cobol_case(&s), train_case(&s)] {
            prop_assert!(!converted.starts_with('-') && !converted.ends_with('-'));
            prop_assert!(!converted.contains("--"));
        }
        for converted in [camel_case(&s), pascal_case(&s)] {
            prop_assert!(converted.chars().all(|ch| ch.is_ascii_alphanumeric()));
        }
    }
}
