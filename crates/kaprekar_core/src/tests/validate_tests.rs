use proptest::prelude::*;

use super::*;

#[test]
fn accepts_distinct_digit_number() {
    assert_eq!(validate("1234").map(Candidate::value), Ok(1234));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(validate("  9876\n").map(Candidate::value), Ok(9876));
}

#[test]
fn underscores_between_digits_are_ignored() {
    assert_eq!(validate("1_234").map(Candidate::value), Ok(1234));
    assert_eq!(validate("3_5_2_4").map(Candidate::value), Ok(3524));
}

#[test]
fn misplaced_underscores_are_not_a_number() {
    for text in ["1__234", "_1234", "1234_", "-_1234", "_"] {
        assert_eq!(validate(text), Err(ValidationError::NotANumber), "{text:?}");
    }
}

#[test]
fn unicode_decimal_digits_are_accepted() {
    assert_eq!(validate("１２３４").map(Candidate::value), Ok(1234));
    assert_eq!(validate("٣٥٢٤").map(Candidate::value), Ok(3524));
    assert_eq!(validate("३५२४").map(Candidate::value), Ok(3524));
    assert_eq!(validate("٣٣٢٤"), Err(ValidationError::RepeatedDigits));
    assert_eq!(validate("１２３"), Err(ValidationError::WrongDigitCount));
}

#[test]
fn non_decimal_numerals_are_not_a_number() {
    for text in ["¹²³⁴", "Ⅻ", "½234", "1234²"] {
        assert_eq!(validate(text), Err(ValidationError::NotANumber), "{text:?}");
    }
}

#[test]
fn rejects_non_numeric_text() {
    for text in ["", "+", "-", "abcd", "12a4", "12.34", "1 234", "six"] {
        assert_eq!(validate(text), Err(ValidationError::NotANumber), "{text:?}");
    }
}

#[test]
fn signed_and_huge_integers_are_wrong_digit_count() {
    assert_eq!(validate("-1234"), Err(ValidationError::WrongDigitCount));
    assert_eq!(validate("+999"), Err(ValidationError::WrongDigitCount));
    assert_eq!(
        validate("123456789012345678901234567890"),
        Err(ValidationError::WrongDigitCount)
    );
}

#[test]
fn every_value_outside_four_digits_is_wrong_digit_count() {
    for value in (0..1000).chain(10_000..20_000) {
        assert_eq!(
            validate(&value.to_string()),
            Err(ValidationError::WrongDigitCount),
            "{value}"
        );
    }
}

#[test]
fn every_four_digit_value_is_accepted_or_repeated() {
    for value in 1000u16..=9999 {
        let text = value.to_string();
        let mut digits: Vec<char> = text.chars().collect();
        digits.sort_unstable();
        digits.dedup();

        match validate(&text) {
            Ok(candidate) => {
                assert_eq!(digits.len(), 4, "{value}");
                assert_eq!(candidate.value(), value);
            }
            Err(error) => {
                assert!(digits.len() < 4, "{value}");
                assert_eq!(error, ValidationError::RepeatedDigits);
            }
        }
    }
}

proptest! {
    #[test]
    fn text_with_a_letter_is_not_a_number(text in "[0-9]{0,3}[a-zA-Z][0-9a-zA-Z]{0,6}") {
        prop_assert_eq!(validate(&text), Err(ValidationError::NotANumber));
    }
}
