//! Recognition of unsigned decimal numbers.
//!
//! A number is a run of ASCII digits containing at most one decimal point and
//! at least one digit: `42`, `3.14`, `2.` and `.5` are numbers, `.` is not.
//! Signs, exponents and hexadecimal forms are never part of a number.

use nom::character::complete::{char, digit0};
use nom::combinator::{opt, recognize};
use nom::sequence::pair;
use nom::IResult;

/// Recognises the longest prefix made of digits with at most one decimal point.
///
/// The recognised slice may be empty or consist of a lone `.`; use
/// [`leading_unsigned`] to get only well-formed numbers.
pub fn recognize_unsigned(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit0, opt(pair(char('.'), digit0))))(input)
}

/// Returns the unsigned number at the start of `input`, if there is one.
///
/// A second decimal point ends the number: for `2.2.2` this returns `2.2`.
pub fn leading_unsigned(input: &str) -> Option<&str> {
    let (_, number) = recognize_unsigned(input).ok()?;
    number
        .bytes()
        .any(|b| b.is_ascii_digit())
        .then_some(number)
}

/// Returns true if the whole of `text` is one unsigned number.
pub fn is_unsigned_number(text: &str) -> bool {
    leading_unsigned(text).is_some_and(|number| number.len() == text.len())
}
