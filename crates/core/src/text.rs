use std::{convert::Infallible, marker::PhantomData};

use crate::Callable;

/// A predicate that is true when a string reads the same reversed.
///
/// Strings are compared character by character, so multi-byte characters are
/// reversed as whole characters. The empty string is a palindrome.
///
/// # Example
///
/// ```
/// use looper_core::{Callable, Palindrome};
///
/// let is_palindrome = Palindrome::new();
/// assert!(is_palindrome.call("tattarrattat").unwrap());
/// assert!(!is_palindrome.call("monday").unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Palindrome<S> {
    _marker: PhantomData<S>,
}

impl<S> Palindrome<S> {
    /// Creates a new palindrome predicate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> Default for Palindrome<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Callable for Palindrome<S>
where
    S: AsRef<str>,
{
    type Input = S;
    type Output = bool;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let word = input.as_ref();
        Ok(word.chars().eq(word.chars().rev()))
    }
}

/// A callable that upper-cases a string.
#[derive(Debug, Clone, Copy)]
pub struct Uppercase<S> {
    _marker: PhantomData<S>,
}

impl<S> Uppercase<S> {
    /// Creates a new upper-casing callable.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> Default for Uppercase<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Callable for Uppercase<S>
where
    S: AsRef<str>,
{
    type Input = S;
    type Output = String;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.as_ref().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindromes() {
        let is_palindrome = Palindrome::new();

        for word in ["mom", "bob", "tattarrattat", "detartrated", "a", ""] {
            assert_eq!(is_palindrome.call(word), Ok(true), "{word:?}");
        }

        for word in ["hello", "monday", "ruby", "ab"] {
            assert_eq!(is_palindrome.call(word), Ok(false), "{word:?}");
        }
    }

    #[test]
    fn palindromes_compare_characters() {
        assert_eq!(Palindrome::new().call("été"), Ok(true));
        assert_eq!(Palindrome::new().call(String::from("añb")), Ok(false));
    }

    #[test]
    fn palindromes_are_case_sensitive() {
        assert_eq!(Palindrome::new().call("Bob"), Ok(false));
    }

    #[test]
    fn uppercase_words() {
        let upcase = Uppercase::new();

        assert_eq!(upcase.call("hello"), Ok("HELLO".to_string()));
        assert_eq!(upcase.call("from"), Ok("FROM".to_string()));
        assert_eq!(
            Uppercase::new().call(String::from("straße")),
            Ok("STRASSE".to_string())
        );
    }
}
