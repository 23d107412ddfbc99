#![cfg(feature = "serde")]
#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

use serde_derive::{Deserialize, Serialize};

use crate::NonEmpty;

/// The serialized representation of a [`NonEmpty`] collection.
///
/// Deserialization goes through this proxy so that the non-empty type can reject empty input with
/// [`EmptyError`][`crate::EmptyError`].
#[derive(Debug, Deserialize, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Serde<T> {
    pub items: T,
}

impl<T> From<NonEmpty<T>> for Serde<T> {
    fn from(items: NonEmpty<T>) -> Self {
        Serde { items: items.items }
    }
}

#[cfg(all(test, feature = "alloc"))]
pub mod harness {
    use core::fmt::Debug;
    use core::iter;
    use rstest::fixture;
    use serde::{Deserialize, Serialize};
    use serde_test::{self, Token};

    use crate::EmptyError;

    #[fixture]
    pub fn sequence(#[default(5)] n: u8) -> impl Iterator<Item = Token> {
        iter::once(Token::Seq {
            len: Some(usize::from(n)),
        })
        .chain((0..n).map(Token::U8))
        .chain(iter::once(Token::SeqEnd))
    }

    pub fn assert_into_and_from_tokens_eq<T, U>(items: T, tokens: impl Iterator<Item = Token>)
    where
        T: Debug + for<'de> Deserialize<'de> + PartialEq + Serialize,
        U: FromIterator<Token> + AsRef<[Token]>,
    {
        let tokens: U = tokens.collect();
        serde_test::assert_tokens(&items, tokens.as_ref());
    }

    pub fn assert_deserialize_error_eq_empty_error<T, U>(tokens: impl Iterator<Item = Token>)
    where
        T: Debug + for<'de> Deserialize<'de> + PartialEq,
        U: FromIterator<Token> + AsRef<[Token]>,
    {
        let tokens: U = tokens.collect();
        serde_test::assert_de_tokens_error::<T>(
            tokens.as_ref(),
            &alloc::format!("{}", EmptyError),
        );
    }
}
