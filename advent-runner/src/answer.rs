//! Answer values returned by solutions and their normalized form

use std::fmt;

/// What a part returns: either a direct value or a lazily produced trace
///
/// A trace is any iterator of intermediate states where only the final item is
/// the answer. Both shapes are normalized the same way by [`Answer::resolve`].
///
/// # Example
///
/// ```
/// use advent_runner::{Answer, PartAnswer};
///
/// assert_eq!(Answer::from(42).resolve(), PartAnswer::Solved("42".into()));
///
/// let trace = Answer::trace((1..=4).map(|n| n * n));
/// assert_eq!(trace.resolve(), PartAnswer::Solved("16".into()));
/// ```
pub enum Answer {
    /// A fully computed value
    Value(String),
    /// A lazy sequence whose last item is the answer
    Trace(Box<dyn Iterator<Item = String>>),
}

impl Answer {
    /// Wrap an iterator whose last item is the answer
    pub fn trace<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
        I::IntoIter: 'static,
    {
        Answer::Trace(Box::new(items.into_iter().map(|item| item.to_string())))
    }

    /// Normalize into a single value, draining a trace and keeping its last item
    ///
    /// An empty trace produced nothing, so it resolves to
    /// [`PartAnswer::NotImplemented`].
    pub fn resolve(self) -> PartAnswer {
        match self {
            Answer::Value(value) => PartAnswer::Solved(value),
            Answer::Trace(items) => items
                .last()
                .map_or(PartAnswer::NotImplemented, PartAnswer::Solved),
        }
    }
}

impl fmt::Debug for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Answer::Trace(_) => f.write_str("Trace(..)"),
        }
    }
}

macro_rules! answer_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Answer::Value(value.to_string())
                }
            }
        )*
    };
}

answer_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, &str, String,
);

/// A normalized answer for one part
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartAnswer {
    /// The part produced this value
    Solved(String),
    /// The solution does not implement this part
    NotImplemented,
}

impl PartAnswer {
    pub fn is_implemented(&self) -> bool {
        matches!(self, PartAnswer::Solved(_))
    }

    /// The answer text, if the part is implemented
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            PartAnswer::Solved(value) => Some(value),
            PartAnswer::NotImplemented => None,
        }
    }
}

impl fmt::Display for PartAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartAnswer::Solved(value) => f.write_str(value),
            PartAnswer::NotImplemented => f.write_str("not implemented"),
        }
    }
}
