use crate::error::{Error, R};
use source::Source;
use std::iter::Peekable;

/// A forward-only, single-pass cursor that can tell whether another element
/// is available before pulling it.
///
/// `has_next` takes `&mut self` because answering it may require internal
/// bookkeeping, e.g. buffering one element or skipping empty sub-sequences.
/// It never changes which element `try_next` returns next.
pub trait Cursor {
    type Item;

    fn has_next(&mut self) -> bool;

    /// Pulls the next element, or fails with [`Error::Exhausted`].
    fn try_next(&mut self) -> R<Self::Item>;

    /// Cursors are read-only views.
    fn remove(&mut self) -> R<()> {
        Err(Error::UnsupportedOperation)
    }

    /// A cursor is its own iterator handle: this hands back the same cursor,
    /// positioned where it already is.
    fn iterator(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }
}

/// Anything that can produce a fresh [`Cursor`] over its elements.
pub trait Iterable {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(self) -> Self::Cursor;
}

impl<T: IntoIterator> Iterable for T {
    type Item = T::Item;
    type Cursor = Peekable<T::IntoIter>;

    fn cursor(self) -> Peekable<T::IntoIter> {
        self.into_iter().peekable()
    }
}

impl<I: Iterator> Cursor for Peekable<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    fn try_next(&mut self) -> R<I::Item> {
        self.next().ok_or(Error::Exhausted)
    }
}

impl<A: 'static> Cursor for Source<A> {
    type Item = A;

    fn has_next(&mut self) -> bool {
        Source::has_next(self)
    }

    fn try_next(&mut self) -> R<A> {
        Source::next(self).ok_or(Error::Exhausted)
    }
}
