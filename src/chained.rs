use crate::cursor::{Cursor, Iterable};
use crate::error::{Error, R};
use log::trace;
use std::iter::FusedIterator;

type InnerCursor<O> = <<O as Cursor>::Item as Iterable>::Cursor;

/// Concatenates the sequences produced by an outer cursor of iterables.
///
/// Empty inner sequences are skipped lazily. `has_next` may have to walk
/// past any number of them, so every inner iterable must be finite for it to
/// return.
pub struct Chained<O>
where
    O: Cursor,
    O::Item: Iterable,
{
    outer: O,
    inner: Option<InnerCursor<O>>,
}

impl<O> Chained<O>
where
    O: Cursor,
    O::Item: Iterable,
{
    pub fn new<S: Iterable<Cursor = O>>(iterables: S) -> Chained<O> {
        let mut outer = iterables.cursor();
        let inner = advance(&mut outer);
        Chained { outer, inner }
    }
}

fn advance<O>(outer: &mut O) -> Option<InnerCursor<O>>
where
    O: Cursor,
    O::Item: Iterable,
{
    if !outer.has_next() {
        trace!("chain exhausted");
        return None;
    }
    trace!("moving to next inner sequence");
    outer.try_next().ok().map(Iterable::cursor)
}

pub fn chain_all<S>(iterables: S) -> Chained<S::Cursor>
where
    S: Iterable,
    <S::Cursor as Cursor>::Item: Iterable,
{
    Chained::new(iterables)
}

impl<O> Cursor for Chained<O>
where
    O: Cursor,
    O::Item: Iterable,
{
    type Item = <O::Item as Iterable>::Item;

    fn has_next(&mut self) -> bool {
        while let Some(inner) = self.inner.as_mut() {
            if inner.has_next() {
                return true;
            }
            self.inner = advance(&mut self.outer);
        }
        false
    }

    fn try_next(&mut self) -> R<Self::Item> {
        match (self.has_next(), self.inner.as_mut()) {
            (true, Some(inner)) => inner.try_next(),
            _ => Err(Error::Exhausted),
        }
    }
}

impl<O> Iterator for Chained<O>
where
    O: Cursor,
    O::Item: Iterable,
{
    type Item = <O::Item as Iterable>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<O> FusedIterator for Chained<O>
where
    O: Cursor,
    O::Item: Iterable,
{
}

#[macro_export]
macro_rules! chained {
    ($($x:expr),*) => {
        $crate::chained::Chained::new(vec![$($x),*])
    };
    ($($x:expr,)*) => {
        $crate::chained![$($x),*]
    };
}
