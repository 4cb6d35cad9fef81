use crate::cursor::{Cursor, Iterable};
use crate::error::R;
use log::trace;

/// Wraps a cursor so the next element can be inspected without consuming it.
pub struct Lookahead<S: Cursor> {
    source: S,
    buffered: Option<S::Item>,
}

impl<S: Cursor> Lookahead<S> {
    pub fn new(source: S) -> Lookahead<S> {
        Lookahead {
            source,
            buffered: None,
        }
    }

    /// Returns the element the next `try_next` will yield. Pulls from the
    /// source at most once until that element has been consumed.
    pub fn peek(&mut self) -> R<&S::Item> {
        let item = match self.buffered.take() {
            Some(item) => item,
            None => {
                let item = self.source.try_next()?;
                trace!("buffered lookahead element");
                item
            }
        };
        Ok(self.buffered.get_or_insert(item))
    }
}

pub fn lookahead<S: Iterable>(iterable: S) -> Lookahead<S::Cursor> {
    Lookahead::new(iterable.cursor())
}

impl<S: Cursor> Cursor for Lookahead<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.buffered.is_some() || self.source.has_next()
    }

    fn try_next(&mut self) -> R<S::Item> {
        match self.buffered.take() {
            Some(item) => Ok(item),
            None => self.source.try_next(),
        }
    }
}

impl<S: Cursor> Iterator for Lookahead<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.try_next().ok()
    }
}
