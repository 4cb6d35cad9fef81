//! Two single-pass adapters over a small cursor interface:
//!
//! - [`Chained`] flattens an iterable of iterables, skipping empty ones.
//! - [`Lookahead`] adds a non-consuming [`Lookahead::peek`].
//!
//! Both implement [`Cursor`] (`has_next`/`try_next`) as well as
//! [`Iterator`], so they compose with each other and with std adapters.

pub mod chained;
pub mod cursor;
pub mod error;
pub mod lookahead;

pub use crate::chained::{chain_all, Chained};
pub use crate::cursor::{Cursor, Iterable};
pub use crate::error::{Error, R};
pub use crate::lookahead::{lookahead, Lookahead};
