//! Resumable, chunked listings.
//!
//! Both collection and image listings are a [`Paged`] cursor over an
//! immutable [`ListSource`]. The source fixes the sequence when the listing
//! is created; the cursor only moves forward.
//!
//! ## Reading
//!
//! [`Paged::read_list`] takes a batch size `n`:
//!
//! | `n`   | Returns                      | Status                                        |
//! |-------|------------------------------|-----------------------------------------------|
//! | `<= 0`| every remaining item         | always [`ListStatus::More`] ("drain" mode)    |
//! | `> 0` | up to `n` remaining items    | [`ListStatus::EndOfSequence`] once the batch reaches the end |
//!
//! A bounded read on an already exhausted cursor returns an empty batch with
//! `EndOfSequence`, so a loop like
//!
//! ```text
//! loop {
//!     let batch = list.read_list(10);
//!     handle(batch.items);
//!     if batch.status.is_end() { break; }
//! }
//! ```
//!
//! terminates whether or not the length is a multiple of the batch size.
//!
//! Items are produced by [`ListSource::get`] at read time, so sources can
//! store a cheap representation (names) and build the real value lazily.
//!
//! A cursor has a single owner. Callers wanting parallel consumption ask the
//! store or collection for another listing.

/// Outcome of a [`Paged::read_list`] call beyond the items themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// More items may follow (always the status in drain mode).
    More,
    /// This batch reached the end of the sequence.
    EndOfSequence,
}

impl ListStatus {
    pub fn is_end(self) -> bool {
        self == ListStatus::EndOfSequence
    }
}

/// One batch returned by [`Paged::read_list`].
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    pub items: Vec<T>,
    pub status: ListStatus,
}

impl<T> Batch<T> {
    pub fn is_end(&self) -> bool {
        self.status.is_end()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Fixed, indexable backing sequence of a listing.
pub trait ListSource {
    type Item;

    fn len(&self) -> usize;

    /// Build the item at `index`. Called only with `index < len()`.
    fn get(&self, index: usize) -> Self::Item;
}

/// Forward-only cursor over a [`ListSource`].
#[derive(Debug, Clone)]
pub struct Paged<S> {
    source: S,
    cursor: usize,
}

impl<S: ListSource> Paged<S> {
    pub fn new(source: S) -> Self {
        Self { source, cursor: 0 }
    }

    /// Read the next batch; see the module docs for the meaning of `n`.
    pub fn read_list(&mut self, n: isize) -> Batch<S::Item> {
        let len = self.source.len();

        if n <= 0 {
            let items = self.take(len);
            return Batch {
                items,
                status: ListStatus::More,
            };
        }

        if self.cursor >= len {
            return Batch {
                items: Vec::new(),
                status: ListStatus::EndOfSequence,
            };
        }

        let high = self.cursor.saturating_add(n as usize).min(len);
        let items = self.take(high);
        let status = if self.cursor >= len {
            ListStatus::EndOfSequence
        } else {
            ListStatus::More
        };
        Batch { items, status }
    }

    /// Total number of items in the listing.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.len() == 0
    }

    /// Items not yet returned.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.source.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Materialize `[cursor, high)` and move the cursor to `high`.
    fn take(&mut self, high: usize) -> Vec<S::Item> {
        let items = (self.cursor..high).map(|i| self.source.get(i)).collect();
        self.cursor = high;
        items
    }
}

impl<S: ListSource> Iterator for Paged<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.source.len() {
            return None;
        }
        let item = self.source.get(self.cursor);
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<S: ListSource> ExactSizeIterator for Paged<S> {}

impl<T: Clone> ListSource for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }
}
