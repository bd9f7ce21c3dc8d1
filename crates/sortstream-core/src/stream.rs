//! The sorted stream capability and its reference adapters.
//!
//! A `SortedStream` is pull-based: `pull` yields the next value in the declared
//! order or `None` once exhausted. There is no rewind and no peek. Every stream
//! in this workspace is fused: after the first `None`, `pull` keeps returning
//! `None`.

use std::iter::FusedIterator;

/// Pull-based source of values in a caller-declared sort order.
///
/// Implementors must never yield a value after having returned `None`.
pub trait SortedStream {
    type Item: Ord;

    /// Next value in stream order, or `None` when permanently exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Borrow this stream as an `Iterator`.
    fn pulled(&mut self) -> Pulled<&mut Self>
    where
        Self: Sized,
    {
        Pulled(self)
    }

    /// Turn this stream into an `Iterator`.
    fn into_pulled(self) -> Pulled<Self>
    where
        Self: Sized,
    {
        Pulled(self)
    }
}

impl<S: SortedStream + ?Sized> SortedStream for &mut S {
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        (**self).pull()
    }
}

impl<S: SortedStream + ?Sized> SortedStream for Box<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        (**self).pull()
    }
}

/// `Iterator` view over a `SortedStream`.
#[derive(Debug)]
pub struct Pulled<S>(S);

impl<S: SortedStream> Iterator for Pulled<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.0.pull()
    }
}

impl<S: SortedStream> FusedIterator for Pulled<S> {}

/// Owned buffer plus cursor. Used for fixed reference data and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecStream<T> {
    items: Vec<T>,
    pos: usize,
}

impl<T> VecStream<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, pos: 0 }
    }

    /// Rewind the cursor so the same data can be drained again.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Values not yet pulled.
    pub fn remaining(&self) -> &[T] {
        &self.items[self.pos..]
    }

    pub fn len(&self) -> usize {
        self.items.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Vec<T>> for VecStream<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Ord + Clone> SortedStream for VecStream<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }
}

/// Adapts any iterator that is already sorted (e.g. a posting-list reader).
#[derive(Debug, Clone)]
pub struct IterStream<I> {
    inner: Option<I>,
}

impl<I> IterStream<I> {
    pub fn new(inner: I) -> Self {
        Self { inner: Some(inner) }
    }
}

impl<I> SortedStream for IterStream<I>
where
    I: Iterator,
    I::Item: Ord,
{
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        let item = self.inner.as_mut()?.next();
        if item.is_none() {
            // Drop the source so a non-fused iterator cannot resurrect.
            self.inner = None;
        }
        item
    }
}
