use std::ops::Index;

/// A fixed-arity group of `N` consecutive elements.
///
/// Windows have value semantics: a segmentation engine materializes a
/// fresh window on every read, and writing a window back (where the input
/// supports it) copies its members into the underlying sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window<T, const N: usize> {
    items: [T; N],
}

impl<T, const N: usize> Window<T, N> {
    /// Creates a window from its member values.
    pub fn new(items: [T; N]) -> Self {
        Self { items }
    }

    /// Builds a window by evaluating `f` for each field index.
    pub fn fill_with<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            items: std::array::from_fn(f),
        }
    }

    /// Builds a window field by field, stopping at the first `None`.
    pub fn try_collect<F>(mut f: F) -> Option<Self>
    where
        F: FnMut(usize) -> Option<T>,
    {
        let mut items = Vec::with_capacity(N);
        for k in 0..N {
            items.push(f(k)?);
        }
        match <[T; N]>::try_from(items) {
            Ok(items) => Some(Self { items }),
            Err(_) => None,
        }
    }

    /// Returns the window width.
    pub const fn width(&self) -> usize {
        N
    }

    /// Returns the field at `index`, or `None` if `index >= N`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn at(&self, index: usize) -> &T {
        match self.items.get(index) {
            Some(value) => value,
            None => panic!("window field {index} out of bounds for width {N}"),
        }
    }

    /// Iterates over the fields in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the window, returning its member array.
    pub fn into_inner(self) -> [T; N] {
        self.items
    }
}

impl<T, const N: usize> From<[T; N]> for Window<T, N> {
    fn from(items: [T; N]) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> Index<usize> for Window<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T, const N: usize> IntoIterator for Window<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Window<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Window<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        &self.items == other
    }
}
