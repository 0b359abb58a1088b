use crate::{matrix::Matrix, numeric::Numeric, vector::Vector};

/// Iterator over the rows of a [`Matrix`], as slices.
pub struct Rows<'a, T> {
    m: &'a Matrix<T>,
    cur: usize,
}

impl<'a, T> Rows<'a, T> {
    pub(crate) fn new(m: &'a Matrix<T>) -> Self {
        Self { m, cur: 0 }
    }
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur >= self.m.n_rows() {
            return None;
        }
        let row = self.m.row_slice(self.cur);
        self.cur += 1;

        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.m.n_rows() - self.cur;
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for Rows<'a, T> {}

/// Iterator over the columns of a [`Matrix`]. Each column is copied out into
/// a fresh [`Vector`].
pub struct Columns<'a, T> {
    m: &'a Matrix<T>,
    cur: usize,
}

impl<'a, T> Columns<'a, T> {
    pub(crate) fn new(m: &'a Matrix<T>) -> Self {
        Self { m, cur: 0 }
    }
}

impl<'a, T: Numeric> Iterator for Columns<'a, T> {
    type Item = Vector<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur >= self.m.n_cols() {
            return None;
        }
        let col = self.m.column_unchecked(self.cur);
        self.cur += 1;

        Some(col)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.m.n_cols() - self.cur;
        (n, Some(n))
    }
}

impl<'a, T: Numeric> ExactSizeIterator for Columns<'a, T> {}
