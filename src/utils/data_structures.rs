/// this module contains the data structures shared by the engines and the connection cache

/// stores a 2d matrix inside a single 1d array, entry (row, col) lives at row * cols + col
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Clone> {
    data: Vec<T>,

    rows: usize,
    cols: usize,
}

impl<T: Clone> Matrix<T> {

    pub fn new(rows: usize, cols: usize, initial_value: T) -> Self {
        Matrix {
            data: vec![initial_value; rows * cols],
            rows,
            cols
        }
    }

    pub fn empty() -> Self {
        Matrix {
            data: Vec::new(),
            rows: 0,
            cols: 0
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[self.index(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let index = self.index(row, col);

        &mut self.data[index]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let index = self.index(row, col);

        self.data[index] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[(row * self.cols)..((row + 1) * self.cols)]
    }

    /// resizes the matrix to the given dimension and sets all values to the given initial value
    pub fn resize(&mut self, rows: usize, cols: usize, initial_value: T) {
        self.data.clear();
        self.data.resize(rows * cols, initial_value);

        self.rows = rows;
        self.cols = cols;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "matrix index ({}, {}) out of bounds", row, col);

        row * self.cols + col
    }
}
