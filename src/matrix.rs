use std::fmt::Display;
use std::ops::{Index, IndexMut};

use itertools::Itertools;

use crate::lines::LineError;
use crate::sink::LineSink;

const MARK: &str = "\x1b[33m";
const UNDERLINE: &str = "\x1b[4m";
const INVERSE: &str = "\x1b[7m";
const BG: &str = "\x1b[100m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// A rectangular grid of values, indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<V> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

impl<V> Matrix<V> {
    /// Builds a `rows x cols` matrix by calling `f(row, col)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> V,
    {
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Self { rows, cols, cells }
    }

    /// Builds a `rows x cols` matrix with every cell set to `v`.
    pub fn fill(rows: usize, cols: usize, v: V) -> Self
    where
        V: Clone,
    {
        Self::from_fn(rows, cols, |_, _| v.clone())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, r: usize) -> &[V] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }
}

impl<V> Index<(usize, usize)> for Matrix<V> {
    type Output = V;

    fn index(&self, (r, c): (usize, usize)) -> &V {
        assert!(r < self.rows && c < self.cols);
        &self.cells[r * self.cols + c]
    }
}

impl<V> IndexMut<(usize, usize)> for Matrix<V> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut V {
        assert!(r < self.rows && c < self.cols);
        &mut self.cells[r * self.cols + c]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Middle,
    Right,
}

type CellFn<'a, V> = Box<dyn Fn(usize, usize, &V) -> Option<String> + 'a>;
type MarkFn<'a, V> = Box<dyn Fn(usize, usize, &V) -> bool + 'a>;
type IndentFn<'a> = Box<dyn Fn(usize) -> usize + 'a>;

/// Pretty-prints a matrix into a line sink, one text line per matrix row
/// (two when a secondary value line is configured).
///
/// All options mirror a console table printer: fixed or automatic cell
/// width, alignment, inter-cell spacing, per-row indent, and per-cell ANSI
/// highlighting (color mark, underline, inverse, background).
pub struct Renderer<'a, V> {
    width: Option<usize>,
    nullish: String,
    spacing: usize,
    empty_lines: Option<usize>,
    final_empty_line: bool,
    align: Align,
    value: CellFn<'a, V>,
    second_value: Option<CellFn<'a, V>>,
    indent: Option<IndentFn<'a>>,
    mark: Option<MarkFn<'a, V>>,
    mark_underline: Option<MarkFn<'a, V>>,
    mark_inverse: Option<MarkFn<'a, V>>,
    mark_bg: Option<MarkFn<'a, V>>,
}

impl<'a, V: Display> Default for Renderer<'a, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V: Display> Renderer<'a, V> {
    /// Renderer that formats cells through `Display`.
    pub fn new() -> Self {
        Self::with_value(|_, _, v: &V| Some(v.to_string()))
    }
}

impl<'a, V> Renderer<'a, V> {
    /// Renderer that formats each cell with `f`; cells mapped to `None`
    /// render as the nullish text.
    pub fn with_value<F>(f: F) -> Self
    where
        F: Fn(usize, usize, &V) -> Option<String> + 'a,
    {
        Self {
            width: None,
            nullish: " ".to_owned(),
            spacing: 1,
            empty_lines: None,
            final_empty_line: true,
            align: Align::Left,
            value: Box::new(f),
            second_value: None,
            indent: None,
            mark: None,
            mark_underline: None,
            mark_inverse: None,
            mark_bg: None,
        }
    }

    /// Fixed cell width; when unset, the widest formatted cell decides.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Text standing in for cells whose value formats to `None`.
    pub fn nullish(mut self, nullish: &str) -> Self {
        self.nullish = nullish.to_owned();
        self
    }

    /// Spaces between adjacent cells.
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Blank lines after each row. Defaults to 1 when a secondary value line
    /// is configured, 0 otherwise.
    pub fn empty_lines(mut self, empty_lines: usize) -> Self {
        self.empty_lines = Some(empty_lines);
        self
    }

    /// Whether to end the rendering with one blank line.
    pub fn final_empty_line(mut self, yes: bool) -> Self {
        self.final_empty_line = yes;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Adds a second, dimmed text line under each row.
    pub fn second_value<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, &V) -> Option<String> + 'a,
    {
        self.second_value = Some(Box::new(f));
        self
    }

    /// Leading spaces for each row.
    pub fn indent<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> usize + 'a,
    {
        self.indent = Some(Box::new(f));
        self
    }

    /// Highlights matching cells in yellow.
    pub fn mark<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, &V) -> bool + 'a,
    {
        self.mark = Some(Box::new(f));
        self
    }

    pub fn mark_underline<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, &V) -> bool + 'a,
    {
        self.mark_underline = Some(Box::new(f));
        self
    }

    pub fn mark_inverse<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, &V) -> bool + 'a,
    {
        self.mark_inverse = Some(Box::new(f));
        self
    }

    pub fn mark_bg<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize, &V) -> bool + 'a,
    {
        self.mark_bg = Some(Box::new(f));
        self
    }

    pub fn render<S>(&self, m: &Matrix<V>, out: &mut S) -> Result<(), LineError>
    where
        S: LineSink + ?Sized,
    {
        let mut texts: Vec<Vec<(String, String)>> = Vec::with_capacity(m.rows());
        let mut max_width = 0;

        for r in 0..m.rows() {
            let mut row = Vec::with_capacity(m.cols());
            for c in 0..m.cols() {
                let v = &m[(r, c)];
                let v_str = (self.value)(r, c, v).unwrap_or_else(|| self.nullish.clone());
                max_width = max_width.max(v_str.chars().count());

                let s_str = match &self.second_value {
                    Some(f) => f(r, c, v).unwrap_or_else(|| self.nullish.clone()),
                    None => String::new(),
                };
                max_width = max_width.max(s_str.chars().count());

                row.push((v_str, s_str));
            }
            texts.push(row);
        }

        let width = self.width.unwrap_or(max_width);
        let empty_lines = self
            .empty_lines
            .unwrap_or(if self.second_value.is_some() { 1 } else { 0 });
        let space = " ".repeat(self.spacing);

        for r in 0..m.rows() {
            let pad = " ".repeat(self.indent.as_ref().map_or(0, |f| f(r)));

            let body: String = (0..m.cols())
                .map(|c| self.format_cell(&texts[r][c].0, width, m, r, c, false))
                .join(&space);
            out.write_line(&[pad.as_str(), body.as_str()].concat())?;

            if self.second_value.is_some() {
                let body: String = (0..m.cols())
                    .map(|c| self.format_cell(&texts[r][c].1, width, m, r, c, true))
                    .join(&space);
                out.write_line(&[pad.as_str(), body.as_str()].concat())?;
            }

            for _ in 0..empty_lines {
                out.write_line("")?;
            }
        }

        if self.final_empty_line {
            out.write_line("")?;
        }

        Ok(())
    }

    fn format_cell(
        &self,
        s: &str,
        width: usize,
        m: &Matrix<V>,
        r: usize,
        c: usize,
        second: bool,
    ) -> String {
        let v = &m[(r, c)];
        let on = |f: &Option<MarkFn<'a, V>>| f.as_ref().map_or(false, |f| f(r, c, v));

        let bg = if on(&self.mark_bg) { BG } else { "" };
        let inverse = if on(&self.mark_inverse) { INVERSE } else { "" };
        let mark = if on(&self.mark) { MARK } else { "" };
        let underline = if on(&self.mark_underline) { UNDERLINE } else { "" };
        let dim = if second { DIM } else { "" };

        let len = s.chars().count();
        let prefix_len = match self.align {
            Align::Left => 0,
            Align::Middle => width.saturating_sub(len) / 2,
            Align::Right => width.saturating_sub(len),
        };
        let postfix_len = width.saturating_sub(len + prefix_len);
        let prefix = " ".repeat(prefix_len);
        let postfix = " ".repeat(postfix_len);

        let unstyled = bg.is_empty()
            && inverse.is_empty()
            && mark.is_empty()
            && underline.is_empty()
            && dim.is_empty();
        if unstyled {
            return [prefix.as_str(), s, postfix.as_str()].concat();
        }

        // Styling wraps the padded cell in two runs so background and
        // inverse cover the padding, while underline covers only the text.
        [
            bg,
            inverse,
            mark,
            dim,
            prefix.as_str(),
            underline,
            s,
            RESET,
            bg,
            inverse,
            mark,
            postfix.as_str(),
            RESET,
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_and_indexing() {
        let m = Matrix::from_fn(2, 3, |r, c| r * 10 + c);

        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m[(1, 2)], 12);
        assert_eq!(m.row(1), &[10, 11, 12]);
    }

    #[test]
    fn fill_and_mutation() {
        let mut m = Matrix::fill(2, 2, 7);

        m[(0, 1)] = 9;
        assert_eq!(m.row(0), &[7, 9]);
        assert_eq!(m.row(1), &[7, 7]);
    }

    #[test]
    fn duplicate_is_independent() {
        let m = Matrix::fill(2, 2, 1);
        let mut copy = m.clone();

        copy[(0, 0)] = 5;
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(copy[(0, 0)], 5);
    }

    #[test]
    fn renders_with_auto_width() {
        let m = Matrix::from_fn(2, 2, |r, c| (r * 10 + c) * 11);
        let mut out: Vec<String> = Vec::new();

        Renderer::new().render(&m, &mut out).unwrap();
        // The widest cell ("121") sets the width; left-aligned by default.
        assert_eq!(out, vec!["0   11 ", "110 121", ""]);
    }

    #[test]
    fn no_final_empty_line() {
        let m = Matrix::fill(1, 1, 5);
        let mut out: Vec<String> = Vec::new();

        Renderer::new()
            .final_empty_line(false)
            .render(&m, &mut out)
            .unwrap();
        assert_eq!(out, vec!["5"]);
    }

    #[test]
    fn right_and_middle_alignment() {
        let m = Matrix::from_fn(1, 2, |_, c| if c == 0 { 5 } else { 123 });

        let mut out: Vec<String> = Vec::new();
        Renderer::new()
            .align(Align::Right)
            .final_empty_line(false)
            .render(&m, &mut out)
            .unwrap();
        assert_eq!(out, vec!["  5 123"]);

        let mut out: Vec<String> = Vec::new();
        Renderer::new()
            .align(Align::Middle)
            .final_empty_line(false)
            .render(&m, &mut out)
            .unwrap();
        assert_eq!(out, vec![" 5  123"]);
    }

    #[test]
    fn fixed_width_spacing_and_indent() {
        let m = Matrix::fill(2, 2, 1);
        let mut out: Vec<String> = Vec::new();

        Renderer::new()
            .width(2)
            .spacing(2)
            .indent(|r| r * 4)
            .final_empty_line(false)
            .render(&m, &mut out)
            .unwrap();
        assert_eq!(out, vec!["1   1 ", "    1   1 "]);
    }

    #[test]
    fn custom_value_and_nullish() {
        let m = Matrix::from_fn(1, 3, |_, c| c as i32 - 1);
        let mut out: Vec<String> = Vec::new();

        let fmt = |_: usize, _: usize, v: &i32| {
            if *v < 0 {
                None
            } else {
                Some(format!("v{}", v))
            }
        };
        Renderer::with_value(fmt)
            .nullish(".")
            .final_empty_line(false)
            .render(&m, &mut out)
            .unwrap();
        assert_eq!(out, vec![".  v0 v1"]);
    }

    #[test]
    fn second_value_adds_a_dim_line_and_a_blank() {
        let m = Matrix::fill(1, 2, 3);
        let mut out: Vec<String> = Vec::new();

        Renderer::new()
            .second_value(|r, c, _| Some(format!("{}{}", r, c)))
            .final_empty_line(false)
            .render(&m, &mut out)
            .unwrap();

        let dim_cell = |s: &str| [DIM, s, RESET, RESET].concat();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], "3  3 ");
        assert_eq!(out[1], [dim_cell("00"), " ".to_owned(), dim_cell("01")].concat());
        assert_eq!(out[2], "");
    }

    #[test]
    fn marks_emit_ansi_sequences() {
        let m = Matrix::from_fn(1, 2, |_, c| c);
        let mut out: Vec<String> = Vec::new();

        Renderer::new()
            .mark(|_, c, _| c == 1)
            .final_empty_line(false)
            .render(&m, &mut out)
            .unwrap();

        let expected = ["0 ", MARK, "1", RESET, MARK, RESET].concat();
        assert_eq!(out, vec![expected]);
    }

    #[test]
    fn background_covers_padding_underline_covers_text() {
        let m = Matrix::from_fn(1, 1, |_, _| 7);
        let mut out: Vec<String> = Vec::new();

        Renderer::new()
            .width(3)
            .mark_bg(|_, _, _| true)
            .mark_underline(|_, _, _| true)
            .final_empty_line(false)
            .render(&m, &mut out)
            .unwrap();

        let expected = [BG, "", UNDERLINE, "7", RESET, BG, "  ", RESET].concat();
        assert_eq!(out, vec![expected]);
    }
}
