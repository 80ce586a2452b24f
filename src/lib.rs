//! Boundary search over monotonic predicates, occurrence lookup in sorted
//! sequences, and the small console-side collaborators (line input, matrix
//! pretty-printing) that feed and display them.

pub mod algo;
pub mod lines;
pub mod lookup;
pub mod matrix;
pub mod sink;

pub use algo::{first_true, last_true};
pub use lines::{BufLines, LineError, LineSource};
pub use lookup::{
    first_index_of, first_index_of_by, last_index_of, last_index_of_by, SortedLookup,
};
pub use matrix::{Align, Matrix, Renderer};
pub use sink::{IoSink, LineSink};
