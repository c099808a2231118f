pub mod dots;

pub use dots::{Dot, DotField, dot_count};
