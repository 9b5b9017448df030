pub mod io;
pub mod parsing;
pub mod tag;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    Conversion, FormatError, LineClass, classify, convert, is_end_marker, merge_adjacent_chunks,
    transform_line,
};
pub use tag::random_tag;
