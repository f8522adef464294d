mod picker;
mod reader;

pub use picker::{EXCLUDED_DIRS, SUPPORTED_EXTENSIONS, find_candidates};
pub use reader::{InputReader, MAX_INPUT_SIZE};
