pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{DATA_DIR_ENV, get_data_dir};
pub use paths::{detail_path, format_path_with_tilde, validate_file_size};
pub use terminal::single_line;
