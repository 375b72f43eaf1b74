pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use paths::format_path_with_tilde;
pub use terminal::sanitize;
pub use timestamps::{format_age, format_timestamp};
