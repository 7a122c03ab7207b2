mod output;

pub use output::{display_body, display_error, log_verbose, render_body, write_body};
