//! Helpers shared by the decoder configuration and the command-line front end.
//!
//! - [`file_list`] - input expansion, including recursive directory walks
//! - [`size`] - byte-count strings such as `64K` or `256MiB`

pub mod file_list;
pub mod size;

pub use file_list::create_file_list;
