pub mod config;
pub mod todo;
pub mod todo_file;

pub use config::*;
pub use todo::*;
pub use todo_file::*;
