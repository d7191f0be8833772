pub mod navigation;
pub mod todo_ops;
