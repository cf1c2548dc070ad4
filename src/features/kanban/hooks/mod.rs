pub mod use_board;
pub mod use_task_sidebar;

pub use use_board::*;
pub use use_task_sidebar::*;
