pub mod board;
pub mod column;
pub mod entity_summary;
pub mod filter_bar;
pub mod header;
pub mod priority_badge;
pub mod task_card;
pub mod task_modal;
pub mod task_sidebar;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use entity_summary::EntitySummary;
pub use filter_bar::FilterBar;
pub use header::KanbanHeader;
pub use priority_badge::PriorityBadge;
pub use task_card::TaskCard;
pub use task_modal::{TaskForm, TaskModal};
pub use task_sidebar::TaskSidebar;
