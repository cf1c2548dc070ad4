pub mod kanban;
pub mod projects;

pub use kanban::Kanban;
pub use projects::Projects;
