pub mod entity;
pub mod envelope;
pub mod project;
pub mod status;
pub mod task;

pub use entity::{Describe, Entity};
pub use envelope::ApiEnvelope;
pub use project::{label_for, NamedRef, Project, Sprint, User};
pub use status::{Status, StatusKey};
pub use task::{NewTask, Task, TaskPatch};
