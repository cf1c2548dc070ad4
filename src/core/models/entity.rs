use serde::{Deserialize, Serialize};

use super::project::NamedRef;
use super::task::Task;

/// Common read surface over every entity kind the relationship panel shows.
pub trait Describe {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn status(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Epic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub epic_id: Option<String>,
    #[serde(default)]
    pub story_points: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<NamedRef>,
}

/// Entity kinds returned by `GET /tasks/:id/relations`, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Epic(Epic),
    Story(Story),
    Sprint(SprintInfo),
    Team(Team),
    Task(Task),
}

impl Entity {
    pub fn id(&self) -> &str {
        match self {
            Entity::Epic(e) => &e.id,
            Entity::Story(s) => &s.id,
            Entity::Sprint(s) => &s.id,
            Entity::Team(t) => &t.id,
            Entity::Task(t) => &t.id,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Entity::Epic(_) => "Épico",
            Entity::Story(_) => "História",
            Entity::Sprint(_) => "Sprint",
            Entity::Team(_) => "Equipe",
            Entity::Task(_) => "Tarefa",
        }
    }
}

impl Describe for Entity {
    fn title(&self) -> &str {
        match self {
            Entity::Epic(e) => &e.title,
            Entity::Story(s) => &s.title,
            Entity::Sprint(s) => &s.name,
            Entity::Team(t) => &t.name,
            Entity::Task(t) => &t.title,
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            Entity::Epic(e) => e.description.as_deref(),
            Entity::Story(s) => s.description.as_deref(),
            Entity::Sprint(s) => s.goal.as_deref(),
            Entity::Team(t) => t.description.as_deref(),
            Entity::Task(t) => t.description.as_deref(),
        }
    }

    fn status(&self) -> Option<&str> {
        match self {
            Entity::Epic(e) => e.status.as_deref(),
            Entity::Story(s) => s.status.as_deref(),
            Entity::Sprint(s) => s.status.as_deref(),
            // teams have no workflow state
            Entity::Team(_) => None,
            Entity::Task(t) => Some(t.status_id.as_str()),
        }
    }
}
