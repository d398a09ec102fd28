use serde::{Deserialize, Serialize};

/// The author embedded in a [`Document`](super::Document).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Author {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn builder() -> AuthorBuilder {
        AuthorBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct AuthorBuilder {
    id: String,
    name: String,
}

impl AuthorBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Author {
        Author {
            id: self.id,
            name: self.name,
        }
    }
}
