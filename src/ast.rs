use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub ranks: Vec<Rank>,
}

/// A basic architecture unit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default)]
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "impl")]
    pub impl_: String,
    #[serde(default)]
    pub outline: String,
    #[serde(default)]
    pub fill_color: String,
    #[serde(default)]
    pub font_color: String,
    #[serde(default)]
    pub rounded: bool,
}

impl Component {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }
}

/// A fan-out link from one component to many.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Connection {
    pub origin: String,
    #[serde(default)]
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Target {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub dashed: bool,
    #[serde(default)]
    pub dir: String,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rank {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: Vec<String>,
}

/// Trimmed `s`, or `None` when it is blank.
pub(crate) fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
