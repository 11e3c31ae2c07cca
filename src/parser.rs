use crate::ast::Draft;
use crate::error::Result;

pub fn parse_draft(input: &str) -> Result<Draft> {
    let draft: Draft = serde_yaml::from_str(input)?;
    tracing::debug!(
        components = draft.components.len(),
        connections = draft.connections.len(),
        ranks = draft.ranks.len(),
        "decoded draft"
    );
    Ok(draft)
}
