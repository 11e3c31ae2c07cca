use crate::ast::{Target, non_blank};
use crate::error::Result;
use crate::renderer::Graph;

pub const DEFAULT_COLOR: &str = "#707070";

/// Draws one directed edge from `origin` to `target.id`, styled by the target.
pub fn draw(graph: &mut Graph, origin: &str, target: &Target) -> Result<()> {
    let edge = graph.edge(origin, &target.id)?;
    edge.attr("color", non_blank(&target.color).unwrap_or(DEFAULT_COLOR));
    if let Some(label) = non_blank(&target.label) {
        edge.attr("label", label);
    }
    if target.dashed {
        edge.attr("style", "dashed");
    }
    if let Some(dir) = non_blank(&target.dir) {
        edge.attr("dir", dir);
    }
    if target.highlight {
        edge.attr("penwidth", "2").attr("fontname", "Fira Mono Bold");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn graph() -> Graph {
        let mut g = Graph::directed();
        g.node("a");
        g.node("b");
        g
    }

    #[test]
    fn plain_target_gets_default_color_only() {
        let mut g = graph();
        let target = Target {
            id: "b".to_string(),
            ..Target::default()
        };
        draw(&mut g, "a", &target).unwrap();
        let e = &g.edges()[0];
        assert_eq!((e.from(), e.to()), ("a", "b"));
        assert_eq!(e.value("color"), Some(DEFAULT_COLOR));
        assert_eq!(e.value("label"), None);
        assert_eq!(e.value("style"), None);
        assert_eq!(e.value("dir"), None);
        assert_eq!(e.value("penwidth"), None);
    }

    #[test]
    fn styled_target() {
        let mut g = graph();
        let target = Target {
            id: "b".to_string(),
            label: "gRPC".to_string(),
            color: "#ff0000".to_string(),
            dashed: true,
            dir: "both".to_string(),
            highlight: true,
        };
        draw(&mut g, "a", &target).unwrap();
        let e = &g.edges()[0];
        assert_eq!(e.value("label"), Some("gRPC"));
        assert_eq!(e.value("color"), Some("#ff0000"));
        assert_eq!(e.value("style"), Some("dashed"));
        assert_eq!(e.value("dir"), Some("both"));
        assert_eq!(e.value("penwidth"), Some("2"));
    }

    #[test]
    fn dangling_target_is_an_error() {
        let mut g = graph();
        let target = Target {
            id: "nowhere".to_string(),
            ..Target::default()
        };
        let err = draw(&mut g, "a", &target).unwrap_err();
        assert!(matches!(err, Error::UnknownNode { ref id } if id == "nowhere"));
    }
}
