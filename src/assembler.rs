use crate::ast::{Draft, non_blank};
use crate::connection;
use crate::error::{Error, Result};
use crate::id_gen::IdGenerator;
use crate::kind::Registry;
use crate::provider::Provider;
use crate::renderer::Graph;
use crate::sketcher::Stamp;

const FONT: &str = "Fira Mono";

/// Rendering options supplied by the caller rather than the input document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Lay ranks out from bottom to top.
    pub bottom_top: bool,
    /// Draw edges as axis-aligned segments.
    pub ortho: bool,
    pub provider: Option<Provider>,
}

/// Generates the DOT definition of `draft` with the built-in kinds.
pub fn sketch(draft: &Draft, options: &Options) -> Result<String> {
    let graph = assemble(draft, options, &Registry::default())?;
    Ok(graph.to_string())
}

/// Builds the graph for `draft`: components first, then connections, then
/// rank groups, since the latter two refer to nodes by id.
pub fn assemble(draft: &Draft, options: &Options, registry: &Registry) -> Result<Graph> {
    let mut graph = root_graph(draft, options);
    sketch_components(&mut graph, draft, options, registry)?;
    sketch_connections(&mut graph, draft)?;
    sketch_same_ranks(&mut graph, draft);
    Ok(graph)
}

fn root_graph(draft: &Draft, options: &Options) -> Graph {
    let mut graph = Graph::directed();
    graph
        .attr("rankdir", if options.bottom_top { "BT" } else { "TB" })
        .attr("fontname", FONT)
        .attr("fontsize", "13")
        .attr("labelloc", "t")
        .attr("nodesep", "0.6")
        .attr("ranksep", "0.7")
        .attr("pad", "0.4");
    if let Some(color) = non_blank(&draft.background_color) {
        graph.attr("bgcolor", color);
    }
    if let Some(title) = non_blank(&draft.title) {
        graph.attr("label", title);
    }
    if options.ortho {
        graph.attr("splines", "ortho");
    }
    graph
        .node_default("fontname", FONT)
        .node_default("fontsize", "10");
    graph
        .edge_default("fontname", FONT)
        .edge_default("fontsize", "8")
        .edge_default("arrowsize", "0.7");
    graph
}

fn sketch_components(
    graph: &mut Graph,
    draft: &Draft,
    options: &Options,
    registry: &Registry,
) -> Result<()> {
    let mut ids = IdGenerator::new();

    for component in &draft.components {
        let sketcher = registry
            .lookup(&component.kind)
            .ok_or_else(|| Error::UnknownKind(component.kind.clone()))?;

        let id = ids.assign(component);
        let stamp = Stamp {
            id: &id,
            bottom_top: options.bottom_top,
            provider: options.provider,
        };

        let parent = match non_blank(&component.outline) {
            Some(outline) => outline_cluster(graph, outline),
            None => &mut *graph,
        };

        tracing::debug!(id = %id, kind = %component.kind, outline = %component.outline, "sketching component");
        sketcher.sketch(parent, component, &stamp);
    }

    Ok(())
}

fn outline_cluster<'g>(graph: &'g mut Graph, name: &str) -> &'g mut Graph {
    let cluster = graph.cluster(name);
    cluster
        .attr("pencolor", "#d9cc31")
        .attr("fontname", FONT)
        .attr("fontsize", "10")
        .attr("fontcolor", "#63625b");
    cluster
}

fn sketch_connections(graph: &mut Graph, draft: &Draft) -> Result<()> {
    for conn in &draft.connections {
        for target in &conn.targets {
            connection::draw(graph, &conn.origin, target)?;
        }
    }
    Ok(())
}

fn sketch_same_ranks(graph: &mut Graph, draft: &Draft) {
    for rank in &draft.ranks {
        let Some(name) = non_blank(&rank.name) else {
            continue;
        };
        let mut aligned = 0;
        for id in &rank.components {
            if graph.find_node(id).is_some() {
                graph.add_to_same_rank(name, id);
                aligned += 1;
            } else {
                tracing::debug!(rank = name, id = %id, "skipping unknown rank member");
            }
        }
        tracing::debug!(rank = name, aligned, "aligned rank group");
    }
}
