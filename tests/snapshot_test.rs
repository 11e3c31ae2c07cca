use pretty_assertions::assert_eq;

fn tabs(s: &str) -> String {
    s.replace("    ", "\t")
}

#[test]
fn snapshot_outline_connection_and_rank() {
    let input = "\
title: Demo
components:
  - kind: gtw
    label: Edge
  - kind: ser
    outline: backend
    impl: Go
connections:
  - origin: gtw1
    targets:
      - id: ser1
        label: REST
ranks:
  - name: top
    components: [gtw1]
";
    let output = draft::render(input).unwrap();
    let expected = tabs(r##"digraph {
    fontname="Fira Mono";
    fontsize="13";
    label="Demo";
    labelloc="t";
    nodesep="0.6";
    pad="0.4";
    rankdir="TB";
    ranksep="0.7";
    node [fontname="Fira Mono", fontsize="10"];
    edge [arrowsize="0.7", fontname="Fira Mono", fontsize="8"];
    subgraph cluster_backend {
        fontcolor="#63625b";
        fontname="Fira Mono";
        fontsize="10";
        label="backend";
        pencolor="#d9cc31";
        ser1 [fillcolor="#90caf9", fontcolor="#0d47a1", label=<ser1<br/><font point-size="7">Go</font>>, shape="box", style="filled,rounded"];
    }
    gtw1 [fillcolor="#ffb74d", fontcolor="#3e2723", label=<Edge>, shape="doublecircle", style="filled"];
    gtw1 -> ser1 [color="#707070", label="REST"];
    {rank=same; gtw1;}
}
"##);
    assert_eq!(output, expected);
}

#[test]
fn snapshot_themed_bottom_top() {
    let input = "\
backgroundColor: '#ffffff'
components:
  - id: queue
    kind: que
";
    let options = draft::Options {
        bottom_top: true,
        ortho: true,
        provider: Some(draft::Provider::Aws),
    };
    let output = draft::render_with_options(input, &options).unwrap();
    let expected = tabs(r##"digraph {
    bgcolor="#ffffff";
    fontname="Fira Mono";
    fontsize="13";
    labelloc="t";
    nodesep="0.6";
    pad="0.4";
    rankdir="BT";
    ranksep="0.7";
    splines="ortho";
    node [fontname="Fira Mono", fontsize="10"];
    edge [arrowsize="0.7", fontname="Fira Mono", fontsize="8"];
    queue [color="#ff9900", fillcolor="#ffe082", fontcolor="#4e342e", label=<<font point-size="7">SQS</font><br/>queue>, shape="cds", style="filled"];
}
"##);
    assert_eq!(output, expected);
}
