use std::io::{self, Write};

use crate::contig::{ContigNode, ContigTable};
use crate::graph::{Edge, OverlapGraph};

/// Output format of the adjacency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GraphFormat {
    /// One line per contig with the successors of both strands
    #[default]
    Adj,
    /// Graphviz
    Dot,
    /// One alignment record per overlap
    Sam,
}

/// Serialize every vertex and edge of `g` in `format`.
///
/// `program` and `command_line` describe the run that produced the graph;
/// they end up in the DOT comment and the SAM `@PG` line.
pub fn write_graph<W: Write>(
    out: &mut W,
    g: &OverlapGraph,
    format: GraphFormat,
    program: &str,
    command_line: &str,
) -> io::Result<()> {
    match format {
        GraphFormat::Adj => write_adj(out, g),
        GraphFormat::Dot => write_dot(out, g, command_line),
        GraphFormat::Sam => write_sam(out, g, program, command_line),
    }
}

fn write_node_list<W: Write>(out: &mut W, table: &ContigTable, nodes: impl Iterator<Item = ContigNode>) -> io::Result<()> {
    for v in nodes {
        write!(out, "{} ", table.node_name(v))?;
    }
    Ok(())
}

/// `name length coverage<TAB>successors of name+ ;<TAB>predecessors of name+`
///
/// Predecessors are the successors of `name-`, each flipped back.
fn write_adj<W: Write>(out: &mut W, g: &OverlapGraph) -> io::Result<()> {
    let table = g.table();
    for (id, c) in table.iter() {
        let u = ContigNode::forward(id);
        write!(out, "{} {} {}\t", c.name, c.len, c.coverage)?;
        write_node_list(out, table, g.out_edges(u).iter().copied())?;
        write!(out, ";\t")?;
        write_node_list(out, table, g.out_edges(u.flip()).iter().map(|v| v.flip()))?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_dot<W: Write>(out: &mut W, g: &OverlapGraph, command_line: &str) -> io::Result<()> {
    let table = g.table();
    writeln!(out, "digraph adj {{")?;
    if !command_line.is_empty() {
        writeln!(out, "// {}", command_line)?;
    }
    writeln!(out, "graph [k={}]", g.k())?;
    writeln!(out, "edge [d={}]", g.distance())?;
    for u in g.vertices() {
        let c = table.get(u.id());
        writeln!(out, "\"{}\" [l={} C={}]", table.node_name(u), c.len, c.coverage)?;
    }
    for e in g.edges() {
        writeln!(out, "\"{}\" -> \"{}\"", table.node_name(e.source), table.node_name(e.target))?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// 每对镜像边只输出一条记录：target 作为 query，比对到 source 的正链坐标上。
fn write_sam<W: Write>(out: &mut W, g: &OverlapGraph, program: &str, command_line: &str) -> io::Result<()> {
    let table = g.table();
    writeln!(out, "@HD\tVN:1.0")?;
    writeln!(
        out,
        "@PG\tID:{}\tPN:{}\tVN:{}\tCL:{}",
        program,
        program,
        env!("CARGO_PKG_VERSION"),
        command_line
    )?;
    for (_, c) in table.iter() {
        writeln!(out, "@SQ\tSN:{}\tLN:{}", c.name, c.len)?;
    }

    let overlap = table.overlap();
    for e in g.edges().filter(Edge::is_canonical) {
        let source = table.get(e.source.id());
        let target = table.get(e.target.id());
        let flag = if e.source.is_reverse() != e.target.is_reverse() { 16 } else { 0 };
        let clip = target.len - overlap;
        // 反向 source 的重叠区位于正链起点
        let (pos, cigar) = if e.source.is_reverse() {
            (1, format!("{}S{}M", clip, overlap))
        } else {
            (source.len - overlap + 1, format!("{}M{}S", overlap, clip))
        };
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t255\t{}\t*\t0\t0\t*\t*",
            target.name, flag, source.name, pos, cigar
        )?;
    }
    Ok(())
}
