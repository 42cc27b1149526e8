//! 分阶段批处理：读入全部 contig → 锁定 → 建索引 → 构图 → 统计 → 输出。

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

use crate::contig::{parse_coverage, ContigTable};
use crate::graph::{build_graph, GraphStats, OverlapGraph};
use crate::index::EndIndex;
use crate::io::fasta::{self, FastaReader};
use crate::io::graph_writer::{write_graph, GraphFormat};
use crate::opt::OverlapOpt;

/// 读取一个 FASTA 来源中的所有 contig 并追加到表中。返回读入条数。
pub fn read_contigs<R: BufRead>(reader: FastaReader<R>, table: &mut ContigTable) -> Result<usize> {
    let mut count = 0usize;
    for rec in reader {
        let rec = rec?;
        table.insert(&rec.id, &rec.seq, parse_coverage(&rec.desc))?;
        count += 1;
    }
    Ok(count)
}

/// 从若干路径（为空时读标准输入）构建锁定的 contig 表
pub fn load_contigs(paths: &[String], opt: &OverlapOpt) -> Result<ContigTable> {
    let stdin = ["-".to_string()];
    let paths = if paths.is_empty() { &stdin[..] } else { paths };

    let mut table = ContigTable::new(opt);
    for path in paths {
        info!("Reading `{}'...", path);
        let reader = fasta::open_source(path)
            .with_context(|| format!("cannot open contigs FASTA '{}'", path))?;
        read_contigs(reader, &mut table).with_context(|| format!("while reading '{}'", path))?;
    }
    table.lock();
    info!("Read {} contigs", table.len());
    Ok(table)
}

/// 由锁定的表构建索引与边集
pub fn build_overlap_graph(table: ContigTable, opt: &OverlapOpt) -> Result<OverlapGraph> {
    let index = EndIndex::build(&table)?;
    info!(
        alphabet = index.alphabet().name(),
        prefix_keys = index.prefix_keys(),
        suffix_keys = index.suffix_keys(),
        "indexed contig ends"
    );
    let g = build_graph(table, &index, opt)?;
    Ok(g)
}

/// 读入、建索引、构图并记录统计信息；尚不输出任何内容。
pub fn prepare(paths: &[String], opt: &OverlapOpt) -> Result<(OverlapGraph, GraphStats)> {
    let table = load_contigs(paths, opt)?;
    let g = build_overlap_graph(table, opt)?;

    let stats = GraphStats::compute(&g);
    for line in stats.to_string().lines() {
        info!("{}", line);
    }
    Ok((g, stats))
}

/// 完整运行一次并把图写到 `out`。任何错误都在写出之前返回，不产生部分输出。
pub fn run<W: Write>(
    paths: &[String],
    opt: &OverlapOpt,
    format: GraphFormat,
    program: &str,
    command_line: &str,
    out: &mut W,
) -> Result<GraphStats> {
    let (g, stats) = prepare(paths, opt)?;
    write_graph(out, &g, format, program, command_line).context("cannot write graph")?;
    out.flush()?;
    Ok(stats)
}
