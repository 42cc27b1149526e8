use std::io::Write;

use adjlist_rust::contig::ContigNode;
use adjlist_rust::error::AdjError;
use adjlist_rust::io::graph_writer::GraphFormat;
use adjlist_rust::opt::OverlapOpt;
use adjlist_rust::pipeline;
use tempfile::NamedTempFile;

fn fasta(records: &[(&str, &str, &str)]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    for (id, desc, seq) in records {
        writeln!(f, ">{} {}", id, desc).unwrap();
        writeln!(f, "{}", seq).unwrap();
    }
    f.flush().unwrap();
    f
}

fn path(f: &NamedTempFile) -> String {
    f.path().to_str().unwrap().to_string()
}

#[test]
fn contigs_from_several_files_share_one_id_space() {
    let a = fasta(&[("ctg0", "9 12", "AAATTTCCC")]);
    let b = fasta(&[("ctg1", "9 4", "cccgggttt")]);
    let opt = OverlapOpt::new(Some(4), 1).unwrap();

    let (g, stats) = pipeline::prepare(&[path(&a), path(&b)], &opt).unwrap();
    assert_eq!(g.table().id_of("ctg0"), Some(0));
    assert_eq!(g.table().id_of("ctg1"), Some(1));
    assert_eq!(g.table().get(0).coverage, 12);
    assert!(g.has_edge(ContigNode::forward(0), ContigNode::forward(1)));
    assert!(g.has_edge(ContigNode::new(1, true), ContigNode::new(0, true)));
    assert!(!g.has_edge(ContigNode::forward(1), ContigNode::forward(0)));
    assert_eq!(stats.edges, 2);
}

#[test]
fn ids_do_not_depend_on_k() {
    let f = fasta(&[("x", "", "ACGTACGTAC"), ("y", "", "GTACGTACGT"), ("z", "", "TTTTTTTTTT")]);
    for k in [2, 3, 5, 9] {
        let opt = OverlapOpt::new(Some(k), 1).unwrap();
        let (g, _) = pipeline::prepare(&[path(&f)], &opt).unwrap();
        assert_eq!(g.table().id_of("x"), Some(0));
        assert_eq!(g.table().id_of("y"), Some(1));
        assert_eq!(g.table().id_of("z"), Some(2));
        assert!(g.edges().all(|e| e.distance == -(k as i32 - 1)));
    }
}

#[test]
fn run_writes_dot_output() {
    let f = fasta(&[("s", "", "AAAGGGAAA")]);
    let opt = OverlapOpt::new(Some(4), 1).unwrap();
    let mut out = Vec::new();
    pipeline::run(&[path(&f)], &opt, GraphFormat::Dot, "adjlist-rust", "adjlist-rust -k 4", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\"s+\" -> \"s+\"\n"));
    assert!(text.contains("\"s-\" -> \"s-\"\n"));
}

#[test]
fn short_contig_aborts_without_output() {
    let f = fasta(&[("ok", "", "ACGTACGT"), ("short", "", "ACG")]);
    let opt = OverlapOpt::new(Some(4), 1).unwrap();
    let mut out = Vec::new();
    let err = pipeline::run(&[path(&f)], &opt, GraphFormat::Adj, "adjlist-rust", "", &mut out).unwrap_err();
    assert!(matches!(err.downcast_ref::<AdjError>(), Some(AdjError::Length { .. })));
    assert!(out.is_empty());
}

#[test]
fn missing_file_is_fatal() {
    let opt = OverlapOpt::new(Some(4), 1).unwrap();
    let err = pipeline::prepare(&["/nonexistent/contigs.fa".to_string()], &opt).unwrap_err();
    assert!(err.to_string().contains("cannot open contigs FASTA"));
}
