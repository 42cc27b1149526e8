use rayon::prelude::*;
use tracing::debug;

use crate::contig::{ContigNode, ContigTable};
use crate::error::AdjError;
use crate::graph::{is_canonical, OverlapGraph};
use crate::index::EndIndex;
use crate::opt::OverlapOpt;

/// 由末端索引推导边集。
///
/// 对每个带方向顶点 u 取其（按方向读取的）后端序列，查出前端与之
/// 相同的所有候选 v：
/// - u 为正向时，后端即 R，直接查前端索引；
/// - u 为反向时，后端是 rc(L)，等价于在后端索引中查 L 再翻转结果。
///
/// 每对镜像边 {(u, v), (flip(v), flip(u))} 会从两端各发现一次，只在
/// 较小的一端调用 `insert_bidirected_edge`，因此每条边恰好出现一次。
/// 自环与由重复末端序列产生的多条边均保留。
///
/// `threads > 1` 时候选查找在 rayon 线程池中并行完成（只读），插边
/// 仍按顶点顺序串行进行，结果与单线程完全一致。
pub fn build_graph(table: ContigTable, index: &EndIndex, opt: &OverlapOpt) -> Result<OverlapGraph, AdjError> {
    let candidates = lookup_candidates(&table, index, opt.threads)?;

    let mut g = OverlapGraph::new(table, opt.k);
    for (i, targets) in candidates.iter().enumerate() {
        let u = ContigNode::from_index(i);
        for &w in targets.iter() {
            let v = if u.is_reverse() { w.flip() } else { w };
            if is_canonical(u, v) {
                g.insert_bidirected_edge(u, v);
            }
        }
    }
    debug!(edges = g.num_edges(), "added overlap edges");
    Ok(g)
}

/// 按 `ContigNode::index` 顺序返回每个带方向顶点的原始候选列表；
/// 反向顶点的候选尚未翻转。
fn lookup_candidates<'a>(
    table: &ContigTable,
    index: &'a EndIndex,
    threads: usize,
) -> Result<Vec<&'a [ContigNode]>, AdjError> {
    let lookup = move |i: usize| {
        let u = ContigNode::from_index(i);
        let contig = table.get(u.id());
        if u.is_reverse() {
            index.suffix_matches(&contig.head)
        } else {
            index.prefix_matches(&contig.tail)
        }
    };
    let n = 2 * table.len();
    if threads <= 1 {
        return Ok((0..n).map(lookup).collect());
    }
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    Ok(pool.install(|| (0..n).into_par_iter().map(lookup).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(k: usize, seqs: &[&[u8]]) -> OverlapGraph {
        graph_with_threads(k, seqs, 1)
    }

    fn graph_with_threads(k: usize, seqs: &[&[u8]], threads: usize) -> OverlapGraph {
        let opt = OverlapOpt::new(Some(k), threads).unwrap();
        let mut t = ContigTable::new(&opt);
        for (i, s) in seqs.iter().enumerate() {
            t.insert(&format!("c{}", i), s, 0).unwrap();
        }
        t.lock();
        let idx = EndIndex::build(&t).unwrap();
        build_graph(t, &idx, &opt).unwrap()
    }

    fn fwd(id: u32) -> ContigNode {
        ContigNode::new(id, false)
    }

    fn rev(id: u32) -> ContigNode {
        ContigNode::new(id, true)
    }

    fn oriented(seq: &[u8], u: ContigNode) -> Vec<u8> {
        if u.is_reverse() {
            crate::util::dna::revcomp(seq)
        } else {
            seq.to_vec()
        }
    }

    fn assert_symmetric(g: &OverlapGraph) {
        for e in g.edges() {
            let m = e.mirror();
            assert!(g.has_edge(m.source, m.target), "missing mirror of {} -> {}", e.source, e.target);
            assert_eq!(
                g.edge_multiplicity(e.source, e.target),
                g.edge_multiplicity(m.source, m.target)
            );
        }
    }

    #[test]
    fn forward_overlap_and_its_mirror() {
        let g = graph(4, &[b"AAATTTCCC", b"CCCGGGTTT"]);
        assert!(g.has_edge(fwd(0), fwd(1)));
        assert!(g.has_edge(rev(1), rev(0)));
        assert!(!g.has_edge(fwd(1), fwd(0)));
        assert_eq!(g.num_edges(), 2);
        assert!(g.edges().all(|e| e.distance == -3));
        assert_symmetric(&g);
    }

    #[test]
    fn single_mismatch_removes_edge() {
        let g = graph(4, &[b"AAATTTCCC", b"CCTGGGTTT"]);
        assert!(!g.has_edge(fwd(0), fwd(1)));
        assert!(!g.has_edge(fwd(1), fwd(0)));
        assert!(!g.has_edge(rev(1), rev(0)));
    }

    #[test]
    fn identical_ends_form_a_self_loop() {
        let g = graph(4, &[b"AAAGGGAAA"]);
        assert!(g.has_edge(fwd(0), fwd(0)));
        assert!(g.has_edge(rev(0), rev(0)));
        assert_eq!(g.num_edges(), 2);
        assert_symmetric(&g);
    }

    #[test]
    fn palindromic_tail_links_contig_to_its_own_reverse() {
        // 后端 ACGT 为自身反向互补
        let g = graph(5, &[b"GGGGACGT"]);
        assert_eq!(g.edge_multiplicity(fwd(0), rev(0)), 1);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn reverse_strand_overlaps_are_found() {
        // c1 的反向互补 GGGTTTAAA 以 GGG 开头，与 c0 的后端相接
        let g = graph(4, &[b"AAATTTGGG", b"TTTAAACCC"]);
        assert!(g.has_edge(fwd(0), rev(1)));
        assert!(g.has_edge(fwd(1), rev(0)));
        // 两端都是反向顶点的一对镜像边
        assert!(g.has_edge(rev(0), fwd(1)));
        assert!(g.has_edge(rev(1), fwd(0)));
        assert_eq!(g.num_edges(), 4);
        assert_symmetric(&g);
    }

    #[test]
    fn repeated_ends_link_every_match() {
        let g = graph(3, &[b"ACGTT", b"TTCAG", b"TTGAC"]);
        // c0 的后端 TT 同时连接 c1 与 c2
        assert!(g.has_edge(fwd(0), fwd(1)));
        assert!(g.has_edge(fwd(0), fwd(2)));
        assert_eq!(g.out_degree(fwd(0)), 2);
        assert_symmetric(&g);
    }

    #[test]
    fn edges_match_brute_force_overlaps() {
        let seqs: [&[u8]; 6] = [
            b"ACGTACGGA", b"GGATTCAAC", b"AACGGTACG", b"CGTACGTTC", b"TCCGTACGT", b"GTTGAATCC",
        ];
        let k = 4;
        let overlap = k - 1;
        let g = graph(k, &seqs);
        assert_symmetric(&g);

        for u in g.vertices() {
            let su = oriented(seqs[u.id() as usize], u);
            for v in g.vertices() {
                let sv = oriented(seqs[v.id() as usize], v);
                let exact = su[su.len() - overlap..] == sv[..overlap];
                assert_eq!(g.edge_multiplicity(u, v), exact as usize, "{} -> {}", u, v);
            }
        }
    }

    #[test]
    fn threaded_lookup_matches_sequential() {
        let seqs: [&[u8]; 5] = [b"ACGTACGGA", b"GGATTCAAC", b"AACGGTACG", b"CGTACGTTC", b"TCCGTACGT"];
        let a = graph_with_threads(4, &seqs, 1);
        let b = graph_with_threads(4, &seqs, 3);
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
    }
}
