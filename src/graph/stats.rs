use std::fmt;

use crate::contig::ContigNode;
use crate::graph::OverlapGraph;

/// 出度直方图的最高档（含以上）
pub const MAX_DEGREE_BIN: usize = 4;

/// 构图后的描述性统计，仅用于诊断输出。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub contigs: usize,
    pub vertices: usize,
    pub edges: usize,
    /// 两个方向都没有任何边的 contig
    pub isolated: usize,
    /// (u, u) 形式的边
    pub self_loops: usize,
    /// out_degree[d] = 出度为 d 的带方向顶点数，最后一档为 d >= 4
    pub out_degree: [usize; MAX_DEGREE_BIN + 1],
}

impl GraphStats {
    pub fn compute(g: &OverlapGraph) -> Self {
        let mut out_degree = [0usize; MAX_DEGREE_BIN + 1];
        for u in g.vertices() {
            out_degree[g.out_degree(u).min(MAX_DEGREE_BIN)] += 1;
        }

        // 由对称性，进入 u 的边必然对应 flip(u) 的出边
        let isolated = (0..g.num_contigs() as u32)
            .map(ContigNode::forward)
            .filter(|&u| g.out_degree(u) == 0 && g.out_degree(u.flip()) == 0)
            .count();

        let self_loops = g.edges().filter(|e| e.source == e.target).count();

        Self {
            contigs: g.num_contigs(),
            vertices: g.num_vertices(),
            edges: g.num_edges(),
            isolated,
            self_loops,
            out_degree,
        }
    }

    pub fn mean_out_degree(&self) -> f64 {
        if self.vertices == 0 {
            0.0
        } else {
            self.edges as f64 / self.vertices as f64
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "V={} E={} E/V={:.3} contigs={} isolated={} self-loops={}",
            self.vertices,
            self.edges,
            self.mean_out_degree(),
            self.contigs,
            self.isolated,
            self.self_loops
        )?;
        write!(f, "Out-degree:")?;
        for (d, n) in self.out_degree.iter().enumerate() {
            if d == MAX_DEGREE_BIN {
                write!(f, " {}+:{}", d, n)?;
            } else {
                write!(f, " {}:{}", d, n)?;
            }
        }
        Ok(())
    }
}
