//! 双向（bidirected）contig 邻接图。
//!
//! 顶点是带方向的 contig，边 (u, v) 表示 u 的后 k-1 个残基与 v 的前
//! k-1 个残基完全相同。图对外只提供 [`OverlapGraph::insert_bidirected_edge`]
//! 一个插边入口，它总是同时插入 (u, v) 与 (flip(v), flip(u))，因此
//! 双链对称性由结构保证。

pub mod build;
pub mod stats;

pub use build::build_graph;
pub use stats::GraphStats;

use crate::contig::{ContigNode, ContigTable};

/// 一条有向边及其距离（恒为 -(k-1)）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: ContigNode,
    pub target: ContigNode,
    pub distance: i32,
}

impl Edge {
    /// 互补链上的镜像边 (flip(v), flip(u))
    #[inline]
    pub fn mirror(&self) -> Edge {
        Edge {
            source: self.target.flip(),
            target: self.source.flip(),
            distance: self.distance,
        }
    }

    /// 一对镜像边中较小的一条（或与镜像相同的边）
    #[inline]
    pub fn is_canonical(&self) -> bool {
        is_canonical(self.source, self.target)
    }
}

/// (u, v) 不大于其镜像 (flip(v), flip(u))
#[inline]
pub fn is_canonical(u: ContigNode, v: ContigNode) -> bool {
    (u, v) <= (v.flip(), u.flip())
}

#[derive(Debug)]
pub struct OverlapGraph {
    table: ContigTable,
    k: usize,
    /// 按 `ContigNode::index` 存储的出边表
    out: Vec<Vec<ContigNode>>,
    num_edges: usize,
}

impl OverlapGraph {
    /// 以锁定的 contig 表为顶点集创建空图
    pub fn new(table: ContigTable, k: usize) -> Self {
        debug_assert!(table.is_locked());
        debug_assert_eq!(table.overlap() + 1, k);
        let out = vec![Vec::new(); 2 * table.len()];
        Self { table, k, out, num_edges: 0 }
    }

    /// 插入 (u, v) 及其镜像 (flip(v), flip(u))。
    ///
    /// 若镜像就是边本身（v == flip(u)），只插入一次。
    pub fn insert_bidirected_edge(&mut self, u: ContigNode, v: ContigNode) {
        let (mu, mv) = (v.flip(), u.flip());
        if (mu, mv) == (u, v) {
            self.add_edge(u, v);
        } else {
            // 先分配，再写入两条边
            self.out[u.index()].reserve(1);
            self.out[mu.index()].reserve(1);
            self.add_edge(u, v);
            self.add_edge(mu, mv);
        }
    }

    fn add_edge(&mut self, u: ContigNode, v: ContigNode) {
        self.out[u.index()].push(v);
        self.num_edges += 1;
    }

    #[inline]
    pub fn table(&self) -> &ContigTable {
        &self.table
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn distance(&self) -> i32 {
        -(self.k as i32 - 1)
    }

    #[inline]
    pub fn num_contigs(&self) -> usize {
        self.table.len()
    }

    /// 带方向顶点数，即 contig 数的两倍
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn vertices(&self) -> impl Iterator<Item = ContigNode> {
        (0..self.out.len()).map(ContigNode::from_index)
    }

    #[inline]
    pub fn out_edges(&self, u: ContigNode) -> &[ContigNode] {
        &self.out[u.index()]
    }

    #[inline]
    pub fn out_degree(&self, u: ContigNode) -> usize {
        self.out[u.index()].len()
    }

    pub fn has_edge(&self, u: ContigNode, v: ContigNode) -> bool {
        self.out[u.index()].contains(&v)
    }

    /// (u, v) 的重数；重复的末端序列会产生平行边
    pub fn edge_multiplicity(&self, u: ContigNode, v: ContigNode) -> usize {
        self.out[u.index()].iter().filter(|&&w| w == v).count()
    }

    /// 按源顶点顺序遍历所有边
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let distance = self.distance();
        self.out.iter().enumerate().flat_map(move |(i, targets)| {
            let source = ContigNode::from_index(i);
            targets.iter().map(move |&target| Edge { source, target, distance })
        })
    }
}
