//! # adjlist-rust
//!
//! 查找已组装 contig 之间恰好 k-1 个碱基的精确重叠，构建双向（bidirected）
//! contig 邻接图，供下游组装步骤使用。
//!
//! 每条 contig 都可以从两条互补链读取，因此图的顶点是带方向的 contig
//! （`0+`、`0-` ……），每条边 (u, v) 都伴随镜像边 (flip(v), flip(u))。
//!
//! ## 快速示例
//!
//! ```rust
//! use adjlist_rust::contig::{ContigNode, ContigTable};
//! use adjlist_rust::graph::build_graph;
//! use adjlist_rust::index::EndIndex;
//! use adjlist_rust::opt::OverlapOpt;
//!
//! let opt = OverlapOpt::new(Some(4), 1).unwrap();
//! let mut table = ContigTable::new(&opt);
//! table.insert("ctg0", b"AAATTTCCC", 0).unwrap();
//! table.insert("ctg1", b"CCCGGGTTT", 0).unwrap();
//! table.lock();
//!
//! let index = EndIndex::build(&table).unwrap();
//! let g = build_graph(table, &index, &opt).unwrap();
//! assert!(g.has_edge(ContigNode::forward(0), ContigNode::forward(1)));
//! assert!(g.has_edge(ContigNode::new(1, true), ContigNode::new(0, true)));
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA 读取与图输出（adj / dot / sam）
//! - [`contig`] — contig 表与带方向顶点
//! - [`index`] — 末端 k-mer 及其哈希索引
//! - [`graph`] — 双向邻接图、构图与统计
//! - [`pipeline`] — 分阶段的完整运行流程
//! - [`util`] — 反向互补等序列工具函数

pub mod contig;
pub mod error;
pub mod graph;
pub mod index;
pub mod io;
pub mod opt;
pub mod pipeline;
pub mod util;
