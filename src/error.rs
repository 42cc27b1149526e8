use thiserror::Error;

/// 构图过程中的致命错误。任何一种都会终止本次运行，不输出部分结果。
#[derive(Debug, Error)]
pub enum AdjError {
    /// k 缺失或取值非法
    #[error("invalid k-mer size {k}: k must be at least 2 (overlap = k - 1)")]
    Config { k: usize },

    #[error("invalid thread count {threads}: must be at least 1")]
    Threads { threads: usize },

    /// contig 长度不足以提取 k-1 长的末端序列
    #[error("contig `{name}` has length {len}, which is not greater than the overlap {overlap}")]
    Length { name: String, len: usize, overlap: usize },

    /// 核苷酸与 colour-space 序列混用
    #[error("contig `{name}` is {found} but the first contig was {expected}")]
    Alphabet {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// 表锁定后仍尝试插入
    #[error("cannot insert contig `{name}`: the contig table is locked")]
    Locked { name: String },

    #[error("duplicate contig identifier `{name}`")]
    Duplicate { name: String },

    #[error("cannot start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
