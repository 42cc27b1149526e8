use ahash::AHashMap;
use tracing::debug;

use crate::contig::{ContigNode, ContigTable};
use crate::error::AdjError;
use crate::index::kmer::{Alphabet, EndKmer};

type KmerMap = AHashMap<EndKmer, Vec<ContigNode>>;

/// 末端 k-mer 索引：
/// - `by_suffix`：以该 k-mer 结尾的带方向顶点
/// - `by_prefix`：以该 k-mer 开头的带方向顶点
///
/// 每条 contig 插入四次，覆盖两条链与两个相邻方向。正向 contig 的
/// 前端序列取反向互补后，就是反向顶点的后端序列，反之亦然。
#[derive(Debug)]
pub struct EndIndex {
    alphabet: Alphabet,
    by_suffix: KmerMap,
    by_prefix: KmerMap,
}

impl EndIndex {
    /// 单次线性扫描锁定后的 contig 表。字母表由 0 号 contig 判定，
    /// 其余 contig 逐一检查，混用即报错。
    pub fn build(table: &ContigTable) -> Result<Self, AdjError> {
        debug_assert!(table.is_locked());
        let capacity = 2 * table.len();
        let mut by_suffix = KmerMap::with_capacity(capacity);
        let mut by_prefix = KmerMap::with_capacity(capacity);

        let mut alphabet = Alphabet::Nucleotide;
        for (id, contig) in table.iter() {
            // 长度检查保证 head 非空
            let first = contig.head.first().unwrap_or(b'N');
            if id == 0 {
                alphabet = Alphabet::detect(first);
                debug!(alphabet = alphabet.name(), "detected contig alphabet");
            } else {
                alphabet.check(&contig.name, first)?;
            }

            let u = ContigNode::forward(id);
            by_suffix.entry(contig.tail.clone()).or_default().push(u);
            by_prefix.entry(contig.head.clone()).or_default().push(u);
            by_suffix
                .entry(contig.head.reverse_complement(alphabet))
                .or_default()
                .push(u.flip());
            by_prefix
                .entry(contig.tail.reverse_complement(alphabet))
                .or_default()
                .push(u.flip());
        }

        Ok(Self { alphabet, by_suffix, by_prefix })
    }

    #[inline]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// 前端序列等于 `kmer` 的所有带方向顶点；不存在时为空
    pub fn prefix_matches(&self, kmer: &EndKmer) -> &[ContigNode] {
        self.by_prefix.get(kmer).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 后端序列等于 `kmer` 的所有带方向顶点；不存在时为空
    pub fn suffix_matches(&self, kmer: &EndKmer) -> &[ContigNode] {
        self.by_suffix.get(kmer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn prefix_keys(&self) -> usize {
        self.by_prefix.len()
    }

    pub fn suffix_keys(&self) -> usize {
        self.by_suffix.len()
    }
}
