//! contig 表：按读入顺序分配稳定的整数 id，读完所有输入后锁定。

pub mod node;

pub use node::ContigNode;

use ahash::AHashMap;

use crate::error::AdjError;
use crate::index::kmer::EndKmer;
use crate::opt::OverlapOpt;

/// 一条 contig 的属性与两端 k-1 长的末端序列
#[derive(Debug, Clone)]
pub struct Contig {
    pub name: String,
    pub len: usize,
    pub coverage: u32,
    /// 前端序列 L
    pub head: EndKmer,
    /// 后端序列 R
    pub tail: EndKmer,
}

#[derive(Debug)]
pub struct ContigTable {
    overlap: usize,
    contigs: Vec<Contig>,
    ids: AHashMap<String, u32>,
    locked: bool,
}

impl ContigTable {
    pub fn new(opt: &OverlapOpt) -> Self {
        Self {
            overlap: opt.overlap(),
            contigs: Vec::new(),
            ids: AHashMap::new(),
            locked: false,
        }
    }

    /// 追加一条 contig，返回新分配的 id。
    pub fn insert(&mut self, name: &str, seq: &[u8], coverage: u32) -> Result<u32, AdjError> {
        if self.locked {
            return Err(AdjError::Locked { name: name.to_string() });
        }
        if seq.len() <= self.overlap {
            return Err(AdjError::Length {
                name: name.to_string(),
                len: seq.len(),
                overlap: self.overlap,
            });
        }
        if self.ids.contains_key(name) {
            return Err(AdjError::Duplicate { name: name.to_string() });
        }

        let id = self.contigs.len() as u32;
        self.ids.insert(name.to_string(), id);
        self.contigs.push(Contig {
            name: name.to_string(),
            len: seq.len(),
            coverage,
            head: EndKmer::prefix(seq, self.overlap),
            tail: EndKmer::suffix(seq, self.overlap),
        });
        Ok(id)
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    #[inline]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    #[inline]
    pub fn get(&self, id: u32) -> &Contig {
        &self.contigs[id as usize]
    }

    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Contig)> + '_ {
        self.contigs.iter().enumerate().map(|(i, c)| (i as u32, c))
    }

    /// 用 contig 名称加方向符号格式化顶点，例如 `ctg7-`
    pub fn node_name(&self, u: ContigNode) -> String {
        format!("{}{}", self.get(u.id()).name, u.sense_char())
    }
}

/// 从 FASTA 描述中解析覆盖度：第二个空白分隔的字段若为非负整数即为覆盖度，否则为 0。
pub fn parse_coverage(desc: &str) -> u32 {
    desc.split_whitespace()
        .nth(1)
        .and_then(|tok| tok.parse::<u32>().ok())
        .unwrap_or(0)
}
