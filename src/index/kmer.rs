use crate::error::AdjError;
use crate::util::dna;

/// 一次运行中所有 contig 共用的字母表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Nucleotide,
    Colour,
}

impl Alphabet {
    /// 由首条 contig 的首个残基判定：数字即 colour-space。
    #[inline]
    pub fn detect(first: u8) -> Self {
        if first.is_ascii_digit() {
            Alphabet::Colour
        } else {
            Alphabet::Nucleotide
        }
    }

    /// 检查后续 contig 的首个残基与已判定的字母表一致。
    pub fn check(self, name: &str, first: u8) -> Result<(), AdjError> {
        let ok = match self {
            Alphabet::Colour => first.is_ascii_digit(),
            Alphabet::Nucleotide => first.is_ascii_alphabetic(),
        };
        if ok {
            return Ok(());
        }
        let found = if first.is_ascii_digit() {
            Alphabet::Colour.name()
        } else if first.is_ascii_alphabetic() {
            Alphabet::Nucleotide.name()
        } else {
            "neither nucleotide nor colour-space"
        };
        Err(AdjError::Alphabet {
            name: name.to_string(),
            expected: self.name(),
            found,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Nucleotide => "nucleotide",
            Alphabet::Colour => "colour-space",
        }
    }
}

/// contig 末端的定长残基序列，仅作哈希键使用，比较即逐符号相等。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndKmer(Box<[u8]>);

impl EndKmer {
    pub fn new(residues: &[u8]) -> Self {
        EndKmer(residues.into())
    }

    /// 取 `seq` 的前 `len` 个残基
    pub fn prefix(seq: &[u8], len: usize) -> Self {
        Self::new(&seq[..len])
    }

    /// 取 `seq` 的后 `len` 个残基
    pub fn suffix(seq: &[u8], len: usize) -> Self {
        Self::new(&seq[seq.len() - len..])
    }

    pub fn reverse_complement(&self, alphabet: Alphabet) -> Self {
        let rc = match alphabet {
            Alphabet::Nucleotide => dna::revcomp(&self.0),
            Alphabet::Colour => dna::revcomp_colour(&self.0),
        };
        EndKmer(rc.into_boxed_slice())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.0.first().copied()
    }
}
