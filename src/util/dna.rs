/// 核苷酸互补，包括 IUPAC 简并碱基；未知符号映射为 N。
#[inline]
pub fn complement(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' | b'U' => b'A',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'S' => b'S',
        b'W' => b'W',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        _ => b'N',
    }
}

/// colour-space 中每个颜色编码（0-3）以及缺失符号 `.` 都与自身互补。
#[inline]
pub fn complement_colour(colour: u8) -> u8 {
    match colour {
        b'0'..=b'3' | b'.' => colour,
        _ => b'.',
    }
}

pub fn revcomp(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq.iter().rev() {
        out.push(complement(b));
    }
    out
}

pub fn revcomp_colour(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&c| complement_colour(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revcomp_nucleotides() {
        assert_eq!(revcomp(b"AAACCG"), b"CGGTTT");
        assert_eq!(revcomp(b"acgu"), b"ACGT");
        assert_eq!(revcomp(b"ANRY"), b"RYNT");
    }

    #[test]
    fn revcomp_is_involution_on_acgt() {
        let s = b"GATTACACGT";
        assert_eq!(revcomp(&revcomp(s)), s.to_vec());
    }

    #[test]
    fn revcomp_colour_reverses_digits() {
        assert_eq!(revcomp_colour(b"0123"), b"3210");
        assert_eq!(revcomp_colour(b"1.2"), b"2.1");
    }
}
