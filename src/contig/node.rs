use std::fmt;

/// 带方向的 contig 顶点：`id << 1 | reverse`。
///
/// 同一条 contig 的两个方向共享 id，只在最低位上不同，所以
/// `flip` 是对合的，两个方向总能直接寻址，不需要额外存储。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContigNode(u32);

impl ContigNode {
    #[inline]
    pub fn new(id: u32, reverse: bool) -> Self {
        ContigNode((id << 1) | reverse as u32)
    }

    #[inline]
    pub fn forward(id: u32) -> Self {
        Self::new(id, false)
    }

    #[inline]
    pub fn id(self) -> u32 {
        self.0 >> 1
    }

    #[inline]
    pub fn is_reverse(self) -> bool {
        self.0 & 1 == 1
    }

    /// 同一条 contig 从另一条链读取
    #[inline]
    pub fn flip(self) -> Self {
        ContigNode(self.0 ^ 1)
    }

    /// 顶点在按方向展开的数组中的下标（0+, 0-, 1+, 1-, ...）
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        ContigNode(index as u32)
    }

    #[inline]
    pub fn sense_char(self) -> char {
        if self.is_reverse() {
            '-'
        } else {
            '+'
        }
    }
}

impl fmt::Display for ContigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.id(), self.sense_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_an_involution() {
        let u = ContigNode::new(7, false);
        assert_eq!(u.flip().flip(), u);
        assert_eq!(u.flip().id(), 7);
        assert!(u.flip().is_reverse());
        assert!(!u.is_reverse());
    }

    #[test]
    fn index_interleaves_orientations() {
        assert_eq!(ContigNode::new(0, false).index(), 0);
        assert_eq!(ContigNode::new(0, true).index(), 1);
        assert_eq!(ContigNode::new(3, true).index(), 7);
        assert_eq!(ContigNode::from_index(7), ContigNode::new(3, true));
    }

    #[test]
    fn display_uses_plus_minus() {
        assert_eq!(ContigNode::new(2, false).to_string(), "2+");
        assert_eq!(ContigNode::new(2, true).to_string(), "2-");
    }
}
