use crate::error::AdjError;

/// 一次构图运行的全部配置，显式传入索引与构图阶段。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlapOpt {
    /// k-mer 大小；相邻 contig 精确重叠 k-1 个碱基
    pub k: usize,
    /// 候选查找阶段使用的线程数
    pub threads: usize,
}

impl OverlapOpt {
    /// 校验并构造配置。必须在读取任何输入之前调用。
    pub fn new(k: Option<usize>, threads: usize) -> Result<Self, AdjError> {
        let k = k.unwrap_or(0);
        if k < 2 {
            return Err(AdjError::Config { k });
        }
        if threads == 0 {
            return Err(AdjError::Threads { threads });
        }
        Ok(Self { k, threads })
    }

    /// 末端序列长度（k-1）
    #[inline]
    pub fn overlap(&self) -> usize {
        self.k - 1
    }

    /// 每条边携带的距离：-(k-1)
    #[inline]
    pub fn distance(&self) -> i32 {
        -(self.overlap() as i32)
    }
}
