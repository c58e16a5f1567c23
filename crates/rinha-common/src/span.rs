//! Byte offset spans.
//! 字节偏移范围。

use std::fmt;

/// A byte offset into the original source text.
/// 原始源码中的字节偏移。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl BytePos {
    pub const ZERO: BytePos = BytePos(0);
}

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

impl From<u32> for BytePos {
    fn from(pos: u32) -> Self {
        BytePos(pos)
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

/// A half-open range `start..end` of byte offsets.
/// 半开的字节偏移区间 `start..end`。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start offset. / 起始偏移。
    pub start: BytePos,
    /// End offset (exclusive). / 结束偏移（不包含）。
    pub end: BytePos,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: BytePos::ZERO,
        end: BytePos::ZERO,
    };

    pub fn new(start: u32, end: u32) -> Self {
        Span {
            start: BytePos(start),
            end: BytePos(end),
        }
    }

    /// Length in bytes. Inverted spans report zero.
    /// 字节长度，反向区间返回零。
    pub fn len(&self) -> usize {
        self.end.0.saturating_sub(self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte range, suitable for slicing the source text.
    /// 可用于切片源码的字节区间。
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = usize::from(self.start);
        start..usize::from(self.end).max(start)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}
