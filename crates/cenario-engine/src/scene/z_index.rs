/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values. Derived ordering is plain
/// integer ordering on the wrapped value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
