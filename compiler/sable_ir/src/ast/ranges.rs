//! Compact `(start, len)` views into the arena's side tables.

/// Declares range types addressing one arena side table each.
macro_rules! define_range {
    ($($name:ident),* $(,)?) => { $(
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub fn to_range(self) -> ::std::ops::Range<usize> {
                self.start as usize..self.start as usize + self.len as usize
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + self.len)
            }
        }
    )* };
}

define_range!(
    ExprRange,
    TypeRange,
    PatternRange,
    StmtRange,
    NameRange,
    ArgRange,
    MappingFieldRange,
    ParamRange,
    RecordFieldRange,
    ObjectMemberRange,
    ArrayDimRange,
    FieldPatternRange,
    LetDeclRange,
    QueryClauseRange,
    OrderKeyRange,
    MatchClauseRange,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ranges() {
        assert!(ExprRange::EMPTY.is_empty());
        assert!(MatchClauseRange::default().is_empty());
        assert_eq!(PatternRange::EMPTY.to_range(), 0..0);
    }

    #[test]
    fn lengths_past_u16() {
        let range = ExprRange::new(10, 70_000);
        assert_eq!(range.len(), 70_000);
        assert_eq!(range.to_range(), 10..70_010);
    }

    #[test]
    fn debug_and_to_range_agree() {
        let range = ArgRange::new(4, 3);
        assert_eq!(range.len(), 3);
        assert_eq!(range.to_range(), 4..7);
        assert_eq!(format!("{range:?}"), "ArgRange(4..7)");
    }
}
