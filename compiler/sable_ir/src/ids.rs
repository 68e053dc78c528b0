//! Arena node handles.
//!
//! Nodes refer to their children through these `u32` indices, never through
//! references, so a tree is acyclic by construction: a node can only point at
//! nodes allocated before it.

/// Declares a `u32` node handle with an `INVALID` sentinel.
macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const INVALID: Self = Self(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", stringify!($name), self.0)
                } else {
                    write!(f, "{}::INVALID", stringify!($name))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    )* };
}

define_id!(
    /// Expression node.
    ExprId,
    /// Type-descriptor node.
    TypeId,
    /// Binding, match or destructuring pattern node.
    PatternId,
    /// Statement node.
    StmtId,
);

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, PatternId, StmtId, TypeId};
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(TypeId, 4);
    crate::static_assert_size!(PatternId, 4);
    crate::static_assert_size!(StmtId, 4);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_is_default() {
        assert_eq!(ExprId::default(), ExprId::INVALID);
        assert!(!TypeId::INVALID.is_valid());
        assert!(PatternId::new(0).is_valid());
    }

    #[test]
    fn debug_names_the_handle() {
        assert_eq!(format!("{:?}", StmtId::new(3)), "StmtId(3)");
        assert_eq!(format!("{:?}", TypeId::INVALID), "TypeId::INVALID");
    }
}
