/// Identifier for a segment in a [`crate::skeleton::Skeleton`].
///
/// This is an index into `Skeleton::segments`, and is only meaningful
/// within the lifetime of a given `Skeleton` instance.
pub type BranchId = usize;
