use crate::traits::Sequence;

/// Indexed, bounded and reversible: the fully capable tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTier;

/// Forward-only consumption, no direct indexing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardTier;

/// Reversible and bounded but not directly indexable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleEndedTier;

/// Indexed but endless, so no back boundary exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndlessRandomTier;

/// Declares, once per sequence type, which capability tier it belongs to.
///
/// Engine-selecting combinators dispatch on `Tier` at construction time:
/// the tier tag resolves to a strategy type, and code requesting an engine
/// the tier cannot support fails to compile. There is no runtime
/// representation of capabilities anywhere.
pub trait Tiered: Sequence {
    type Tier;
}
