//! # veil-engine
//!
//! The matching and rewriting engine: segmentation, tag masking,
//! multi-pattern surface search, overlap resolution, and the two rewrite
//! passes (redact and unredact). Everything here is pure text-in,
//! text-out; persistence and file walking live in other crates.

pub mod mask;
pub mod matcher;
pub mod redact;
pub mod resolve;
pub mod segment;
pub mod unredact;

pub use mask::mask_existing_tags;
pub use matcher::{Match, SurfaceMatcher, Variant};
pub use redact::{redact, RedactedText};
pub use resolve::select_leftmost_longest;
pub use segment::{segment, Segment};
pub use unredact::unredact;
