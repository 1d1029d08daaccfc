/// Per-field state report.
pub mod inspect;
/// Record re-encoding with absent-field suppression.
pub mod normalize;
/// Encode/decode stability check.
pub mod roundtrip;

mod util;
