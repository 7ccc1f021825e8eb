// Resume document: normalization of untrusted input, edit operations, the
// built-in sample, and the HTTP handlers that expose them.

pub mod edits;
pub mod handlers;
pub mod normalize;
pub mod sample;

pub use edits::{apply_edit, EditOp};
pub use normalize::{normalize, renormalize};
pub use sample::sample_document;
