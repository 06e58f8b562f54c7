//! The bitstream module forms the I/O subsystem for huffzip.
//!
//! A compressed stream is a continuous run of bits with no byte alignment
//! inside it, so every read and write goes through these two types.
//!
//! BitReader is the forward-only bit source. All of its read calls return
//! Option values, with None meaning the source is exhausted. It also
//! carries a one-shot rewind used between the two compression passes.
//!
//! BitWriter is the bit sink. It packs bits into an in-memory buffer which
//! the caller writes to the final destination after flushing.
pub mod bitreader;
pub mod bitwriter;
