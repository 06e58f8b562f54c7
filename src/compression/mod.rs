//! The compression module manages both directions of the huffzip pipeline.
//!
//! Compression happens in the following steps:
//! - Frequency count: one full pass over the input, one count per symbol.
//! - Tree build: merge the two lightest subtrees until one root remains.
//! - Code assignment: the root-to-leaf path becomes each symbol's code.
//! - Output: a 32 bit stream marker, the serialized tree, then a second
//!   input pass rewriting every byte as its code, closed by the
//!   end-of-stream code.
//!
//! Decompression is the inverse: validate the marker, rebuild the tree
//! from the header, then walk the tree one payload bit at a time, writing
//! a byte at each leaf until the end-of-stream leaf is reached.

pub mod compress;
pub mod decompress;

/// Marks a stream as huffzip tree-header format. Nothing else writes this
/// word at offset zero.
pub const STREAM_MAGIC: u32 = 0xface8201;
