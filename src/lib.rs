//! Rust implementation of a Huffman tree-header stream compressor.
//!
//! Provides lossless compression and decompression of files using a
//! prefix code built from the exact byte-frequency distribution of the
//! input. The compressed stream is self describing: a serialized copy of
//! the coding tree rides in the stream header and an end-of-stream marker
//! closes the payload, so decoding needs no external length metadata.
//!
//! Basic usage to compress a file:
//!
//! `$> huffzip -z test.txt`
//!
//! This will compress the file and create test.txt.hz alongside it.
//! Get the original back with:
//!
//! `$> huffzip -d test.txt.hz`
//!
pub mod bitstream;
pub mod compression;
pub mod huffman_coding;
pub mod tools;
