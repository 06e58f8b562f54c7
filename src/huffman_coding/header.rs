//! The tree header codec.
//!
//! The coding tree rides at the front of every compressed stream so the
//! decoder can rebuild it without any shared state. The shape is written
//! in pre-order: a single 0 bit means "internal node, both children
//! follow", a single 1 bit followed by a 9 bit symbol means "leaf". Nine
//! bits because the symbol space includes the end-of-stream marker at 256.
//!
//! Weights are not carried on the stream. Decoding only needs the shape
//! and the leaf symbols, so rebuilt nodes all get weight zero.

use std::io::{self, Error, ErrorKind, Read};

use log::error;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;

use super::tree::{Node, NodeData};
use super::EOS;

/// Deepest node any tree over this symbol space can place. A header that
/// recurses past this limit cannot have come from a real tree.
const MAX_DEPTH: usize = 256;

/// Serialize the tree shape to the sink, pre-order.
pub fn write_tree(node: &Node, bw: &mut BitWriter) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            bw.out24(1 << 24);
            write_tree(left, bw);
            write_tree(right, bw);
        }
        NodeData::Leaf(symbol) => {
            bw.out24((1 << 24) | 1);
            bw.out24((9 << 24) | *symbol as u32);
        }
    }
}

/// Rebuild a tree from the serialized header.
pub fn read_tree<R: Read>(br: &mut BitReader<R>) -> io::Result<Node> {
    read_node(br, 0)
}

fn read_node<R: Read>(br: &mut BitReader<R>, depth: usize) -> io::Result<Node> {
    if depth > MAX_DEPTH {
        error!("Tree header recursed past any depth a real tree can reach.");
        return Err(Error::new(ErrorKind::InvalidData, "corrupt tree header"));
    }
    match br.bit() {
        None => {
            error!("Compressed stream ended inside the tree header.");
            Err(Error::new(ErrorKind::UnexpectedEof, "truncated tree header"))
        }
        Some(0) => {
            let left = read_node(br, depth + 1)?;
            let right = read_node(br, depth + 1)?;
            Ok(Node::kids(left, right))
        }
        Some(_) => {
            let symbol = br.bint(9).ok_or_else(|| {
                error!("Compressed stream ended inside a leaf symbol.");
                Error::new(ErrorKind::UnexpectedEof, "truncated tree header")
            })?;
            if symbol > EOS as usize {
                error!("Found leaf symbol {} above the end marker.", symbol);
                return Err(Error::new(ErrorKind::InvalidData, "corrupt tree header"));
            }
            Ok(Node::leaf(symbol as u16, 0))
        }
    }
}
