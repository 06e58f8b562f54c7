use std::fs::File;
use std::io::{self, Error, ErrorKind, Read, Write};
use std::path::Path;

use log::{error, info, trace};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::huffman_coding::header::read_tree;
use crate::huffman_coding::tree::NodeData;
use crate::huffman_coding::EOS;
use crate::tools::cli::HuffOpts;

use super::STREAM_MAGIC;

/// Decompress the file specified in opts.
pub fn decompress(opts: &HuffOpts) -> io::Result<()> {
    let fname = opts.file.clone();
    let mut br = BitReader::new(File::open(&fname)?);

    // Strip the .hz suffix for the output name, or mark the output as
    // recovered when the input was named something else.
    let fname_out = match fname.strip_suffix(".hz") {
        Some(stem) => stem.to_string(),
        None => format!("{}.out", fname),
    };
    if Path::new(&fname_out).exists() && !opts.force_overwrite {
        error!("{} exists. Use --force to overwrite it.", fname_out);
        return Err(Error::new(ErrorKind::AlreadyExists, "output file exists"));
    }

    let mut bw = BitWriter::new(1024 * 1024);
    decompress_stream(&mut br, &mut bw)?;

    let mut f_out = File::create(&fname_out)?;
    f_out.write_all(&bw.output)?;
    info!(
        "Decompressed {} into {} bytes ({}).",
        fname,
        bw.output.len(),
        fname_out
    );
    Ok(())
}

/// The decompression pipeline: validate the stream marker, rebuild the
/// coding tree from the header, then walk the tree one payload bit at a
/// time. Each leaf emits one byte and restarts the walk at the root; the
/// end-of-stream leaf terminates it.
pub fn decompress_stream<R: Read>(br: &mut BitReader<R>, bw: &mut BitWriter) -> io::Result<()> {
    // Look for a valid signature.
    let magic = br.bint(32).map(|v| v as i64).unwrap_or(-1);
    if magic != STREAM_MAGIC as i64 {
        error!("Fatal error: this is not a huffzip compressed stream.");
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("illegal header starts with {}", magic),
        ));
    }

    let tree = read_tree(br)?;
    trace!("Tree header parsed at {}.", br.loc());

    let mut current = &tree;
    loop {
        let bit = match br.bit() {
            Some(bit) => bit,
            None => {
                error!("Compressed stream ended before the end marker.");
                return Err(Error::new(
                    ErrorKind::UnexpectedEof,
                    "unexpected end of stream",
                ));
            }
        };
        current = match &current.node_data {
            NodeData::Kids(left, right) => {
                if bit == 0 {
                    left
                } else {
                    right
                }
            }
            // Only reachable when the header held a bare leaf, which the
            // compressor never writes.
            NodeData::Leaf(_) => {
                error!("Tree walk fell off the tree. The stream is corrupt.");
                return Err(Error::new(ErrorKind::InvalidData, "corrupt payload"));
            }
        };
        if let NodeData::Leaf(symbol) = &current.node_data {
            if *symbol == EOS {
                break;
            }
            bw.out24((8 << 24) | *symbol as u32);
            current = &tree;
        }
    }
    bw.flush();
    Ok(())
}
