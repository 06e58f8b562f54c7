use std::fs::{self, File};
use std::io::{self, Read, Seek, Write};
use std::path::Path;

use log::{error, info, trace};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::huffman_coding::code_table::codes_from_tree;
use crate::huffman_coding::header::write_tree;
use crate::huffman_coding::tree::tree_from_freqs;
use crate::huffman_coding::EOS;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::freqs;

use super::STREAM_MAGIC;

/// Compress the input file defined in opts, writing `<name>.hz`.
pub fn compress(opts: &HuffOpts) -> io::Result<()> {
    // Prepare to read the data
    let fname = opts.file.clone();
    let fin = File::open(&fname)?;
    let fin_size = fs::metadata(&fname)?.len() as usize;

    // Refuse to clobber an existing output unless forced
    let mut fname_out = fname.clone();
    fname_out.push_str(".hz");
    if Path::new(&fname_out).exists() && !opts.force_overwrite {
        error!("{} exists. Use --force to overwrite it.", fname_out);
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "output file exists",
        ));
    }

    let mut br = BitReader::new(fin);
    let mut bw = BitWriter::new(fin_size + 1024);
    compress_stream(&mut br, &mut bw)?;

    let mut f_out = File::create(&fname_out)?;
    f_out.write_all(&bw.output)?;
    info!(
        "Compressed {} bytes into {} bytes ({}).",
        fin_size,
        bw.output.len(),
        fname_out
    );
    Ok(())
}

/// The compression pipeline. The source is read twice: a counting pass to
/// weight the tree, a rewind, then the encoding pass that replaces every
/// byte with its code. The sink ends up holding the complete stream:
/// marker, tree header, payload, end-of-stream code.
pub fn compress_stream<R: Read + Seek>(
    br: &mut BitReader<R>,
    bw: &mut BitWriter,
) -> io::Result<()> {
    let freq = freqs(br);
    let tree = tree_from_freqs(&freq);
    let table = codes_from_tree(&tree);

    bw.out32(STREAM_MAGIC);
    write_tree(&tree, bw);
    trace!("Tree header written at {}.", bw.loc());

    // Second pass over the source, one code per byte.
    br.rewind()?;
    while let Some(byte) = br.byte() {
        for &bit in &table[&(byte as u16)] {
            bw.out24((1 << 24) | bit as u32);
        }
    }
    // The end marker tells the decoder where the payload stops.
    for &bit in &table[&EOS] {
        bw.out24((1 << 24) | bit as u32);
    }
    trace!("Payload written at {}.", bw.loc());

    bw.flush();
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn compressed(data: &[u8]) -> Vec<u8> {
        let mut br = BitReader::new(Cursor::new(data.to_vec()));
        let mut bw = BitWriter::new(64);
        compress_stream(&mut br, &mut bw).unwrap();
        bw.output
    }

    #[test]
    fn stream_starts_with_magic_test() {
        let out = compressed(b"peter piper picked a peck of pickled peppers");
        assert_eq!(&out[0..4], &[0xfa, 0xce, 0x82, 0x01]);
    }

    #[test]
    fn deterministic_output_test() {
        let data = b"she sells seashells by the seashore";
        assert_eq!(compressed(data), compressed(data));
    }

    #[test]
    fn empty_input_still_framed_test() {
        let out = compressed(b"");
        // Marker, two-leaf header and the end code always get written.
        assert!(out.len() > 4);
        assert_eq!(&out[0..4], &[0xfa, 0xce, 0x82, 0x01]);
    }

    #[test]
    fn skewed_input_shrinks_test() {
        // One byte value a thousand times compresses to almost nothing.
        let data = vec![b'z'; 1000];
        let out = compressed(&data);
        assert!(out.len() < data.len() / 4);
    }
}
