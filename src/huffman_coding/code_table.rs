//! Code assignment: walk the tree once and record the bit path to every
//! leaf. Descending left appends a 0, descending right appends a 1, so the
//! table is a prefix code by construction.

use log::debug;
use rustc_hash::FxHashMap;

use super::tree::{Node, NodeData};

/// Symbol to code mapping. Each code is the root-to-leaf path, one 0/1
/// value per descent. Built fresh for every compression run.
pub type CodeTable = FxHashMap<u16, Vec<u8>>;

/// Produce the code for every leaf reachable from the root.
pub fn codes_from_tree(root: &Node) -> CodeTable {
    let mut table = CodeTable::default();
    walk(root, &mut Vec::new(), &mut table);
    table
}

fn walk(node: &Node, path: &mut Vec<u8>, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Leaf(symbol) => {
            debug!("encoding for {} is {}", symbol, code_string(path));
            table.insert(*symbol, path.clone());
        }
        NodeData::Kids(left, right) => {
            path.push(0);
            walk(left, path, table);
            path.pop();
            path.push(1);
            walk(right, path, table);
            path.pop();
        }
    }
}

/// Render a code as a 0/1 string for reporting.
fn code_string(code: &[u8]) -> String {
    code.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::tree::tree_from_freqs;
    use crate::huffman_coding::{EOS, SYMBOL_COUNT};

    #[test]
    fn codes_follow_tree_paths_test() {
        // Hand-built tree: root -> (a, (b, eos)).
        let tree = Node::kids(
            Node::leaf(97, 3),
            Node::kids(Node::leaf(98, 1), Node::leaf(EOS, 1)),
        );
        let table = codes_from_tree(&tree);
        assert_eq!(table[&97], vec![0]);
        assert_eq!(table[&98], vec![1, 0]);
        assert_eq!(table[&EOS], vec![1, 1]);
    }

    #[test]
    fn skewed_frequencies_code_length_test() {
        let mut freqs = vec![0_u32; SYMBOL_COUNT];
        freqs[b'x' as usize] = 1000;
        freqs[b'y' as usize] = 1;
        freqs[EOS as usize] = 1;
        let table = codes_from_tree(&tree_from_freqs(&freqs));
        assert!(table[&(b'x' as u16)].len() <= table[&(b'y' as u16)].len());
    }

    #[test]
    fn prefix_property_test() {
        let mut freqs = vec![0_u32; SYMBOL_COUNT];
        for (i, &count) in [13_u32, 7, 5, 3, 2, 1].iter().enumerate() {
            freqs[b'a' as usize + i] = count;
        }
        freqs[EOS as usize] = 1;
        let table = codes_from_tree(&tree_from_freqs(&freqs));
        for (a_sym, a) in &table {
            for (b_sym, b) in &table {
                if a_sym != b_sym {
                    assert!(!b.starts_with(a), "{:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }
}
