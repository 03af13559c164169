//! The header stack tracking the current position in the document outline.

/// Depth reserved for document titles.
const TITLE_DEPTH: u32 = 0;

/// One active header: its depth and its raw label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    /// Outline depth; 0 for titles.
    depth: u32,
    /// Header text exactly as the parser produced it.
    label: String,
}

/// Ancestor headers from root to current leaf.
///
/// Entries are kept in insertion order. Pushing a header first pops every entry whose depth
/// is greater than or equal to the new depth, so depths are strictly increasing from root
/// to top after every push. Shallower ancestors always survive, which means a depth jump
/// (1 then 3) nests directly without synthesized intermediate levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderStack {
    /// Active headers, root first.
    entries: Vec<HeaderEntry>,
}

impl HeaderStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every header and makes `label` the sole root at depth 0.
    pub fn reset_to_title(&mut self, label: &str) {
        self.entries.clear();
        self.entries.push(HeaderEntry {
            depth: TITLE_DEPTH,
            label: label.to_string(),
        });
    }

    /// Pushes a header, first popping siblings and deeper descendants.
    pub fn push_header(&mut self, depth: u32, label: &str) {
        while self.entries.last().is_some_and(|top| top.depth >= depth) {
            self.entries.pop();
        }
        self.entries.push(HeaderEntry {
            depth,
            label: label.to_string(),
        });
    }

    /// Labels root first.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depths(stack: &HeaderStack) -> Vec<u32> {
        stack.entries.iter().map(|e| e.depth).collect()
    }

    fn top_depth(stack: &HeaderStack) -> Option<u32> {
        stack.entries.last().map(|e| e.depth)
    }

    #[test]
    fn test_push_nested() {
        let mut stack = HeaderStack::new();
        stack.push_header(1, "A");
        stack.push_header(2, "B");
        stack.push_header(3, "C");
        assert_eq!(stack.labels(), vec!["A", "B", "C"]);
        assert_eq!(top_depth(&stack), Some(3));
    }

    #[test]
    fn test_sibling_replaces() {
        let mut stack = HeaderStack::new();
        stack.push_header(1, "A");
        stack.push_header(2, "B");
        stack.push_header(2, "B2");
        assert_eq!(stack.labels(), vec!["A", "B2"]);
    }

    #[test]
    fn test_shallower_pops_deeper() {
        let mut stack = HeaderStack::new();
        stack.push_header(1, "H1");
        stack.push_header(3, "H3");
        stack.push_header(2, "H2");
        assert_eq!(stack.labels(), vec!["H1", "H2"]);
    }

    #[test]
    fn test_title_survives_headers() {
        let mut stack = HeaderStack::new();
        stack.reset_to_title("Doc");
        stack.push_header(3, "Deep");
        stack.push_header(1, "Top");
        assert_eq!(stack.labels(), vec!["Doc", "Top"]);
        assert_eq!(depths(&stack), vec![0, 1]);
    }

    #[test]
    fn test_title_resets() {
        let mut stack = HeaderStack::new();
        stack.reset_to_title("First");
        stack.push_header(1, "A");
        stack.reset_to_title("Second");
        assert_eq!(stack.labels(), vec!["Second"]);
        assert_eq!(stack.entries.len(), 1);
    }

    #[test]
    fn test_depth_zero_header_pops_title() {
        let mut stack = HeaderStack::new();
        stack.reset_to_title("Doc");
        stack.push_header(0, "Peer");
        assert_eq!(stack.labels(), vec!["Peer"]);
    }

    #[test]
    fn test_depths_strictly_increase_for_all_sequences() {
        // Every sequence of length 5 over depths 1..=4.
        let alphabet = [1u32, 2, 3, 4];
        let mut sequence = [0usize; 5];
        loop {
            let mut stack = HeaderStack::new();
            stack.reset_to_title("Root");
            for (i, &d) in sequence.iter().enumerate() {
                let depth = alphabet[d];
                stack.push_header(depth, &format!("h{i}"));

                let ds = depths(&stack);
                assert!(ds.windows(2).all(|w| w[0] < w[1]), "{ds:?}");
                assert_eq!(top_depth(&stack), Some(depth));
                assert_eq!(ds[0], TITLE_DEPTH);
            }

            // Advance the odometer.
            let mut pos = 0;
            while pos < sequence.len() {
                sequence[pos] += 1;
                if sequence[pos] < alphabet.len() {
                    break;
                }
                sequence[pos] = 0;
                pos += 1;
            }
            if pos == sequence.len() {
                break;
            }
        }
    }

    #[test]
    fn test_empty() {
        let stack = HeaderStack::new();
        assert!(stack.entries.is_empty());
        assert!(stack.labels().is_empty());
        assert_eq!(top_depth(&stack), None);
    }
}
