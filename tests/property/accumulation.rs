//! Properties of bounded accumulation under fragmented delivery.

use proptest::prelude::*;
use revline::testing::{split_at_points, Fragmented};
use revline::{accumulate, LineBuffer, Variant, MAX_CONTENT};

use super::common::{expected_output, reverse_fragmented};

fn fragments(data: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    split_at_points(data, cuts)
}

/// Truncation is only visible when the fill that fills the buffer carries
/// extra bytes; a fragment ending exactly at the limit hides the rest.
fn overflow_visible(parts: &[Vec<u8>]) -> bool {
    let mut end = 0;
    for part in parts {
        end += part.len();
        if end >= MAX_CONTENT {
            return end > MAX_CONTENT;
        }
    }
    false
}

proptest! {
    /// However the input is split, the accumulator sees the concatenation.
    #[test]
    fn prop_fragments_concatenate(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        cuts in prop::collection::vec(any::<usize>(), 0..16),
    ) {
        let parts = fragments(&data, &cuts);
        let refs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
        let mut src = Fragmented::reader(&refs);
        let mut buf = LineBuffer::new();
        let acc = accumulate(&mut buf, &mut src).unwrap();

        let kept = data.len().min(MAX_CONTENT);
        prop_assert_eq!(buf.as_bytes(), &data[..kept]);
        prop_assert_eq!(acc.bytes, kept);
        prop_assert_eq!(acc.truncated, overflow_visible(&parts));
        if acc.truncated {
            prop_assert!(data.len() > MAX_CONTENT);
        }
    }

    /// Never more than MAX_CONTENT bytes, whatever arrives.
    #[test]
    fn prop_never_exceeds_capacity(
        data in prop::collection::vec(any::<u8>(), 0..4096),
        cuts in prop::collection::vec(any::<usize>(), 0..8),
    ) {
        let parts = fragments(&data, &cuts);
        let refs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
        let (out, outcome) = reverse_fragmented(Variant::Succeeding, &refs);
        prop_assert!(outcome.occupied_len <= MAX_CONTENT);
        prop_assert_eq!(out.len(), outcome.occupied_len + 1);
    }

    /// Succeeding output is independent of how the input was fragmented.
    #[test]
    fn prop_succeeding_is_fragmentation_invariant(
        data in prop::collection::vec(any::<u8>(), 0..1500),
        cuts in prop::collection::vec(any::<usize>(), 0..16),
    ) {
        let parts = fragments(&data, &cuts);
        let refs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
        let (out, _) = reverse_fragmented(Variant::Succeeding, &refs);
        prop_assert_eq!(out, expected_output(&data));
    }

    /// The failing variant never reads past its first chunk.
    #[test]
    fn prop_failing_reads_one_chunk(
        data in prop::collection::vec(any::<u8>(), 1..1500),
        cuts in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let parts = fragments(&data, &cuts);
        let first_line = parts[0]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(parts[0].len(), |p| p + 1)
            .min(MAX_CONTENT);
        let refs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
        let (_, outcome) = reverse_fragmented(Variant::Failing, &refs);
        prop_assert!(outcome.reads <= 1);
        prop_assert_eq!(outcome.bytes_read, first_line);
    }
}
