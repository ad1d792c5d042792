//! Claim-time compression of a run's collected slices.

use std::collections::HashMap;

use crate::types::{ItemKey, RuntimeSlice};

/// One slice per distinct item, amounts summed, in first-seen order. Bomb
/// slices carry nothing claimable and are dropped; output is never a bomb.
pub fn compress(slices: &[RuntimeSlice]) -> Vec<RuntimeSlice> {
    let mut merged: Vec<RuntimeSlice> = Vec::new();
    let mut index_of: HashMap<ItemKey, usize> = HashMap::new();

    for slice in slices.iter().filter(|slice| !slice.is_bomb) {
        match index_of.get(&slice.item) {
            Some(&index) => {
                let total = &mut merged[index].amount;
                *total = total.saturating_add(slice.amount);
            }
            None => {
                index_of.insert(slice.item, merged.len());
                merged.push(RuntimeSlice::reward(slice.item, slice.amount));
            }
        }
    }

    merged
}

/// Sum of claimable amounts for one item.
pub fn total_for(slices: &[RuntimeSlice], item: ItemKey) -> u64 {
    slices
        .iter()
        .filter(|slice| !slice.is_bomb && slice.item == item)
        .map(|slice| u64::from(slice.amount))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::weighted_fixture;

    #[test]
    fn duplicates_are_merged_by_item() {
        let f = weighted_fixture();
        let input = [
            RuntimeSlice::reward(f.cash, 10),
            RuntimeSlice::reward(f.gem, 5),
            RuntimeSlice::reward(f.cash, 3),
        ];
        assert_eq!(
            compress(&input),
            vec![RuntimeSlice::reward(f.cash, 13), RuntimeSlice::reward(f.gem, 5)]
        );
    }

    #[test]
    fn output_follows_first_seen_order() {
        let f = weighted_fixture();
        let input = [
            RuntimeSlice::reward(f.gem, 1),
            RuntimeSlice::reward(f.cash, 1),
            RuntimeSlice::reward(f.gem, 1),
        ];
        let items: Vec<_> = compress(&input).iter().map(|slice| slice.item).collect();
        assert_eq!(items, [f.gem, f.cash]);
    }

    #[test]
    fn duplicate_order_does_not_change_totals() {
        let f = weighted_fixture();
        let forward = [
            RuntimeSlice::reward(f.cash, 10),
            RuntimeSlice::reward(f.gem, 5),
            RuntimeSlice::reward(f.cash, 3),
        ];
        let mut backward = forward;
        backward.reverse();
        let mut left = compress(&forward);
        let mut right = compress(&backward);
        left.sort_by_key(|slice| slice.amount);
        right.sort_by_key(|slice| slice.amount);
        assert_eq!(left, right);
    }

    #[test]
    fn bombs_are_never_emitted() {
        let f = weighted_fixture();
        let mut stray_flag = RuntimeSlice::reward(f.cash, 4);
        stray_flag.is_bomb = true;
        let input = [RuntimeSlice::bomb(f.bomb), RuntimeSlice::reward(f.cash, 4), stray_flag];

        let output = compress(&input);
        assert_eq!(output, vec![RuntimeSlice::reward(f.cash, 4)]);
        assert!(output.iter().all(|slice| !slice.is_bomb));
    }

    #[test]
    fn compression_is_idempotent() {
        let f = weighted_fixture();
        let input = [
            RuntimeSlice::reward(f.crate_item, 1),
            RuntimeSlice::reward(f.cash, 100),
            RuntimeSlice::bomb(f.bomb),
            RuntimeSlice::reward(f.crate_item, 2),
        ];
        let once = compress(&input);
        assert_eq!(compress(&once), once);
    }

    #[test]
    fn empty_input_compresses_to_nothing() {
        assert!(compress(&[]).is_empty());
    }

    #[test]
    fn summing_saturates() {
        let f = weighted_fixture();
        let input = [RuntimeSlice::reward(f.gem, u32::MAX), RuntimeSlice::reward(f.gem, 9)];
        assert_eq!(compress(&input), vec![RuntimeSlice::reward(f.gem, u32::MAX)]);
        assert_eq!(total_for(&input, f.gem), u64::from(u32::MAX) + 9);
    }
}
