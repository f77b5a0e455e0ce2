//! Property-based checks of the flattening contract and the query layers built on it.
use proptest::prelude::*;
use segment_tree::Sum;
use tree_flatten::{DeferredSubtreeSums, Flattening, SubtreeQuery, Tree};

/// A tree as `parents[i]` = parent of node `i + 2`, always a smaller id.
fn parents(max_n: usize) -> impl Strategy<Value = Vec<usize>> {
    (1..=max_n).prop_flat_map(|n| {
        (0..n - 1)
            .map(|i| (1..=i + 1).boxed())
            .collect::<Vec<_>>()
    })
}

fn subtree_members(parents: &[usize], v: usize) -> Vec<usize> {
    let n = parents.len() + 1;
    (1..=n)
        .filter(|&u| {
            let mut x = u;
            loop {
                if x == v {
                    return true;
                }
                if x == 1 {
                    return false;
                }
                x = parents[x - 2];
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
enum Step {
    Set(usize, i64),
    Read(usize),
}

fn scenario() -> impl Strategy<Value = (Vec<usize>, Vec<i64>, Vec<Step>)> {
    parents(40).prop_flat_map(|parents| {
        let n = parents.len() + 1;
        let step = prop_oneof![
            3 => (1..=n, -500_i64..=500).prop_map(|(v, x)| Step::Set(v, x)),
            1 => (1..=n).prop_map(Step::Read),
        ];
        (
            Just(parents),
            prop::collection::vec(-500_i64..=500, n),
            prop::collection::vec(step, 1..80),
        )
    })
}

proptest! {
    #[test]
    fn subtrees_are_contiguous_ranges(parents in parents(60)) {
        let tree = Tree::from_parents(&parents).unwrap();
        let flat = Flattening::new(&tree, 1).unwrap();
        prop_assert_eq!(flat.entry(1).unwrap(), 0);

        for v in 1..=parents.len() + 1 {
            let mut entries: Vec<usize> = subtree_members(&parents, v)
                .into_iter()
                .map(|u| flat.entry(u).unwrap())
                .collect();
            entries.sort_unstable();
            let range: Vec<usize> = flat.subtree_range(v).unwrap().collect();
            prop_assert_eq!(&entries, &range);
            prop_assert_eq!(flat.subtree_size(v).unwrap(), entries.len());
        }
    }

    #[test]
    fn deferred_reads_see_every_earlier_write((parents, values, steps) in scenario()) {
        let tree = Tree::from_parents(&parents).unwrap();
        let mut eager = SubtreeQuery::<Sum>::new(&tree, 1, &values).unwrap();
        let mut deferred = DeferredSubtreeSums::new(&tree, 1, &values).unwrap();

        for step in steps {
            match step {
                Step::Set(v, x) => {
                    eager.update_node(v, x).unwrap();
                    deferred.set_value(v, x).unwrap();
                }
                Step::Read(v) => {
                    prop_assert_eq!(
                        deferred.subtree_sum(v).unwrap(),
                        eager.subtree_aggregate(v).unwrap()
                    );
                }
            }
        }
    }
}
