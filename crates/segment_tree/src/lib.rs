mod error;
pub mod monoid;
mod operation;
mod store;

pub use error::{ParseOperationError, RangeError};
pub use monoid::{Max, Min, Monoid, Sum};
pub use operation::{Operation, OperationStore};
pub use store::RangeQueryStore;

#[cfg(test)]
mod tests {
    use super::{Max, Min, Monoid, RangeError, RangeQueryStore, Sum};

    fn brute_force<M: Monoid>(values: &[M::Value], lo: usize, hi: usize) -> M::Value {
        debug_assert!(lo <= hi);
        values[lo..=hi]
            .iter()
            .fold(M::identity(), |acc, x| M::combine(&acc, x))
    }

    #[derive(Clone)]
    struct XorShift64 {
        state: u64,
    }

    impl XorShift64 {
        fn new(seed: u64) -> Self {
            Self { state: seed }
        }

        fn next_u64(&mut self) -> u64 {
            let mut x = self.state;
            x ^= x << 7;
            x ^= x >> 9;
            x ^= x << 8;
            self.state = x;
            x
        }

        fn gen_usize(&mut self, range: std::ops::Range<usize>) -> usize {
            debug_assert!(range.start < range.end);
            let span = (range.end - range.start) as u64;
            let x = self.next_u64() % span;
            range.start + (x as usize)
        }

        fn gen_i64(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
            let start = *range.start();
            let end = *range.end();
            debug_assert!(start <= end);
            let span = (end as i128 - start as i128 + 1) as u64;
            let x = self.next_u64() % span;
            start + (x as i64)
        }
    }

    fn check_all_ranges<M>(values: &[i64])
    where
        M: Monoid<Value = i64>,
    {
        let store = RangeQueryStore::<M>::new(values).unwrap();
        let n = values.len();
        for lo in 0..n {
            for hi in lo..n {
                let expected = brute_force::<M>(values, lo, hi);
                assert_eq!(store.query(lo, hi), Ok(expected), "lo={lo} hi={hi}");
            }
        }
    }

    fn check_random_queries<M>(rng: &mut XorShift64, values: &[i64], queries: usize)
    where
        M: Monoid<Value = i64>,
    {
        let store = RangeQueryStore::<M>::new(values).unwrap();
        let n = values.len();
        for _ in 0..queries {
            let lo = rng.gen_usize(0..n);
            let hi = rng.gen_usize(lo..n);
            assert_eq!(store.query(lo, hi), Ok(brute_force::<M>(values, lo, hi)));
        }
    }

    #[test]
    fn empty_is_rejected() {
        let values: Vec<i64> = Vec::new();
        assert_eq!(
            RangeQueryStore::<Sum>::new(&values).unwrap_err(),
            RangeError::Empty
        );
        assert_eq!(
            RangeQueryStore::<Min>::new(&values).unwrap_err(),
            RangeError::Empty
        );
        assert_eq!(
            RangeQueryStore::<Max>::new(&values).unwrap_err(),
            RangeError::Empty
        );
    }

    #[test]
    fn single_element_answers_every_operator() {
        let values = [-17];
        assert_eq!(RangeQueryStore::<Sum>::new(&values).unwrap().query(0, 0), Ok(-17));
        assert_eq!(RangeQueryStore::<Min>::new(&values).unwrap().query(0, 0), Ok(-17));
        assert_eq!(RangeQueryStore::<Max>::new(&values).unwrap().query(0, 0), Ok(-17));
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let values = vec![5, 1, 4];
        let mut store = RangeQueryStore::<Sum>::new(&values).unwrap();

        assert_eq!(
            store.query(2, 1),
            Err(RangeError::InvalidRange { lo: 2, hi: 1, len: 3 })
        );
        assert_eq!(
            store.query(0, 3),
            Err(RangeError::InvalidRange { lo: 0, hi: 3, len: 3 })
        );
        assert_eq!(
            store.update(3, 9),
            Err(RangeError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(
            store.get(7),
            Err(RangeError::InvalidIndex { index: 7, len: 3 })
        );

        // Rejected calls leave the store untouched.
        assert_eq!(store.query(0, 2), Ok(10));
    }

    #[test]
    fn fold_accepts_rust_ranges() {
        let values = vec![3, 1, 4, 1, 5];
        let store = RangeQueryStore::<Sum>::new(&values).unwrap();

        assert_eq!(store.fold(..), Ok(14));
        assert_eq!(store.fold(1..3), Ok(5));
        assert_eq!(store.fold(1..=3), Ok(6));
        assert_eq!(store.fold(2..), Ok(10));
        assert_eq!(store.fold(2..2), Ok(0));
        assert_eq!(store.fold(5..5), Ok(0));
        assert_eq!(
            store.fold(0..6),
            Err(RangeError::InvalidBounds { start: 0, end: 6, len: 5 })
        );
        assert_eq!(
            store.fold(4..2),
            Err(RangeError::InvalidBounds { start: 4, end: 2, len: 5 })
        );

        let min = RangeQueryStore::<Min>::new(&values).unwrap();
        assert_eq!(min.fold(3..3), Ok(i64::MAX));
    }

    #[test]
    fn known_cases_match_bruteforce() {
        let cases: &[&[i64]] = &[
            &[1],
            &[2, 1],
            &[1, 2],
            &[2, 2],
            &[3, 1, 4, 2, 5],
            &[5, 1, 4, 1, 3],
            &[3, 2, 1, 0],
            &[0, 1, 2, 3],
            &[7, 7, 7, 7],
            &[-4, 9, -1, 0, 6, -8, 2],
        ];

        for &values in cases {
            check_all_ranges::<Sum>(values);
            check_all_ranges::<Min>(values);
            check_all_ranges::<Max>(values);
        }
    }

    #[test]
    fn random_cases_match_bruteforce() {
        let mut rng = XorShift64::new(0xDEAD_BEEF_CAFE_BABE);

        for n in (1..64).chain([255, 256, 257, 1_000, 10_000]) {
            let mut values = Vec::with_capacity(n);
            for _ in 0..n {
                values.push(rng.gen_i64(-1_000_000_000..=1_000_000_000));
            }

            check_random_queries::<Sum>(&mut rng, &values, 300);
            check_random_queries::<Min>(&mut rng, &values, 300);
            check_random_queries::<Max>(&mut rng, &values, 300);
        }
    }

    #[test]
    fn sum_does_not_overflow_on_large_inputs() {
        let values = vec![i32::MAX as i64; 10_000];
        let store = RangeQueryStore::<Sum>::new(&values).unwrap();
        assert_eq!(store.all(), i32::MAX as i64 * 10_000);
    }

    #[test]
    fn updates_are_visible_only_inside_covering_ranges() {
        let mut rng = XorShift64::new(0x1234_5678_9ABC_DEF0);

        for n in [1_usize, 2, 3, 8, 13, 100] {
            let mut values: Vec<i64> = (0..n).map(|_| rng.gen_i64(-50..=50)).collect();
            let mut store = RangeQueryStore::<Max>::new(&values).unwrap();

            for _ in 0..200 {
                let i = rng.gen_usize(0..n);
                let v = rng.gen_i64(-50..=50);
                let before = store.clone();

                store.update(i, v).unwrap();
                values[i] = v;
                assert_eq!(store.query(i, i), Ok(v));
                assert_eq!(store.get(i), Ok(v));

                for lo in 0..n {
                    for hi in lo..n {
                        let got = store.query(lo, hi);
                        if lo <= i && i <= hi {
                            assert_eq!(got, Ok(brute_force::<Max>(&values, lo, hi)));
                        } else {
                            assert_eq!(got, before.query(lo, hi));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let values = vec![9, -3, 12, 0, 7, 7];
        let mut once = RangeQueryStore::<Min>::new(&values).unwrap();
        let mut twice = once.clone();

        once.update(2, -20).unwrap();
        twice.update(2, -20).unwrap();
        twice.update(2, -20).unwrap();

        for lo in 0..values.len() {
            for hi in lo..values.len() {
                assert_eq!(once.query(lo, hi), twice.query(lo, hi));
            }
        }
    }
}
