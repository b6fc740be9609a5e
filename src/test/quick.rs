use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<V> {
    /// Insert the key and value into the data structure
    Insert(i32, V),
    /// Remove the key from the data structure
    Remove(i32),
    /// Compare range sums over the inclusive bounds
    RangeSum(i32, i32),
    /// Compare iterators
    Iter,
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are
    /// weighted up so trees grow instead of hovering around empty.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(key(g), V::arbitrary(g)),
            1 => Op::Remove(key(g)),
            2 => Op::RangeSum(key(g), key(g)),
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Keys are drawn from a narrow range so duplicates and hits on removal are common.
fn key(g: &mut Gen) -> i32 {
    i32::from(i8::arbitrary(g))
}
