use int_bst::Tree;

use std::collections::HashSet;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(i32::from(*x), *x);
    }

    xs.iter().all(|x| tree.get(i32::from(*x)) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(i32::from(*x), *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.get(i32::from(*x)).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(i32::from(*x), *x);
    }
    let mut still_present = xs;
    for delete in &deletes {
        // Duplicates come out one removal at a time.
        let removed = tree.remove(i32::from(*delete));
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if removed != Some(*delete) {
                    return false;
                }
            }
            None => {
                if removed.is_some() {
                    return false;
                }
            }
        }
    }

    tree.len() == still_present.len()
        && still_present
            .iter()
            .all(|x| tree.get(i32::from(*x)) == Some(x))
}

#[quickcheck]
fn size_after_distinct_removals(xs: HashSet<i16>, take: usize) -> bool {
    let xs: Vec<_> = xs.into_iter().collect();
    let removed = take % (xs.len() + 1);
    let mut tree: Tree<()> = xs.iter().map(|x| (i32::from(*x), ())).collect();

    for x in &xs[..removed] {
        tree.remove(i32::from(*x));
    }

    tree.len() == xs.len() - removed
}

#[quickcheck]
fn iterates_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<()> = xs.iter().map(|x| (i32::from(*x), ())).collect();
    let mut sorted: Vec<_> = xs.into_iter().map(i32::from).collect();
    sorted.sort_unstable();

    tree.iter().map(|(k, _)| k).eq(sorted)
}

#[quickcheck]
fn range_sum_matches_filter(xs: Vec<i16>, lower: i16, upper: i16) -> bool {
    let tree: Tree<()> = xs.iter().map(|x| (i32::from(*x), ())).collect();
    let expected: i64 = xs
        .iter()
        .filter(|x| lower <= **x && **x <= upper)
        .map(|x| i64::from(*x))
        .sum();

    tree.range_sum(i32::from(lower), i32::from(upper)) == expected
}
