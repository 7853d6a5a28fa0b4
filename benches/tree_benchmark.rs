use ashwood::Ashwood;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::prelude::*;
use rbtree::RBTree;
use std::collections::BTreeSet;
use std::ops::Range;

const TREE_SIZE: usize = 100000;

fn random_insertion_order() -> Vec<usize> {
    let mut rng = rand::thread_rng();
    let mut indices: Vec<usize> = (0..TREE_SIZE).collect();

    indices.shuffle(&mut rng);

    indices
}

fn init_random_data(count: usize, range_opt: Option<Range<usize>>) -> Vec<usize> {
    let mut rng = rand::thread_rng();
    let range = range_opt.unwrap_or(0..TREE_SIZE);
    let range = rand::distributions::Uniform::new(range.start, range.end);

    (0..count).map(|_| rng.sample(&range)).collect()
}

fn init_large_btree() -> BTreeSet<usize> {
    random_insertion_order().into_iter().collect()
}

fn init_large_rbtree() -> RBTree<usize, ()> {
    let mut tree = RBTree::new();

    for i in random_insertion_order() {
        tree.insert(i, ());
    }

    tree
}

fn init_large_ashwood_tree() -> Ashwood<usize> {
    random_insertion_order().into_iter().collect()
}

mod insert_delete {
    use super::*;

    pub fn bench_insert_delete(mut tree: Ashwood<usize>, insertions: &[usize], deletions: &[usize]) {
        for idx in deletions {
            tree.delete(idx);
        }
        for &idx in insertions {
            tree.insert(idx);
        }
    }

    pub fn bench_baseline_insert_delete(
        mut tree: BTreeSet<usize>,
        insertions: &[usize],
        deletions: &[usize],
    ) {
        for idx in deletions {
            tree.remove(idx);
        }
        for &idx in insertions {
            tree.insert(idx);
        }
    }

    pub fn bench_rbtree_insert_delete(
        mut tree: RBTree<usize, ()>,
        insertions: &[usize],
        deletions: &[usize],
    ) {
        for idx in deletions {
            tree.remove(idx);
        }
        for &idx in insertions {
            tree.insert(idx, ());
        }
    }
}

fn ashwood_tree_benchmark(c: &mut Criterion) {
    c.bench_function("baseline tree insert delete", |b| {
        b.iter_batched(
            || {
                (
                    init_large_btree(),
                    init_random_data(2000, Some(100000..300000)),
                    init_random_data(2000, None),
                )
            },
            |(tree, to_insert, holes)| {
                insert_delete::bench_baseline_insert_delete(tree, &to_insert, &holes)
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("red-black tree insert delete", |b| {
        b.iter_batched(
            || {
                (
                    init_large_rbtree(),
                    init_random_data(2000, Some(100000..300000)),
                    init_random_data(2000, None),
                )
            },
            |(tree, to_insert, holes)| {
                insert_delete::bench_rbtree_insert_delete(tree, &to_insert, &holes)
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree insert delete", |b| {
        b.iter_batched(
            || {
                (
                    init_large_ashwood_tree(),
                    init_random_data(2000, Some(100000..300000)),
                    init_random_data(2000, None),
                )
            },
            |(tree, to_insert, holes)| insert_delete::bench_insert_delete(tree, &to_insert, &holes),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("baseline tree 100K insertions", |b| {
        b.iter_batched(
            random_insertion_order,
            |order| order.into_iter().collect::<BTreeSet<_>>(),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree 100K insertions", |b| {
        b.iter_batched(
            random_insertion_order,
            |order| order.into_iter().collect::<Ashwood<_>>(),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("baseline tree random lookups", |b| {
        b.iter_batched(
            || (init_large_btree(), init_random_data(5000, None)),
            |(tree, indices)| indices.iter().all(|idx| tree.contains(idx)),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree random lookups", |b| {
        b.iter_batched(
            || (init_large_ashwood_tree(), init_random_data(5000, None)),
            |(tree, indices)| indices.iter().all(|idx| tree.contains(idx)),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree random deletions", |b| {
        b.iter_batched(
            || (init_large_ashwood_tree(), init_random_data(5000, None)),
            |(mut tree, indices)| {
                for idx in indices {
                    tree.delete(&idx);
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree delete minimum", |b| {
        b.iter_batched(
            init_large_ashwood_tree,
            |mut tree| {
                while tree.delete_minimum().is_ok() {}
                tree
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree inorder iteration", |b| {
        b.iter_batched(
            init_large_ashwood_tree,
            |tree| tree.in_order().enumerate().all(|(i, &elem)| i == elem),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("baseline tree inorder iteration", |b| {
        b.iter_batched(
            init_large_btree,
            |tree| tree.iter().enumerate().all(|(i, &elem)| i == elem),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, ashwood_tree_benchmark);
criterion_main!(benches);
