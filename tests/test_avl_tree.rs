extern crate avl_set;
extern crate rand;

use avl_set::avl_tree::{self, AvlSet, Node};
use self::rand::Rng;
use std::collections::BTreeSet;
use std::vec::Vec;

fn max_height(len: usize) -> usize {
    (1.44 * ((len + 2) as f64).log2()).ceil() as usize
}

fn check_node(node: Option<&Node<u32>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            let left_height = check_node(node.left());
            let right_height = check_node(node.right());
            assert_eq!(node.height(), left_height.max(right_height) + 1);
            assert_eq!(node.balance_factor(), left_height as i32 - right_height as i32);
            assert!(node.balance_factor().abs() <= 1);
            node.height()
        },
    }
}

fn check_set(set: &AvlSet<u32>) {
    assert_eq!(set.validate(), Ok(()));
    assert_eq!(check_node(set.root()), set.height());
    assert!(set.height() <= max_height(set.len()));

    let values = set.iter().collect::<Vec<&u32>>();
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(set.inorder().all(|(_, balance)| balance.abs() <= 1));
}

#[test]
fn int_test_avl_set_random() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set: AvlSet<u32> = AvlSet::new();
    let mut expected = BTreeSet::new();
    for i in 0..10_000 {
        let value = rng.gen_range(0, 5_000);

        assert_eq!(set.insert(value), expected.insert(value));

        if i % 100 == 0 {
            check_set(&set);
        }
    }

    check_set(&set);
    assert_eq!(set.len(), expected.len());
    assert_eq!(set.iter().collect::<Vec<&u32>>(), expected.iter().collect::<Vec<&u32>>());
    assert_eq!(set.min(), expected.iter().next());
    assert_eq!(set.max(), expected.iter().next_back());

    for value in &expected {
        assert!(set.contains(value));
    }
}

#[test]
fn int_test_avl_set_every_insertion() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set: AvlSet<u32> = AvlSet::new();
    for _ in 0..2_000 {
        set.insert(rng.gen::<u32>());
        check_set(&set);
    }
}

#[test]
fn int_test_avl_set_adversarial() {
    let ascending = (0..1_000).collect::<Vec<u32>>();
    let descending = (0..1_000).rev().collect::<Vec<u32>>();
    let zig_zag = (0..500).flat_map(|i| vec![i, 999 - i]).collect::<Vec<u32>>();
    let inward = (0..500).flat_map(|i| vec![499 - i, 500 + i]).collect::<Vec<u32>>();

    for values in &[ascending, descending, zig_zag, inward] {
        let mut set = AvlSet::new();
        for value in values {
            set.insert(*value);
            check_set(&set);
        }
        assert_eq!(set.len(), 1_000);
        assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), (0..1_000).collect::<Vec<u32>>());
    }
}

#[test]
fn int_test_avl_set_idempotent() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut values = (0..500).collect::<Vec<u32>>();
    rng.shuffle(&mut values);

    let once = values.iter().cloned().collect::<AvlSet<u32>>();
    let mut twice = AvlSet::new();
    for value in &values {
        assert!(twice.insert(*value));
        assert!(!twice.insert(*value));
    }

    check_set(&twice);
    assert_eq!(once.len(), twice.len());
    assert_eq!(
        once.inorder().collect::<Vec<(&u32, i32)>>(),
        twice.inorder().collect::<Vec<(&u32, i32)>>(),
    );
    assert_eq!(
        once.preorder().collect::<Vec<&u32>>(),
        twice.preorder().collect::<Vec<&u32>>(),
    );
}

#[test]
fn int_test_avl_set_ascending_hundred() {
    let set = (1..=100).collect::<AvlSet<u32>>();
    assert_eq!(set.iter().count(), 100);
    assert!(set.height() as f64 <= 1.44 * 100f64.log2() + 6.0);
    assert_eq!(avl_tree::height(set.root()), set.height());
    assert_eq!(avl_tree::balance_factor(set.root()), set.balance_factor());
}

#[test]
fn int_test_avl_set_traversal_orders() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([3, 3, 3, 3]);
    let mut set: AvlSet<u32> = AvlSet::new();
    for _ in 0..1_000 {
        set.insert(rng.gen_range(0, 10_000));
    }

    let mut preorder = set.preorder().cloned().collect::<Vec<u32>>();
    let mut postorder = set.postorder().cloned().collect::<Vec<u32>>();
    assert_eq!(preorder.first(), set.root().map(|node| node.value()));
    assert_eq!(postorder.last(), set.root().map(|node| node.value()));

    preorder.sort();
    postorder.sort();
    let inorder = set.iter().cloned().collect::<Vec<u32>>();
    assert_eq!(preorder, inorder);
    assert_eq!(postorder, inorder);
}
