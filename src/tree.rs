use std::hash::Hash;
use std::mem;

use serde::Serialize;

use crate::sets::DisjointSets;

/// Snapshot of one node of a rigid `DisjointSets` and everything hung under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode<K> {
	pub key: K,
	pub children: Vec<TreeNode<K>>,
}

impl<K> TreeNode<K> {
	pub fn leaf(key: K) -> TreeNode<K> {
		TreeNode { key, children: Vec::new() }
	}

	/// Number of nodes in this subtree, itself included.
	pub fn len(&self) -> usize {
		let mut count = 0;
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			count += 1;
			stack.extend(node.children.iter());
		}
		count
	}

	pub fn keys(&self) -> Vec<&K> {
		let mut keys = Vec::new();
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			keys.push(&node.key);
			stack.extend(node.children.iter());
		}
		keys
	}
}

impl<K: Ord> TreeNode<K> {
	/// Orders every children list by key.
	pub fn sort(&mut self) {
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			node.children.sort_by(|a, b| a.key.cmp(&b.key));
			stack.extend(node.children.iter_mut());
		}
	}
}

// rigid chains can be as deep as the key count
impl<K> Drop for TreeNode<K> {
	fn drop(&mut self) {
		let mut stack = mem::replace(&mut self.children, Vec::new());
		while let Some(mut node) = stack.pop() {
			stack.extend(node.children.drain(..));
		}
	}
}

/// Sorts each tree and then the forest itself by root key.
pub fn sort_forest<K: Ord>(forest: &mut [TreeNode<K>]) {
	for tree in forest.iter_mut() {
		tree.sort();
	}
	forest.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Rebuilds the parent links of a rigid container as a forest, one tree per
/// set. Children and roots come out in first-reference order, which callers
/// should treat as unspecified.
///
/// # Panics
///
/// If `sets` compresses paths: the merge history is already gone.
pub fn get_tree<K: Eq + Hash + Clone>(sets: &DisjointSets<K>) -> Vec<TreeNode<K>> {
	if sets.is_compressed() {
		panic!("get_tree is not supported for disjoint sets with path compression enabled");
	}

	let forest = sets.forest();
	let keys = sets.keys();
	let size = forest.len();

	let mut children: Vec<Vec<usize>> = vec![Vec::new(); size];
	let mut roots: Vec<usize> = Vec::new();
	for i in 0..size {
		if forest.is_root(i) {
			roots.push(i);
		} else {
			children[forest.parent(i)].push(i);
		}
	}

	// post-order: a node is built once all of its children are
	let mut built: Vec<Option<TreeNode<K>>> = (0..size).map(|_| None).collect();
	let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
	while let Some((i, expanded)) = stack.pop() {
		if expanded {
			let mut node = TreeNode::leaf(keys[i].clone());
			node.children = children[i].iter()
				.filter_map(|&c| built[c].take())
				.collect();
			built[i] = Some(node);
		} else {
			stack.push((i, true));
			stack.extend(children[i].iter().rev().map(|&c| (c, false)));
		}
	}

	info!("extracted {} trees over {} keys", roots.len(), size);
	roots.iter().filter_map(|&r| built[r].take()).collect()
}
