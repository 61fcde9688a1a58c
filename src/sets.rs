use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::disjoint_set::{Forest, Strategy};

static NEXT_SETS_ID: AtomicUsize = AtomicUsize::new(0);

/// Handle to one node of a `DisjointSets`. Only valid with the container
/// that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
	sets: usize,
	index: usize,
}

/// Union-find over arbitrary keys. Keys are enrolled as singletons the first
/// time any operation mentions them.
///
/// `new` gives path compression with union by rank (near constant amortized
/// time). `new_rigid` keeps every link exactly as the unions made it, so
/// `tree::get_tree` can show the merge history afterwards; each operation is
/// then O(depth).
#[derive(Debug)]
pub struct DisjointSets<K> {
	id: usize,
	strategy: Strategy,
	forest: Forest,
	keys: Vec<K>,
	index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> DisjointSets<K> {
	pub fn new() -> DisjointSets<K> {
		DisjointSets::with_strategy(Strategy::Ranked)
	}

	pub fn new_rigid() -> DisjointSets<K> {
		DisjointSets::with_strategy(Strategy::Rigid)
	}

	pub fn with_strategy(strategy: Strategy) -> DisjointSets<K> {
		DisjointSets {
			id: NEXT_SETS_ID.fetch_add(1, Ordering::Relaxed),
			strategy,
			forest: Forest::default(),
			keys: Vec::new(),
			index: HashMap::new(),
		}
	}

	pub fn strategy(&self) -> Strategy {
		self.strategy
	}

	pub fn is_compressed(&self) -> bool {
		self.strategy.path_compress()
	}

	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	pub fn contains(&self, key: &K) -> bool {
		self.index.contains_key(key)
	}

	/// Enrolls `key` as a singleton unless it is already known.
	pub fn add(&mut self, key: K) {
		self.node(key);
	}

	/// Returns the representative key of the set holding `key`.
	pub fn find(&mut self, key: K) -> K {
		let node = self.node(key);
		let root = self.find_node(node, self.strategy.path_compress());
		self.keys[root.index].clone()
	}

	pub fn union(&mut self, a: K, b: K) {
		let a = self.node(a);
		let b = self.node(b);
		let strategy = self.strategy;
		self.union_nodes(a, b, strategy);
	}

	pub fn in_same_set(&mut self, a: K, b: K) -> bool {
		let a = self.node(a);
		let b = self.node(b);
		let path_compress = self.strategy.path_compress();
		self.find_node(a, path_compress) == self.find_node(b, path_compress)
	}

	/// Handle for `key`, enrolling it first if needed.
	pub fn node(&mut self, key: K) -> NodeId {
		if let Some(&index) = self.index.get(&key) {
			return NodeId { sets: self.id, index };
		}
		let index = self.forest.make_singleton();
		self.keys.push(key.clone());
		self.index.insert(key, index);
		debug!("sets {}: enrolled node {}", self.id, index);
		NodeId { sets: self.id, index }
	}

	pub fn key_of(&self, node: NodeId) -> &K {
		self.check_owner(node);
		&self.keys[node.index]
	}

	/// Root of the tree holding `node`. Compresses the walked path when
	/// `path_compress` is set, otherwise leaves the forest untouched.
	///
	/// # Panics
	///
	/// If `node` was minted by another container, or if a rigid container is
	/// asked to compress.
	pub fn find_node(&mut self, node: NodeId, path_compress: bool) -> NodeId {
		self.check_owner(node);
		if path_compress && !self.is_compressed() {
			panic!("can't compress paths in rigid disjoint sets ({})", self.id);
		}
		let root = self.forest.find(node.index, path_compress);
		NodeId { sets: self.id, index: root }
	}

	/// # Panics
	///
	/// If either handle was minted by another container, or if a rigid
	/// container is asked for anything but a rigid link.
	pub fn union_nodes(&mut self, a: NodeId, b: NodeId, strategy: Strategy) {
		if a.sets != b.sets {
			panic!("can't union nodes from different disjoint sets");
		}
		self.check_owner(a);
		if strategy != Strategy::Rigid && !self.is_compressed() {
			panic!("can't union with {:?} in rigid disjoint sets ({})", strategy, self.id);
		}
		self.forest.unite(a.index, b.index, strategy);
	}

	pub(crate) fn keys(&self) -> &[K] {
		&self.keys
	}

	pub(crate) fn forest(&self) -> &Forest {
		&self.forest
	}

	fn check_owner(&self, node: NodeId) {
		if node.sets != self.id {
			panic!("node {:?} belongs to different disjoint sets ({})", node, self.id);
		}
	}
}

impl<K: Eq + Hash + Clone> Default for DisjointSets<K> {
	fn default() -> DisjointSets<K> {
		DisjointSets::new()
	}
}

#[cfg(test)]
mod tests {
	use super::DisjointSets;
	use crate::disjoint_set::Strategy;

	#[test]
	fn find_enrolls_unknown_key() {
		let mut sets: DisjointSets<&str> = DisjointSets::new();
		assert!(!sets.contains(&"a"));
		assert_eq!(sets.find("a"), "a");
		assert!(sets.contains(&"a"));
		assert_eq!(sets.len(), 1);
	}

	#[test]
	fn in_same_set_enrolls_both_keys() {
		let mut sets: DisjointSets<u32> = DisjointSets::new();
		assert!(!sets.in_same_set(1, 2));
		assert_eq!(sets.len(), 2);
		assert!(sets.in_same_set(3, 3));
	}

	#[test]
	fn add_is_idempotent() {
		let mut sets: DisjointSets<u32> = DisjointSets::new_rigid();
		assert!(sets.is_empty());
		sets.add(4);
		sets.add(4);
		assert_eq!(sets.len(), 1);
		assert!(!sets.is_empty());
		assert!(!sets.is_compressed());
	}

	#[test]
	fn node_handles_are_stable() {
		let mut sets: DisjointSets<char> = DisjointSets::new();
		let a = sets.node('a');
		assert_eq!(sets.node('a'), a);
		assert_eq!(*sets.key_of(a), 'a');
	}

	#[test]
	fn per_call_strategy_on_node_handles() {
		let mut sets: DisjointSets<u32> = DisjointSets::new();
		let (a, b, c) = (sets.node(0), sets.node(1), sets.node(2));
		sets.union_nodes(b, c, Strategy::Rigid);
		sets.union_nodes(a, c, Strategy::Rigid);
		assert_eq!(sets.find_node(c, false), a);
		assert_eq!(sets.forest().parent(2), 1);
		assert_eq!(sets.forest().parent(1), 0);
	}

	#[test]
	#[should_panic(expected = "different disjoint sets")]
	fn union_across_containers_panics() {
		let mut left: DisjointSets<u32> = DisjointSets::new();
		let mut right: DisjointSets<u32> = DisjointSets::new();
		let a = left.node(0);
		let b = right.node(0);
		left.union_nodes(a, b, Strategy::Ranked);
	}

	#[test]
	#[should_panic(expected = "different disjoint sets")]
	fn foreign_handle_panics_on_find() {
		let mut left: DisjointSets<u32> = DisjointSets::new();
		let mut right: DisjointSets<u32> = DisjointSets::new();
		let b = right.node(7);
		left.node(7);
		left.find_node(b, true);
	}

	#[test]
	fn rigid_allows_plain_find_and_rigid_union() {
		let mut sets: DisjointSets<u32> = DisjointSets::new_rigid();
		sets.union(0, 1);
		let (a, b) = (sets.node(2), sets.node(1));
		sets.union_nodes(a, b, Strategy::Rigid);
		assert_eq!(sets.find_node(b, false), a);
		assert_eq!(sets.forest().parent(1), 0);
		assert_eq!(sets.forest().parent(0), 2);
	}

	#[test]
	#[should_panic(expected = "rigid disjoint sets")]
	fn rigid_refuses_compressing_find() {
		let mut sets: DisjointSets<u32> = DisjointSets::new_rigid();
		sets.union(0, 1);
		sets.union(1, 2);
		sets.union(2, 3);
		let deep = sets.node(3);
		sets.find_node(deep, true);
	}

	#[test]
	#[should_panic(expected = "rigid disjoint sets")]
	fn rigid_refuses_ranked_union() {
		let mut sets: DisjointSets<u32> = DisjointSets::new_rigid();
		sets.union(0, 1);
		let (a, b) = (sets.node(10), sets.node(1));
		sets.union_nodes(a, b, Strategy::Ranked);
	}

	#[test]
	#[should_panic(expected = "rigid disjoint sets")]
	fn rigid_refuses_compressed_union() {
		let mut sets: DisjointSets<u32> = DisjointSets::new_rigid();
		let (a, b) = (sets.node(0), sets.node(1));
		sets.union_nodes(a, b, Strategy::Compressed);
	}
}
