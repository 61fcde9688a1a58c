// https://en.wikipedia.org/wiki/Disjoint-set_data_structure

/// How two roots get linked by a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Path compression plus union by rank.
	Ranked,
	/// Path compression, the second root always goes under the first.
	Compressed,
	/// No compression, no balancing. The second root is hung under the node
	/// that asked for the union, so the merge history stays readable.
	Rigid,
}

impl Strategy {
	/// Maps the `(path_compress, union_by_rank)` pair onto a strategy.
	/// Rank is only consulted while compressing, so `(false, _)` is `Rigid`.
	pub fn from_flags(path_compress: bool, union_by_rank: bool) -> Strategy {
		match (path_compress, union_by_rank) {
			(true, true) => Strategy::Ranked,
			(true, false) => Strategy::Compressed,
			(false, _) => Strategy::Rigid,
		}
	}

	pub fn path_compress(self) -> bool {
		self != Strategy::Rigid
	}

	pub fn union_by_rank(self) -> bool {
		self == Strategy::Ranked
	}
}

#[derive(Debug, Clone)]
pub struct SetNode {
	pub parent: usize,
	pub rank: u8,
}

/// Arena of nodes. A root is a node whose parent is its own index.
#[derive(Debug, Clone, Default)]
pub struct Forest {
	pub nodes: Vec<SetNode>,
}

impl Forest {
	pub fn make_singleton(&mut self) -> usize {
		let id = self.nodes.len();
		self.nodes.push(SetNode { parent: id, rank: 0 });
		id
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn parent(&self, x: usize) -> usize {
		self.nodes[x].parent
	}

	pub fn is_root(&self, x: usize) -> bool {
		self.nodes[x].parent == x
	}

	pub fn find(&mut self, x: usize, path_compress: bool) -> usize {
		let mut root = x;
		while self.nodes[root].parent != root {
			root = self.nodes[root].parent;
		}

		if path_compress {
			let mut node = x;
			while node != root {
				let parent = self.nodes[node].parent;
				self.nodes[node].parent = root;
				node = parent;
			}
		}

		root
	}

	pub fn unite(&mut self, x: usize, y: usize, strategy: Strategy) {
		let path_compress = strategy.path_compress();
		let x_root = self.find(x, path_compress);
		let y_root = self.find(y, path_compress);
		if x_root == y_root {
			return;
		}

		match strategy {
			Strategy::Ranked => {
				let x_rank = self.nodes[x_root].rank;
				let y_rank = self.nodes[y_root].rank;
				if x_rank < y_rank {
					self.nodes[x_root].parent = y_root;
				} else {
					self.nodes[y_root].parent = x_root;
					if x_rank == y_rank {
						self.nodes[x_root].rank = x_rank.saturating_add(1);
					}
				}
			},
			Strategy::Compressed => self.nodes[y_root].parent = x_root,
			Strategy::Rigid => self.nodes[y_root].parent = x,
		}
		trace!("linked roots {} and {} via {:?}", x_root, y_root, strategy);
	}
}
