#[macro_use] extern crate log;
extern crate serde;
extern crate serde_json;
extern crate thiserror;

mod disjoint_set;
mod sets;
mod tree;
mod config;
mod error;
mod script;

pub use disjoint_set::Strategy;
pub use sets::{DisjointSets, NodeId};
pub use tree::{TreeNode, get_tree, sort_forest};
pub use config::ScriptConfig;
pub use error::ScriptError;
pub use script::{Command, Session, read_config, run};
