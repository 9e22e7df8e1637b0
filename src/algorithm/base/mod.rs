pub mod graph;
pub mod heap;
pub mod tree;
pub mod yens;
