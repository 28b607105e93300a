pub mod dump;
pub mod minimal;
pub mod tree;
