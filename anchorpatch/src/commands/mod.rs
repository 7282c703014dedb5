pub mod apply;
pub mod recipes;
