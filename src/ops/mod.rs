pub mod board;
pub mod filter;
pub mod load;
