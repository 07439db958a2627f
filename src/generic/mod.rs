//! General structures, supporting a variety of uses.

pub mod index_heap;
pub mod random;
