//! An ordered map and set implemented with a randomized treap.

#[macro_use]
extern crate serde_derive;

mod entry;
pub mod treap;
