mod basic;
mod global;
#[cfg(test)]
mod tests;

pub use basic::*;
pub use global::*;
