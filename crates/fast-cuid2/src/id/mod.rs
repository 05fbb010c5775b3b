mod cuid2;
mod validate;

pub use cuid2::*;
pub use validate::*;
