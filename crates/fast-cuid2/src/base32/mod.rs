mod codec;

pub use codec::*;
