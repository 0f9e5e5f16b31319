//! Random graphs for exercising the representations.
//!
//! Every function takes its random source explicitly, so a seeded
//! [`SmallRng`](rand::rngs::SmallRng) reproduces the same graph.

mod shuffle;
pub use self::shuffle::*;
mod connected;
pub use self::connected::*;
