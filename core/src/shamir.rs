mod combinations;
mod consensus;
mod share;
mod tally;

pub use combinations::Combinations;
pub use consensus::{find_actual_secret, reconstruct_secret};
pub use share::Share;
