mod ask_outcome;
mod question;

pub use ask_outcome::*;
pub use question::*;
