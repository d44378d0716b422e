//! Word supply for a round.
//!
//! - `Vocabulary`: the fixed, non-empty list of words a round draws from
//! - `WordQueue`: the shuffled pool that hands out the next word, refilling
//!   itself from the vocabulary whenever it runs dry

pub mod queue;
pub mod vocabulary;

pub use queue::WordQueue;
pub use vocabulary::Vocabulary;
