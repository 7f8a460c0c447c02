//! Operation execution.
//!
//! One submitted operation is represented by an [`Operation`] future wrapping
//! the factory-produced fetch future together with the generation and key it
//! was issued under. Awaiting it is the machine's only suspension point; the
//! resulting [`Completion`] is fed back to the machine, which decides whether
//! the outcome still applies.

mod future;
mod states;

pub use future::{Completion, Operation};
pub use states::State;
