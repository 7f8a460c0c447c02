use std::fmt::Debug;

use pin_project::pin_project;

/// Internal execution state of one submitted operation.
#[pin_project(project = StateProj)]
pub enum State<F> {
    /// The fetch future is being polled.
    PollFetch {
        /// The future produced by the operation factory.
        #[pin]
        fetch_future: F,
    },
    /// The outcome has been produced and handed out.
    Complete,
}

impl<F> Debug for State<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::PollFetch { .. } => f.write_str("State::PollFetch"),
            State::Complete => f.write_str("State::Complete"),
        }
    }
}
