use std::future::{Ready, ready};

use requery::{CompletionPolicy, FetchError, QueryKey, QueryMachine};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Creature {
    name: String,
    image: String,
}

impl Creature {
    fn named(name: &str) -> Self {
        Creature {
            name: name.to_owned(),
            image: format!("{name}.png"),
        }
    }
}

type Machine = QueryMachine<Creature, FetchError>;
type FetchFuture = Ready<Result<Creature, FetchError>>;

fn resolve(name: &str) -> Option<FetchFuture> {
    Some(ready(Ok(Creature::named(name))))
}

fn reject(message: &str) -> Option<FetchFuture> {
    Some(ready(Err(FetchError::new(message))))
}

#[test]
fn initial_phase_is_idle() {
    let machine = Machine::new();
    assert!(machine.state().is_idle());
}

#[test]
fn no_operation_settles_idle() {
    let mut machine = Machine::new();
    let operation = machine.submit(QueryKey::new(""), || None::<FetchFuture>);
    assert!(operation.is_none());
    assert!(machine.state().is_idle());
}

#[test]
fn submit_transitions_to_pending_with_key() {
    let mut machine = Machine::new();
    let operation = machine.submit(QueryKey::new("pikachu"), || resolve("pikachu"));
    assert!(operation.is_some());
    assert_eq!(
        machine.state().pending_key(),
        Some(&QueryKey::new("pikachu"))
    );
}

#[tokio::test]
async fn successful_operation_resolves() {
    let mut machine = Machine::new();
    let operation = machine
        .submit(QueryKey::new("pikachu"), || resolve("pikachu"))
        .unwrap();

    let state = machine.complete(operation.await);
    assert!(state.is_resolved());
    assert_eq!(state.data(), Some(&Creature::named("pikachu")));
}

#[tokio::test]
async fn failing_operation_rejects() {
    let mut machine = Machine::new();
    let operation = machine
        .submit(QueryKey::new("missingno"), || reject("not found"))
        .unwrap();

    machine.complete(operation.await);
    assert!(machine.state().is_rejected());
    assert_eq!(
        machine.state().error().map(FetchError::message),
        Some("not found")
    );
}

#[test]
fn same_identity_is_not_rerun() {
    let mut machine = Machine::new();
    let first = machine.submit(QueryKey::new("pikachu"), || resolve("pikachu"));
    assert!(first.is_some());

    let second = machine.submit(QueryKey::new("pikachu"), || resolve("pikachu"));
    assert!(second.is_none());
    assert!(machine.state().is_pending());
}

#[tokio::test]
async fn identity_change_reenters_pending_from_terminal_phase() {
    let mut machine = Machine::new();
    let operation = machine
        .submit(QueryKey::new("pikachu"), || resolve("pikachu"))
        .unwrap();
    machine.complete(operation.await);
    assert!(machine.state().is_resolved());

    machine.submit(QueryKey::new("ditto"), || resolve("ditto"));
    assert_eq!(machine.state().pending_key(), Some(&QueryKey::new("ditto")));
}

#[tokio::test]
async fn superseded_completion_is_discarded_by_default() {
    let mut machine = Machine::new();
    let slow = machine
        .submit(QueryKey::new("slowpoke"), || resolve("slowpoke"))
        .unwrap();
    let fast = machine
        .submit(QueryKey::new("pikachu"), || resolve("pikachu"))
        .unwrap();

    machine.complete(fast.await);
    assert_eq!(machine.state().data(), Some(&Creature::named("pikachu")));

    // The older operation finishes afterwards; its outcome no longer applies.
    machine.complete(slow.await);
    assert_eq!(machine.state().data(), Some(&Creature::named("pikachu")));
}

#[tokio::test]
async fn last_write_wins_applies_late_completions() {
    let mut machine = Machine::with_policy(CompletionPolicy::LastWriteWins);
    let slow = machine
        .submit(QueryKey::new("slowpoke"), || resolve("slowpoke"))
        .unwrap();
    let fast = machine
        .submit(QueryKey::new("pikachu"), || resolve("pikachu"))
        .unwrap();

    machine.complete(fast.await);
    machine.complete(slow.await);
    assert_eq!(machine.state().data(), Some(&Creature::named("slowpoke")));
}

#[tokio::test]
async fn resolve_direct_supersedes_in_flight_operation() {
    let mut machine = Machine::new();
    let operation = machine
        .submit(QueryKey::new("pikachu"), || resolve("mimikyu"))
        .unwrap();

    machine.resolve_direct(QueryKey::new("pikachu"), Creature::named("pikachu"));
    machine.complete(operation.await);
    assert_eq!(machine.state().data(), Some(&Creature::named("pikachu")));
}

#[tokio::test]
async fn reset_allows_rerunning_the_same_key() {
    let mut machine = Machine::new();
    let operation = machine
        .submit(QueryKey::new("missingno"), || reject("not found"))
        .unwrap();
    machine.complete(operation.await);
    assert!(machine.state().is_rejected());

    machine.reset();
    assert!(machine.state().is_idle());

    let retry = machine.submit(QueryKey::new("missingno"), || resolve("missingno"));
    assert!(retry.is_some());
}
