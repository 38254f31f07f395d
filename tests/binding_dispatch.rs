//! Dispatch semantics of the binding scope.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::*;
use oxymora::binding::{render, NoOutputs, Props, PureComponent, Scope, StateSpec, Transition};
use oxymora::components::counter::{Counter, CounterEmitted, CounterInput, CounterOutputs};
use oxymora::host::{Button, Element, Press};

fn scope(state: i64, changes: &Recorder<i64>, outputs: &Recorder<i64>) -> Scope<Counter> {
    Scope::provide(
        Props::<Counter>::new(CounterInput::default())
            .state(state)
            .on_state_change(changes.sink())
            .outputs(CounterOutputs {
                on_counter_change: Some(outputs.callback()),
            }),
        Counter::initial_state,
    )
}

// -- State forwarding ---------------------------------------------------------

#[test]
fn state_is_forwarded_exactly_once() {
    let changes = Recorder::new();
    let outputs = Recorder::new();
    scope(1, &changes, &outputs).dispatch(Transition::to(5));

    assert_eq!(changes.calls(), vec![5]);
    assert_eq!(outputs.count(), 0);
}

#[test]
fn absent_state_is_not_forwarded() {
    let changes = Recorder::new();
    let outputs = Recorder::new();
    scope(1, &changes, &outputs).dispatch(Transition::none());

    assert_eq!(changes.count(), 0);
    assert_eq!(outputs.count(), 0);
}

#[test]
fn zero_is_a_real_state() {
    let changes = Recorder::new();
    let outputs = Recorder::new();
    let scope = scope(0, &changes, &outputs);
    assert_eq!(*scope.state(), 0);

    scope.dispatch(Transition::to(0));
    assert_eq!(changes.calls(), vec![0]);
}

#[test]
fn equal_state_is_still_forwarded() {
    let changes = Recorder::new();
    let outputs = Recorder::new();
    let scope = scope(7, &changes, &outputs);

    scope.dispatch(Transition::to(7));
    scope.dispatch(Transition::to(7));
    assert_eq!(changes.calls(), vec![7, 7]);
}

#[test]
fn unset_state_resolves_to_the_initial_value() {
    let scope = Scope::provide(Props::<Counter>::default(), Counter::initial_state);
    assert_eq!(*scope.state(), 1);
    assert!(!scope.has_owner());
}

// -- Outputs -------------------------------------------------------------------

#[test]
fn emitted_payload_reaches_its_callback_once() {
    let changes = Recorder::new();
    let outputs = Recorder::new();
    scope(1, &changes, &outputs).dispatch(Transition::none().emit(CounterEmitted {
        on_counter_change: Some(42),
    }));

    assert_eq!(outputs.calls(), vec![42]);
    assert_eq!(changes.count(), 0);
}

#[test]
fn missing_callbacks_are_skipped() {
    let scope = Scope::provide(
        Props::<Counter>::new(CounterInput::default()).state(1),
        Counter::initial_state,
    );

    scope.dispatch(Transition::to(2).emit(CounterEmitted {
        on_counter_change: Some(2),
    }));
}

#[test]
fn no_owner_still_forwards_outputs() {
    let outputs = Recorder::new();
    let scope = Scope::provide(
        Props::<Counter>::new(CounterInput::default()).outputs(CounterOutputs {
            on_counter_change: Some(outputs.callback()),
        }),
        Counter::initial_state,
    );

    scope.dispatch(Transition::to(9).emit(CounterEmitted {
        on_counter_change: Some(9),
    }));
    assert_eq!(outputs.calls(), vec![9]);
}

#[test]
fn state_is_forwarded_before_outputs() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let state_log = Rc::clone(&order);
    let output_log = Rc::clone(&order);

    let scope = Scope::provide(
        Props::<Counter>::new(CounterInput::default())
            .state(1)
            .on_state_change(move |value| state_log.borrow_mut().push(format!("state {value}")))
            .outputs(CounterOutputs {
                on_counter_change: Some(oxymora::binding::Callback::new(move |value| {
                    output_log.borrow_mut().push(format!("output {value}"))
                })),
            }),
        Counter::initial_state,
    );

    scope.dispatch(Transition::to(3).emit(CounterEmitted {
        on_counter_change: Some(3),
    }));
    assert_eq!(*order.borrow(), vec!["state 3", "output 3"]);
}

// -- Bound handlers -------------------------------------------------------------

#[test]
fn bound_handler_dispatches_its_transition() {
    let changes = Recorder::new();
    let outputs = Recorder::new();
    let scope = scope(10, &changes, &outputs);

    let handler = scope.bind(|delta: &i64, scope: &Scope<Counter>| {
        Transition::to(scope.state() + delta)
    });
    handler.call(&5);
    handler.call(&5);

    // the scope is a snapshot, both calls start from 10
    assert_eq!(changes.calls(), vec![15, 15]);
}

// -- Inputs without defaults ----------------------------------------------------

/// Input with a required field; there is no sensible default name.
#[derive(Clone)]
struct GreetingInput {
    name: String,
}

struct Greeting;

impl StateSpec for Greeting {
    type State = u32;
    type Input = GreetingInput;
    type Outputs = NoOutputs;
}

impl PureComponent for Greeting {
    fn initial_state() -> u32 {
        0
    }

    fn view(scope: &Scope<Self>) -> Element {
        Button::new(format!("hello {} x{}", scope.input().name, scope.state()))
            .key("greet")
            .on_press(scope.bind(|_: &Press, scope: &Scope<Greeting>| {
                Transition::to(scope.state() + 1)
            }))
            .into()
    }
}

#[test]
fn components_accept_inputs_without_default() {
    let changes = Recorder::new();
    let tree = render::<Greeting>(
        Props::new(GreetingInput {
            name: "ada".to_string(),
        })
        .on_state_change(changes.sink()),
    );

    assert_eq!(painted(&tree), vec!["[ hello ada x0 ]"]);
    tree.find("greet").unwrap().activate();
    assert_eq!(changes.calls(), vec![1]);
}
