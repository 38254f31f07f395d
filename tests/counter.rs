mod common;

use common::*;
use oxymora::binding::{render, Props};
use oxymora::components::counter::{Counter, CounterInput, CounterOutputs};

#[test]
fn press_with_step_two_from_one() {
    let changes = Recorder::new();
    let outputs = Recorder::new();

    let tree = render::<Counter>(
        Props::new(CounterInput {
            increment_by: Some(2),
        })
        .state(1)
        .on_state_change(changes.sink())
        .outputs(CounterOutputs {
            on_counter_change: Some(outputs.callback()),
        }),
    );
    assert_eq!(painted(&tree), vec!["[ + 1 ]"]);

    assert!(tree.find("counter").unwrap().activate());
    assert_eq!(changes.calls(), vec![3]);
    assert_eq!(outputs.calls(), vec![3]);
}

#[test]
fn step_defaults_to_one() {
    let owner = Owner::<Counter>::new(1);
    for _ in 0..3 {
        let tree = owner.render(CounterInput::default(), CounterOutputs::default());
        tree.find("counter").unwrap().activate();
    }
    assert_eq!(owner.state(), 4);
}

#[test]
fn negative_steps_can_cross_zero() {
    let owner = Owner::<Counter>::new(1);
    let input = CounterInput {
        increment_by: Some(-1),
    };
    for _ in 0..2 {
        let tree = owner.render(input.clone(), CounterOutputs::default());
        tree.find("counter").unwrap().activate();
    }
    assert_eq!(owner.state(), -1);
}

#[test]
fn unset_state_renders_the_initial_value() {
    let tree = render::<Counter>(Props::default());
    assert_eq!(painted(&tree), vec!["[ + 1 ]"]);
}

#[test]
fn huge_step_saturates_instead_of_overflowing() {
    let changes = Recorder::new();
    let outputs = Recorder::new();

    let tree = render::<Counter>(
        Props::new(CounterInput {
            increment_by: Some(i64::MAX),
        })
        .state(1)
        .on_state_change(changes.sink())
        .outputs(CounterOutputs {
            on_counter_change: Some(outputs.callback()),
        }),
    );
    tree.find("counter").unwrap().activate();

    assert_eq!(changes.calls(), vec![i64::MAX]);
    assert_eq!(outputs.calls(), vec![i64::MAX]);
}

#[test]
fn negative_step_saturates_at_the_lower_bound() {
    let owner = Owner::<Counter>::new(-1);
    let tree = owner.render(
        CounterInput {
            increment_by: Some(i64::MIN),
        },
        CounterOutputs::default(),
    );
    tree.find("counter").unwrap().activate();
    assert_eq!(owner.state(), i64::MIN);
}
