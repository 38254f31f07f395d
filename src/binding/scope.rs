//! The binding context a pure component hands to its subtree.

use std::any::type_name;
use std::rc::Rc;

use crate::binding::contract::{Callback, OutputChannels, Props, StateSpec, Transition};
use crate::host::Handler;

/// Current state, inputs and owner callbacks of one pure component render.
///
/// Built once per render and shared read-only with every descendant that
/// receives it. A nested pure component builds its own scope, and only that
/// one is passed further down, so the nearest component always wins.
pub struct Scope<S: StateSpec> {
    inner: Rc<ScopeInner<S>>,
}

struct ScopeInner<S: StateSpec> {
    state: S::State,
    input: S::Input,
    on_state_change: Option<Callback<S::State>>,
    outputs: S::Outputs,
}

impl<S: StateSpec> Clone for Scope<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: StateSpec> Scope<S> {
    /// Builds the scope for one render, resolving an unset state to `initial`.
    pub fn provide(props: Props<S>, initial: impl FnOnce() -> S::State) -> Self {
        let Props {
            input,
            state,
            on_state_change,
            outputs,
        } = props;

        Self {
            inner: Rc::new(ScopeInner {
                state: state.resolve(initial),
                input,
                on_state_change,
                outputs,
            }),
        }
    }

    pub fn state(&self) -> &S::State {
        &self.inner.state
    }

    pub fn input(&self) -> &S::Input {
        &self.inner.input
    }

    pub fn outputs(&self) -> &S::Outputs {
        &self.inner.outputs
    }

    /// Whether an owner supplied a state-replacement function.
    pub fn has_owner(&self) -> bool {
        self.inner.on_state_change.is_some()
    }

    /// Turns a transition function into a host event handler bound to this scope.
    pub fn bind<E, F>(&self, handler: F) -> Handler<E>
    where
        E: 'static,
        F: Fn(&E, &Scope<S>) -> Transition<S> + 'static,
    {
        let scope = self.clone();
        Handler::new(move |event: &E| {
            let transition = handler(event, &scope);
            scope.dispatch(transition);
        })
    }

    /// Applies a transition: state first, then outputs.
    ///
    /// The state is forwarded even when it equals the current one.
    pub fn dispatch(&self, transition: Transition<S>) {
        let Transition { state, emitted } = transition;

        if let Some(next) = state {
            match &self.inner.on_state_change {
                Some(on_state_change) => on_state_change.call(next),
                None => tracing::debug!(
                    component = type_name::<S>(),
                    "state transition dropped, no owner attached"
                ),
            }
        }

        self.inner.outputs.forward(emitted);
    }
}
