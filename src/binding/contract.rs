//! Static description of a component's state, inputs and outputs.

use std::fmt;
use std::rc::Rc;

/// Describes the shape of a pure component.
///
/// - `State`: the value an owner holds and replaces on every transition.
/// - `Input`: caller-supplied configuration, never changed by the component.
/// - `Outputs`: the closed set of named events the component may emit,
///   each an optional callback slot (see [`output_channels!`](crate::output_channels)).
pub trait StateSpec: Sized + 'static {
    type State: Clone + fmt::Debug + 'static;
    type Input: Clone + 'static;
    type Outputs: OutputChannels;
}

/// Callback slots for a component's output events.
///
/// `Emitted` is the matching record of optional payloads a handler returns.
/// `forward` invokes every populated slot whose payload is present and drops
/// the rest.
pub trait OutputChannels: Clone + Default + 'static {
    type Emitted: Default + fmt::Debug;

    fn forward(&self, emitted: Self::Emitted);
}

/// Output set for components that emit nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOutputs;

impl OutputChannels for NoOutputs {
    type Emitted = ();

    fn forward(&self, _emitted: ()) {}
}

/// Payloads a handler may emit for `S`.
pub type Emitted<S> = <<S as StateSpec>::Outputs as OutputChannels>::Emitted;

/// Owner-supplied function receiving a value.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Callback<T> {
    pub fn new(callback: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn call(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// State as supplied by an owner: either not yet set, or a concrete value.
///
/// `Unset` is distinct from every legitimate state, including `0`, `false`
/// and empty collections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateSlot<T> {
    #[default]
    Unset,
    Held(T),
}

impl<T> StateSlot<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn held(&self) -> Option<&T> {
        match self {
            Self::Held(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// Returns the held value, or the component's initial value when unset.
    pub fn resolve(self, initial: impl FnOnce() -> T) -> T {
        match self {
            Self::Held(value) => value,
            Self::Unset => initial(),
        }
    }
}

impl<T> From<T> for StateSlot<T> {
    fn from(value: T) -> Self {
        Self::Held(value)
    }
}

/// Everything a pure component receives from its owner.
pub struct Props<S: StateSpec> {
    pub input: S::Input,
    pub state: StateSlot<S::State>,
    pub on_state_change: Option<Callback<S::State>>,
    pub outputs: S::Outputs,
}

impl<S: StateSpec> Props<S> {
    pub fn new(input: S::Input) -> Self {
        Self {
            input,
            state: StateSlot::Unset,
            on_state_change: None,
            outputs: S::Outputs::default(),
        }
    }

    pub fn state(mut self, state: impl Into<StateSlot<S::State>>) -> Self {
        self.state = state.into();
        self
    }

    pub fn on_state_change(mut self, callback: impl Fn(S::State) + 'static) -> Self {
        self.on_state_change = Some(Callback::new(callback));
        self
    }

    pub fn outputs(mut self, outputs: S::Outputs) -> Self {
        self.outputs = outputs;
        self
    }
}

impl<S: StateSpec> Default for Props<S>
where
    S::Input: Default,
{
    fn default() -> Self {
        Self::new(S::Input::default())
    }
}

impl<S: StateSpec> Clone for Props<S> {
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            state: self.state.clone(),
            on_state_change: self.on_state_change.clone(),
            outputs: self.outputs.clone(),
        }
    }
}

/// What an event handler asks for: an optional next state and any outputs.
pub struct Transition<S: StateSpec> {
    pub state: Option<S::State>,
    pub emitted: Emitted<S>,
}

impl<S: StateSpec> Transition<S> {
    /// Changes nothing.
    pub fn none() -> Self {
        Self {
            state: None,
            emitted: Default::default(),
        }
    }

    /// Replaces the state with `state`.
    pub fn to(state: S::State) -> Self {
        Self {
            state: Some(state),
            emitted: Default::default(),
        }
    }

    /// Emits output payloads; combine with [`Transition::to`] or [`Transition::none`].
    pub fn emit(mut self, emitted: Emitted<S>) -> Self {
        self.emitted = emitted;
        self
    }
}

impl<S: StateSpec> Default for Transition<S> {
    fn default() -> Self {
        Self::none()
    }
}

impl<S: StateSpec> fmt::Debug for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("state", &self.state)
            .field("emitted", &self.emitted)
            .finish()
    }
}

/// Declares a component's output channels.
///
/// Generates a callbacks struct (one `Option<Callback<T>>` per channel), a
/// record of optional payloads, and the [`OutputChannels`] impl that forwards
/// each present payload to its callback by field, in declaration order.
///
/// ```
/// oxymora::output_channels! {
///     pub struct SliderOutputs => SliderEmitted {
///         on_release: u8,
///     }
/// }
///
/// let emitted = SliderEmitted { on_release: Some(7) };
/// assert_eq!(emitted.on_release, Some(7));
/// assert!(SliderOutputs::default().on_release.is_none());
/// ```
#[macro_export]
macro_rules! output_channels {
    (
        $(#[$meta:meta])*
        $vis:vis struct $outputs:ident => $emitted:ident {
            $( $(#[$field_meta:meta])* $channel:ident : $payload:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $outputs {
            $( $(#[$field_meta])* pub $channel: ::std::option::Option<$crate::binding::Callback<$payload>>, )*
        }

        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $emitted {
            $( pub $channel: ::std::option::Option<$payload>, )*
        }

        impl $crate::binding::OutputChannels for $outputs {
            type Emitted = $emitted;

            #[allow(unused_variables)]
            fn forward(&self, emitted: Self::Emitted) {
                $(
                    if let ::std::option::Option::Some(value) = emitted.$channel {
                        match &self.$channel {
                            ::std::option::Option::Some(callback) => callback.call(value),
                            ::std::option::Option::None => $crate::__private::tracing::trace!(
                                channel = stringify!($channel),
                                "output dropped, owner is not listening"
                            ),
                        }
                    }
                )*
            }
        }
    };
}
