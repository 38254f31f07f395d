use crate::binding::contract::{Props, StateSpec};
use crate::binding::scope::Scope;
use crate::host::Element;

/// A component that never owns its state.
///
/// It renders from whatever its owner supplies and reports every change
/// through the scope's dispatch.
pub trait PureComponent: StateSpec {
    /// Value used whenever the owner supplies an unset state.
    fn initial_state() -> Self::State;

    fn view(scope: &Scope<Self>) -> Element;
}

/// Renders `C` with the given props inside a fresh binding scope.
pub fn render<C: PureComponent>(props: Props<C>) -> Element {
    let scope = Scope::provide(props, C::initial_state);
    C::view(&scope)
}
