//! The four demo owners, one per way of holding a pure component's state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::binding::{render, Callback, Props, Stateful};
use crate::components::counter::{Counter, CounterInput, CounterOutputs};
use crate::components::todo::{TodoList, TodoListInput, TodoListOutputs, Todos, ViewMode};
use crate::config::{Config, DemoKind};
use crate::host::{Element, Invalidator};
use crate::store::TodoStore;
use crate::ui::theme::MUTED;

const FULL_ROUTE: &str = "/full";

/// The demo currently mounted. Dropping it unmounts the component and its state.
pub enum Demo {
    Counter(CounterDemo),
    Direct(DirectDemo),
    Hashbang(HashbangDemo),
    FullRouting(FullRoutingDemo),
}

impl Demo {
    pub fn mount(kind: DemoKind, config: &Config, redraw: Invalidator) -> Self {
        tracing::info!(demo = kind.title(), "mounting demo");
        match kind {
            DemoKind::Counter => Demo::Counter(CounterDemo::mount(config, redraw)),
            DemoKind::Direct => Demo::Direct(DirectDemo {
                list: Stateful::mount(redraw),
            }),
            DemoKind::Hashbang => Demo::Hashbang(HashbangDemo::mount(redraw)),
            DemoKind::FullRouting => Demo::FullRouting(FullRoutingDemo::mount(config, redraw)),
        }
    }

    pub fn kind(&self) -> DemoKind {
        match self {
            Demo::Counter(_) => DemoKind::Counter,
            Demo::Direct(_) => DemoKind::Direct,
            Demo::Hashbang(_) => DemoKind::Hashbang,
            Demo::FullRouting(_) => DemoKind::FullRouting,
        }
    }

    pub fn view(&self) -> Element {
        match self {
            Demo::Counter(demo) => demo.view(),
            Demo::Direct(demo) => demo.list.render(TodoListInput::default()),
            Demo::Hashbang(demo) => demo.view(),
            Demo::FullRouting(demo) => demo.view(),
        }
    }

    /// Owner-held location shown in the header, for demos that keep one.
    pub fn route(&self) -> Option<String> {
        match self {
            Demo::Counter(_) | Demo::Direct(_) => None,
            Demo::Hashbang(demo) => Some(demo.location.borrow().clone()),
            Demo::FullRouting(demo) => Some(demo.route.borrow().clone()),
        }
    }

    pub fn notes(&self) -> Vec<Line<'static>> {
        let note = |text: &'static str| Line::from(text);
        let muted = |text: String| Line::from(Span::styled(text, Style::default().fg(MUTED)));
        match self {
            Demo::Counter(demo) => vec![
                note("Self-owned counter."),
                note("The adapter keeps the count; the owner only listens to on_counter_change."),
                Line::default(),
                muted(format!("increment_by: {}", demo.increment_by)),
                muted(match demo.last_change.get() {
                    Some(value) => format!("last on_counter_change: {value}"),
                    None => "last on_counter_change: none yet".to_string(),
                }),
            ],
            Demo::Direct(_) => vec![
                note("Self-owned todo list with no props at all."),
                note("State lives in the adapter and is lost when you switch demos."),
            ],
            Demo::Hashbang(_) => vec![
                note("Self-owned todo list; the filter follows the owner's #hash."),
                note("Filter buttons emit on_view_mode_change, the owner rewrites the hash and passes it back as input."),
            ],
            Demo::FullRouting(demo) => vec![
                note("Externally owned todo list."),
                note("The owner holds the state, persists every change and keeps a /full/<mode> route."),
                Line::default(),
                muted(format!("store: {}", demo.store.path().display())),
            ],
        }
    }
}

pub struct CounterDemo {
    counter: Stateful<Counter>,
    increment_by: i64,
    last_change: Rc<Cell<Option<i64>>>,
}

impl CounterDemo {
    fn mount(config: &Config, redraw: Invalidator) -> Self {
        Self {
            counter: Stateful::mount(redraw),
            increment_by: config.counter.increment_by,
            last_change: Rc::new(Cell::new(None)),
        }
    }

    fn view(&self) -> Element {
        let last_change = Rc::clone(&self.last_change);
        let outputs = CounterOutputs {
            on_counter_change: Some(Callback::new(move |value: i64| {
                tracing::info!(value, "counter changed");
                last_change.set(Some(value));
            })),
        };
        let input = CounterInput {
            increment_by: Some(self.increment_by),
        };
        Element::section("Counter", vec![self.counter.render_with(input, outputs)])
    }
}

pub struct DirectDemo {
    list: Stateful<TodoList>,
}

pub struct HashbangDemo {
    list: Stateful<TodoList>,
    location: Rc<RefCell<String>>,
    redraw: Invalidator,
}

impl HashbangDemo {
    fn mount(redraw: Invalidator) -> Self {
        Self {
            list: Stateful::mount(redraw.clone()),
            location: Rc::new(RefCell::new(String::from("#"))),
            redraw,
        }
    }

    fn view(&self) -> Element {
        let input = TodoListInput {
            view_mode: view_mode_from_hash(&self.location.borrow()),
        };
        let location = Rc::clone(&self.location);
        let redraw = self.redraw.clone();
        let outputs = TodoListOutputs {
            on_view_mode_change: Some(Callback::new(move |mode: ViewMode| {
                *location.borrow_mut() = format!("#{mode}");
                redraw.invalidate();
            })),
        };
        self.list.render_with(input, outputs)
    }
}

pub struct FullRoutingDemo {
    state: Rc<RefCell<Todos>>,
    route: Rc<RefCell<String>>,
    store: TodoStore,
    redraw: Invalidator,
}

impl FullRoutingDemo {
    fn mount(config: &Config, redraw: Invalidator) -> Self {
        let store = TodoStore::new(
            config
                .storage
                .todo_file
                .clone()
                .unwrap_or_else(TodoStore::default_path),
        );
        let todos = match store.load() {
            Ok(Some(todos)) => todos,
            Ok(None) => Todos::default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not load saved todos, starting empty");
                Todos::default()
            }
        };

        Self {
            state: Rc::new(RefCell::new(todos)),
            route: Rc::new(RefCell::new(FULL_ROUTE.to_string())),
            store,
            redraw,
        }
    }

    fn view(&self) -> Element {
        let input = TodoListInput {
            view_mode: view_mode_from_route(&self.route.borrow()),
        };

        let state = Rc::clone(&self.state);
        let store = self.store.clone();
        let redraw = self.redraw.clone();
        let on_state_change = move |next: Todos| {
            if let Err(err) = store.save(&next) {
                tracing::warn!(error = %err, "could not save todos");
            }
            *state.borrow_mut() = next;
            redraw.invalidate();
        };

        let route = Rc::clone(&self.route);
        let redraw = self.redraw.clone();
        let outputs = TodoListOutputs {
            on_view_mode_change: Some(Callback::new(move |mode: ViewMode| {
                *route.borrow_mut() = format!("{FULL_ROUTE}/{mode}");
                redraw.invalidate();
            })),
        };

        render::<TodoList>(
            Props::new(input)
                .state(self.state.borrow().clone())
                .on_state_change(on_state_change)
                .outputs(outputs),
        )
    }
}

/// `#active` selects a filter; an empty or unknown hash leaves it to the list.
pub fn view_mode_from_hash(location: &str) -> Option<ViewMode> {
    location.strip_prefix('#')?.parse().ok()
}

/// `/full/<mode>` selects a filter; a bare `/full` leaves it to the list.
pub fn view_mode_from_route(route: &str) -> Option<ViewMode> {
    route
        .strip_prefix(FULL_ROUTE)?
        .strip_prefix('/')?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn hash_selects_view_mode() {
        assert_eq!(view_mode_from_hash("#active"), Some(ViewMode::Active));
        assert_eq!(view_mode_from_hash("#Completed"), Some(ViewMode::Completed));
        assert_eq!(view_mode_from_hash("#"), None);
        assert_eq!(view_mode_from_hash("active"), None);
    }

    #[test]
    fn route_selects_view_mode() {
        assert_eq!(view_mode_from_route("/full/active"), Some(ViewMode::Active));
        assert_eq!(view_mode_from_route("/full"), None);
        assert_eq!(view_mode_from_route("/full/bogus"), None);
        assert_eq!(view_mode_from_route("/other/all"), None);
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn demos_report_their_kind() {
        for kind in [DemoKind::Counter, DemoKind::Direct, DemoKind::Hashbang] {
            let demo = Demo::mount(kind, &Config::default(), Invalidator::new());
            assert_eq!(demo.kind(), kind);
        }
    }

    #[test]
    fn hashbang_filter_round_trips_through_the_owner() {
        let redraw = Invalidator::new();
        let demo = Demo::mount(DemoKind::Hashbang, &Config::default(), redraw.clone());
        assert_eq!(demo.route().as_deref(), Some("#"));

        let tree = demo.view();
        assert!(tree.find("filter:active").is_none());
        tree.find("new-todo").unwrap().handle_key(press(KeyCode::Char('a')));
        let tree = demo.view();
        tree.find("new-todo").unwrap().handle_key(press(KeyCode::Enter));

        redraw.take();
        demo.view().find("filter:active").unwrap().activate();

        assert_eq!(demo.route().as_deref(), Some("#active"));
        assert!(redraw.is_dirty());
    }

    #[test]
    fn counter_demo_records_the_last_output() {
        let demo = Demo::mount(DemoKind::Counter, &Config::default(), Invalidator::new());
        demo.view().find("counter").unwrap().activate();

        let Demo::Counter(counter) = &demo else {
            panic!("expected the counter demo");
        };
        // default config steps by 2 from the initial 1
        assert_eq!(counter.last_change.get(), Some(3));
        assert_eq!(counter.counter.state().held(), Some(&3));
    }
}
