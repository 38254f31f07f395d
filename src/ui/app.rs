use crossterm::event::KeyEvent;

use crate::config::{Config, DemoKind};
use crate::host::{Element, Invalidator};
use crate::ui::demos::Demo;
use crate::ui::input::{classify_key, InputAction};

pub struct App {
    config: Config,
    demo: Demo,
    /// Index into the current tree's focusable elements.
    focus: usize,
    /// Key of the autofocus input already honoured, so it grabs focus only once.
    autofocused: Option<String>,
    should_quit: bool,
    redraw: Invalidator,
}

impl App {
    pub fn new(config: Config) -> Self {
        let redraw = Invalidator::new();
        let demo = Demo::mount(config.ui.start_demo, &config, redraw.clone());
        Self {
            config,
            demo,
            focus: 0,
            autofocused: None,
            should_quit: false,
            redraw,
        }
    }

    pub fn redraw(&self) -> &Invalidator {
        &self.redraw
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn demo(&self) -> &Demo {
        &self.demo
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Unmounts the current demo and mounts `kind` with fresh state.
    pub fn switch_demo(&mut self, kind: DemoKind) {
        if self.demo.kind() == kind {
            return;
        }
        self.demo = Demo::mount(kind, &self.config, self.redraw.clone());
        self.focus = 0;
        self.autofocused = None;
        self.redraw.invalidate();
    }

    /// Builds the demo's view tree and reconciles focus with it.
    pub fn view(&mut self) -> Element {
        let tree = self.demo.view();
        self.sync_focus(&tree);
        tree
    }

    fn sync_focus(&mut self, tree: &Element) {
        let focusables = tree.focusables();

        let autofocus = focusables
            .iter()
            .enumerate()
            .find(|(_, element)| element.wants_autofocus());
        match autofocus {
            Some((index, element)) => {
                let key = element.key().map(str::to_string);
                if key != self.autofocused {
                    self.focus = index;
                    self.autofocused = key;
                }
            }
            None => self.autofocused = None,
        }

        self.focus = self.focus.min(focusables.len().saturating_sub(1));
    }

    pub fn focus_next(&mut self, tree: &Element) {
        let len = tree.focusables().len();
        if len == 0 {
            return;
        }
        self.focus = (self.focus + 1) % len;
        self.redraw.invalidate();
    }

    pub fn focus_prev(&mut self, tree: &Element) {
        let len = tree.focusables().len();
        if len == 0 {
            return;
        }
        self.focus = (self.focus + len - 1) % len;
        self.redraw.invalidate();
    }

    /// Handles a key against the tree currently on screen.
    pub fn on_key(&mut self, tree: &Element, key: KeyEvent) {
        match classify_key(key) {
            InputAction::None => {}
            InputAction::Quit => self.request_quit(),
            InputAction::SwitchDemo(kind) => self.switch_demo(kind),
            InputAction::FocusNext => self.focus_next(tree),
            InputAction::FocusPrev => self.focus_prev(tree),
            InputAction::Forward(key) => {
                if let Some(element) = tree.focusables().get(self.focus) {
                    element.handle_key(key);
                }
            }
        }
    }
}
