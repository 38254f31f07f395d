use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::host::handler::{Handler, Press, Toggle};

/// One node of a rendered view tree.
#[derive(Debug, Clone)]
pub enum Element {
    Text(Line<'static>),
    Button(Button),
    Checkbox(Checkbox),
    TextInput(TextInput),
    /// Children laid out on a single line.
    Row(Vec<Element>),
    /// Children stacked vertically.
    Column(Vec<Element>),
    /// Bold title followed by a body and a blank separator line.
    Section {
        title: String,
        body: Vec<Element>,
    },
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct Button {
    pub key: Option<String>,
    pub label: String,
    pub style: Style,
    pub on_press: Option<Handler<Press>>,
}

#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    pub key: Option<String>,
    pub label: String,
    pub checked: bool,
    pub style: Style,
    pub on_toggle: Option<Handler<Toggle>>,
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub key: Option<String>,
    pub value: String,
    pub placeholder: String,
    /// Take focus when this input first appears.
    pub autofocus: bool,
    pub on_key: Option<Handler<KeyEvent>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn on_press(mut self, handler: Handler<Press>) -> Self {
        self.on_press = Some(handler);
        self
    }
}

impl Checkbox {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            ..Self::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn on_toggle(mut self, handler: Handler<Toggle>) -> Self {
        self.on_toggle = Some(handler);
        self
    }
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    pub fn on_key(mut self, handler: Handler<KeyEvent>) -> Self {
        self.on_key = Some(handler);
        self
    }
}

impl From<Button> for Element {
    fn from(button: Button) -> Self {
        Element::Button(button)
    }
}

impl From<Checkbox> for Element {
    fn from(checkbox: Checkbox) -> Self {
        Element::Checkbox(checkbox)
    }
}

impl From<TextInput> for Element {
    fn from(input: TextInput) -> Self {
        Element::TextInput(input)
    }
}

impl Element {
    pub fn text(line: impl Into<Line<'static>>) -> Self {
        Element::Text(line.into())
    }

    pub fn section(title: impl Into<String>, body: Vec<Element>) -> Self {
        Element::Section {
            title: title.into(),
            body,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Element::Button(button) => button.key.as_deref(),
            Element::Checkbox(checkbox) => checkbox.key.as_deref(),
            Element::TextInput(input) => input.key.as_deref(),
            _ => None,
        }
    }

    pub fn wants_autofocus(&self) -> bool {
        matches!(self, Element::TextInput(TextInput { autofocus: true, .. }))
    }

    pub fn is_focusable(&self) -> bool {
        matches!(
            self,
            Element::Button(_) | Element::Checkbox(_) | Element::TextInput(_)
        )
    }

    fn children(&self) -> &[Element] {
        match self {
            Element::Row(children) | Element::Column(children) => children,
            Element::Section { body, .. } => body,
            _ => &[],
        }
    }

    /// Focusable elements in depth-first order. Focus indices refer to this order.
    pub fn focusables(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_focusables(&mut found);
        found
    }

    fn collect_focusables<'a>(&'a self, found: &mut Vec<&'a Element>) {
        if self.is_focusable() {
            found.push(self);
        }
        for child in self.children() {
            child.collect_focusables(found);
        }
    }

    /// Finds the first element carrying `key`, depth-first.
    pub fn find(&self, key: &str) -> Option<&Element> {
        if self.key() == Some(key) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(key))
    }

    /// Routes a key press to this element's handler.
    ///
    /// Buttons and checkboxes react to Enter and Space, text inputs receive
    /// every key. Returns whether a handler ran.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match self {
            Element::TextInput(input) => match &input.on_key {
                Some(handler) => {
                    handler.call(&key);
                    true
                }
                None => false,
            },
            _ if is_activation(&key) => self.activate(),
            _ => false,
        }
    }

    /// Presses a button or flips a checkbox as if the user activated it.
    pub fn activate(&self) -> bool {
        match self {
            Element::Button(Button {
                on_press: Some(handler),
                ..
            }) => {
                handler.call(&Press);
                true
            }
            Element::Checkbox(Checkbox {
                on_toggle: Some(handler),
                checked,
                ..
            }) => {
                handler.call(&Toggle { checked: !checked });
                true
            }
            _ => false,
        }
    }

    /// Flattens the tree into ratatui lines, highlighting the focused element.
    pub fn lines(&self, focused: Option<usize>, focus_style: Style) -> Vec<Line<'static>> {
        let mut painter = Painter {
            focused,
            focus_style,
            next_focus: 0,
            lines: Vec::new(),
        };
        painter.block(self);
        painter.lines
    }
}

fn is_activation(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

struct Painter {
    focused: Option<usize>,
    focus_style: Style,
    next_focus: usize,
    lines: Vec<Line<'static>>,
}

impl Painter {
    fn block(&mut self, element: &Element) {
        match element {
            Element::Text(line) => self.lines.push(line.clone()),
            Element::Column(children) => {
                for child in children {
                    self.block(child);
                }
            }
            Element::Section { title, body } => {
                self.lines.push(Line::from(Span::styled(
                    title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for child in body {
                    self.block(child);
                }
                self.lines.push(Line::default());
            }
            Element::Empty => {}
            inline => {
                let mut spans = Vec::new();
                self.inline(inline, &mut spans);
                self.lines.push(Line::from(spans));
            }
        }
    }

    fn inline(&mut self, element: &Element, spans: &mut Vec<Span<'static>>) {
        match element {
            Element::Text(line) => spans.extend(line.spans.iter().cloned()),
            Element::Button(button) => {
                let style = self.focus(button.style);
                spans.push(Span::styled(format!("[ {} ]", button.label), style));
            }
            Element::Checkbox(checkbox) => {
                let mark = if checkbox.checked { "[x]" } else { "[ ]" };
                let style = self.focus(checkbox.style);
                spans.push(Span::styled(mark, style));
                if !checkbox.label.is_empty() {
                    spans.push(Span::styled(format!(" {}", checkbox.label), checkbox.style));
                }
            }
            Element::TextInput(input) => {
                let style = self.focus(Style::default());
                if input.value.is_empty() {
                    spans.push(Span::styled(
                        format!("> {}", input.placeholder),
                        style.add_modifier(Modifier::DIM),
                    ));
                } else {
                    spans.push(Span::styled(format!("> {}", input.value), style));
                }
            }
            Element::Row(children) | Element::Column(children) => {
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        spans.push(Span::raw(" "));
                    }
                    self.inline(child, spans);
                }
            }
            Element::Section { body, .. } => {
                for child in body {
                    self.inline(child, spans);
                }
            }
            Element::Empty => {}
        }
    }

    fn focus(&mut self, base: Style) -> Style {
        let index = self.next_focus;
        self.next_focus += 1;
        if self.focused == Some(index) {
            base.patch(self.focus_style)
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn tree(log: &Rc<RefCell<Vec<String>>>) -> Element {
        let pressed = Rc::clone(log);
        let toggled = Rc::clone(log);
        let typed = Rc::clone(log);
        Element::Column(vec![
            Element::text("title"),
            Element::Row(vec![
                Checkbox::new("done", false)
                    .key("check")
                    .on_toggle(Handler::new(move |event: &Toggle| {
                        toggled.borrow_mut().push(format!("toggle:{}", event.checked))
                    }))
                    .into(),
                Button::new("go")
                    .key("go")
                    .on_press(Handler::new(move |_: &Press| {
                        pressed.borrow_mut().push("press".to_string())
                    }))
                    .into(),
            ]),
            TextInput::new("")
                .key("input")
                .placeholder("type here")
                .on_key(Handler::new(move |event: &KeyEvent| {
                    typed.borrow_mut().push(format!("key:{:?}", event.code))
                }))
                .into(),
        ])
    }

    #[test]
    fn focusables_follow_depth_first_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let root = tree(&log);
        let keys: Vec<_> = root
            .focusables()
            .into_iter()
            .filter_map(|element| element.key())
            .collect();
        assert_eq!(keys, vec!["check", "go", "input"]);
    }

    #[test]
    fn activation_keys_reach_buttons_and_checkboxes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let root = tree(&log);

        assert!(root.find("go").unwrap().handle_key(key(KeyCode::Enter)));
        assert!(root.find("check").unwrap().handle_key(key(KeyCode::Char(' '))));
        assert!(!root.find("go").unwrap().handle_key(key(KeyCode::Char('x'))));

        assert_eq!(*log.borrow(), vec!["press", "toggle:true"]);
    }

    #[test]
    fn text_inputs_receive_every_key() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let root = tree(&log);
        let input = root.find("input").unwrap();

        input.handle_key(key(KeyCode::Char('a')));
        input.handle_key(key(KeyCode::Enter));

        assert_eq!(*log.borrow(), vec!["key:Char('a')", "key:Enter"]);
    }

    #[test]
    fn painter_emits_one_line_per_block() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let lines = tree(&log).lines(Some(1), Style::default());
        let rendered: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        assert_eq!(rendered, vec!["title", "[ ] done [ go ]", "> type here"]);
    }
}
