use crate::calculator::{self, QUOTE_COUNT};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Budget,
    DownPayment,
    Rate,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Budget, Field::DownPayment, Field::Rate];

    pub fn index(self) -> usize {
        match self {
            Field::Budget => 0,
            Field::DownPayment => 1,
            Field::Rate => 2,
        }
    }

    // Clamped moves
    pub fn below(self) -> Field {
        match self {
            Field::Budget => Field::DownPayment,
            Field::DownPayment | Field::Rate => Field::Rate,
        }
    }

    pub fn above(self) -> Field {
        match self {
            Field::Budget | Field::DownPayment => Field::Budget,
            Field::Rate => Field::DownPayment,
        }
    }

    // Wrapping moves
    pub fn next(self) -> Field {
        match self {
            Field::Budget => Field::DownPayment,
            Field::DownPayment => Field::Rate,
            Field::Rate => Field::Budget,
        }
    }

    pub fn previous(self) -> Field {
        match self {
            Field::Budget => Field::Rate,
            Field::DownPayment => Field::Budget,
            Field::Rate => Field::DownPayment,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Field::Budget => "Enter the total budget for the house (in USD): ",
            Field::DownPayment => "Enter the percentage of the budget to be used as down payment: ",
            Field::Rate => "Enter the current annual interest rate for a 30-year mortgage (in %): ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub budget: String,
    pub down_payment: String,
    pub rate: String,
    pub focus: Field,
    pub results: [String; QUOTE_COUNT],
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            budget: String::new(),
            down_payment: String::new(),
            rate: String::new(),
            focus: Field::Budget,
            results: Default::default(),
        }
    }
}

impl FormState {
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Budget => &self.budget,
            Field::DownPayment => &self.down_payment,
            Field::Rate => &self.rate,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Budget => &mut self.budget,
            Field::DownPayment => &mut self.down_payment,
            Field::Rate => &mut self.rate,
        }
    }

    fn calculate_payments(&mut self) {
        self.results = calculator::calculate(&self.budget, &self.down_payment, &self.rate);
        log::debug!(
            "calculated budget={:?} down_payment={:?} rate={:?} valid={}",
            self.budget,
            self.down_payment,
            self.rate,
            self.results[0] != calculator::INVALID_INPUT
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusUp,
    FocusDown,
    CycleForward,
    CycleBackward,
    Calculate,
    DeleteLast,
    Append(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn update(state: &mut FormState, action: Action) -> Flow {
    match action {
        Action::Quit => return Flow::Quit,
        Action::FocusUp => state.focus = state.focus.above(),
        Action::FocusDown => state.focus = state.focus.below(),
        Action::CycleForward => state.focus = state.focus.next(),
        Action::CycleBackward => state.focus = state.focus.previous(),
        Action::Calculate => state.calculate_payments(),
        Action::DeleteLast => {
            state.focused_text_mut().pop();
        }
        Action::Append(c) => state.focused_text_mut().push(c),
    }
    log::debug!("{:?} -> focus {:?}", action, state.focus);
    Flow::Continue
}

/// Maps a terminal key event to a form action. Named keys without a binding
/// are ignored.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::FocusUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::FocusDown),
        KeyCode::Tab => Some(Action::CycleForward),
        KeyCode::BackTab => Some(Action::CycleBackward),
        KeyCode::Enter => Some(Action::Calculate),
        KeyCode::Backspace => Some(Action::DeleteLast),
        KeyCode::Char(c) => Some(Action::Append(c)),
        _ => None,
    }
}
