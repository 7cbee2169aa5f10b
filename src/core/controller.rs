use crate::scenes::ScenarioKind;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Digit1,
    Digit2,
    Escape,
    /// Held to orbit the camera
    MouseLeft,
}

/// What a button press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadScenario(ScenarioKind),
    Quit,
}

impl Button {
    /// Fixed key bindings; buttons that are only held have no press action
    pub fn action(self) -> Option<Action> {
        match self {
            Button::Digit1 => Some(Action::LoadScenario(ScenarioKind::Base)),
            Button::Digit2 => Some(Action::LoadScenario(ScenarioKind::Drops)),
            Button::Escape => Some(Action::Quit),
            Button::MouseLeft => None,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Take the buttons that went down since the last call, in press order
    fn take_pressed(&mut self) -> Vec<Button>;
}
