//! Texts and button layouts shown to the user

use super::effect::{Delivery, Reply};
use super::event::Callback;
use super::state::{Mode, Phase};
use crate::naming::{format_track_names, Style};
use serde::Serialize;

pub const WELCOME_TEXT: &str = "Welcome to the Techno Track Name Generator! 🎧\n\n\
I can help you generate creative names for your techno tracks.\n\
Choose a generation mode:";

pub const MENU_TEXT: &str = "Choose a generation mode:";
pub const STYLE_TEXT: &str = "Choose a style:";
pub const KEYWORDS_TEXT: &str = "Enter keywords:";
pub const EXAMPLE_TEXT: &str = "Enter example track:";

pub const HELP_TEXT: &str = "🎧 *Techno Track Name Generator*\n\n\
🎲 Random Generation: pick a style and get ten names.\n\
🔑 Generation by Keywords: pick a style, then send the words the names should use.\n\
📝 Generation Similar to Example: send a track name and get ten in the same spirit.\n\n\
After each batch, press 🔄 Generate more for another round with the same settings.\n\
Use /start at any time to begin again.";

/// A selectable option rendered as a button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    /// Opaque callback identifier, decoded by [`Callback::from_str`](std::str::FromStr)
    pub data: String,
}

impl Button {
    fn new(label: &str, callback: Callback) -> Self {
        Self {
            label: label.to_string(),
            data: callback.to_string(),
        }
    }
}

/// Rows of buttons
pub type Keyboard = Vec<Vec<Button>>;

fn back_button() -> Button {
    Button::new("⬅️ Back to Main Menu", Callback::BackToMain)
}

pub fn main_menu_keyboard() -> Keyboard {
    vec![
        vec![Button::new("🎲 Random Generation", Callback::Mode(Mode::Random))],
        vec![Button::new(
            "🔑 Generation by Keywords",
            Callback::Mode(Mode::Keywords),
        )],
        vec![Button::new(
            "📝 Generation Similar to Example",
            Callback::Mode(Mode::Example),
        )],
    ]
}

pub fn style_keyboard() -> Keyboard {
    vec![
        vec![Button::new("🧠 Serious Name", Callback::Style(Style::Serious))],
        vec![Button::new(
            "🤣 Non-serious Name",
            Callback::Style(Style::NonSerious),
        )],
        vec![back_button()],
    ]
}

pub fn back_keyboard() -> Keyboard {
    vec![vec![back_button()]]
}

pub fn results_keyboard() -> Keyboard {
    vec![
        vec![Button::new("🔄 Generate more", Callback::GenerateMore)],
        vec![back_button()],
    ]
}

pub fn welcome() -> Reply {
    Reply::new(WELCOME_TEXT, main_menu_keyboard(), Delivery::Send)
}

pub fn help() -> Reply {
    Reply::new(HELP_TEXT, back_keyboard(), Delivery::Send)
}

pub fn main_menu(delivery: Delivery) -> Reply {
    Reply::new(MENU_TEXT, main_menu_keyboard(), delivery)
}

pub fn results(label: &str, names: &[String], delivery: Delivery) -> Reply {
    Reply::new(format_track_names(label, names), results_keyboard(), delivery)
}

/// The prompt for the current phase, shown again when an event is rejected
pub fn prompt_for(phase: &Phase, delivery: Delivery) -> Reply {
    match phase {
        Phase::Idle => main_menu(delivery),
        Phase::ChoosingStyle { .. } => Reply::new(STYLE_TEXT, style_keyboard(), delivery),
        Phase::EnteringKeywords { .. } => Reply::new(KEYWORDS_TEXT, back_keyboard(), delivery),
        Phase::EnteringExample => Reply::new(EXAMPLE_TEXT, back_keyboard(), delivery),
    }
}
