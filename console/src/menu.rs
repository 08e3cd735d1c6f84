//! Four-option menu loop shared by both consoles

use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};
use crate::terminal::Terminal;

/// What the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Option 1
    Create,
    /// Option 2
    View,
    /// Option 3: clear on the clinic menu, recalculate on the shop menu
    Maintain,
    /// Option 4
    Exit,
}

impl MenuAction {
    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(MenuAction::Create),
            2 => Some(MenuAction::View),
            3 => Some(MenuAction::Maintain),
            4 => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// Whether the session keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Static text of a menu screen
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub title: &'static str,
    pub options: [&'static str; 4],
    /// Shown when the answer is not a number
    pub not_a_number: &'static str,
    /// Shown when the number is not 1-4
    pub invalid_option: &'static str,
    /// Shown when the session ends
    pub farewell: &'static str,
}

impl Menu {
    fn show<R: BufRead, W: Write>(&self, term: &mut Terminal<R, W>) -> AppResult<()> {
        term.say(self.title)?;
        for (index, option) in self.options.iter().enumerate() {
            term.say(format!("{}. {}", index + 1, option))?;
        }
        Ok(())
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// `on_action` is never called with `MenuAction::Exit`; the loop handles it.
    pub fn run<R, W, F>(&self, term: &mut Terminal<R, W>, mut on_action: F) -> AppResult<()>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&mut Terminal<R, W>, MenuAction) -> AppResult<Flow>,
    {
        loop {
            self.show(term)?;
            let flow = match self.next_action(term) {
                Ok(Some(MenuAction::Exit)) => Ok(Flow::Exit),
                Ok(Some(action)) => on_action(term, action),
                Ok(None) => Ok(Flow::Continue),
                Err(e) => Err(e),
            };

            match flow {
                Ok(Flow::Continue) => continue,
                Ok(Flow::Exit) | Err(AppError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(menu = self.title, "Session ended");
        term.say(self.farewell)
    }

    fn next_action<R: BufRead, W: Write>(
        &self,
        term: &mut Terminal<R, W>,
    ) -> AppResult<Option<MenuAction>> {
        let raw = term.prompt("Enter your option: ")?;
        let Ok(number) = raw.trim().parse::<i32>() else {
            term.say(self.not_a_number)?;
            term.blank_line()?;
            return Ok(None);
        };

        match MenuAction::from_number(number) {
            Some(action) => Ok(Some(action)),
            None => {
                term.say(self.invalid_option)?;
                term.blank_line()?;
                Ok(None)
            }
        }
    }
}
