//! Interactive menu loop.
//!
//! The shell reads from any [`BufRead`] and writes to any [`Write`], so the
//! binary runs it on the locked stdin/stdout and the tests run it on a byte
//! cursor and a `Vec<u8>`. Bad numeric input is reported and aborts the
//! current operation before the task file is touched; store errors end the
//! loop and propagate to the caller.

use crate::{
    libs::{
        input::{parse_any_priority, parse_number, parse_priority},
        messages::Message,
        task::{PlainTask, SortKey, Task},
        todo::TodoList,
    },
    msg_debug,
    store::record::Record,
};
use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Shell<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Shell { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs the nine-item menu for a rich task list until the user exits or
    /// the input ends.
    pub fn run_rich(&mut self, list: &TodoList<Task>) -> Result<()> {
        loop {
            let Some(choice) = self.menu(Message::RichMenu)? else {
                return Ok(());
            };
            let flow = match choice.trim() {
                "1" => self.view(list)?,
                "2" => self.add_rich(list)?,
                "3" => self.delete(list)?,
                "4" => self.complete(list)?,
                "5" => self.edit(list)?,
                "6" => self.search(list)?,
                "7" => self.sort(list, SortKey::Priority)?,
                "8" => self.sort(list, SortKey::Completed)?,
                "9" => self.exit()?,
                _ => self.invalid_choice()?,
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Runs the four-item menu for a plain task list.
    pub fn run_plain(&mut self, list: &TodoList<PlainTask>) -> Result<()> {
        loop {
            let Some(choice) = self.menu(Message::PlainMenu)? else {
                return Ok(());
            };
            let flow = match choice.trim() {
                "1" => self.view(list)?,
                "2" => self.add_plain(list)?,
                "3" => self.delete(list)?,
                "4" => self.exit()?,
                _ => self.invalid_choice()?,
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn menu(&mut self, menu: Message) -> Result<Option<String>> {
        writeln!(self.output)?;
        self.say(&menu)?;
        self.prompt(&Message::PromptChoice)
    }

    fn view<R: Record + Display>(&mut self, list: &TodoList<R>) -> Result<Flow> {
        self.say(&list.view()?)?;
        Ok(Flow::Continue)
    }

    fn add_rich(&mut self, list: &TodoList<Task>) -> Result<Flow> {
        let Some(description) = self.prompt(&Message::PromptTaskDescription)? else {
            return Ok(Flow::Exit);
        };
        let Some(priority) = self.prompt(&Message::PromptTaskPriority)? else {
            return Ok(Flow::Exit);
        };

        match parse_priority(&priority) {
            Ok(priority) => self.say(&list.add(&description, priority)?)?,
            Err(err) => {
                msg_debug!(err);
                self.say(&Message::InvalidPriority)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn add_plain(&mut self, list: &TodoList<PlainTask>) -> Result<Flow> {
        let Some(description) = self.prompt(&Message::PromptTaskDescription)? else {
            return Ok(Flow::Exit);
        };
        self.say(&list.add(&description)?)?;
        Ok(Flow::Continue)
    }

    fn delete<R: Record + Display>(&mut self, list: &TodoList<R>) -> Result<Flow> {
        self.view(list)?;
        let Some(number) = self.prompt(&Message::PromptDeleteNumber)? else {
            return Ok(Flow::Exit);
        };

        match parse_number(&number) {
            Ok(number) => self.say(&list.delete(number)?)?,
            Err(err) => {
                msg_debug!(err);
                self.say(&Message::InvalidNumber)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn complete(&mut self, list: &TodoList<Task>) -> Result<Flow> {
        self.view(list)?;
        let Some(number) = self.prompt(&Message::PromptCompleteNumber)? else {
            return Ok(Flow::Exit);
        };

        match parse_number(&number) {
            Ok(number) => self.say(&list.complete(number)?)?,
            Err(err) => {
                msg_debug!(err);
                self.say(&Message::InvalidNumber)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Asks for number, description and priority in that order. A bad
    /// number stops before the description is asked for. The priority is
    /// not range-checked here.
    fn edit(&mut self, list: &TodoList<Task>) -> Result<Flow> {
        self.view(list)?;
        let Some(number) = self.prompt(&Message::PromptEditNumber)? else {
            return Ok(Flow::Exit);
        };
        let number = match parse_number(&number) {
            Ok(number) => number,
            Err(err) => {
                msg_debug!(err);
                self.say(&Message::InvalidInputs)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(description) = self.prompt(&Message::PromptNewDescription)? else {
            return Ok(Flow::Exit);
        };
        let Some(priority) = self.prompt(&Message::PromptNewPriority)? else {
            return Ok(Flow::Exit);
        };

        match parse_any_priority(&priority) {
            Ok(priority) => self.say(&list.edit(number, &description, priority)?)?,
            Err(err) => {
                msg_debug!(err);
                self.say(&Message::InvalidInputs)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self, list: &TodoList<Task>) -> Result<Flow> {
        let Some(keyword) = self.prompt(&Message::PromptSearchKeyword)? else {
            return Ok(Flow::Exit);
        };
        self.say(&list.search(&keyword)?)?;
        Ok(Flow::Continue)
    }

    fn sort(&mut self, list: &TodoList<Task>, key: SortKey) -> Result<Flow> {
        self.say(&list.sort(key)?)?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<Flow> {
        self.say(&Message::ExitingApplication)?;
        Ok(Flow::Exit)
    }

    fn invalid_choice(&mut self) -> Result<Flow> {
        self.say(&Message::InvalidChoice)?;
        Ok(Flow::Continue)
    }

    fn say(&mut self, message: &Message) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Writes `message` without a newline and reads one line of input with
    /// its terminator removed. Returns `None` once the input is exhausted.
    fn prompt(&mut self, message: &Message) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
