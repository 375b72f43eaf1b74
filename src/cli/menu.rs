//! Interactive numbered menu over a [`RecordStore`]
//!
//! The menu reads one line per prompt from any `BufRead` and writes to any
//! `Write`, so the binary drives it with stdin/stdout and tests drive it with
//! in-memory buffers. Store errors are printed and the loop continues; only a
//! failure of the streams themselves ends the session with an error. End of
//! input ends the session like choosing Exit.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use super::render::{Painter, render_contact, render_contacts};
use crate::models::{Contact, ContactUpdate};
use crate::store::{ContactStorage, RecordStore, StoreError};
use crate::utils::sanitize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Search,
    DisplayAll,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Create),
            "2" => Some(Self::Search),
            "3" => Some(Self::DisplayAll),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, S: ContactStorage, R: BufRead, W: Write> {
    store: &'a mut RecordStore<S>,
    input: R,
    output: W,
    painter: Painter,
}

impl<'a, S: ContactStorage, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(store: &'a mut RecordStore<S>, input: R, output: W, painter: Painter) -> Self {
        Self { store, input, output, painter }
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option (1-6): ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Create) => self.create()?,
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::DisplayAll) => self.display_all()?,
                Some(MenuChoice::Update) => self.update()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    debug!("Invalid menu choice: {:?}", line);
                    let message =
                        self.painter.error("Invalid choice. Please enter a number from 1 to 6.");
                    writeln!(self.output, "{}", message)?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.painter.heading("=== Contact Book ==="))?;
        writeln!(self.output, "1. Create contact")?;
        writeln!(self.output, "2. Search contacts")?;
        writeln!(self.output, "3. Display all contacts")?;
        writeln!(self.output, "4. Update contact")?;
        writeln!(self.output, "5. Delete contact")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    /// One line of input without its line ending; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report_success(&mut self, message: &str, contact: &Contact) -> Result<()> {
        writeln!(self.output, "{}", self.painter.success(message))?;
        writeln!(self.output, "{}", render_contact(contact, &self.painter))?;
        Ok(())
    }

    fn report_error(&mut self, error: &StoreError) -> Result<()> {
        writeln!(self.output, "{}", self.painter.error(&format!("Error: {}", error)))?;
        Ok(())
    }

    fn create(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Name: ")? else { return Ok(Flow::Exit) };
        let Some(phone) = self.prompt("Phone: ")? else { return Ok(Flow::Exit) };
        let Some(email) = self.prompt("Email: ")? else { return Ok(Flow::Exit) };

        match self.store.create(&name, &phone, &email) {
            Ok(contact) => self.report_success("Contact created.", &contact)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Search by name (blank lists everyone): ")? else {
            return Ok(Flow::Exit);
        };

        let results = self.store.search(&query);
        if results.is_empty() {
            writeln!(self.output, "No contacts match '{}'.", sanitize(query.trim()))?;
        } else {
            writeln!(self.output, "Found {} contact(s):", results.len())?;
            writeln!(self.output)?;
            writeln!(self.output, "{}", render_contacts(&results, &self.painter))?;
        }
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> Result<Flow> {
        let contacts = self.store.list();
        if contacts.is_empty() {
            writeln!(self.output, "No contacts found.")?;
        } else {
            let heading = format!("All contacts ({})", contacts.len());
            writeln!(self.output, "{}", self.painter.heading(&heading))?;
            writeln!(self.output)?;
            writeln!(self.output, "{}", render_contacts(&contacts, &self.painter))?;
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Contact ID: ")? else { return Ok(Flow::Exit) };
        let id = id.trim().to_string();

        let Some(current) = self.store.get(&id).cloned() else {
            self.report_error(&StoreError::NotFound { id })?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Leave a field blank to keep its current value.")?;
        let label = format!("Name [{}]: ", sanitize(&current.name));
        let Some(name) = self.prompt(&label)? else { return Ok(Flow::Exit) };
        let label = format!("Phone [{}]: ", sanitize(&current.phone));
        let Some(phone) = self.prompt(&label)? else { return Ok(Flow::Exit) };
        let label = format!("Email [{}]: ", sanitize(&current.email));
        let Some(email) = self.prompt(&label)? else { return Ok(Flow::Exit) };

        let changes = ContactUpdate { name: Some(name), phone: Some(phone), email: Some(email) };
        match self.store.update(&id, &changes) {
            Ok(contact) => self.report_success("Contact updated.", &contact)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Contact ID: ")? else { return Ok(Flow::Exit) };

        match self.store.delete(id.trim()) {
            Ok(contact) => {
                let message = format!("Deleted {}.", sanitize(&contact.name));
                writeln!(self.output, "{}", self.painter.success(&message))?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }
}
