use crossterm::style::{Color, Stylize, style};

use crate::models::Contact;
use crate::utils::{format_timestamp, sanitize};

/// Applies terminal styling when color is enabled, passes text through otherwise
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = style(text).with(color);
        if bold { styled.bold().to_string() } else { styled.to_string() }
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, Color::Cyan, true)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, Color::Green, false)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red, true)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Color::DarkGrey, false)
    }
}

/// Multi-line block for one contact; every stored field is sanitized
pub fn render_contact(contact: &Contact, painter: &Painter) -> String {
    let mut lines = vec![
        format!("{} {}", painter.dim("ID:     "), sanitize(&contact.id)),
        format!("{} {}", painter.dim("Name:   "), sanitize(&contact.name)),
        format!("{} {}", painter.dim("Phone:  "), sanitize(&contact.phone)),
        format!("{} {}", painter.dim("Email:  "), sanitize(&contact.email)),
        format!("{} {}", painter.dim("Created:"), format_timestamp(&contact.created_at)),
    ];
    if let Some(updated_at) = &contact.updated_at {
        lines.push(format!("{} {}", painter.dim("Updated:"), format_timestamp(updated_at)));
    }
    lines.join("\n")
}

/// Contacts separated by blank lines
pub fn render_contacts(contacts: &[&Contact], painter: &Painter) -> String {
    contacts.iter().map(|contact| render_contact(contact, painter)).collect::<Vec<_>>().join("\n\n")
}
