//! Page content and the pure half of the DOM interactions.

use crate::error::ContactError;
use std::cell::Cell;

// Active nav highlighting starts this many pixels before a section's top,
// leaving room for the fixed header.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Whether the nav link for a section at `offset_top` (height
/// `offset_height`) is active at `scroll_y`.
#[inline]
pub fn section_is_active(scroll_y: f64, offset_top: f64, offset_height: f64) -> bool {
    let top = offset_top - NAV_OFFSET_PX;
    let bottom = top + offset_height;
    scroll_y >= top && scroll_y < bottom
}

/// One-shot latch for the loading screen fade.
#[derive(Debug, Default)]
pub struct HideOnce(Cell<bool>);

impl HideOnce {
    /// True on the first call only.
    pub fn trigger(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn is_hidden(&self) -> bool {
        self.0.get()
    }
}

pub const CONTACT_RECIPIENT: &str = "yashtambade56@gmail.com";
pub const CONTACT_INCOMPLETE_ALERT: &str = "Please fill all fields!";

/// Raw contact form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A composed message ready to hand to a mail client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl ContactForm {
    /// Trim every field and compose the draft. The first empty field, in
    /// form order, is reported.
    pub fn compose(&self, recipient: &str) -> Result<MailDraft, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        for (field, value) in [("name", name), ("email", email), ("message", message)] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(MailDraft {
            recipient: recipient.to_string(),
            subject: format!("Portfolio contact from {name}"),
            body: format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}"),
        })
    }
}

impl MailDraft {
    /// Gmail compose URL. `encode` must URI-component-encode its input.
    pub fn gmail_compose_url(&self, encode: impl Fn(&str) -> String) -> String {
        format!(
            "https://mail.google.com/mail/?view=cm&fs=1&to={}&su={}&body={}",
            encode(&self.recipient),
            encode(&self.subject),
            encode(&self.body)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Bar fill in percent.
    pub level: u8,
}

pub const SKILLS: [Skill; 5] = [
    Skill { name: "Coding", level: 85 },
    Skill { name: "Logic", level: 80 },
    Skill { name: "Design", level: 78 },
    Skill { name: "Gaming", level: 75 },
    Skill { name: "Learning", level: 90 },
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "At a young age, I discovered my interest in web design, creative UI, and building digital projects.",
    "Through continuous learning and hands-on practice, coding has become a strong passion and part of my daily growth.",
    "Now, I am focused on improving my skills and taking on new challenges to grow as a web developer.",
];

/// Skill rows with empty bars; the fill width is animated in later from
/// `data-level`.
pub fn skills_html(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|s| {
            format!(
                "<div class=\"sf-skill\"><div style=\"width:90px;font-family:var(--font-hud);font-size:13px\">{}</div><div class=\"sf-bar\"><div class=\"sf-fill\" data-level=\"{}\"></div></div></div>",
                s.name, s.level
            )
        })
        .collect()
}

/// Parse a `data-level` attribute into a CSS width. Out-of-range levels are
/// clamped to 100%.
pub fn fill_width(data_level: &str) -> Option<String> {
    let level: u32 = data_level.trim().parse().ok()?;
    Some(format!("{}%", level.min(100)))
}

pub fn about_html(paragraphs: &[&str; 3]) -> String {
    format!(
        "<div class=\"sf-row\"><div class=\"sf-icon\"><i data-lucide=\"user\"></i></div><div>{}</div></div>\
         <div class=\"sf-row\" style=\"justify-content:space-between\"><div style=\"max-width:75%\">{}</div><div class=\"sf-heart\"><i data-lucide=\"heart\"></i></div></div>\
         <div class=\"sf-row\"><div class=\"sf-icon\"><i data-lucide=\"rocket\"></i></div><div>{}</div></div>",
        paragraphs[0], paragraphs[1], paragraphs[2]
    )
}

pub const CARD_TILT_DEG: f64 = 6.0;

/// CSS transform for a project card under the pointer. Coordinates are
/// client pixels; the rectangle is the card's bounding box.
pub fn card_tilt_transform(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> String {
    let rel = |v: f64, origin: f64, extent: f64| {
        if extent > 0.0 {
            (v - origin) / extent - 0.5
        } else {
            0.0
        }
    };
    // -0 would print as "-0deg"
    let unsigned_zero = |v: f64| if v == 0.0 { 0.0 } else { v };
    let x = rel(client_x, left, width);
    let y = rel(client_y, top, height);
    format!(
        "translateY(-8px) rotate(1deg) rotateX({}deg) rotateY({}deg)",
        unsigned_zero(-y * CARD_TILT_DEG),
        unsigned_zero(x * CARD_TILT_DEG)
    )
}
