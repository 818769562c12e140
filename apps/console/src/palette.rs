//! # Status Palette
//!
//! One colour per status, shared by the line renderer (owo-colors) and the
//! full-screen UI (ratatui).
//!
//! | Status           | Tone   |
//! |------------------|--------|
//! | Delivered        | green  |
//! | In Transit       | blue   |
//! | Processing       | yellow |
//! | Out for Delivery | purple |
//! | Pending request  | none   |

use owo_colors::OwoColorize;
use parcel_core::{ItemStatus, RequestStatus};
use ratatui::style::Color;

/// Badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Purple,
    Plain,
}

impl Tone {
    pub fn for_item(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Delivered => Tone::Green,
            ItemStatus::InTransit => Tone::Blue,
            ItemStatus::Processing => Tone::Yellow,
            ItemStatus::OutForDelivery => Tone::Purple,
        }
    }

    pub fn for_request(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Processing => Tone::Yellow,
            RequestStatus::Delivered => Tone::Green,
            RequestStatus::Pending => Tone::Plain,
        }
    }

    /// ANSI-coloured `text`, or `text` untouched when `color` is off.
    pub fn paint(self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        match self {
            Tone::Green => text.green().bold().to_string(),
            Tone::Blue => text.blue().bold().to_string(),
            Tone::Yellow => text.yellow().bold().to_string(),
            Tone::Purple => text.magenta().bold().to_string(),
            Tone::Plain => text.to_string(),
        }
    }
}

impl From<Tone> for Color {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Green => Color::Green,
            Tone::Blue => Color::Blue,
            Tone::Yellow => Color::Yellow,
            Tone::Purple => Color::Magenta,
            Tone::Plain => Color::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_tones() {
        assert_eq!(Tone::for_item(ItemStatus::Delivered), Tone::Green);
        assert_eq!(Tone::for_item(ItemStatus::InTransit), Tone::Blue);
        assert_eq!(Tone::for_item(ItemStatus::Processing), Tone::Yellow);
        assert_eq!(Tone::for_item(ItemStatus::OutForDelivery), Tone::Purple);
    }

    #[test]
    fn test_request_tones() {
        assert_eq!(Tone::for_request(RequestStatus::Processing), Tone::Yellow);
        assert_eq!(Tone::for_request(RequestStatus::Delivered), Tone::Green);
        assert_eq!(Tone::for_request(RequestStatus::Pending), Tone::Plain);
    }

    #[test]
    fn test_paint_respects_color_switch() {
        assert_eq!(Tone::Green.paint("Delivered", false), "Delivered");

        let painted = Tone::Green.paint("Delivered", true);
        assert!(painted.contains("Delivered"));
        assert!(painted.contains("\u{1b}[32m"));
        assert_eq!(Tone::Plain.paint("Pending", true), "Pending");
    }

    #[test]
    fn test_ratatui_colors() {
        assert_eq!(Color::from(Tone::Purple), Color::Magenta);
        assert_eq!(Color::from(Tone::Blue), Color::Blue);
    }
}
