//! # Line-Mode Rendering
//!
//! Turns [`Screen`] snapshots and core [`Event`]s into terminal text for
//! piped sessions. Status badges are coloured with owo-colors when the
//! output is a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  e-Delivery                                        Cart (1)            │
//! │  ───────────────────────────────────────────────────────────────────   │
//! │  Delivery Items                                                        │
//! │    [1] Electronics Package                  Status: In Transit         │
//! │    ...                                                                 │
//! │                                                                         │
//! │  * Item added to cart!                     ◄── notice from Event       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use parcel_core::Event;

use crate::error::ApiError;
use crate::palette::Tone;
use crate::screen::{ItemRow, RequestRow, Screen, StatusCount};

const RULE: &str = "----------------------------------------------------------------";

/// A [`Screen`] formatted as text.
#[derive(Debug, Clone, Copy)]
pub struct PlainScreen<'a> {
    screen: &'a Screen,
    color: bool,
}

impl<'a> PlainScreen<'a> {
    pub fn new(screen: &'a Screen, color: bool) -> Self {
        PlainScreen { screen, color }
    }

    fn item_badge(&self, item: &ItemRow) -> String {
        Tone::for_item(item.status).paint(item.status.label(), self.color)
    }

    fn list(
        &self,
        f: &mut fmt::Formatter<'_>,
        items: &[ItemRow],
        summary: &[StatusCount],
    ) -> fmt::Result {
        writeln!(f, "Delivery Items")?;
        for item in items {
            writeln!(
                f,
                "  [{}] {:<36} Status: {}",
                item.id,
                item.name,
                self.item_badge(item)
            )?;
        }

        let summary: Vec<String> = summary
            .iter()
            .map(|entry| {
                let label = Tone::for_item(entry.status).paint(entry.status.label(), self.color);
                format!("{label} {}", entry.count)
            })
            .collect();
        writeln!(f)?;
        writeln!(f, "  {}", summary.join(" · "))?;
        writeln!(f, "  show <id> for details · cart · devtools (Delivery Agent)")
    }

    fn detail(&self, f: &mut fmt::Formatter<'_>, item: &ItemRow, in_cart: bool) -> fmt::Result {
        writeln!(f, "< back to list")?;
        writeln!(f)?;
        writeln!(f, "{}", item.name)?;
        writeln!(f, "  [{}]", self.item_badge(item))?;
        writeln!(f)?;
        writeln!(f, "  Delivery Location")?;
        writeln!(f, "    {}", item.destination)?;
        writeln!(f, "  Availability")?;
        writeln!(f, "    {}", item.availability)?;
        writeln!(f)?;
        if in_cart {
            writeln!(f, "  (already in your cart)")?;
        }
        writeln!(f, "  add -> Add Item")
    }

    fn cart(
        &self,
        f: &mut fmt::Formatter<'_>,
        items: &[ItemRow],
        can_request: bool,
    ) -> fmt::Result {
        writeln!(f, "< back to list")?;
        writeln!(f)?;
        writeln!(f, "Your Cart ({} items)", items.len())?;

        if items.is_empty() {
            writeln!(f, "  Your cart is empty")?;
        }
        for item in items {
            writeln!(f, "  [{}] {:<36} {}", item.id, item.name, self.item_badge(item))?;
            writeln!(f, "      {}", item.destination)?;
            writeln!(f, "      Availability: {}", item.availability)?;
        }

        if can_request {
            writeln!(f)?;
            writeln!(f, "  request -> Request Delivery")?;
        }
        Ok(())
    }

    fn dev_tools(
        &self,
        f: &mut fmt::Formatter<'_>,
        operator: &str,
        (pending, processing): (usize, usize),
        requests: &[RequestRow],
    ) -> fmt::Result {
        writeln!(f, "< back to list")?;
        writeln!(f)?;
        writeln!(f, "Development Tools ({operator})")?;
        writeln!(
            f,
            "Requested Carts ({}) · Pending {pending} · Processing {processing}",
            requests.len()
        )?;

        if requests.is_empty() {
            writeln!(f, "  No delivery requests yet")?;
        }
        for request in requests {
            let action = if request.can_accept {
                format!("accept {} -> Accept Delivery", request.id)
            } else {
                Tone::for_request(request.status).paint(request.status.label(), self.color)
            };
            writeln!(f)?;
            writeln!(f, "  Cart #{:<8} {}", request.id, action)?;
            writeln!(f, "  Requested: {}", request.requested)?;
            writeln!(f, "  Items ({})", request.item_count)?;
            for item in &request.items {
                writeln!(f, "    - {} ({})", item.name, item.destination)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PlainScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<52}Cart ({})", "e-Delivery", self.screen.cart_size())?;
        writeln!(f, "{RULE}")?;

        match self.screen {
            Screen::List { items, summary, .. } => self.list(f, items, summary),
            Screen::Detail { item, in_cart, .. } => self.detail(f, item, *in_cart),
            Screen::Cart {
                items, can_request, ..
            } => self.cart(f, items, *can_request),
            Screen::DevTools {
                operator,
                pending,
                processing,
                requests,
                ..
            } => self.dev_tools(f, operator, (*pending, *processing), requests),
        }
    }
}

/// Renders a full screen, header included.
pub fn screen(screen: &Screen, color: bool) -> String {
    PlainScreen::new(screen, color).to_string()
}

/// Acknowledgment text for an event, if it deserves one.
pub fn notice(event: &Event) -> Option<String> {
    match event {
        Event::ViewChanged { .. } => None,
        Event::ItemAdded {
            already_in_cart: false,
            ..
        } => Some("Item added to cart!".to_string()),
        Event::ItemAdded {
            already_in_cart: true,
            ..
        } => Some("Item is already in your cart.".to_string()),
        Event::RequestSubmitted { cart_id, item_count } => Some(format!(
            "Delivery request submitted successfully! (Cart #{cart_id}, {item_count} items)"
        )),
        Event::DeliveryAccepted { cart_id } => {
            Some(format!("Cart #{cart_id} accepted for delivery."))
        }
        Event::AcceptIgnored { cart_id, status } => {
            Some(format!("Cart #{cart_id} is already {status}."))
        }
        Event::UnknownRequestIgnored { cart_id } => {
            Some(format!("No delivery request #{cart_id}; nothing to accept."))
        }
    }
}

/// One-line error notice.
pub fn error(err: &ApiError) -> String {
    format!("! {err}")
}

/// Command reference printed by `help`.
pub fn help() -> &'static str {
    "\
Commands:
  list              show all delivery items
  show <id>         open an item's details
  back              return to the list
  add [<id>]        add an item to the cart (defaults to the open item)
  cart              open the cart
  request           submit the cart as a delivery request
  devtools          open the delivery agent tools
  accept <id>       accept a pending delivery request
  help              print this reference
  quit | exit       end the session
"
}
