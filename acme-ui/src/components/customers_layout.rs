//! Customers section layout component

use dioxus::prelude::*;

/// Layout wrapper for the customers section. Wraps page content in the
/// section's growable container, scrollable at medium+ widths.
#[component]
pub fn CustomersLayout(children: Element) -> Element {
    rsx! {
        div { class: "flex-grow p-6 md:overflow-y-auto md:p-12 bg-yellow-500 text-green-400",
            {children}
        }
    }
}
