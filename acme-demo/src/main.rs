//! acme demo - Static page generation for visual review
//!
//! A minimal binary that renders UI components with fixture data to a
//! standalone HTML page.

use acme_ui::CustomersLayout;
use anyhow::Context;
use dioxus::prelude::*;
use std::path::PathBuf;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Fixture content standing in for the customers pages
fn demo_page() -> Element {
    rsx! {
        CustomersLayout {
            h1 { class: "text-2xl", "Customers" }
            p { "Fixture customer list for layout review." }
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let out_path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "acme-demo.html".to_string())
        .into();

    let body = dioxus_ssr::render_element(demo_page());
    let page = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>acme demo</title>\n\
         <script src=\"{TAILWIND_CDN}\"></script>\n\
         </head>\n\
         <body class=\"flex min-h-screen\">\n\
         {body}\n\
         </body>\n\
         </html>\n"
    );

    std::fs::write(&out_path, page)
        .with_context(|| format!("writing {}", out_path.display()))?;
    tracing::info!("wrote demo page to {}", out_path.display());

    Ok(())
}
