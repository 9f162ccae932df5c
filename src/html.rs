use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::builtin;
use crate::page::TOGGLE_ID;
use crate::theme::Theme;

/// Starter page carrying the structure the controller stamps: a themed
/// root element and a toggle control in the topbar. The built-in
/// stylesheet keys off `data-theme`, so restamping the root is enough to
/// restyle the whole page.
pub fn build_page(title: &str, theme: Theme) -> String {
    let display = theme.display();
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(builtin::BUILTIN_CSS)) }
            }
            body class="ts" {
                header class="ts-topbar" {
                    div class="ts-container ts-topbar-inner" {
                        h1 class="ts-title" { (title) }
                        button type="button" id=(TOGGLE_ID) class="ts-btn" aria-label=(display.label) {
                            (display.icon)
                        }
                    }
                }
                main class="ts-container ts-main" {
                    p { "This page keeps your dark/light choice between visits." }
                }
            }
        }
    };
    markup.into_string()
}
