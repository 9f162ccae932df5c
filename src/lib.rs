mod builtin;
mod cli;
mod controller;
mod html;
mod page;
mod prefs;
mod theme;
mod verify;

use std::path::Path;

use anyhow::Context as _;

pub use cli::{Action, Args as CliArgs};
pub use controller::{STORAGE_KEY, ThemeController};
pub use page::{PageDom, THEME_ATTR, TOGGLE_ID};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{Theme, ToggleDisplay};

use cli::Args;

pub fn run(args: Args) -> anyhow::Result<()> {
    if args.scaffold {
        if args.page.exists() {
            tracing::warn!(page = %args.page.display(), "page exists; leaving it in place");
        } else {
            let starter = html::build_page(&args.title, Theme::default());
            write_page(&args.page, &starter)?;
            tracing::info!(page = %args.page.display(), "wrote starter page");
        }
    }

    let page = PageDom::load(&args.page)?;
    let store = FilePreferenceStore::open(&args.prefs, args.origin.as_ref())?;
    let mut controller = ThemeController::new(store);

    let mut theme = controller.initialize(&page)?;
    controller.attach(&page);

    if args.action == Action::Toggle {
        if let Some(next) = controller.toggle(&page)? {
            theme = next;
        }
    }

    let stamped = page.to_html()?;
    verify::assert_stamped(&stamped, theme)?;

    let out = args.out.as_deref().unwrap_or(&args.page);
    write_page(out, &stamped)?;
    tracing::info!(%theme, page = %out.display(), "stamped page");
    Ok(())
}

fn write_page(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    std::fs::write(path, html).with_context(|| format!("write {}", path.display()))
}
