use std::path::Path;

use anyhow::Context as _;
use kuchiki::traits::TendrilSink as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use crate::theme::{Theme, ToggleDisplay};

/// Attribute on the root element holding the active theme.
pub const THEME_ATTR: &str = "data-theme";

/// Id of the optional toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

pub(crate) const TOGGLE_SELECTOR: &str = "#theme-toggle";

/// A parsed HTML page with named slots for the pieces the controller
/// touches: the root theme attribute and the toggle control.
pub struct PageDom {
    document: NodeRef,
}

impl PageDom {
    pub fn parse(html: &str) -> Self {
        Self {
            document: kuchiki::parse_html().one(html),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        Ok(Self::parse(&html))
    }

    fn root(&self) -> anyhow::Result<NodeDataRef<ElementData>> {
        self.document
            .select_first("html")
            .map_err(|()| anyhow::anyhow!("page has no root element"))
    }

    /// Current root theme, if the attribute is present and valid.
    pub fn theme(&self) -> Option<Theme> {
        let root = self.document.select_first("html").ok()?;
        let attrs = root.attributes.borrow();
        attrs.get(THEME_ATTR)?.parse().ok()
    }

    pub fn set_theme(&self, theme: Theme) -> anyhow::Result<()> {
        let root = self.root()?;
        root.attributes
            .borrow_mut()
            .insert(THEME_ATTR, theme.as_str().to_string());
        Ok(())
    }

    pub fn has_toggle_control(&self) -> bool {
        self.document.select_first(TOGGLE_SELECTOR).is_ok()
    }

    /// Replace the control's content with the icon glyph and set its
    /// accessibility label. Returns false when the control is absent.
    pub fn set_toggle_display(&self, display: &ToggleDisplay) -> bool {
        let Ok(control) = self.document.select_first(TOGGLE_SELECTOR) else {
            return false;
        };
        control
            .attributes
            .borrow_mut()
            .insert("aria-label", display.label.to_string());

        let node = control.as_node();
        let children: Vec<_> = node.children().collect();
        for child in children {
            child.detach();
        }
        node.append(NodeRef::new_text(display.icon));
        true
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.document.serialize(&mut out).context("serialize page")?;
        String::from_utf8(out).context("page not utf-8")
    }
}
