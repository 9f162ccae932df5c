use kuchiki::traits::TendrilSink as _;

use crate::page::{THEME_ATTR, TOGGLE_SELECTOR};
use crate::theme::Theme;

/// Check an emitted page against the expected theme: the root attribute
/// must match, and so must the toggle control's glyph and label when the
/// control is present.
pub fn assert_stamped(html: &str, expected: Theme) -> anyhow::Result<()> {
    let doc = kuchiki::parse_html().one(html);

    let root = doc
        .select_first("html")
        .map_err(|()| anyhow::anyhow!("consistency check failed: page has no root element"))?;
    let actual = root.attributes.borrow().get(THEME_ATTR).map(|s| s.to_string());
    if actual.as_deref() != Some(expected.as_str()) {
        anyhow::bail!(
            "consistency check failed: {} is {:?}, expected {:?}",
            THEME_ATTR,
            actual,
            expected.as_str()
        );
    }

    if let Ok(control) = doc.select_first(TOGGLE_SELECTOR) {
        let display = expected.display();
        let text = control.text_contents();
        if text.trim() != display.icon {
            anyhow::bail!(
                "consistency check failed: toggle control shows {:?}, expected {:?}",
                text.trim(),
                display.icon
            );
        }
        let label = control
            .attributes
            .borrow()
            .get("aria-label")
            .map(|s| s.to_string());
        if label.as_deref() != Some(display.label) {
            anyhow::bail!(
                "consistency check failed: toggle label is {:?}, expected {:?}",
                label,
                display.label
            );
        }
    }

    Ok(())
}
