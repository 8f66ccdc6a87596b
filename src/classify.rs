//! Field-name classification tables.
//!
//! Three curated sets decide which bucket a field belongs in. The sets are
//! built once and shared read-only for the whole run. They are kept mutually
//! exclusive by hand; nothing enforces that at lint time.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Presentational/layout property names that belong in `style`.
    pub static ref STYLE_NAMES: HashSet<&'static str> = {
        let mut s = HashSet::new();
        // Box model
        s.insert("width");
        s.insert("height");
        s.insert("minWidth");
        s.insert("minHeight");
        s.insert("maxWidth");
        s.insert("maxHeight");
        s.insert("margin");
        s.insert("marginTop");
        s.insert("marginRight");
        s.insert("marginBottom");
        s.insert("marginLeft");
        s.insert("padding");
        s.insert("paddingTop");
        s.insert("paddingRight");
        s.insert("paddingBottom");
        s.insert("paddingLeft");
        s.insert("border");
        s.insert("borderWidth");
        s.insert("borderColor");
        s.insert("borderStyle");
        s.insert("borderRadius");
        s.insert("boxShadow");
        s.insert("boxSizing");

        // Positioning
        s.insert("display");
        s.insert("position");
        s.insert("top");
        s.insert("right");
        s.insert("bottom");
        s.insert("left");
        s.insert("zIndex");
        s.insert("overflow");
        s.insert("overflowX");
        s.insert("overflowY");
        s.insert("float");
        s.insert("clear");

        // Flex / grid
        s.insert("flex");
        s.insert("flexDirection");
        s.insert("flexWrap");
        s.insert("flexGrow");
        s.insert("flexShrink");
        s.insert("alignItems");
        s.insert("alignSelf");
        s.insert("alignContent");
        s.insert("justifyContent");
        s.insert("gap");
        s.insert("gridTemplateColumns");
        s.insert("gridTemplateRows");
        s.insert("gridColumn");
        s.insert("gridRow");

        // Typography
        s.insert("color");
        s.insert("fontSize");
        s.insert("fontFamily");
        s.insert("fontWeight");
        s.insert("fontStyle");
        s.insert("lineHeight");
        s.insert("letterSpacing");
        s.insert("textAlign");
        s.insert("textDecoration");
        s.insert("textTransform");
        s.insert("whiteSpace");
        s.insert("wordBreak");

        // Background & effects
        s.insert("background");
        s.insert("backgroundColor");
        s.insert("backgroundImage");
        s.insert("backgroundSize");
        s.insert("backgroundPosition");
        s.insert("opacity");
        s.insert("visibility");
        s.insert("cursor");
        s.insert("transform");
        s.insert("transition");
        s.insert("animation");
        s
    };

    /// HTML-like attribute names that belong in `props`.
    pub static ref ATTRIBUTE_NAMES: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("id");
        s.insert("class");
        s.insert("title");
        s.insert("lang");
        s.insert("dir");
        s.insert("hidden");
        s.insert("tabindex");
        s.insert("role");
        s.insert("draggable");
        s.insert("contenteditable");
        s.insert("spellcheck");

        // Links & media
        s.insert("href");
        s.insert("src");
        s.insert("srcset");
        s.insert("alt");
        s.insert("target");
        s.insert("rel");
        s.insert("download");
        s.insert("loading");

        // Forms
        s.insert("type");
        s.insert("name");
        s.insert("value");
        s.insert("placeholder");
        s.insert("disabled");
        s.insert("checked");
        s.insert("selected");
        s.insert("readonly");
        s.insert("required");
        s.insert("multiple");
        s.insert("min");
        s.insert("max");
        s.insert("step");
        s.insert("maxlength");
        s.insert("minlength");
        s.insert("pattern");
        s.insert("autocomplete");
        s.insert("autofocus");
        s.insert("accept");
        s.insert("action");
        s.insert("method");
        s.insert("for");
        s.insert("form");
        s.insert("rows");
        s.insert("cols");
        s.insert("wrap");
        s
    };

    /// Event-handler names that belong in `on` (and are misplaced in `props`).
    pub static ref EVENT_NAMES: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("onClick");
        s.insert("onDblClick");
        s.insert("onMouseDown");
        s.insert("onMouseUp");
        s.insert("onMouseEnter");
        s.insert("onMouseLeave");
        s.insert("onMouseMove");
        s.insert("onMouseOver");
        s.insert("onMouseOut");
        s.insert("onContextMenu");
        s.insert("onKeyDown");
        s.insert("onKeyUp");
        s.insert("onKeyPress");
        s.insert("onChange");
        s.insert("onInput");
        s.insert("onSubmit");
        s.insert("onReset");
        s.insert("onFocus");
        s.insert("onBlur");
        s.insert("onScroll");
        s.insert("onWheel");
        s.insert("onLoad");
        s.insert("onError");
        s.insert("onDragStart");
        s.insert("onDrag");
        s.insert("onDragEnd");
        s.insert("onDragOver");
        s.insert("onDrop");
        s.insert("onTouchStart");
        s.insert("onTouchMove");
        s.insert("onTouchEnd");
        s
    };
}

/// Lower-cased handler names accepted in `on` even though they do not start
/// with the literal substring `on`.
pub const ON_NAME_EXCEPTIONS: &[&str] = &["mouseenter", "mouseleave", "click", "keydown", "keyup"];

pub fn is_style_name(name: &str) -> bool {
    STYLE_NAMES.contains(name)
}

pub fn is_attribute_name(name: &str) -> bool {
    ATTRIBUTE_NAMES.contains(name)
}

pub fn is_event_name(name: &str) -> bool {
    EVENT_NAMES.contains(name)
}

/// `data-*` and `aria-*` names classify as attributes regardless of the
/// literal sets. Evaluated independently wherever attribute-ness matters.
pub fn is_prefixed_attribute(name: &str) -> bool {
    name.starts_with("data-") || name.starts_with("aria-")
}

/// Deny-by-default heuristic for the `on` bucket: anything not starting with
/// `on` and not in the exception list is suspicious.
pub fn looks_like_event_name(name: &str) -> bool {
    name.starts_with("on") || ON_NAME_EXCEPTIONS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_membership() {
        assert!(is_style_name("width"));
        assert!(is_style_name("backgroundColor"));
        assert!(!is_style_name("id"));
        assert!(!is_style_name("onClick"));
    }

    #[test]
    fn test_attribute_membership() {
        assert!(is_attribute_name("id"));
        assert!(is_attribute_name("placeholder"));
        assert!(!is_attribute_name("color"));
    }

    #[test]
    fn test_event_membership() {
        assert!(is_event_name("onClick"));
        assert!(is_event_name("onKeyDown"));
        assert!(!is_event_name("click"));
        assert!(!is_event_name("href"));
    }

    #[test]
    fn test_prefixed_attributes() {
        assert!(is_prefixed_attribute("data-testid"));
        assert!(is_prefixed_attribute("aria-label"));
        assert!(!is_prefixed_attribute("database"));
        assert!(!is_prefixed_attribute("arial"));
    }

    #[test]
    fn test_on_heuristic() {
        assert!(looks_like_event_name("onClick"));
        assert!(looks_like_event_name("online")); // starts with "on", accepted
        assert!(looks_like_event_name("click"));
        assert!(looks_like_event_name("mouseenter"));
        assert!(!looks_like_event_name("id"));
        assert!(!looks_like_event_name("handler"));
    }

    // Curation guard: the three tables must stay pairwise disjoint. The
    // linter itself never checks this at runtime.
    #[test]
    fn test_tables_are_disjoint() {
        for name in STYLE_NAMES.iter() {
            assert!(!ATTRIBUTE_NAMES.contains(name), "{name} in two tables");
            assert!(!EVENT_NAMES.contains(name), "{name} in two tables");
        }
        for name in ATTRIBUTE_NAMES.iter() {
            assert!(!EVENT_NAMES.contains(name), "{name} in two tables");
        }
    }
}
