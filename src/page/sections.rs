//! Scroll-position helpers for the page chrome around the ornament: which
//! section the reader is in, and whether the navbar should condense.

/// Offset below the viewport top used to probe for the current section, so
/// a heading just scrolled under a fixed navbar already counts as entered.
pub const SECTION_PROBE_OFFSET: f64 = 150.0;

/// Scroll depth past which the navbar condenses.
pub const NAV_CONDENSE_THRESHOLD: f64 = 80.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section under the probe line, if any.
///
/// Extents are scanned in document order and the last hit wins, so an
/// overlapping later section shadows an earlier one.
pub fn active_section(scroll_y: f64, sections: &[SectionExtent]) -> Option<&str> {
    let probe = scroll_y + SECTION_PROBE_OFFSET;
    let mut hit = None;
    for section in sections {
        if probe >= section.top && probe < section.top + section.height {
            hit = Some(section.id.as_str());
        }
    }
    hit
}

pub fn nav_condensed(scroll_y: f64) -> bool {
    scroll_y > NAV_CONDENSE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionExtent> {
        let s = |id: &str, top: f64, height: f64| SectionExtent {
            id: id.to_string(),
            top,
            height,
        };
        vec![
            s("hero", 0.0, 600.0),
            s("services", 600.0, 900.0),
            s("contact", 1500.0, 500.0),
        ]
    }

    #[test]
    fn probe_offset_enters_sections_early() {
        let sections = sections();
        // 150px shy of the services top, the probe is already inside it.
        assert_eq!(active_section(450.0, &sections), Some("services"));
        assert_eq!(active_section(449.0, &sections), Some("hero"));
    }

    #[test]
    fn gaps_between_sections_resolve_to_none() {
        let s = vec![SectionExtent {
            id: "hero".to_string(),
            top: 0.0,
            height: 100.0,
        }];
        assert_eq!(active_section(500.0, &s), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let s = |id: &str, top: f64, height: f64| SectionExtent {
            id: id.to_string(),
            top,
            height,
        };
        let overlapping = vec![s("a", 0.0, 1000.0), s("b", 400.0, 200.0)];
        assert_eq!(active_section(300.0, &overlapping), Some("b"));
    }

    #[test]
    fn navbar_condenses_past_the_threshold() {
        assert!(!nav_condensed(80.0));
        assert!(nav_condensed(81.0));
    }
}
