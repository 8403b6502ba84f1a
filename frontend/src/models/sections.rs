pub const HEADER_SCROLL_Y: f64 = 50.0;
pub const SCROLL_UP_Y: f64 = 350.0;
/// Height of the fixed header; sections count as reached this much early.
pub const SECTION_OFFSET: f64 = 58.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.top - SECTION_OFFSET && scroll_y < self.top + self.height
    }
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y >= HEADER_SCROLL_Y
}

pub fn show_scroll_up(scroll_y: f64) -> bool {
    scroll_y >= SCROLL_UP_Y
}

/// Ids of every section the scroll offset currently falls in. Overlapping
/// sections are all reported.
pub fn active_sections(scroll_y: f64, sections: &[SectionBounds]) -> Vec<String> {
    sections
        .iter()
        .filter(|section| section.contains(scroll_y))
        .map(|section| section.id.clone())
        .collect()
}
