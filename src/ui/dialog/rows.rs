use crate::consent::CookieCategory;

/// One line group in the expanded view.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogRow<'a> {
    /// Toggle for an offered category.
    CategoryRow {
        category: &'a CookieCategory,
        agreed: bool,
        focused: bool,
    },
    /// Trailing placeholder. Not focusable, never toggles anything.
    AddCustomCategoryPrompt,
}

impl DialogRow<'_> {
    /// The `(category, agree)` pair this row reports when activated.
    pub fn toggle_request(&self) -> Option<(&CookieCategory, bool)> {
        match self {
            Self::CategoryRow {
                category, agreed, ..
            } => Some((*category, !*agreed)),
            Self::AddCustomCategoryPrompt => None,
        }
    }
}
