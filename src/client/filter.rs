//! Category filtering for project, article and gallery cards.

/// Filter value that shows every card
pub const FILTER_ALL: &str = "all";

/// Animation applied to cards as they are shown
pub const FADE_IN: &str = "fadeIn 0.5s ease-in-out";

/// CSS `display` used for a shown card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Flex,
}

/// The three independent filter instances on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Digital work page
    Projects,
    /// Articles page
    Articles,
    /// Analog art page
    Gallery,
}

impl FilterKind {
    pub fn button_selector(self) -> &'static str {
        match self {
            FilterKind::Projects => ".projects-filter .filter-btn",
            FilterKind::Articles => ".articles-filter .filter-btn",
            FilterKind::Gallery => ".category-btn",
        }
    }

    pub fn card_selector(self) -> &'static str {
        match self {
            FilterKind::Projects => ".project-card",
            FilterKind::Articles => ".article-card",
            FilterKind::Gallery => ".gallery-item",
        }
    }

    /// Attribute on the button holding the selected filter value
    pub fn button_attribute(self) -> &'static str {
        match self {
            FilterKind::Gallery => "data-category",
            _ => "data-filter",
        }
    }

    pub fn display(self) -> Display {
        match self {
            FilterKind::Articles => Display::Flex,
            _ => Display::Block,
        }
    }
}

/// Visibility of one card after a filter click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    /// Untouched since page load
    Initial,
    Shown { display: Display, animation: &'static str },
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Value of the card's `data-category`
    pub category: String,
    pub state: CardState,
}

/// One filter bar and the cards it controls.
#[derive(Debug, Clone)]
pub struct FilterGroup {
    kind: FilterKind,
    /// Filter value of each button, in document order
    buttons: Vec<String>,
    active: Option<usize>,
    cards: Vec<Card>,
}

impl FilterGroup {
    pub fn new<B, C>(kind: FilterKind, buttons: B, categories: C) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            kind,
            buttons: buttons.into_iter().map(Into::into).collect(),
            active: None,
            cards: categories
                .into_iter()
                .map(|c| Card { category: c.into(), state: CardState::Initial })
                .collect(),
        }
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Handles a click on the button at `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        let Some(filter) = self.buttons.get(index) else {
            return;
        };
        self.active = Some(index);

        let display = self.kind.display();
        for card in &mut self.cards {
            card.state = if filter == FILTER_ALL || card.category == *filter {
                CardState::Shown { display, animation: FADE_IN }
            } else {
                CardState::Hidden
            };
        }
    }

    /// Categories of the cards currently visible, in document order.
    pub fn visible_categories(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| c.state != CardState::Hidden)
            .map(|c| c.category.as_str())
            .collect()
    }
}
