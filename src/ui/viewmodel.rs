//! Render-ready projection of application state.
//!
//! The renderer never inspects [`AppState`](crate::app::AppState) directly;
//! the state layer computes a [`UiViewModel`] and the renderer turns it into
//! text. Everything here is plain owned data: headings are final strings,
//! absent fields are already dropped, placeholder poster URLs are already
//! substituted, and card indices are already assigned. The renderer makes no
//! decisions beyond layout and color.

/// Complete description of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiViewModel {
    pub header: HeaderInfo,
    pub main: MainView,
    /// `None` when the active screen hides the top-movies panel.
    pub panel: Option<PanelView>,
    pub footer: FooterInfo,
}

/// Header bar content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, already padded with surrounding spaces.
    pub title: String,
}

/// Footer bar content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Key-hint line appropriate to the active screen.
    pub hints: String,
}

/// The main content region, one variant per screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainView {
    /// Home welcome copy.
    Welcome { title: String, subtitle: String },

    /// In-flight fetch indicator.
    Loading { message: String },

    /// Error banner with its final message.
    Banner { message: String },

    /// Result grid. `cards` may be empty; the heading still renders.
    Grid { heading: String, cards: Vec<CardItem> },

    /// Full detail layout.
    Detail(DetailView),
}

/// One renderable movie card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// 1-based activation number shown on the card.
    pub index: usize,
    pub title: String,
    pub year: String,
    /// IMDb rating, omitted from the card line when absent.
    pub rating: Option<String>,
    /// Poster URL, already defaulted to the placeholder when absent.
    pub poster: String,
    /// Ranking badge (`TOP 1`..`TOP 3`), panel cards only.
    pub badge: Option<String>,
}

/// Detail screen content with absent fields already dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// `"<Title> (<Year>)"`.
    pub headline: String,
    /// Poster URL, already defaulted to the placeholder when absent.
    pub poster: String,
    /// Meta badges (rating, rated, runtime, genre) that were present.
    pub meta: Vec<String>,
    /// Plot text, already defaulted when absent.
    pub plot: String,
    /// Labeled info rows; a row with no value is not included.
    pub rows: Vec<DetailRow>,
}

/// One labeled line on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Top-movies panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    /// Placeholder line shown instead of cards (loading, failed, empty).
    pub placeholder: Option<String>,
    pub cards: Vec<CardItem>,
}
