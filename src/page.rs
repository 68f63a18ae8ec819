use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::types::Field;

// Every site-specific control id and selector lives in this adapter. When the
// source site shuffles its markup, this is the one module that changes.
pub mod ids {
    pub const HOME_TEAM: &str = "ctl00_cphMain_hplHomeTeam";
    pub const AWAY_TEAM: &str = "ctl00_cphMain_hplAwayTeam";
    pub const HOME_SCORE: &str = "ctl00_cphMain_lblHomeScore";
    pub const AWAY_SCORE: &str = "ctl00_cphMain_lblAwayScore";
    pub const ROUND: &str = "ctl00_cphMain_lblOmgang";
    pub const LEAGUE: &str = "ctl00_cphMain_hplDivision";
    pub const VENUE: &str = "ctl00_cphMain_lblArena";
    pub const REFEREE: &str = "ctl00_cphMain_lblReferee";
    pub const MOTM_HOME: &str = "ctl00_cphMain_hplBestHome";
    pub const MOTM_AWAY: &str = "ctl00_cphMain_hplBestAway";
    pub const VIEWSTATE: &str = "__VIEWSTATE";
    pub const VIEWSTATE_GENERATOR: &str = "__VIEWSTATEGENERATOR";
    pub const EVENT_VALIDATION: &str = "__EVENTVALIDATION";
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

pub static HOME_LINEUP_ROWS: Lazy<Selector> = Lazy::new(|| {
    selector(
        "#ctl00_cphMain_dgHomeLineUp tr.ItemStyle, #ctl00_cphMain_dgHomeLineUp tr.AlternatingItemStyle",
    )
});
pub static AWAY_LINEUP_ROWS: Lazy<Selector> = Lazy::new(|| {
    selector(
        "#ctl00_cphMain_dgAwayLineUp tr.ItemStyle, #ctl00_cphMain_dgAwayLineUp tr.AlternatingItemStyle",
    )
});
pub static HOME_POSITION: Lazy<Selector> =
    Lazy::new(|| selector(r#"span[id*="lblHomepos"]"#));
pub static AWAY_POSITION: Lazy<Selector> =
    Lazy::new(|| selector(r#"span[id*="lblAwaypos"]"#));
pub static HOME_PLAYER_NAME: Lazy<Selector> =
    Lazy::new(|| selector(r#"a[id*="hplHomePlayerName"]"#));
pub static AWAY_PLAYER_NAME: Lazy<Selector> =
    Lazy::new(|| selector(r#"a[id*="hplAwayPlayerName"]"#));

pub static EVENT_ROWS: Lazy<Selector> = Lazy::new(|| selector("tr.ItemStyle2"));
pub static EVENT_MINUTE: Lazy<Selector> =
    Lazy::new(|| selector(r#"span[id*="lblEventTime"]"#));
pub static EVENT_DESC: Lazy<Selector> =
    Lazy::new(|| selector(r#"span[id*="lblEventDesc"]"#));

pub static STANDINGS_ROWS: Lazy<Selector> =
    Lazy::new(|| selector("#ctl00_cphMain_dgStandings tr"));
pub static UPCOMING_ROWS: Lazy<Selector> =
    Lazy::new(|| selector("#ctl00_cphMain_dgUpcoming tr"));
pub static STATS_ROWS: Lazy<Selector> =
    Lazy::new(|| selector("#ctl00_cphMain_dgStats tr"));
pub static GAME_LINKS: Lazy<Selector> =
    Lazy::new(|| selector(r#"a[href*="gameDetails.aspx?GameID="]"#));

pub static CELLS: Lazy<Selector> = Lazy::new(|| selector("td"));
pub static ANCHOR: Lazy<Selector> = Lazy::new(|| selector("a"));

pub static GAME_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"GameID=(\d+)").expect("static regex"));

/// One parsed HTML document from the source site.
pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    pub fn select<'a>(&'a self, sel: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.doc.select(sel)
    }

    fn by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        // Control ids are plain ASCII identifiers, safe to splice into a
        // selector without escaping.
        let sel = selector(&format!("#{id}"));
        self.doc.select(&sel).next()
    }

    /// Trimmed text of the element with the given id, or Unavailable.
    pub fn text_by_id(&self, id: &str) -> Field {
        Field::from_text(self.by_id(id).map(element_text))
    }

    /// An attribute of the element with the given id, or None.
    pub fn attr_by_id(&self, id: &str, attr: &str) -> Option<String> {
        self.by_id(id)?.value().attr(attr).map(str::to_string)
    }
}

/// Concatenated text of an element with runs of whitespace collapsed.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn find_in<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

pub fn cells_of(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.select(&CELLS).collect()
}

/// Nearest `<tr>` ancestor of an element.
pub fn parent_row(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors().find_map(|node| {
        let ancestor = ElementRef::wrap(node)?;
        (ancestor.value().name() == "tr").then_some(ancestor)
    })
}

pub fn game_id_in(text: &str) -> Option<String> {
    GAME_ID_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
}
