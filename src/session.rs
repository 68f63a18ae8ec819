use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;

use crate::page::{Page, ids};

const SITE_BASE: &str = "https://www.xperteleven.com";
const REQUEST_TIMEOUT_SECS: u64 = 15;

pub fn login_url() -> String {
    format!("{SITE_BASE}/front_new3.aspx")
}

pub fn match_url(game_id: &str) -> String {
    format!("{SITE_BASE}/gameDetails.aspx?GameID={game_id}&dh=2")
}

pub fn stats_url(league_id: u32, sel: &str, lnr: u32) -> String {
    format!("{SITE_BASE}/stats.aspx?Lid={league_id}&Sel={sel}&Lnr={lnr}&Period=S&dh=2")
}

/// A logged-in scraping session against the source site. The login form is
/// ASP.NET: hidden anti-forgery fields must be scraped from the login page
/// and posted back with the credentials.
pub struct Session {
    client: Client,
}

impl Session {
    pub fn login(username: &str, password: &str) -> Result<Session> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build session client")?;

        let login_page = client
            .get(login_url())
            .send()
            .context("login page request failed")?
            .text()
            .context("login page body unreadable")?;
        let page = Page::parse(&login_page);

        let viewstate = hidden_field(&page, ids::VIEWSTATE)?;
        let viewstate_generator = hidden_field(&page, ids::VIEWSTATE_GENERATOR)?;
        let event_validation = hidden_field(&page, ids::EVENT_VALIDATION)?;

        let form = [
            ("__VIEWSTATE", viewstate.as_str()),
            ("__VIEWSTATEGENERATOR", viewstate_generator.as_str()),
            ("__EVENTVALIDATION", event_validation.as_str()),
            (
                "ctl00$cphMain$FrontControl$lwLogin$tbUsername",
                username,
            ),
            (
                "ctl00$cphMain$FrontControl$lwLogin$tbPassword",
                password,
            ),
            ("ctl00$cphMain$FrontControl$lwLogin$btnLogin", "Login"),
        ];

        let response = client
            .post(login_url())
            .form(&form)
            .send()
            .context("login post failed")?
            .text()
            .context("login response unreadable")?;
        if !response.contains("Logout") {
            bail!("login rejected by site");
        }

        Ok(Session { client })
    }

    /// Fetch one page as HTML; non-success statuses are errors.
    pub fn get_html(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("page request failed: {url}"))?;
        let status = response.status();
        if !status.is_success() {
            bail!("page request returned {status}: {url}");
        }
        response.text().context("page body unreadable")
    }

    pub fn get_page(&self, url: &str) -> Result<Page> {
        Ok(Page::parse(&self.get_html(url)?))
    }
}

fn hidden_field(page: &Page, id: &str) -> Result<String> {
    page.attr_by_id(id, "value")
        .with_context(|| format!("login form hidden field missing: {id}"))
}

/// League result listings are public; no login needed to list game ids.
pub fn fetch_public_page(url: &str) -> Result<Page> {
    let response = crate::http_client::http_client()?
        .get(url)
        .send()
        .with_context(|| format!("page request failed: {url}"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("page request returned {status}: {url}");
    }
    let body = response.text().context("page body unreadable")?;
    Ok(Page::parse(&body))
}
