// src/fetch/urls.rs
use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::dates::SnapshotDate;

pub const DEFAULT_SITE: &str = "https://www.transfermarkt.com";
pub const DEFAULT_LEAGUE_SLUG: &str = "bundesliga";
pub const DEFAULT_COMPETITION: &str = "L1";

/// `{site}/{league_slug}/marktwerteverein/wettbewerb/{competition}`
pub fn competition_url(site: &str, league_slug: &str, competition: &str) -> Result<Url> {
    let raw = format!(
        "{}/{}/marktwerteverein/wettbewerb/{}",
        site.trim_end_matches('/'),
        league_slug.trim_matches('/'),
        competition.trim_matches('/'),
    );
    Url::parse(&raw).with_context(|| format!("parsing competition URL {}", raw))
}

/// A table URL must have a path we can append segments to.
pub fn check_base_url(url: &Url) -> Result<()> {
    if url.cannot_be_a_base() {
        return Err(anyhow!("{} cannot have path segments appended", url));
    }
    Ok(())
}

/// The table as of `date`: `{base}/stichtag/{YYYY-MM-DD}`.
pub fn snapshot_url(base: &Url, date: SnapshotDate) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("{} cannot have path segments appended", base))?
        .pop_if_empty()
        .push("stichtag")
        .push(&date.to_string());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_competition_url() {
        let url = competition_url(DEFAULT_SITE, DEFAULT_LEAGUE_SLUG, DEFAULT_COMPETITION).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.transfermarkt.com/bundesliga/marktwerteverein/wettbewerb/L1"
        );
    }

    #[test]
    fn test_snapshot_url_appends_date() {
        let base = competition_url("https://www.transfermarkt.com/", "premier-league", "GB1").unwrap();
        let date: SnapshotDate = "2024-10-15".parse().unwrap();
        assert_eq!(
            snapshot_url(&base, date).unwrap().as_str(),
            "https://www.transfermarkt.com/premier-league/marktwerteverein/wettbewerb/GB1/stichtag/2024-10-15"
        );
    }

    #[test]
    fn test_snapshot_url_with_trailing_slash() {
        let base = Url::parse("https://example.org/league/wettbewerb/L1/").unwrap();
        let date: SnapshotDate = "2025-01-01".parse().unwrap();
        assert_eq!(
            snapshot_url(&base, date).unwrap().as_str(),
            "https://example.org/league/wettbewerb/L1/stichtag/2025-01-01"
        );
    }

    #[test]
    fn test_opaque_base_is_rejected() {
        let base = Url::parse("mailto:scout@example.org").unwrap();
        let date: SnapshotDate = "2025-01-01".parse().unwrap();
        assert!(check_base_url(&base).is_err());
        assert!(snapshot_url(&base, date).is_err());
    }

    #[test]
    fn test_bad_site_is_an_error() {
        assert!(competition_url("not a url", "x", "y").is_err());
    }
}
