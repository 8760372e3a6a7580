//! HTML page parsing utilities

use crate::error::AdventError;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::cell::OnceCell;
use std::time::Duration;

/// One `article.day-desc` block of a puzzle page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDescription {
    /// Heading text with the surrounding `---` removed
    pub title: String,
    /// Inner HTML of the article
    pub html: String,
}

/// The personal stats table of `/{year}/leaderboard/self`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonalStats {
    /// Whitespace-separated cells: day, then time/rank/score for each part
    pub rows: Vec<Vec<String>>,
}

impl PersonalStats {
    /// Stars earned per day, indexed by `day - 1`
    pub fn stars_per_day(&self) -> [u8; 25] {
        let mut stars = [0u8; 25];
        for row in &self.rows {
            let Some(day) = row.first().and_then(|d| d.parse::<usize>().ok()) else {
                continue;
            };
            if !(1..=25).contains(&day) {
                continue;
            }
            let solved = |cells: Option<&[String]>| {
                cells.is_some_and(|cells| cells.iter().any(|cell| cell != "-"))
            };
            stars[day - 1] = if solved(row.get(4..7)) {
                2
            } else if solved(row.get(1..4)) {
                1
            } else {
                0
            };
        }
        stars
    }
}

/// Completion state of one day on a private leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarState {
    Both,
    FirstOnly,
    Unlocked,
    Locked,
}

/// One member row of a private leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// Rank label such as `1)`, absent for ties
    pub position: Option<String>,
    pub score: String,
    pub stars: Vec<StarState>,
    pub name: String,
    pub link: Option<String>,
}

/// A parsed private leaderboard page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateLeaderboard {
    pub owner: String,
    pub rows: Vec<LeaderboardRow>,
}

/// Parser for site HTML with cached regex patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct PageParser {
    throttle_regex: OnceCell<Regex>,
    title_regex: OnceCell<Regex>,
    owner_regex: OnceCell<Regex>,
    selectors: OnceCell<Selectors>,
}

#[derive(Clone, Debug)]
struct Selectors {
    main: Selector,
    day_desc: Selector,
    h2: Selector,
    paragraph: Selector,
    code: Selector,
    stats_pre: Selector,
    article_paragraph: Selector,
    user: Selector,
    board_row: Selector,
    board_position: Selector,
    board_name: Selector,
    board_name_link: Selector,
    span: Selector,
    private_view_link: Selector,
}

impl Selectors {
    fn new() -> Self {
        let parse = |s: &str| Selector::parse(s).expect("static selector should be valid");
        Self {
            main: parse("main"),
            day_desc: parse("article.day-desc"),
            h2: parse("h2"),
            paragraph: parse("p"),
            code: parse("code"),
            stats_pre: parse("article pre"),
            article_paragraph: parse("article p"),
            user: parse("div.user"),
            board_row: parse("div.privboard-row"),
            board_position: parse("span.privboard-position"),
            board_name: parse("span.privboard-name"),
            board_name_link: parse(".privboard-name a"),
            span: parse("span"),
            private_view_link: parse(r#"a[href*="/leaderboard/private/view"]"#),
        }
    }
}

impl PageParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            throttle_regex: OnceCell::new(),
            title_regex: OnceCell::new(),
            owner_regex: OnceCell::new(),
            selectors: OnceCell::new(),
        }
    }

    fn selectors(&self) -> &Selectors {
        self.selectors.get_or_init(Selectors::new)
    }

    /// Get or compile the throttle duration regex
    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex
            .get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").unwrap())
    }

    fn title_regex(&self) -> &Regex {
        self.title_regex
            .get_or_init(|| Regex::new(r"---\s*(.*?)\s*---").unwrap())
    }

    fn owner_regex(&self) -> &Regex {
        self.owner_regex
            .get_or_init(|| Regex::new(r"private leaderboard of (.*) for").unwrap())
    }

    /// Extract text content from the main element of an HTML document
    pub fn extract_main_text(&self, html: &str) -> Result<String, AdventError> {
        let document = Html::parse_document(html);
        let main_element = document
            .select(&self.selectors().main)
            .next()
            .ok_or_else(|| AdventError::HtmlParse("no <main> element".to_string()))?;

        Ok(main_element.text().collect::<String>())
    }

    /// Extract the rate-limit wait from a submission response
    pub fn throttle_wait(&self, html: &str) -> Option<Duration> {
        let text = self
            .extract_main_text(html)
            .unwrap_or_else(|_| html.to_string());
        let captures = self.throttle_regex().captures(&text)?;
        let duration_str = captures.get(1)?.as_str();
        humantime::parse_duration(duration_str).ok()
    }

    /// Strip the `--- ... ---` decoration from a puzzle heading
    pub fn clean_title(&self, heading: &str) -> String {
        self.title_regex()
            .captures(heading)
            .and_then(|captures| captures.get(1))
            .map_or_else(|| heading.trim().to_string(), |m| m.as_str().to_string())
    }

    /// Extract every puzzle description article from a puzzle page
    pub fn day_descriptions(&self, html: &str) -> Vec<DayDescription> {
        let document = Html::parse_document(html);
        let selectors = self.selectors();
        document
            .select(&selectors.day_desc)
            .map(|article| {
                let heading = article
                    .select(&selectors.h2)
                    .next()
                    .map(|h2| h2.text().collect::<String>())
                    .unwrap_or_default();
                DayDescription {
                    title: self.clean_title(&heading),
                    html: article.inner_html(),
                }
            })
            .collect()
    }

    /// Extract the answers shown under "Your puzzle answer was"
    pub fn puzzle_answers(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let selectors = self.selectors();
        document
            .select(&selectors.paragraph)
            .filter(|p| p.text().collect::<String>().contains("Your puzzle answer was"))
            .filter_map(|p| p.select(&selectors.code).next())
            .map(|code| code.text().collect::<String>())
            .collect()
    }

    /// Parse the personal stats table
    pub fn personal_stats(&self, html: &str) -> Result<PersonalStats, AdventError> {
        let document = Html::parse_document(html);
        let table = document
            .select(&self.selectors().stats_pre)
            .next()
            .ok_or_else(|| AdventError::HtmlParse("no stats table".to_string()))?
            .text()
            .collect::<String>();

        let lines: Vec<&str> = table.split('\n').collect();
        let rows = lines
            .get(2..lines.len().saturating_sub(1))
            .unwrap_or_default()
            .iter()
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .collect();

        Ok(PersonalStats { rows })
    }

    /// Extract private leaderboard ids linked from the leaderboard index page
    pub fn private_leaderboard_ids(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut ids: Vec<String> = document
            .select(&self.selectors().private_view_link)
            .filter_map(|link| link.value().attr("href"))
            .filter_map(|href| href.trim_end_matches('/').rsplit('/').next())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        ids.dedup();
        ids
    }

    /// Parse a private leaderboard page
    pub fn private_leaderboard(&self, html: &str) -> Result<PrivateLeaderboard, AdventError> {
        let document = Html::parse_document(html);
        let selectors = self.selectors();

        let intro = document
            .select(&selectors.article_paragraph)
            .next()
            .map(|p| p.text().collect::<String>())
            .ok_or_else(|| AdventError::HtmlParse("no leaderboard intro".to_string()))?;

        let owner = if intro.contains("This is your") {
            document
                .select(&selectors.user)
                .next()
                .and_then(first_own_text)
                .unwrap_or_default()
        } else {
            self.owner_regex()
                .captures(&intro)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        let rows = document
            .select(&selectors.board_row)
            .skip(1)
            .map(|row| self.leaderboard_row(row))
            .collect();

        Ok(PrivateLeaderboard { owner, rows })
    }

    fn leaderboard_row(&self, row: ElementRef<'_>) -> LeaderboardRow {
        let selectors = self.selectors();

        let position = row
            .select(&selectors.board_position)
            .next()
            .map(|span| span.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty());

        let stars = row
            .select(&selectors.span)
            .filter_map(|span| {
                span.value()
                    .classes()
                    .find_map(|class| class.strip_prefix("privboard-star-"))
                    .and_then(star_state)
            })
            .collect();

        let name = row
            .select(&selectors.board_name)
            .next()
            .map(|span| span.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let link = row
            .select(&selectors.board_name_link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        LeaderboardRow {
            position,
            score: first_own_text(row).unwrap_or_default(),
            stars,
            name,
            link,
        }
    }
}

impl Default for PageParser {
    fn default() -> Self {
        Self::new()
    }
}

/// First non-blank text node that is a direct child of `element`
fn first_own_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

fn star_state(suffix: &str) -> Option<StarState> {
    // `unlocked` must be checked before `locked`
    if suffix.contains("both") {
        Some(StarState::Both)
    } else if suffix.contains("firstonly") {
        Some(StarState::FirstOnly)
    } else if suffix.contains("unlocked") {
        Some(StarState::Unlocked)
    } else if suffix.contains("locked") {
        Some(StarState::Locked)
    } else {
        None
    }
}
