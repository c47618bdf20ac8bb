// Runtime configuration read from the canvas element's `data-*` attributes.
//
// ```html
// <canvas id="gallery-canvas"
//         data-api-base="/api" data-portfolio-id="3" data-portfolio-title="Studio"
//         data-session-id="8" data-user-id="21" data-fly-to-on-select="true"></canvas>
// ```

use anyhow::{anyhow, bail, Context};
use gallery_core::SessionContext;

pub const DEFAULT_PORTFOLIO_TITLE: &str = "Untitled portfolio";

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// tRPC endpoint root without a trailing slash.
    pub api_base: String,
    pub portfolio_id: i64,
    pub portfolio_title: String,
    pub session: Option<SessionContext>,
    pub fly_to_on_select: bool,
}

impl ViewerConfig {
    /// Build from a dataset-style lookup (camelCase keys, as `HTMLElement.dataset`).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_base = get("apiBase")
            .map(|s| s.trim().trim_end_matches('/').to_owned())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("missing data-api-base"))?;
        let portfolio_id = get("portfolioId")
            .ok_or_else(|| anyhow!("missing data-portfolio-id"))
            .and_then(|s| parse_id("data-portfolio-id", &s))?;
        let portfolio_title = get("portfolioTitle")
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_PORTFOLIO_TITLE.to_owned());

        let session = match (get("sessionId"), get("userId")) {
            (Some(s), Some(u)) => Some(SessionContext {
                session_id: parse_id("data-session-id", &s)?,
                user_id: parse_id("data-user-id", &u)?,
            }),
            (None, None) => None,
            _ => bail!("data-session-id and data-user-id must be given together"),
        };

        let fly_to_on_select = match get("flyToOnSelect") {
            Some(v) => parse_flag("data-fly-to-on-select", &v)?,
            None => true,
        };

        Ok(Self {
            api_base,
            portfolio_id,
            portfolio_title,
            session,
            fly_to_on_select,
        })
    }
}

fn parse_id(name: &str, raw: &str) -> anyhow::Result<i64> {
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("{name} is not an integer: {raw:?}"))
}

fn parse_flag(name: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => bail!("{name} is not a boolean: {raw:?}"),
    }
}
