use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use products_hr::{MAX_CAPACITY, MIN_CAPACITY};

/// How option 3 renders the roster.
#[derive(ValueEnum, Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DisplayFormat {
    #[default]
    Table,
    Json,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterConfig {
    pub capacity: Option<usize>,
    pub format: DisplayFormat,
}

impl RosterConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let capacity = match non_blank(lookup("ROSTER_CAPACITY")) {
            Some(raw) => Some(parse_capacity(&raw).context("invalid ROSTER_CAPACITY")?),
            None => None,
        };

        let format = match non_blank(lookup("ROSTER_FORMAT")) {
            Some(raw) => DisplayFormat::from_str(&raw, true)
                .map_err(|_| anyhow!("invalid ROSTER_FORMAT {raw:?}; expected table or json"))?,
            None => DisplayFormat::default(),
        };

        Ok(Self { capacity, format })
    }
}

/// Parse a roster capacity and check it against the allowed range.
pub fn parse_capacity(raw: &str) -> Result<usize> {
    let capacity: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{raw:?} is not a whole number"))?;
    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
        return Err(anyhow!(
            "capacity must be between {MIN_CAPACITY} and {MAX_CAPACITY}, got {capacity}"
        ));
    }
    Ok(capacity)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = RosterConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn reads_capacity_and_format() {
        let config =
            RosterConfig::from_lookup(lookup(&[("ROSTER_CAPACITY", " 4 "), ("ROSTER_FORMAT", "JSON")]))
                .unwrap();
        assert_eq!(config.capacity, Some(4));
        assert_eq!(config.format, DisplayFormat::Json);
    }

    #[test]
    fn rejects_out_of_range_capacity() {
        let err = RosterConfig::from_lookup(lookup(&[("ROSTER_CAPACITY", "9")])).unwrap_err();
        assert!(format!("{err:#}").contains("between 2 and 5"));
        assert!(parse_capacity("two").is_err());
        assert_eq!(parse_capacity("2").unwrap(), 2);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(RosterConfig::from_lookup(lookup(&[("ROSTER_FORMAT", "xml")])).is_err());
    }
}
