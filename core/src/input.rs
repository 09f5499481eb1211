use anyhow::{anyhow, Result};

#[derive(Debug, PartialEq, Default)]
pub struct ParsedOverrides {
    pub values: Vec<(String, String)>,
    pub rejected: Vec<String>,
}

pub fn parse_overrides(args: &[String]) -> ParsedOverrides {
    let mut parsed = ParsedOverrides::default();

    for arg in args {
        match arg.split_once(':') {
            Some((key, value)) if !key.is_empty() => {
                parsed.values.push((key.trim().to_lowercase(), value.trim().to_string()));
            }
            _ => parsed.rejected.push(arg.clone()),
        }
    }

    parsed
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    let matches: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|c| c.starts_with(key))
        .collect();

    match matches.as_slice() {
        [only] => Ok(only.to_string()),
        [] => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = vec![
            "top:5".to_string(),
            "Skin:signal".to_string(),
            "loose".to_string(),
            ":7".to_string(),
        ];
        let parsed = parse_overrides(&args);
        assert_eq!(
            parsed.values,
            vec![
                ("top".to_string(), "5".to_string()),
                ("skin".to_string(), "signal".to_string()),
            ]
        );
        assert_eq!(parsed.rejected, vec!["loose".to_string(), ":7".to_string()]);
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["short_days", "summary_days", "skin", "long_days"];

        assert_eq!(expand_key("long", &candidates).unwrap(), "long_days");
        assert_eq!(expand_key("sh", &candidates).unwrap(), "short_days");
        assert_eq!(expand_key("skin", &candidates).unwrap(), "skin");

        // Ambiguous
        assert!(expand_key("s", &candidates).is_err());

        // Unknown
        assert!(expand_key("x", &candidates).is_err());
    }
}
