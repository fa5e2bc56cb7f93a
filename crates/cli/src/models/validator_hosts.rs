use std::str::FromStr;

/// Validator host names as given on the command line or in `VALIDATORS`:
/// either a JSON array (`["v0","v1"]`) or a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorHosts(Vec<String>);

impl From<ValidatorHosts> for Vec<String> {
    fn from(hosts: ValidatorHosts) -> Self {
        hosts.0
    }
}

impl FromStr for ValidatorHosts {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('[') {
            return serde_json::from_str::<Vec<String>>(trimmed)
                .map(Self)
                .map_err(|e| format!("Invalid JSON list of validators `{s}`: {e}"));
        }
        Ok(Self(
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|host| !host.is_empty())
                .map(str::to_owned)
                .collect(),
        ))
    }
}
