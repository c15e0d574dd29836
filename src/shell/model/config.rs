use anyhow::Context;
use std::env;
use std::str::FromStr;

const DEFAULT_TABLE_ID: u8 = 1;
const DEFAULT_COVERS: u8 = 2;

/// Till configs
#[derive(Debug)]
pub(crate) struct TillConfig {
    pub table_id: u8,
    pub covers: u8,
    pub receipt: ReceiptFormat,
}

impl TillConfig {
    pub fn new(table_id: u8, covers: u8, receipt: ReceiptFormat) -> Self {
        Self {
            table_id,
            covers,
            receipt,
        }
    }

    /// Read the till settings from the environment, falling back to the
    /// compiled defaults for anything absent.
    pub fn from_env() -> anyhow::Result<Self> {
        let table_id = match env::var("TABLE_ID") {
            Ok(v) => v.parse().context("failed to parse TABLE_ID")?,
            Err(_) => DEFAULT_TABLE_ID,
        };
        let covers = match env::var("COVERS") {
            Ok(v) => v.parse().context("failed to parse COVERS")?,
            Err(_) => DEFAULT_COVERS,
        };
        let receipt = match env::var("RECEIPT_FORMAT") {
            Ok(v) => v
                .parse()
                .map_err(anyhow::Error::msg)
                .context("failed to parse RECEIPT_FORMAT")?,
            Err(_) => ReceiptFormat::default(),
        };
        Ok(Self::new(table_id, covers, receipt))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ReceiptFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReceiptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            s => Err(format!("Invalid ReceiptFormat: {s}")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn receipt_format_parses_known_values() {
        assert_eq!("text".parse::<ReceiptFormat>(), Ok(ReceiptFormat::Text));
        assert_eq!("json".parse::<ReceiptFormat>(), Ok(ReceiptFormat::Json));
        assert!("yaml".parse::<ReceiptFormat>().is_err());
    }

    #[test]
    fn receipt_format_defaults_to_text() {
        assert_eq!(ReceiptFormat::default(), ReceiptFormat::Text);
    }
}
