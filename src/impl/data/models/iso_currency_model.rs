use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde::Deserialize;

use crate::errors::InvalidIsoCurrencyCode;

#[derive(Debug)]
pub(crate) struct IsoCurrencyModel(Currency);
impl FromStr for IsoCurrencyModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(&s.trim().to_uppercase())
            .map(IsoCurrencyModel)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(s))
    }
}
impl<'de> Deserialize<'de> for IsoCurrencyModel {
    fn deserialize<D>(deserializer: D) -> Result<IsoCurrencyModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IsoCurrencyModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Into<Currency> for IsoCurrencyModel {
    fn into(self) -> Currency {
        self.0
    }
}
