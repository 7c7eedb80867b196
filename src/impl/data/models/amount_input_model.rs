use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{domain::logic::utils::parse_amount, errors::InvalidAmount};

/// Amount typed into an allocation input. An empty input means zero.
#[derive(Debug)]
pub(crate) struct AmountInputModel(pub f64);
impl FromStr for AmountInputModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(AmountInputModel(0.0));
        }
        parse_amount(s)
            .map(AmountInputModel)
            .ok_or_else(|| InvalidAmount::new(s.trim()))
    }
}

impl Into<f64> for AmountInputModel {
    fn into(self) -> f64 {
        self.0
    }
}
