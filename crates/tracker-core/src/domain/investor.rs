use serde::{Deserialize, Serialize};

wire_enum! {
    /// Kind of investor.
    InvestorType, "investor type" {
        VentureCapital => "VENTURE_CAPITAL",
        Angel => "ANGEL",
        PrivateEquity => "PRIVATE_EQUITY",
        Corporate => "CORPORATE",
        Accelerator => "ACCELERATOR",
        Incubator => "INCUBATOR",
    }
}

/// Investor entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub investor_type: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Investor {
    pub fn kind(&self) -> Option<InvestorType> {
        self.investor_type.as_deref()?.parse().ok()
    }
}
