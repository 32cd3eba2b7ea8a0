use serde::Serialize;
use std::fmt;

/// One possible decay: its products and branching ratio (fraction of decays)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayChannel {
    pub products: Vec<String>,
    #[serde(rename = "BR")]
    pub branching_ratio: Option<f64>,
}

impl DecayChannel {
    pub fn new<I, S>(products: I, branching_ratio: Option<f64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            products: products.into_iter().map(Into::into).collect(),
            branching_ratio,
        }
    }
}

impl fmt::Display for DecayChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.products.join(","))?;
        match self.branching_ratio {
            Some(br) => write!(f, " (BR={})", br),
            None => write!(f, " (BR=n/a)"),
        }
    }
}
