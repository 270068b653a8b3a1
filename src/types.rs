use serde::{Serialize, Deserialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub enum ProductFamily {
    Dimension,
    Preset,
}

impl ProductFamily {
    // Pages tag themselves via data-product; anything that is not the
    // dimension tag prices from the preset table.
    pub fn from_tag(tag: &str) -> ProductFamily {
        if tag == "dimension" { ProductFamily::Dimension } else { ProductFamily::Preset }
    }
}

#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProductIdentity {
    Scrims,
    BattleFlags,
    WarFlags,
    AmpFlags,
    Other,
}

impl ProductIdentity {
    pub fn from_tag(tag: &str) -> ProductIdentity {
        match tag {
            "scrims" => ProductIdentity::Scrims,
            "battleFlags" => ProductIdentity::BattleFlags,
            "warFlags" => ProductIdentity::WarFlags,
            "ampFlags" => ProductIdentity::AmpFlags,
            _ => ProductIdentity::Other,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PricingContext {
    pub family: ProductFamily,
    pub identity: ProductIdentity,
    pub width: f64,
    pub height: f64,
    pub preset_key: String,
    pub material: Option<String>,
    pub quantity: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Quote {
    pub unit_price: f64,
    pub total_price: f64,
    pub message: String,
    pub is_discounted: bool,
}

impl Quote {
    pub fn zero() -> Quote {
        Quote {
            unit_price: 0.0,
            total_price: 0.0,
            message: String::new(),
            is_discounted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_tag_parsing() {
        assert_eq!(ProductFamily::from_tag("dimension"), ProductFamily::Dimension);
        assert_eq!(ProductFamily::from_tag("preset"), ProductFamily::Preset);
        assert_eq!(ProductFamily::from_tag(""), ProductFamily::Preset);
    }

    #[test]
    fn identity_tag_parsing() {
        assert_eq!(ProductIdentity::from_tag("scrims"), ProductIdentity::Scrims);
        assert_eq!(ProductIdentity::from_tag("battleFlags"), ProductIdentity::BattleFlags);
        assert_eq!(ProductIdentity::from_tag("warFlags"), ProductIdentity::WarFlags);
        assert_eq!(ProductIdentity::from_tag("ampFlags"), ProductIdentity::AmpFlags);
        assert_eq!(ProductIdentity::from_tag("banners"), ProductIdentity::Other);
        assert_eq!(ProductIdentity::from_tag(""), ProductIdentity::Other);
    }
}
