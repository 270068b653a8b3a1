use wasm_bindgen::prelude::*;
use crate::constraints;
use crate::quote::compute_quote;
use crate::types::{PricingContext, ProductFamily, ProductIdentity};

#[wasm_bindgen]
pub struct PriceEngine {
    pub(crate) family: ProductFamily,
    pub(crate) identity: ProductIdentity,
    pub(crate) quantity: u32,
}

#[wasm_bindgen]
impl PriceEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(family_tag: &str, identity_tag: &str) -> PriceEngine {
        console_error_panic_hook::set_once();

        PriceEngine {
            family: ProductFamily::from_tag(family_tag),
            identity: ProductIdentity::from_tag(identity_tag),
            quantity: 1,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn adjust_quantity(&mut self, delta: i32) -> u32 {
        let next = self.quantity as i64 + delta as i64;
        self.quantity = next.max(1) as u32;
        self.quantity
    }

    pub fn max_allowed_height(&self, width: f64) -> Option<f64> {
        constraints::max_allowed_height(self.identity, width)
    }

    pub fn quote(&self, width: f64, height: f64, preset_key: &str, material: Option<String>) -> JsValue {
        let quote = compute_quote(&self.context(width, height, preset_key, material));
        serde_wasm_bindgen::to_value(&quote).unwrap_or(JsValue::NULL)
    }

    pub fn quote_json(&self, width: f64, height: f64, preset_key: &str, material: Option<String>) -> String {
        let quote = compute_quote(&self.context(width, height, preset_key, material));
        serde_json::to_string(&quote).unwrap_or_else(|_| "{}".to_string())
    }

    pub(crate) fn context(&self, width: f64, height: f64, preset_key: &str, material: Option<String>) -> PricingContext {
        PricingContext {
            family: self.family,
            identity: self.identity,
            width,
            height,
            preset_key: preset_key.to_string(),
            material,
            quantity: self.quantity,
        }
    }
}
