use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlInputElement, HtmlSelectElement};
use crate::types::Quote;

#[derive(Clone, Debug)]
pub struct PageInputs {
    pub width: f64,
    pub height: f64,
    pub preset_key: String,
    pub material: Option<String>,
}

// Seam between the pricing pass and the page, so the pass can run against
// a fake page off the browser.
pub trait CalculatorPage {
    fn read_inputs(&self) -> PageInputs;
    fn set_height_limit(&self, max_height: f64);
    fn set_quantity_display(&self, quantity: u32);
    fn render(&self, quote: &Quote);
}

pub fn format_price(value: f64) -> String {
    format!("${}", value.round() as i64)
}

pub struct DomPage {
    width: Option<HtmlInputElement>,
    height: Option<HtmlInputElement>,
    size: Option<Element>,
    material: Option<Element>,
    qty_display: Option<Element>,
    price_each: Option<Element>,
    total_price: Option<Element>,
    discount_tag: Option<Element>,
}

impl DomPage {
    // Every binding is optional; pages only carry the controls their
    // product family needs.
    pub fn bind(document: &Document) -> DomPage {
        DomPage {
            width: input_by_id(document, "widthInput"),
            height: input_by_id(document, "heightInput"),
            size: document.get_element_by_id("sizeSelect"),
            material: document.get_element_by_id("materialInput"),
            qty_display: document.get_element_by_id("qtyDisplay"),
            price_each: document.get_element_by_id("priceEach"),
            total_price: document.get_element_by_id("totalPrice"),
            discount_tag: document.get_element_by_id("discountTag"),
        }
    }

    pub(crate) fn input_targets(&self) -> Vec<EventTarget> {
        let mut targets = Vec::new();
        if let Some(el) = &self.width { targets.push(el.clone().into()); }
        if let Some(el) = &self.height { targets.push(el.clone().into()); }
        if let Some(el) = &self.size { targets.push(el.clone().into()); }
        if let Some(el) = &self.material { targets.push(el.clone().into()); }
        targets
    }
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

// The size and material controls may be <select> or <input> depending on
// the page.
fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

// Non-numeric input coerces to zero rather than erroring.
fn numeric_value(input: &Option<HtmlInputElement>) -> f64 {
    input
        .as_ref()
        .map(|el| el.value().trim().parse::<f64>().unwrap_or(0.0))
        .unwrap_or(0.0)
}

impl CalculatorPage for DomPage {
    fn read_inputs(&self) -> PageInputs {
        PageInputs {
            width: numeric_value(&self.width),
            height: numeric_value(&self.height),
            preset_key: self.size.as_ref().and_then(control_value).unwrap_or_default(),
            material: self.material.as_ref().and_then(control_value),
        }
    }

    fn set_height_limit(&self, max_height: f64) {
        if let Some(el) = &self.height {
            let _ = el.set_attribute("max", &max_height.to_string());
        }
    }

    fn set_quantity_display(&self, quantity: u32) {
        if let Some(el) = &self.qty_display {
            el.set_text_content(Some(&quantity.to_string()));
        }
    }

    fn render(&self, quote: &Quote) {
        if let Some(el) = &self.price_each {
            el.set_text_content(Some(&format_price(quote.unit_price)));
        }
        if let Some(el) = &self.total_price {
            el.set_text_content(Some(&format_price(quote.total_price)));
        }
        if let Some(tag) = &self.discount_tag {
            if quote.is_discounted {
                tag.set_text_content(Some(&quote.message));
                let _ = tag.class_list().add_1("visible");
            } else {
                // Only visibility toggles; stale message text stays in the
                // hidden element.
                let _ = tag.class_list().remove_1("visible");
            }
        }
    }
}
