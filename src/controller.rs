use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::constraints;
use crate::dom::{CalculatorPage, DomPage};
use crate::engine::PriceEngine;
use crate::presets;
use crate::quote::compute_quote;
use crate::types::ProductFamily;

#[wasm_bindgen]
pub struct Calculator {
    engine: Rc<RefCell<PriceEngine>>,
    page: Rc<DomPage>,
}

#[wasm_bindgen]
impl Calculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Calculator, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let family_tag = body.get_attribute("data-product").unwrap_or_default();
        let identity_tag = body.get_attribute("data-name").unwrap_or_default();

        Ok(Calculator {
            engine: Rc::new(RefCell::new(PriceEngine::new(&family_tag, &identity_tag))),
            page: Rc::new(DomPage::bind(&document)),
        })
    }

    // Attach a listener to every present form control and run the first
    // pass so the page never shows an unpriced state.
    pub fn init(&self) -> Result<(), JsValue> {
        for target in self.page.input_targets() {
            let engine = self.engine.clone();
            let page = self.page.clone();
            let callback = Closure::<dyn FnMut()>::new(move || recompute(&engine, &*page));
            let listener: &js_sys::Function = callback.as_ref().unchecked_ref();
            target.add_event_listener_with_callback("input", listener)?;
            callback.forget();
        }
        self.page.set_quantity_display(self.engine.borrow().quantity);
        recompute(&self.engine, &*self.page);
        Ok(())
    }

    pub fn adjust_qty(&self, delta: i32) {
        self.engine.borrow_mut().adjust_quantity(delta);
        self.page.set_quantity_display(self.engine.borrow().quantity);
        recompute(&self.engine, &*self.page);
    }

    pub fn recalculate(&self) {
        recompute(&self.engine, &*self.page);
    }
}

// One synchronous pass: read, propagate the height bound, price, render.
pub(crate) fn recompute<P: CalculatorPage>(engine: &RefCell<PriceEngine>, page: &P) {
    let engine = engine.borrow();
    let inputs = page.read_inputs();

    if let Some(max_height) = constraints::max_allowed_height(engine.identity, inputs.width) {
        page.set_height_limit(max_height);
    }

    let ctx = engine.context(inputs.width, inputs.height, &inputs.preset_key, inputs.material);
    if ctx.family == ProductFamily::Preset && presets::lookup(&ctx.preset_key).is_none() {
        warn_unknown_preset(&ctx.preset_key);
    }

    page.render(&compute_quote(&ctx));
}

fn warn_unknown_preset(key: &str) {
    web_sys::console::warn_1(&format!("price-engine: unknown preset size key {:?}", key).into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageInputs;
    use crate::types::Quote;
    use approx::assert_relative_eq;

    struct FakePage {
        inputs: PageInputs,
        events: RefCell<Vec<String>>,
        rendered: RefCell<Vec<Quote>>,
    }

    impl FakePage {
        fn new(inputs: PageInputs) -> FakePage {
            FakePage {
                inputs,
                events: RefCell::new(Vec::new()),
                rendered: RefCell::new(Vec::new()),
            }
        }
    }

    impl CalculatorPage for FakePage {
        fn read_inputs(&self) -> PageInputs {
            self.events.borrow_mut().push("read".to_string());
            self.inputs.clone()
        }

        fn set_height_limit(&self, max_height: f64) {
            self.events.borrow_mut().push(format!("limit {}", max_height));
        }

        fn set_quantity_display(&self, quantity: u32) {
            self.events.borrow_mut().push(format!("qty {}", quantity));
        }

        fn render(&self, quote: &Quote) {
            self.events.borrow_mut().push("render".to_string());
            self.rendered.borrow_mut().push(quote.clone());
        }
    }

    fn dimension_inputs(width: f64, height: f64) -> PageInputs {
        PageInputs {
            width,
            height,
            preset_key: String::new(),
            material: None,
        }
    }

    #[test]
    fn battle_flag_pass_bounds_height_before_rendering() {
        let engine = RefCell::new(PriceEngine::new("dimension", "battleFlags"));
        let page = FakePage::new(dimension_inputs(5.0, 6.0));

        recompute(&engine, &page);

        let events = page.events.borrow();
        assert_eq!(*events, vec!["read", "limit 7", "render"]);

        let rendered = page.rendered.borrow();
        // 30 sq ft on the curve, single unit
        assert!(rendered[0].unit_price > 0.0);
        assert!(!rendered[0].is_discounted);
    }

    #[test]
    fn narrow_battle_flag_gets_the_tall_bound() {
        let engine = RefCell::new(PriceEngine::new("dimension", "battleFlags"));
        let page = FakePage::new(dimension_inputs(3.0, 6.0));

        recompute(&engine, &page);

        assert!(page.events.borrow().contains(&"limit 18".to_string()));
    }

    #[test]
    fn scrim_pass_never_bounds_height() {
        let engine = RefCell::new(PriceEngine::new("dimension", "scrims"));
        let page = FakePage::new(dimension_inputs(5.0, 6.0));

        recompute(&engine, &page);

        assert_eq!(*page.events.borrow(), vec!["read", "render"]);
    }

    #[test]
    fn quantity_state_reaches_the_quote() {
        let engine = RefCell::new(PriceEngine::new("dimension", "battleFlags"));
        engine.borrow_mut().adjust_quantity(1);
        let page = FakePage::new(dimension_inputs(2.0, 3.0));

        recompute(&engine, &page);

        let rendered = page.rendered.borrow();
        let base = 5.20 * 6.0;
        assert_relative_eq!(rendered[0].unit_price, base * 0.90);
        assert_relative_eq!(rendered[0].total_price, base * 0.90 * 2.0);
        assert_eq!(rendered[0].message, "10% BULK DISCOUNT");
    }

    #[test]
    fn zero_dimensions_render_a_zero_quote() {
        let engine = RefCell::new(PriceEngine::new("dimension", "scrims"));
        let page = FakePage::new(dimension_inputs(0.0, 6.0));

        recompute(&engine, &page);

        assert_eq!(page.rendered.borrow()[0], Quote::zero());
    }

    #[test]
    fn preset_pass_prices_from_the_table() {
        let engine = RefCell::new(PriceEngine::new("preset", "ampFlags"));
        engine.borrow_mut().adjust_quantity(5);
        let page = FakePage::new(PageInputs {
            width: 0.0,
            height: 0.0,
            preset_key: "small".to_string(),
            material: None,
        });

        recompute(&engine, &page);

        let rendered = page.rendered.borrow();
        assert_relative_eq!(rendered[0].unit_price, 49.0);
        assert_relative_eq!(rendered[0].total_price, 294.0);
        assert_eq!(rendered[0].message, "+2 FREE AMP FLAGS");
    }
}
