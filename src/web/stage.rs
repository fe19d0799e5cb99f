use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::domain::entity::{Entity, EntityId};
use crate::render::{ScreenTransform, Stage};

use super::js_error_text;

/// One absolutely positioned `div.box` per entity, appended to `<body>`.
pub struct DomStage {
    document: Document,
    parent: HtmlElement,
    // Indexed by entity id.
    elements: Vec<HtmlElement>,
}

impl DomStage {
    pub fn new(document: &Document) -> Result<Self, wasm_bindgen::JsValue> {
        let parent = document
            .body()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("document has no body"))?;
        Ok(Self::with_parent(document, parent))
    }

    pub fn with_parent(document: &Document, parent: HtmlElement) -> Self {
        Self {
            document: document.clone(),
            parent,
            elements: Vec::new(),
        }
    }

    pub fn element(&self, id: EntityId) -> Option<&HtmlElement> {
        self.elements.get(id.index())
    }

    pub fn elements(&self) -> impl Iterator<Item = (EntityId, &HtmlElement)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, el)| (EntityId(i as u32), el))
    }

    fn create_box(&self, entity: &Entity) -> Result<HtmlElement, wasm_bindgen::JsValue> {
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        el.set_class_name("box");
        el.set_attribute("data-entity", &entity.id.0.to_string())?;

        let size = format!("{}px", entity.size_px);
        let margin = format!("{}px", -(entity.size_px as f32) / 2.0);
        let style = el.style();
        style.set_property("position", "absolute")?;
        style.set_property("width", &size)?;
        style.set_property("height", &size)?;
        style.set_property("margin-top", &margin)?;
        style.set_property("margin-left", &margin)?;
        style.set_property("background-color", &entity.color.css())?;

        self.parent.append_child(&el)?;
        Ok(el)
    }
}

impl Stage for DomStage {
    fn mount(&mut self, entity: &Entity) -> Result<(), String> {
        if entity.id.index() != self.elements.len() {
            return Err(format!(
                "entity {} mounted out of order (expected {})",
                entity.id.0,
                self.elements.len()
            ));
        }
        let el = self.create_box(entity).map_err(|e| js_error_text(&e))?;
        self.elements.push(el);
        Ok(())
    }

    fn place(&mut self, transform: &ScreenTransform) -> Result<(), String> {
        let el = self
            .elements
            .get(transform.entity.index())
            .ok_or_else(|| format!("entity {} has no element", transform.entity.0))?;
        let style = el.style();
        let set = |name: &str, value: &str| {
            style
                .set_property(name, value)
                .map_err(|e| js_error_text(&e))
        };
        set("left", &format!("{}px", transform.left))?;
        set("top", &format!("{}px", transform.top))?;
        set("transform", &transform.rotate_css())
    }
}
