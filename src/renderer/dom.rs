//! DOM writer: one absolutely positioned `<div>` per entity

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{Sprite, sprites};
use crate::sim::{Arena, GameState};

/// Keeps the page's sprite elements in sync with the game state
pub struct DomRenderer {
    document: Document,
    area: Element,
    player: HtmlElement,
    stick: Option<HtmlElement>,
    enemies: HashMap<u32, HtmlElement>,
}

impl DomRenderer {
    /// Attach to `#gameArea` and `#player`; `None` if the page lacks them
    pub fn new(document: &Document) -> Option<Self> {
        let area = document.get_element_by_id("gameArea")?;
        let player = document
            .get_element_by_id("player")?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let stick = document
            .get_element_by_id("joystickStick")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Some(Self {
            document: document.clone(),
            area,
            player,
            stick,
            enemies: HashMap::new(),
        })
    }

    /// Current arena size from layout
    pub fn arena(&self) -> Arena {
        Arena::new(self.area.client_width() as f32, self.area.client_height() as f32)
    }

    /// Arena-space position of a client (viewport) coordinate
    pub fn to_arena(&self, client: Vec2) -> Vec2 {
        let rect = self.area.get_bounding_client_rect();
        client - Vec2::new(rect.left() as f32, rect.top() as f32)
    }

    /// Position every sprite and drop elements for removed enemies
    pub fn render(&mut self, state: &GameState) {
        let mut live = HashSet::with_capacity(state.enemies.len());

        for sprite in sprites(state) {
            if sprite.id == state.player.id {
                place(&self.player, &sprite);
                continue;
            }
            live.insert(sprite.id);
            if let Some(el) = self.enemies.get(&sprite.id) {
                place(el, &sprite);
            } else if let Some(el) = self.create_enemy(&sprite) {
                place(&el, &sprite);
                self.enemies.insert(sprite.id, el);
            }
        }

        self.enemies.retain(|id, el| {
            if live.contains(id) {
                true
            } else {
                el.remove();
                false
            }
        });
    }

    /// Move the joystick knob to `offset` pixels from its base center
    pub fn render_stick(&self, offset: Vec2) {
        if let Some(stick) = &self.stick {
            let style = stick.style();
            let _ = style.set_property("left", &format!("calc(50% + {}px)", offset.x));
            let _ = style.set_property("top", &format!("calc(50% + {}px)", offset.y));
        }
    }

    /// Entity ID stored on an enemy element
    pub fn enemy_id(target: &Element) -> Option<u32> {
        target.get_attribute("data-id")?.parse().ok()
    }

    fn create_enemy(&self, sprite: &Sprite) -> Option<HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        el.set_class_name(sprite.class);
        let _ = el.set_attribute("data-id", &sprite.id.to_string());
        self.area.append_child(&el).ok()?;
        Some(el)
    }
}

fn place(el: &HtmlElement, sprite: &Sprite) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", sprite.left));
    let _ = style.set_property("top", &format!("{}px", sprite.top));
    let _ = style.set_property("width", &format!("{}px", sprite.width));
    let _ = style.set_property("height", &format!("{}px", sprite.height));
}
