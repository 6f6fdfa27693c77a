//! Grid inventory with stacking and drag-and-drop.
//!
//! Items are moved between slots and the pointer carry, never cloned, so an
//! item is always in exactly one place.

use crate::constants::*;
use crate::floating_text::Rgb;
use crate::input::{GameKey, InputSnapshot};
use glam::Vec2;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub max_stack: u32,
    pub description: String,
    pub icon: Rgb,
}

impl Item {
    /// One of three debug potions, picked at random
    pub fn test_potion(rng: &mut impl Rng) -> Self {
        let variant = rng.gen_range(0..3);
        let icon = match variant {
            0 => [200, 0, 0],
            1 => [0, 200, 0],
            _ => [0, 0, 200],
        };
        Self {
            id: format!("potion-{}", variant),
            name: "Health Potion".to_string(),
            quantity: 1,
            max_stack: TEST_POTION_MAX_STACK,
            description: "Restores 50 HP".to_string(),
            icon,
        }
    }
}

/// An item held by the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct CarriedItem {
    pub item: Item,
    /// Where inside the slot the pointer grabbed it
    pub offset: Vec2,
}

/// Screen-space rectangle, min corner inclusive and max exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRect {
    pub min: Vec2,
    pub size: f32,
}

impl SlotRect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.min.x + self.size && p.y >= self.min.y && p.y < self.min.y + self.size
    }
}

/// Tooltip box and its text, all in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLayout {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub lines: Vec<String>,
}

pub struct Inventory {
    pub cols: usize,
    slots: Vec<Option<Item>>,
    pub carried: Option<CarriedItem>,
    pub open: bool,
    toggle_timer: u32,
    toggle_cooldown: u32,
}

impl Inventory {
    pub fn new(rows: usize, cols: usize, toggle_cooldown: u32) -> Self {
        Self {
            cols,
            slots: vec![None; rows * cols],
            carried: None,
            open: false,
            toggle_timer: 0,
            toggle_cooldown,
        }
    }

    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    /// Store an item, merging into a matching stack first.
    /// Returns false when there is no room.
    pub fn add_item(&mut self, item: Item) -> bool {
        let stack = self
            .slots
            .iter_mut()
            .flatten()
            .find(|slot| slot.id == item.id && slot.quantity < slot.max_stack);
        if let Some(stack) = stack {
            // Overflow beyond the stack limit is dropped
            stack.quantity = (stack.quantity + item.quantity).min(stack.max_stack);
            return true;
        }

        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(empty) => {
                *empty = Some(item);
                true
            }
            None => false,
        }
    }

    /// Toggle with cooldown, then handle a fresh click while open
    pub fn update(&mut self, input: &InputSnapshot) {
        self.toggle_timer = self.toggle_timer.saturating_sub(1);

        if input.is_held(GameKey::ToggleInventory) && self.toggle_timer == 0 {
            self.open = !self.open;
            self.toggle_timer = self.toggle_cooldown;
        }

        if self.open && input.pointer_pressed {
            self.click(input.pointer);
        }
    }

    fn click(&mut self, pointer: Vec2) {
        let Some(index) = self.slot_at(pointer) else {
            return;
        };

        match self.carried.take() {
            None => {
                if let Some(item) = self.slots[index].take() {
                    self.carried = Some(CarriedItem {
                        item,
                        offset: pointer - self.slot_rect(index).min,
                    });
                }
            }
            Some(CarriedItem { item, offset }) => {
                // Drop into an empty slot, or swap with what is there
                self.carried = self.slots[index]
                    .replace(item)
                    .map(|item| CarriedItem { item, offset });
            }
        }
    }

    pub fn slot_rect(&self, index: usize) -> SlotRect {
        let row = index / self.cols;
        let col = index % self.cols;
        SlotRect {
            min: Vec2::new(
                INVENTORY_ORIGIN.0 + col as f32 * INVENTORY_SLOT_PITCH,
                INVENTORY_ORIGIN.1 + row as f32 * INVENTORY_SLOT_PITCH,
            ),
            size: INVENTORY_SLOT_SIZE,
        }
    }

    /// Index of the slot under `pointer`; gaps between slots hit nothing
    pub fn slot_at(&self, pointer: Vec2) -> Option<usize> {
        (0..self.slots.len()).find(|&i| self.slot_rect(i).contains(pointer))
    }

    pub fn hovered_item(&self, pointer: Vec2) -> Option<&Item> {
        self.slots[self.slot_at(pointer)?].as_ref()
    }

    /// Tooltip for the item under the pointer, if the grid is open
    pub fn tooltip(&self, pointer: Vec2) -> Option<TooltipLayout> {
        if !self.open {
            return None;
        }
        let item = self.hovered_item(pointer)?;
        let lines = wrap_text(&item.description, TOOLTIP_WRAP_WIDTH, TOOLTIP_GLYPH_WIDTH);
        Some(TooltipLayout {
            origin: pointer + Vec2::splat(TOOLTIP_POINTER_OFFSET),
            width: TOOLTIP_WIDTH,
            height: TOOLTIP_BASE_HEIGHT + TOOLTIP_LINE_HEIGHT * lines.len() as f32,
            title: item.name.clone(),
            lines,
        })
    }
}

/// Greedy word wrap for a fixed-width font
pub fn wrap_text(text: &str, max_width: f32, glyph_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate_len = line.chars().count() + 1 + word.chars().count();
        if candidate_len as f32 * glyph_width > max_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line.push(' ');
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn item(id: &str, quantity: u32, max_stack: u32) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            quantity,
            max_stack,
            description: String::new(),
            icon: [1, 2, 3],
        }
    }

    fn slot_center(inventory: &Inventory, index: usize) -> Vec2 {
        inventory.slot_rect(index).min + Vec2::splat(INVENTORY_SLOT_SIZE / 2.0)
    }

    fn ids(inventory: &Inventory) -> Vec<String> {
        let mut ids: Vec<String> = inventory
            .slots()
            .iter()
            .flatten()
            .chain(inventory.carried.iter().map(|c| &c.item))
            .map(|i| format!("{}x{}", i.id, i.quantity))
            .collect();
        ids.sort();
        ids
    }

    fn open_inventory() -> Inventory {
        let mut inventory = Inventory::new(4, 5, 15);
        inventory.update(&InputSnapshot::holding(&[GameKey::ToggleInventory]));
        assert!(inventory.open);
        inventory
    }

    #[test]
    fn test_fills_every_slot_then_rejects() {
        let mut inventory = Inventory::new(4, 5, 15);
        for i in 0..20 {
            assert!(inventory.add_item(item(&format!("item-{}", i), 1, 1)));
        }
        assert!(!inventory.add_item(item("one-more", 1, 1)));
        assert!(inventory.slots().iter().all(Option::is_some));
    }

    #[test]
    fn test_stacking_clamps_and_spills_to_new_slot() {
        let mut inventory = Inventory::new(1, 3, 15);
        assert!(inventory.add_item(item("potion", 4, 5)));
        assert!(inventory.add_item(item("potion", 3, 5)));
        assert_eq!(inventory.slots()[0].as_ref().unwrap().quantity, 5);
        assert!(inventory.slots()[1].is_none());

        // Full stack is skipped
        assert!(inventory.add_item(item("potion", 1, 5)));
        assert_eq!(inventory.slots()[1].as_ref().unwrap().quantity, 1);
    }

    #[test]
    fn test_full_inventory_still_merges_into_open_stack() {
        let mut inventory = Inventory::new(1, 2, 15);
        inventory.add_item(item("a", 1, 5));
        inventory.add_item(item("b", 1, 1));
        assert!(inventory.add_item(item("a", 1, 5)));
        assert!(!inventory.add_item(item("b", 1, 1)));
    }

    #[test]
    fn test_toggle_respects_cooldown() {
        let mut inventory = Inventory::new(4, 5, 15);
        let held = InputSnapshot::holding(&[GameKey::ToggleInventory]);
        inventory.update(&held);
        assert!(inventory.open);
        for _ in 0..14 {
            inventory.update(&held);
            assert!(inventory.open);
        }
        inventory.update(&held);
        assert!(!inventory.open);
    }

    #[test]
    fn test_pick_drop_and_swap_conserve_items() {
        let mut inventory = open_inventory();
        inventory.add_item(item("a", 2, 5));
        inventory.add_item(item("b", 1, 5));
        let before = ids(&inventory);

        let pointer = slot_center(&inventory, 0) + Vec2::new(3.0, -2.0);
        inventory.update(&InputSnapshot::click_at(pointer));
        let carried = inventory.carried.as_ref().expect("picked up");
        assert_eq!(carried.item.id, "a");
        assert_eq!(carried.offset, Vec2::new(19.0, 14.0));
        assert!(inventory.slots()[0].is_none());
        assert_eq!(ids(&inventory), before);

        // Swap with b
        inventory.update(&InputSnapshot::click_at(slot_center(&inventory, 1)));
        assert_eq!(inventory.carried.as_ref().unwrap().item.id, "b");
        assert_eq!(inventory.slots()[1].as_ref().unwrap().id, "a");
        assert_eq!(ids(&inventory), before);

        // Drop into an empty slot
        inventory.update(&InputSnapshot::click_at(slot_center(&inventory, 7)));
        assert!(inventory.carried.is_none());
        assert_eq!(inventory.slots()[7].as_ref().unwrap().id, "b");
        assert_eq!(ids(&inventory), before);
    }

    #[test]
    fn test_random_clicks_conserve_items() {
        let mut inventory = open_inventory();
        inventory.add_item(item("a", 2, 5));
        inventory.add_item(item("b", 1, 5));
        inventory.add_item(item("c", 5, 5));
        inventory.add_item(item("d", 1, 1));
        let before = ids(&inventory);

        // Pointer lands on slots, on the gaps between them, and off the grid
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let pointer = Vec2::new(rng.gen_range(30.0..260.0), rng.gen_range(30.0..220.0));
            inventory.update(&InputSnapshot::click_at(pointer));
            assert_eq!(ids(&inventory), before, "after click at {:?}", pointer);
        }
    }

    #[test]
    fn test_click_outside_grid_keeps_carry() {
        let mut inventory = open_inventory();
        inventory.add_item(item("a", 1, 5));
        inventory.update(&InputSnapshot::click_at(slot_center(&inventory, 0)));
        assert!(inventory.carried.is_some());

        inventory.update(&InputSnapshot::click_at(Vec2::new(700.0, 500.0)));
        // Gap between two slots
        inventory.update(&InputSnapshot::click_at(Vec2::new(83.0, 60.0)));
        assert!(inventory.carried.is_some());
        assert!(inventory.slots().iter().all(Option::is_none));
    }

    #[test]
    fn test_clicks_ignored_while_closed() {
        let mut inventory = Inventory::new(4, 5, 15);
        inventory.add_item(item("a", 1, 5));
        inventory.update(&InputSnapshot::click_at(slot_center(&inventory, 0)));
        assert!(inventory.carried.is_none());
        assert!(inventory.slots()[0].is_some());
    }

    #[test]
    fn test_slot_geometry() {
        let inventory = Inventory::new(4, 5, 15);
        assert_eq!(inventory.slot_rect(0).min, Vec2::new(50.0, 50.0));
        assert_eq!(inventory.slot_rect(6).min, Vec2::new(86.0, 86.0));
        assert_eq!(inventory.slot_at(Vec2::new(50.0, 50.0)), Some(0));
        assert_eq!(inventory.slot_at(Vec2::new(82.0, 50.0)), None);
        assert_eq!(inventory.slot_at(Vec2::new(49.0, 50.0)), None);
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("Restores 50 HP", 140.0, 7.0);
        assert_eq!(lines, vec!["Restores 50 HP"]);

        let text = "a fairly long description that has to be wrapped over several lines";
        let lines = wrap_text(text, 140.0, 7.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() as f32 * 7.0 <= 140.0, "line too wide: {}", line);
        }
        assert_eq!(lines.join(" "), text);
        assert!(wrap_text("   ", 140.0, 7.0).is_empty());
    }

    #[test]
    fn test_tooltip_layout() {
        let mut inventory = open_inventory();
        let mut rng = StdRng::seed_from_u64(9);
        inventory.add_item(Item::test_potion(&mut rng));

        let pointer = slot_center(&inventory, 0);
        let tooltip = inventory.tooltip(pointer).expect("hovering an item");
        assert_eq!(tooltip.title, "Health Potion");
        assert_eq!(tooltip.lines, vec!["Restores 50 HP"]);
        assert_eq!(tooltip.origin, pointer + Vec2::splat(10.0));
        assert_eq!(tooltip.width, 150.0);
        assert_eq!(tooltip.height, 34.0);

        assert!(inventory.tooltip(slot_center(&inventory, 1)).is_none());
    }

    #[test]
    fn test_no_tooltip_while_closed() {
        let mut inventory = Inventory::new(4, 5, 15);
        let mut rng = StdRng::seed_from_u64(9);
        inventory.add_item(Item::test_potion(&mut rng));

        let pointer = slot_center(&inventory, 0);
        assert!(inventory.hovered_item(pointer).is_some());
        assert!(inventory.tooltip(pointer).is_none());
    }

    #[test]
    fn test_potions_stack_by_variant() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut inventory = Inventory::new(4, 5, 15);
        for _ in 0..30 {
            let potion = Item::test_potion(&mut rng);
            assert!(["potion-0", "potion-1", "potion-2"].contains(&potion.id.as_str()));
            inventory.add_item(potion);
        }
        let used = inventory.slots().iter().flatten().count();
        assert!(used >= 3 && used <= 8);
    }
}
