use crate::domain::model::Service;
use std::collections::BTreeMap;

/// Selected services and their quantities.
///
/// The selected ids are exactly the keys of the quantity map, so a selected
/// service always has a quantity and an unselected one never does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    quantities: BTreeMap<String, u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` with quantity 1, or removes it together with its quantity.
    /// Returns `true` when the service ends up selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.quantities.remove(id).is_some() {
            false
        } else {
            self.quantities.insert(id.to_string(), 1);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.quantities.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.quantities.keys().map(String::as_str)
    }

    pub fn quantity(&self, id: &str) -> Option<u32> {
        self.quantities.get(id).copied()
    }

    pub fn quantities(&self) -> &BTreeMap<String, u32> {
        &self.quantities
    }

    /// Sets the quantity of a selected service. Non-positive values and
    /// unselected ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }
        let Ok(quantity) = u32::try_from(quantity) else {
            return false;
        };
        match self.quantities.get_mut(id) {
            Some(current) => {
                *current = quantity;
                true
            }
            None => false,
        }
    }

    pub fn increment(&mut self, id: &str) -> bool {
        match self.quantities.get_mut(id) {
            Some(current) => {
                *current = current.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Steps the quantity down by one, never below 1.
    pub fn decrement(&mut self, id: &str) -> bool {
        match self.quantities.get_mut(id) {
            Some(current) if *current > 1 => {
                *current -= 1;
                true
            }
            _ => false,
        }
    }

    /// Sum of `price * quantity` over the selection. Ids missing from
    /// `catalog` count as zero.
    pub fn total(&self, catalog: &[Service]) -> f64 {
        self.quantities
            .iter()
            .filter_map(|(id, quantity)| {
                catalog
                    .iter()
                    .find(|service| &service.id == id)
                    .map(|service| service.price * f64::from(*quantity))
            })
            .sum()
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}
