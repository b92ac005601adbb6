//! Ordered task list with the operations the UI needs

use chrono::{DateTime, Local};

use super::item::{Item, TextColor};

/// Ordered collection of task items
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new(items: Vec<Item>) -> Self {
        TodoList { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Append a new item with the given title
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Toggle completion of the item at `index`
    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.completed = !item.completed;
        }
    }

    /// Remove the item at `index`, returning it
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// True when the list is non-empty and every item is completed
    pub fn are_all_completed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.completed)
    }

    /// Mark everything incomplete when all are complete, complete otherwise
    pub fn toggle_all(&mut self) {
        let new_state = !self.are_all_completed();
        for item in &mut self.items {
            item.completed = new_state;
        }
    }

    /// Update title, color, due date, and duration of an existing item
    pub fn update(
        &mut self,
        index: usize,
        title: String,
        color: TextColor,
        due_date: Option<DateTime<Local>>,
        duration_minutes: Option<u32>,
    ) {
        if let Some(item) = self.items.get_mut(index) {
            item.title = title;
            item.color = color;
            item.due_date = due_date;
            item.duration_minutes = duration_minutes;
        }
    }
}
