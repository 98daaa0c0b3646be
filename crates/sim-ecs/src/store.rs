//! The entity-indexed component store.
//!
//! Components are boxed trait objects keyed by [`ComponentTypeTag`] inside
//! a per-entity map; insertion order of entities is tracked separately so
//! `entities_with` can iterate deterministically, always in the order
//! entities were added.

use std::collections::HashMap;

use sim_core::{ComponentTypeTag, EntityId};

use crate::component::Component;
use crate::error::{EcsError, EcsResult};

#[derive(Default)]
pub struct ComponentStore {
    order: Vec<EntityId>,
    entities: HashMap<EntityId, HashMap<ComponentTypeTag, Box<dyn Component>>>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new entity with no components.
    pub fn add_entity(&mut self, id: EntityId) -> EcsResult<()> {
        if self.entities.contains_key(&id) {
            return Err(EcsError::DuplicateEntity(id));
        }
        self.order.push(id.clone());
        self.entities.insert(id, HashMap::new());
        Ok(())
    }

    /// Remove an entity and every component it holds. No-op if absent.
    pub fn remove_entity(&mut self, id: &EntityId) {
        if self.entities.remove(id).is_some() {
            self.order.retain(|e| e != id);
        }
    }

    pub fn contains_entity(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Insert or replace the component of its type for `id`.
    pub fn add_component(&mut self, id: &EntityId, component: Box<dyn Component>) -> EcsResult<()> {
        let components = self
            .entities
            .get_mut(id)
            .ok_or_else(|| EcsError::UnknownEntity(id.clone()))?;
        components.insert(component.type_tag(), component);
        Ok(())
    }

    /// Remove a single component from an entity, if present.
    pub fn remove_component(&mut self, id: &EntityId, tag: ComponentTypeTag) {
        if let Some(components) = self.entities.get_mut(id) {
            components.remove(&tag);
        }
    }

    pub fn get_component(&self, id: &EntityId, tag: ComponentTypeTag) -> Option<&dyn Component> {
        self.entities.get(id)?.get(&tag).map(|b| b.as_ref())
    }

    pub fn get_component_mut(
        &mut self,
        id: &EntityId,
        tag: ComponentTypeTag,
    ) -> Option<&mut Box<dyn Component>> {
        self.entities.get_mut(id)?.get_mut(&tag)
    }

    pub fn has_component(&self, id: &EntityId, tag: ComponentTypeTag) -> bool {
        self.entities.get(id).map(|c| c.contains_key(&tag)).unwrap_or(false)
    }

    /// Downcast a component to its concrete type `T`.
    pub fn get_as<T: 'static>(&self, id: &EntityId, tag: ComponentTypeTag) -> Option<&T> {
        self.get_component(id, tag)?.as_any().downcast_ref::<T>()
    }

    /// Downcast a component to its concrete mutable type `T`.
    pub fn get_as_mut<T: 'static>(&mut self, id: &EntityId, tag: ComponentTypeTag) -> Option<&mut T> {
        self.get_component_mut(id, tag)?.as_any_mut().downcast_mut::<T>()
    }

    /// All components belonging to `id`, keyed by type tag. Used by the
    /// snapshot writer, which serializes every component regardless of
    /// query shape.
    pub fn components_of(&self, id: &EntityId) -> Option<&HashMap<ComponentTypeTag, Box<dyn Component>>> {
        self.entities.get(id)
    }

    /// Entity IDs in insertion order.
    pub fn entity_ids(&self) -> &[EntityId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The insertion-ordered subset of entities holding every tag in
    /// `tags`, each paired with references to exactly those components.
    pub fn entities_with(
        &self,
        tags: &[ComponentTypeTag],
    ) -> Vec<(EntityId, HashMap<ComponentTypeTag, &dyn Component>)> {
        let mut out = Vec::new();
        for id in &self.order {
            let Some(components) = self.entities.get(id) else {
                continue;
            };
            if tags.iter().all(|t| components.contains_key(t)) {
                let picked = tags
                    .iter()
                    .map(|t| (*t, components.get(t).unwrap().as_ref()))
                    .collect();
                out.push((id.clone(), picked));
            }
        }
        out
    }
}
