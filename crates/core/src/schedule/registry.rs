use std::collections::HashSet;

use super::types::Resource;

/// The fixed set of bookable resources plus their visibility flags.
///
/// Resources are defined once at startup and listed in insertion order;
/// visibility is the only mutable aspect and every resource starts visible.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    resources: Vec<Resource>,
    visible: HashSet<String>,
}

impl ResourceRegistry {
    /// Creates a registry with every resource visible.
    pub fn new(resources: Vec<Resource>) -> Self {
        let visible = resources.iter().map(|r| r.id.clone()).collect();
        Self { resources, visible }
    }

    /// All resources in insertion order.
    pub fn list(&self) -> &[Resource] {
        &self.resources
    }

    /// Looks up a resource by id.
    pub fn by_id(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// The currently visible resources, in insertion order.
    pub fn visible(&self) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| self.visible.contains(&r.id))
            .collect()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Flips the visibility of a resource. Unknown ids are ignored.
    pub fn toggle_visible(&mut self, id: &str) {
        if self.by_id(id).is_none() {
            tracing::warn!(resource_id = %id, "toggle_visible on unknown resource");
            return;
        }
        if !self.visible.remove(id) {
            self.visible.insert(id.to_string());
        }
    }

    /// Human-readable label for an optional resource assignment.
    pub fn display_name(&self, resource_id: Option<&str>) -> String {
        match resource_id {
            None => "No room".to_string(),
            Some(id) => match self.by_id(id) {
                Some(resource) => resource.name.clone(),
                None => "Unknown room".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_registry() -> ResourceRegistry {
        ResourceRegistry::new(vec![
            Resource::new("room-1", "Meeting Room A", "#e3f2fd").with_capacity(10),
            Resource::new("room-2", "Meeting Room B", "#f3e5f5").with_capacity(8),
        ])
    }

    #[test]
    fn test_all_visible_at_startup() {
        let registry = make_registry();

        assert!(registry.is_visible("room-1"));
        assert!(registry.is_visible("room-2"));
        assert_eq!(registry.visible().len(), 2);
    }

    #[test]
    fn test_toggle_visible_round_trip() {
        let mut registry = make_registry();

        registry.toggle_visible("room-1");
        assert!(!registry.is_visible("room-1"));
        assert_eq!(registry.visible().len(), 1);
        assert_eq!(registry.visible()[0].id, "room-2");

        registry.toggle_visible("room-1");
        assert!(registry.is_visible("room-1"));
        assert_eq!(registry.visible().len(), 2);
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let mut registry = make_registry();

        registry.toggle_visible("room-99");
        assert_eq!(registry.visible().len(), 2);
        assert!(!registry.is_visible("room-99"));
    }

    #[test]
    fn test_visible_preserves_insertion_order() {
        let registry = make_registry();
        let ids: Vec<&str> = registry.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["room-1", "room-2"]);
    }

    #[test]
    fn test_by_id() {
        let registry = make_registry();

        assert_eq!(registry.by_id("room-2").unwrap().name, "Meeting Room B");
        assert!(registry.by_id("room-99").is_none());
    }

    #[test]
    fn test_display_name() {
        let registry = make_registry();

        assert_eq!(registry.display_name(None), "No room");
        assert_eq!(registry.display_name(Some("room-1")), "Meeting Room A");
        assert_eq!(registry.display_name(Some("room-99")), "Unknown room");
    }
}
