//! Object-under-test identity and its diagnostic path.
//!
//! A [`ValidationContext`] pins down which object a sequence of checks is
//! inspecting. Its rendered path is the string failure messages embed:
//! `asset/ancestors/type` for objects that sit on a scene node,
//! `asset/type` for free-standing assets.
//!
//! The path is computed on first read and cached for the lifetime of the
//! context. The inspected object may be destroyed while a failure message
//! is still being assembled, so a path must never be recomputed once read.

use crate::host::{NodeId, ObjectHost, ObjectId};

/// Upper bound on ancestor-chain length. A parent relation deeper than this
/// is a corrupted hierarchy; the walk stops and keeps what it has.
pub const MAX_ANCESTOR_DEPTH: usize = 256;

/// Identifies the object a validation pass is currently inspecting.
///
/// Created once per object at the start of a pass, discarded after. Owns
/// nothing beyond the cached path string.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    target: Target,
    cached_path: Option<String>,
}

/// Which kind of object is under test. Exactly one variant at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// An object sitting on a scene-graph node.
    Hierarchical { object: ObjectId, node: NodeId },
    /// A free-standing asset with no node.
    Standalone { object: ObjectId },
}

impl ValidationContext {
    /// Context for an object that sits on a scene node.
    #[must_use]
    pub const fn hierarchical(object: ObjectId, node: NodeId) -> Self {
        Self {
            target: Target::Hierarchical { object, node },
            cached_path: None,
        }
    }

    /// Context for a free-standing asset.
    #[must_use]
    pub const fn standalone(object: ObjectId) -> Self {
        Self {
            target: Target::Standalone { object },
            cached_path: None,
        }
    }

    /// The object under test.
    #[must_use]
    pub const fn object(&self) -> ObjectId {
        match self.target {
            Target::Hierarchical { object, .. } | Target::Standalone { object } => object,
        }
    }

    /// The scene node under test, if this is a hierarchical context.
    #[must_use]
    pub const fn node(&self) -> Option<NodeId> {
        match self.target {
            Target::Hierarchical { node, .. } => Some(node),
            Target::Standalone { .. } => None,
        }
    }

    /// The rendered diagnostic path.
    ///
    /// Computed against the host on first call, cached thereafter. The
    /// cached string reflects the object graph at the time of that first
    /// call; later mutations of the graph are not picked up.
    pub fn path<H: ObjectHost>(&mut self, host: &H) -> &str {
        if self.cached_path.is_none() {
            self.cached_path = Some(render(self.target, host));
        }
        self.cached_path.as_deref().unwrap_or_default()
    }
}

fn render<H: ObjectHost>(target: Target, host: &H) -> String {
    match target {
        Target::Hierarchical { object, node } => {
            let asset = host.asset_location(object).unwrap_or_default();
            let chain = ancestor_path(host, node, 0);
            let type_name = host.type_name(object);
            format!("{asset}/{chain}/{type_name}")
        }
        Target::Standalone { object } => {
            let asset = host.asset_location(object).unwrap_or_default();
            let type_name = host.type_name(object);
            format!("{asset}/{type_name}")
        }
    }
}

/// Ancestor names from root to `node`, joined with `/`.
fn ancestor_path<H: ObjectHost>(host: &H, node: NodeId, depth: usize) -> String {
    let name = host.node_name(node);
    match host.parent(node) {
        Some(parent) if depth < MAX_ANCESTOR_DEPTH => {
            format!("{}/{name}", ancestor_path(host, parent, depth + 1))
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal host: nodes as (name, parent) pairs, one object.
    struct MiniHost {
        nodes: HashMap<NodeId, (String, Option<NodeId>)>,
        asset: Option<String>,
        type_name: String,
    }

    impl MiniHost {
        fn new(asset: Option<&str>, type_name: &str) -> Self {
            Self {
                nodes: HashMap::new(),
                asset: asset.map(str::to_owned),
                type_name: type_name.to_owned(),
            }
        }

        fn node(mut self, id: NodeId, name: &str, parent: Option<NodeId>) -> Self {
            self.nodes.insert(id, (name.to_owned(), parent));
            self
        }
    }

    impl ObjectHost for MiniHost {
        fn asset_location(&self, _object: ObjectId) -> Option<String> {
            self.asset.clone()
        }

        fn type_name(&self, _object: ObjectId) -> String {
            self.type_name.clone()
        }

        fn node_name(&self, node: NodeId) -> String {
            self.nodes
                .get(&node)
                .map(|(name, _)| name.clone())
                .unwrap_or_default()
        }

        fn parent(&self, node: NodeId) -> Option<NodeId> {
            self.nodes.get(&node).and_then(|(_, parent)| *parent)
        }
    }

    #[test]
    fn test_hierarchical_path_root_to_leaf() {
        let host = MiniHost::new(Some("Assets/Prefabs/Door.prefab"), "DoorController")
            .node(1, "Root", None)
            .node(2, "Door", Some(1))
            .node(3, "Hinge", Some(2));

        let mut ctx = ValidationContext::hierarchical(10, 3);
        assert_eq!(
            ctx.path(&host),
            "Assets/Prefabs/Door.prefab/Root/Door/Hinge/DoorController"
        );
    }

    #[test]
    fn test_standalone_path_has_no_ancestor_segment() {
        let host = MiniHost::new(Some("Assets/Settings/Audio.asset"), "AudioSettings");
        let mut ctx = ValidationContext::standalone(10);
        assert_eq!(ctx.path(&host), "Assets/Settings/Audio.asset/AudioSettings");
    }

    #[test]
    fn test_missing_asset_location_renders_empty_prefix() {
        let host = MiniHost::new(None, "SpawnPoint").node(1, "Spawn", None);
        let mut ctx = ValidationContext::hierarchical(10, 1);
        assert_eq!(ctx.path(&host), "/Spawn/SpawnPoint");
    }

    #[test]
    fn test_path_is_cached() {
        let host = MiniHost::new(Some("a"), "T").node(1, "N", None);
        let mut ctx = ValidationContext::hierarchical(10, 1);
        let first = ctx.path(&host).to_owned();

        // A different host must not change the already-rendered path.
        let other = MiniHost::new(Some("b"), "U").node(1, "M", None);
        assert_eq!(ctx.path(&other), first);
    }

    #[test]
    fn test_cyclic_hierarchy_terminates() {
        let host = MiniHost::new(None, "T")
            .node(1, "A", Some(2))
            .node(2, "B", Some(1));
        let mut ctx = ValidationContext::hierarchical(10, 1);
        let path = ctx.path(&host);
        // Bounded by the depth cap rather than hanging.
        assert!(path.matches('/').count() <= MAX_ANCESTOR_DEPTH + 2);
    }

    #[test]
    fn test_unknown_node_still_renders() {
        let host = MiniHost::new(Some("x"), "T");
        let mut ctx = ValidationContext::hierarchical(10, 99);
        assert_eq!(ctx.path(&host), "x//T");
    }
}
