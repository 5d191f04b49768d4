//! Test fixtures and helpers.
//!
//! An in-memory [`ObjectHost`] plus RON-loadable fixture data, so tests
//! can describe an object graph declaratively instead of hand-wiring one
//! per test.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vet_core::host::{NodeId, ObjectHost, ObjectId};

/// In-memory object graph implementing [`ObjectHost`].
///
/// Nodes carry a name and an optional parent; objects carry a type name,
/// an optional asset location, and nothing else. Unknown identities
/// resolve to empty names, like a host whose object was destroyed.
#[derive(Debug, Clone, Default)]
pub struct TestScene {
    nodes: HashMap<NodeId, NodeEntry>,
    objects: HashMap<ObjectId, ObjectEntry>,
}

#[derive(Debug, Clone)]
struct NodeEntry {
    name: String,
    parent: Option<NodeId>,
}

#[derive(Debug, Clone)]
struct ObjectEntry {
    type_name: String,
    asset_location: Option<String>,
}

impl TestScene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node (no parent).
    pub fn add_root(&mut self, id: NodeId, name: &str) -> &mut Self {
        self.add_entry(id, name, None)
    }

    /// Add a child node.
    pub fn add_node(&mut self, id: NodeId, name: &str, parent: NodeId) -> &mut Self {
        self.add_entry(id, name, Some(parent))
    }

    /// Add an object with no asset location (e.g. created in memory).
    pub fn add_object(&mut self, id: ObjectId, type_name: &str) -> &mut Self {
        self.objects.insert(
            id,
            ObjectEntry {
                type_name: type_name.to_owned(),
                asset_location: None,
            },
        );
        self
    }

    /// Add an object stored in an asset.
    pub fn add_asset_object(&mut self, id: ObjectId, type_name: &str, location: &str) -> &mut Self {
        self.objects.insert(
            id,
            ObjectEntry {
                type_name: type_name.to_owned(),
                asset_location: Some(location.to_owned()),
            },
        );
        self
    }

    fn add_entry(&mut self, id: NodeId, name: &str, parent: Option<NodeId>) -> &mut Self {
        self.nodes.insert(
            id,
            NodeEntry {
                name: name.to_owned(),
                parent,
            },
        );
        self
    }
}

impl ObjectHost for TestScene {
    fn asset_location(&self, object: ObjectId) -> Option<String> {
        self.objects
            .get(&object)
            .and_then(|o| o.asset_location.clone())
    }

    fn type_name(&self, object: ObjectId) -> String {
        self.objects
            .get(&object)
            .map(|o| o.type_name.clone())
            .unwrap_or_default()
    }

    fn node_name(&self, node: NodeId) -> String {
        self.nodes
            .get(&node)
            .map(|n| n.name.clone())
            .unwrap_or_default()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }
}

/// Declarative scene fixture, deserializable from RON.
///
/// # Example RON
///
/// ```ron
/// SceneData(
///     nodes: [
///         NodeData(id: 1, name: "Root", parent: None),
///         NodeData(id: 2, name: "Door", parent: Some(1)),
///     ],
///     objects: [
///         ObjectData(id: 10, type_name: "DoorController",
///                    asset: Some("Assets/Prefabs/Door.prefab")),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneData {
    /// Scene-graph nodes.
    pub nodes: Vec<NodeData>,
    /// Host objects.
    pub objects: Vec<ObjectData>,
}

/// One scene-graph node in a [`SceneData`] fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    /// Node identifier.
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// Parent node, `None` for roots.
    #[serde(default)]
    pub parent: Option<NodeId>,
}

/// One host object in a [`SceneData`] fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectData {
    /// Object identifier.
    pub id: ObjectId,
    /// Concrete type name.
    pub type_name: String,
    /// Asset storage location, if any.
    #[serde(default)]
    pub asset: Option<String>,
}

impl SceneData {
    /// Build the in-memory scene this fixture describes.
    #[must_use]
    pub fn build(&self) -> TestScene {
        let mut scene = TestScene::new();
        for node in &self.nodes {
            match node.parent {
                Some(parent) => scene.add_node(node.id, &node.name, parent),
                None => scene.add_root(node.id, &node.name),
            };
        }
        for object in &self.objects {
            match &object.asset {
                Some(location) => scene.add_asset_object(object.id, &object.type_name, location),
                None => scene.add_object(object.id, &object.type_name),
            };
        }
        scene
    }
}

/// Parse a RON scene fixture and build its [`TestScene`].
///
/// # Errors
///
/// Returns the RON parse error if the fixture is malformed.
pub fn scene_from_ron(source: &str) -> Result<TestScene, ron::error::SpannedError> {
    let data: SceneData = ron::from_str(source)?;
    Ok(data.build())
}

/// Build a linear ancestor chain from root to leaf.
///
/// Node ids are assigned 1..=names.len() in order; returns the scene and
/// the leaf node id. Panics on an empty name list (no chain to build).
#[must_use]
pub fn chain_scene(names: &[String]) -> (TestScene, NodeId) {
    assert!(!names.is_empty(), "chain_scene needs at least one name");
    let mut scene = TestScene::new();
    let mut parent: Option<NodeId> = None;
    for (i, name) in names.iter().enumerate() {
        let id = i as NodeId + 1;
        match parent {
            Some(p) => scene.add_node(id, name, p),
            None => scene.add_root(id, name),
        };
        parent = Some(id);
    }
    (scene, names.len() as NodeId)
}
