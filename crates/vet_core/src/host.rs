//! Capability trait for the host object graph.
//!
//! The validation core never talks to a scene graph directly. The editor
//! embedding it implements [`ObjectHost`] to answer the three questions a
//! diagnostic path needs: where is this object stored, what type is it, and
//! what is its ancestor chain.

/// Unique identifier for host objects (components, assets).
pub type ObjectId = u64;

/// Unique identifier for scene-graph nodes.
pub type NodeId = u64;

/// Host-provided lookups over the object graph.
///
/// All methods are total: asked about an identity it does not know, a host
/// returns `None` or an empty string rather than failing. The diagnostic
/// path is what the user needs on a failure path, so resolving it must
/// never itself be the thing that breaks.
pub trait ObjectHost {
    /// Storage location of the asset containing `object`.
    ///
    /// `None` for objects that live in no asset (e.g. created in memory);
    /// the path renders with an empty prefix in that case.
    fn asset_location(&self, object: ObjectId) -> Option<String>;

    /// Concrete type name of `object`.
    fn type_name(&self, object: ObjectId) -> String;

    /// Display name of a scene node. Empty for unknown nodes.
    fn node_name(&self, node: NodeId) -> String;

    /// Parent of a scene node. `None` at the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;
}
