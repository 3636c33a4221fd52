use std::fmt::Debug;
use std::fmt::Display;

use thiserror::Error;

use crate::quadtree::node::NodeID;
use crate::quadtree::node::ObjectId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuadTreeError {
    #[error("No object with id {0} is stored in the tree")]
    UnknownObject(ObjectId),

    #[error("No node with id {0} exists in the tree")]
    UnknownNode(NodeID),

    /// The object was kept at the root as an escaped object.
    #[error("Relocation failed: object {id} left the tree bounds")]
    LeftBounds { id: ObjectId },

    #[error("Object lies outside the tree bounds")]
    OutOfBounds,

    #[error("Object lies outside the bounds of node {node}")]
    NotEnclosed { node: NodeID },
}

/// A rejected insert. Hands the object back to the caller.
pub struct InsertError<T> {
    pub reason: QuadTreeError,
    pub object: T,
}

impl<T> InsertError<T> {
    pub fn into_inner(self) -> T {
        self.object
    }
}

impl<T> Debug for InsertError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertError")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl<T> Display for InsertError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Insert rejected: {}", self.reason)
    }
}

impl<T> std::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
