//! # Drag and Drop
//!
//! One gesture at a time, driven by pointer events:
//!
//! ```text
//! Idle ──pointer_down──→ Pending ──moved > activation distance──→ Dragging
//!   ↑                       │                                        │
//!   └────── pointer_up ─────┴──────────────── pointer_up ────────────┘
//! ```
//!
//! A pointer-up while `Pending` is a click and drops nothing. A pointer-up
//! while `Dragging` over a target yields a [`DropIntent`], which the edit
//! session resolves against the document into a [`DropAction`].

use pagecraft_model::{ComponentId, Document};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default pointer travel before a press becomes a drag
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DragSource {
    /// A palette entry, by type tag
    Palette(String),
    /// A component already on the page
    Component(ComponentId),
}

/// What the pointer is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum DropTarget {
    /// Empty canvas background
    Canvas,
    /// A sortable component
    Component(ComponentId),
    /// The inner drop zone of a container
    ContainerSlot(ComponentId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Pending {
        source: DragSource,
        origin: Point,
    },
    Dragging {
        source: DragSource,
        over: Option<DropTarget>,
    },
}

/// A finished gesture, not yet checked against the document
#[derive(Debug, Clone, PartialEq)]
pub struct DropIntent {
    pub source: DragSource,
    pub target: DropTarget,
}

/// The edit a drop turns into
#[derive(Debug, Clone, PartialEq)]
pub enum DropAction {
    Insert {
        component_type: String,
        parent_id: Option<ComponentId>,
    },
    Move {
        active_id: ComponentId,
        over_id: ComponentId,
    },
    Reparent {
        id: ComponentId,
        new_parent_id: Option<ComponentId>,
        index: Option<usize>,
    },
    Noop,
}

impl DropIntent {
    /// Decide what the drop means for `doc`
    ///
    /// Palette drops always insert somewhere: into the container under the
    /// pointer, or at the root when the target is not a container.
    pub fn resolve(&self, doc: &Document) -> DropAction {
        match (&self.source, &self.target) {
            (DragSource::Palette(component_type), target) => {
                let parent_id = match target {
                    DropTarget::Canvas => None,
                    DropTarget::Component(id) | DropTarget::ContainerSlot(id) => doc
                        .get(id.as_str())
                        .filter(|c| c.is_container())
                        .map(|c| c.id.clone()),
                };
                DropAction::Insert {
                    component_type: component_type.clone(),
                    parent_id,
                }
            }

            (DragSource::Component(active_id), DropTarget::Component(over_id)) => {
                if active_id == over_id {
                    return DropAction::Noop;
                }
                let (Some(active), Some(over)) = (doc.get(active_id.as_str()), doc.get(over_id.as_str())) else {
                    // Let the move report the missing id
                    return DropAction::Move {
                        active_id: active_id.clone(),
                        over_id: over_id.clone(),
                    };
                };

                if active.parent_id == over.parent_id {
                    DropAction::Move {
                        active_id: active_id.clone(),
                        over_id: over_id.clone(),
                    }
                } else {
                    // Dropped on an item in another list: take its slot there
                    let parent = over.parent_id.clone();
                    let index = doc
                        .sibling_ids(parent.as_ref().map(ComponentId::as_str))
                        .iter()
                        .position(|id| id == over_id);
                    DropAction::Reparent {
                        id: active_id.clone(),
                        new_parent_id: parent,
                        index,
                    }
                }
            }

            (DragSource::Component(id), DropTarget::ContainerSlot(container_id)) => {
                if id == container_id {
                    return DropAction::Noop;
                }
                DropAction::Reparent {
                    id: id.clone(),
                    new_parent_id: Some(container_id.clone()),
                    index: None,
                }
            }

            (DragSource::Component(id), DropTarget::Canvas) => {
                match doc.get(id.as_str()) {
                    Some(component) if component.parent_id.is_none() => DropAction::Noop,
                    _ => DropAction::Reparent {
                        id: id.clone(),
                        new_parent_id: None,
                        index: None,
                    },
                }
            }
        }
    }
}

/// Pointer-driven gesture state machine
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    activation_distance: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl DragController {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            state: DragState::Idle,
            activation_distance: activation_distance.max(0.0),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Source of the gesture in progress
    pub fn active_source(&self) -> Option<&DragSource> {
        match &self.state {
            DragState::Idle => None,
            DragState::Pending { source, .. } | DragState::Dragging { source, .. } => Some(source),
        }
    }

    /// Start a gesture; ignored (returns false) while one is in progress
    pub fn pointer_down(&mut self, source: DragSource, at: Point) -> bool {
        if !self.is_idle() {
            trace!(?source, "Pointer down ignored during gesture");
            return false;
        }
        self.state = DragState::Pending { source, origin: at };
        true
    }

    /// Track the pointer; activates the drag past the threshold
    pub fn pointer_move(&mut self, at: Point, over: Option<DropTarget>) {
        match &mut self.state {
            DragState::Idle => {}
            DragState::Pending { source, origin } => {
                if origin.distance_to(at) > self.activation_distance {
                    debug!(?source, "Drag activated");
                    self.state = DragState::Dragging {
                        source: source.clone(),
                        over,
                    };
                }
            }
            DragState::Dragging { over: current, .. } => {
                *current = over;
            }
        }
    }

    /// Finish the gesture
    ///
    /// `over` is the target under the pointer at release. Returns `None` for
    /// clicks and for releases outside any target, even after hovering one.
    pub fn pointer_up(&mut self, at: Point, over: Option<DropTarget>) -> Option<DropIntent> {
        self.pointer_move(at, over.clone());

        let state = std::mem::replace(&mut self.state, DragState::Idle);
        match state {
            DragState::Dragging { source, over } => match over {
                Some(target) => Some(DropIntent { source, target }),
                None => {
                    debug!(?source, "Dropped outside any target");
                    None
                }
            },
            _ => None,
        }
    }

    /// Abandon the gesture in progress
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
