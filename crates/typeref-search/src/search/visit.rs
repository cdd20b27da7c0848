use serde::{Deserialize, Serialize};

use crate::{
    ast::{TypeLookupResult, VisitedNode},
    search::element::EnclosingElement,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitStatus {
    Continue,
    Stop,
}

/// Callback invoked by the type-inference visitor for every node it types.
pub trait TypeRequestor {
    fn accept_ast_node(
        &mut self,
        node: &VisitedNode,
        result: &TypeLookupResult,
        enclosing_element: &EnclosingElement,
    ) -> VisitStatus;
}

/// One recorded visitor callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitEvent {
    pub node: VisitedNode,
    #[serde(default)]
    pub result: TypeLookupResult,
    pub element: EnclosingElement,
}

/// Feed recorded events to `requestor` in order until it asks to stop.
/// Returns the number of events delivered.
pub fn replay<T: TypeRequestor + ?Sized>(
    requestor: &mut T,
    events: &[VisitEvent],
) -> usize {
    let mut delivered = 0;
    for event in events {
        delivered += 1;
        if requestor.accept_ast_node(&event.node, &event.result, &event.element) == VisitStatus::Stop {
            break;
        }
    }
    delivered
}
