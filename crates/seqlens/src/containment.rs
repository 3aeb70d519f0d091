//! Geometric containment analysis for message presentations.
//!
//! Determines which messages fall inside a combined fragment's bounding
//! rectangle. A message is contained when both of its endpoints pass the
//! boundary-inclusive point-in-rectangle test against the container's bounds.
//!
//! Container selection scans the presentation list once. Under the default
//! [`ContainmentPolicy::LastWins`], the last combined-fragment node in store
//! order becomes the container, which limits the analysis to a single region
//! even when a diagram legitimately holds several combined fragments. The
//! [`ContainmentPolicy::Strict`] policy turns that situation into an error
//! instead.

use log::debug;

use seqlens_core::{
    geometry::Bounds,
    presentation::{COMBINED_FRAGMENT_TYPE, MESSAGE_TYPE, Presentation},
};

use crate::{SeqlensError, config::ContainmentPolicy};

/// Selects the active combined-fragment container, last candidate winning.
///
/// Returns `None` when no presentation is a combined-fragment node.
pub fn select_container(presentations: &[Presentation]) -> Option<Bounds> {
    presentations
        .iter()
        .filter_map(combined_fragment_bounds)
        .last()
}

/// Selects the combined-fragment container under the given policy.
///
/// # Errors
///
/// Under [`ContainmentPolicy::Strict`], returns
/// [`SeqlensError::AmbiguousContainer`] when more than one combined-fragment
/// node is present.
pub fn select_container_with_policy(
    presentations: &[Presentation],
    policy: ContainmentPolicy,
) -> Result<Option<Bounds>, SeqlensError> {
    match policy {
        ContainmentPolicy::LastWins => Ok(select_container(presentations)),
        ContainmentPolicy::Strict => {
            let candidates: Vec<Bounds> = presentations
                .iter()
                .filter_map(combined_fragment_bounds)
                .collect();
            if candidates.len() > 1 {
                return Err(SeqlensError::AmbiguousContainer {
                    count: candidates.len(),
                });
            }
            Ok(candidates.into_iter().next())
        }
    }
}

/// Returns the labels of messages contained in the active combined fragment.
///
/// Containment requires both message endpoints to lie within the container's
/// rectangle, boundaries included. Labels are returned in presentation store
/// order. Without a container the result is empty; presentations that are not
/// two-point message links are skipped.
pub fn find_contained_messages(presentations: &[Presentation]) -> Vec<&str> {
    let Some(container) = select_container(presentations) else {
        debug!("No combined-fragment presentation found, skipping containment");
        return Vec::new();
    };
    contained_message_labels(presentations, container)
}

/// As [`find_contained_messages`], with an explicit container policy.
///
/// # Errors
///
/// Propagates [`SeqlensError::AmbiguousContainer`] from strict container
/// selection.
pub fn find_contained_messages_with_policy(
    presentations: &[Presentation],
    policy: ContainmentPolicy,
) -> Result<Vec<&str>, SeqlensError> {
    let Some(container) = select_container_with_policy(presentations, policy)? else {
        debug!("No combined-fragment presentation found, skipping containment");
        return Ok(Vec::new());
    };
    Ok(contained_message_labels(presentations, container))
}

fn contained_message_labels(presentations: &[Presentation], container: Bounds) -> Vec<&str> {
    presentations
        .iter()
        .filter_map(|presentation| match presentation {
            Presentation::Link(link) if link.element_type() == MESSAGE_TYPE => {
                let (start, end) = link.endpoints()?;
                (container.contains(start) && container.contains(end)).then(|| link.label())
            }
            _ => None,
        })
        .collect()
}

fn combined_fragment_bounds(presentation: &Presentation) -> Option<Bounds> {
    match presentation {
        Presentation::Node(node) if node.element_type() == COMBINED_FRAGMENT_TYPE => {
            Some(node.bounds())
        }
        _ => None,
    }
}
