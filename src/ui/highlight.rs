//! Related-link hover highlighting.

/// Union the physics, maths and question link-id lists from a hovered
/// anchor's data attributes.
///
/// Lists are comma-separated; empty attributes contribute nothing. Order is
/// preserved and duplicates are dropped.
pub fn related_link_ids(
    physics_links: Option<&str>,
    maths_links: Option<&str>,
    question_links: Option<&str>,
) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for list in [physics_links, maths_links, question_links].into_iter().flatten() {
        for id in list.split(',') {
            if id.is_empty() {
                continue;
            }
            if !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
    }
    ids
}
