//! Tree Utilities
//!
//! Helper functions for folder tree rendering.

use std::collections::{HashMap, HashSet};

use crate::domain::{FolderId, PromptFolder};

type ChildrenMap<'a> = HashMap<Option<&'a FolderId>, Vec<&'a PromptFolder>>;

/// Render folders as an indented tree using recursive DFS.
/// Returns (folder, depth) pairs in display order; only children of
/// `expanded` folders are included. Folders whose parent is missing are
/// shown at the root, and so is the first-listed member of a parent cycle.
pub fn flatten_folders(folders: &[PromptFolder], expanded: &HashSet<FolderId>) -> Vec<(PromptFolder, usize)> {
    let known: HashSet<&FolderId> = folders.iter().map(|folder| &folder.id).collect();

    // Build parent -> children map, siblings keep insertion order
    let mut children_map: ChildrenMap = HashMap::new();
    for folder in folders {
        let parent = folder.parent_id.as_ref().filter(|parent| known.contains(parent));
        children_map.entry(parent).or_default().push(folder);
    }

    let mut roots: Vec<&PromptFolder> = children_map.get(&None).cloned().unwrap_or_default();
    let mut reachable = HashSet::new();
    for root in roots.iter().copied() {
        mark_subtree(root, &children_map, &mut reachable);
    }
    for folder in folders {
        if !reachable.contains(&folder.id) {
            roots.push(folder);
            mark_subtree(folder, &children_map, &mut reachable);
        }
    }

    fn collect<'a>(
        folder: &'a PromptFolder,
        depth: usize,
        children_map: &ChildrenMap<'a>,
        expanded: &HashSet<FolderId>,
        visited: &mut HashSet<&'a FolderId>,
        result: &mut Vec<(PromptFolder, usize)>,
    ) {
        if !visited.insert(&folder.id) {
            return;
        }
        result.push((folder.clone(), depth));
        if !expanded.contains(&folder.id) {
            return;
        }
        if let Some(children) = children_map.get(&Some(&folder.id)) {
            for child in children.iter().copied() {
                collect(child, depth + 1, children_map, expanded, visited, result);
            }
        }
    }

    let mut visited = HashSet::new();
    let mut result = Vec::new();
    for root in roots {
        collect(root, 0, &children_map, expanded, &mut visited, &mut result);
    }
    result
}

/// Mark `folder` and everything below it, ignoring expansion
fn mark_subtree<'a>(folder: &'a PromptFolder, children_map: &ChildrenMap<'a>, reachable: &mut HashSet<&'a FolderId>) {
    let mut stack = vec![folder];
    while let Some(current) = stack.pop() {
        if !reachable.insert(&current.id) {
            continue;
        }
        if let Some(children) = children_map.get(&Some(&current.id)) {
            stack.extend(children.iter().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_folder(id: &str, parent_id: Option<&str>) -> PromptFolder {
        let mut folder = PromptFolder::new(FolderId::new(id), format!("Folder {}", id), Utc::now());
        folder.parent_id = parent_id.map(FolderId::new);
        folder
    }

    fn order(tree: &[(PromptFolder, usize)]) -> Vec<(&str, usize)> {
        tree.iter().map(|(folder, depth)| (folder.id.as_str(), *depth)).collect()
    }

    fn all_expanded(folders: &[PromptFolder]) -> HashSet<FolderId> {
        folders.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_flatten_folders() {
        let folders = vec![
            make_folder("1", None),      // Root 1
            make_folder("2", None),      // Root 2
            make_folder("3", Some("1")), // Child of 1
            make_folder("4", Some("1")), // Child of 1
            make_folder("5", Some("3")), // Child of 3 (grandchild of 1)
        ];

        let tree = flatten_folders(&folders, &all_expanded(&folders));
        assert_eq!(order(&tree), vec![("1", 0), ("3", 1), ("5", 2), ("4", 1), ("2", 0)]);
    }

    #[test]
    fn test_collapsed_folders_hide_children() {
        let folders = vec![
            make_folder("1", None),
            make_folder("3", Some("1")),
            make_folder("5", Some("3")),
        ];

        assert_eq!(order(&flatten_folders(&folders, &HashSet::new())), vec![("1", 0)]);

        let expanded = HashSet::from([FolderId::new("1")]);
        assert_eq!(order(&flatten_folders(&folders, &expanded)), vec![("1", 0), ("3", 1)]);
    }

    #[test]
    fn test_orphans_render_at_root() {
        let folders = vec![make_folder("1", None), make_folder("2", Some("gone"))];
        let tree = flatten_folders(&folders, &all_expanded(&folders));
        assert_eq!(order(&tree), vec![("1", 0), ("2", 0)]);
    }

    #[test]
    fn test_parent_cycles_render_once() {
        let folders = vec![
            make_folder("1", None),
            make_folder("a", Some("b")),
            make_folder("b", Some("a")),
            make_folder("c", Some("b")),
        ];

        let tree = flatten_folders(&folders, &all_expanded(&folders));
        assert_eq!(order(&tree), vec![("1", 0), ("a", 0), ("b", 1), ("c", 2)]);

        let collapsed = flatten_folders(&folders, &HashSet::new());
        assert_eq!(order(&collapsed), vec![("1", 0), ("a", 0)]);
    }
}
