//! Folder Tree
//!
//! Flat list of folders in insertion order; hierarchy comes from each
//! folder's optional parent id.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::{index_of, DomainError, DomainResult, FolderId, PromptFolder};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderTree {
    folders: Vec<PromptFolder>,
}

fn validated_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidInput("folder name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

fn not_found(id: &FolderId) -> DomainError {
    DomainError::NotFound(format!("folder {}", id))
}

impl FolderTree {
    pub fn from_folders(folders: Vec<PromptFolder>) -> Self {
        Self { folders }
    }

    pub fn all(&self) -> &[PromptFolder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn get(&self, id: &FolderId) -> Option<&PromptFolder> {
        self.folders.iter().find(|folder| &folder.id == id)
    }

    pub fn contains(&self, id: &FolderId) -> bool {
        self.get(id).is_some()
    }

    /// Append a folder. The parent is not required to exist.
    pub fn create(
        &mut self,
        id: FolderId,
        name: &str,
        color: Option<String>,
        parent_id: Option<FolderId>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<PromptFolder> {
        let mut folder = PromptFolder::new(id, validated_name(name)?, created_at);
        folder.color = color;
        folder.parent_id = parent_id;
        self.folders.push(folder.clone());
        Ok(folder)
    }

    pub fn rename(&mut self, id: &FolderId, new_name: &str) -> DomainResult<()> {
        let name = validated_name(new_name)?;
        let index = index_of(&self.folders, id).ok_or_else(|| not_found(id))?;
        self.folders[index].name = name;
        Ok(())
    }

    pub fn recolor(&mut self, id: &FolderId, color: Option<String>) -> DomainResult<()> {
        let index = index_of(&self.folders, id).ok_or_else(|| not_found(id))?;
        self.folders[index].color = color;
        Ok(())
    }

    /// Direct children of `parent` (root folders for `None`), insertion order
    pub fn children_of(&self, parent: Option<&FolderId>) -> Vec<&PromptFolder> {
        self.folders
            .iter()
            .filter(|folder| folder.is_child_of(parent))
            .collect()
    }

    /// Ids of every folder below `id`, nearest first
    pub fn descendants_of(&self, id: &FolderId) -> Vec<FolderId> {
        let mut result = Vec::new();
        let mut visited: HashSet<&FolderId> = HashSet::from([id]);
        let mut to_visit = vec![id];

        while let Some(current) = to_visit.pop() {
            for child in self.children_of(Some(current)) {
                if visited.insert(&child.id) {
                    to_visit.push(&child.id);
                    result.push(child.id.clone());
                }
            }
        }

        result
    }

    /// Remove `id` and its whole subtree; returns every removed id
    pub fn delete(&mut self, id: &FolderId) -> DomainResult<Vec<FolderId>> {
        if !self.contains(id) {
            return Err(not_found(id));
        }

        let mut removed = vec![id.clone()];
        removed.extend(self.descendants_of(id));

        let doomed: HashSet<&FolderId> = removed.iter().collect();
        self.folders.retain(|folder| !doomed.contains(&folder.id));
        Ok(removed)
    }

    /// Folders whose parent id points at a folder that no longer exists,
    /// plus folders whose parent chain loops back on itself
    pub fn orphans(&self) -> Vec<&PromptFolder> {
        let known: HashSet<&FolderId> = self.folders.iter().map(|folder| &folder.id).collect();
        self.folders
            .iter()
            .filter(|folder| match &folder.parent_id {
                Some(parent) => !known.contains(parent) || self.in_parent_cycle(folder),
                None => false,
            })
            .collect()
    }

    fn in_parent_cycle(&self, folder: &PromptFolder) -> bool {
        let mut seen: HashSet<&FolderId> = HashSet::new();
        let mut current = folder.parent_id.as_ref();
        while let Some(id) = current {
            if id == &folder.id {
                return true;
            }
            if !seen.insert(id) {
                return false;
            }
            current = self.get(id).and_then(|parent| parent.parent_id.as_ref());
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(entries: &[(&str, Option<&str>)]) -> FolderTree {
        let mut tree = FolderTree::default();
        for (id, parent) in entries {
            tree.create(
                FolderId::new(*id),
                &format!("Folder {}", id),
                None,
                parent.map(FolderId::new),
                Utc::now(),
            )
            .unwrap();
        }
        tree
    }

    fn ids(folders: &[&PromptFolder]) -> Vec<String> {
        folders.iter().map(|f| f.id.to_string()).collect()
    }

    #[test]
    fn test_create_trims_and_validates_name() {
        let mut tree = FolderTree::default();
        let folder = tree.create(FolderId::new("f1"), "  Work  ", Some("#ff0000".to_string()), None, Utc::now()).unwrap();
        assert_eq!(folder.name, "Work");
        assert_eq!(folder.color.as_deref(), Some("#ff0000"));

        let err = tree.create(FolderId::new("f2"), "   ", None, None, Utc::now()).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_create_accepts_unknown_parent() {
        let tree = tree_with(&[("f1", Some("missing"))]);
        assert_eq!(tree.len(), 1);
        assert_eq!(ids(&tree.orphans()), vec!["f1"]);
    }

    #[test]
    fn test_children_in_insertion_order() {
        let tree = tree_with(&[("a", None), ("b", Some("a")), ("c", None), ("d", Some("a"))]);
        assert_eq!(ids(&tree.children_of(None)), vec!["a", "c"]);
        assert_eq!(ids(&tree.children_of(Some(&FolderId::new("a")))), vec!["b", "d"]);
        assert!(tree.children_of(Some(&FolderId::new("c"))).is_empty());
    }

    #[test]
    fn test_rename() {
        let mut tree = tree_with(&[("a", None)]);
        tree.rename(&FolderId::new("a"), " Renamed ").unwrap();
        assert_eq!(tree.get(&FolderId::new("a")).unwrap().name, "Renamed");

        assert!(tree.rename(&FolderId::new("a"), "").unwrap_err().is_invalid_input());
        assert!(tree.rename(&FolderId::new("zzz"), "Name").unwrap_err().is_not_found());
    }

    #[test]
    fn test_recolor() {
        let mut tree = tree_with(&[("a", None)]);
        tree.recolor(&FolderId::new("a"), Some("#00ff00".to_string())).unwrap();
        assert_eq!(tree.get(&FolderId::new("a")).unwrap().color.as_deref(), Some("#00ff00"));
        assert!(tree.recolor(&FolderId::new("b"), None).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_removes_subtree() {
        let mut tree = tree_with(&[
            ("a", None),
            ("b", Some("a")),
            ("c", Some("b")),
            ("d", Some("c")),
            ("e", None),
        ]);

        let mut removed = tree.delete(&FolderId::new("a")).unwrap();
        removed.sort();
        assert_eq!(removed, vec![FolderId::new("a"), FolderId::new("b"), FolderId::new("c"), FolderId::new("d")]);
        assert_eq!(ids(&tree.children_of(None)), vec!["e"]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_delete_unknown() {
        let mut tree = tree_with(&[("a", None)]);
        assert!(tree.delete(&FolderId::new("b")).unwrap_err().is_not_found());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_descendants_survive_cycles() {
        let tree = tree_with(&[("a", Some("b")), ("b", Some("a"))]);
        let descendants = tree.descendants_of(&FolderId::new("a"));
        assert_eq!(descendants, vec![FolderId::new("b")]);
    }

    #[test]
    fn test_cycle_members_are_orphans() {
        let tree = tree_with(&[("root", None), ("a", Some("b")), ("b", Some("a")), ("c", Some("b")), ("d", Some("root"))]);
        assert_eq!(ids(&tree.orphans()), vec!["a", "b"]);
    }
}
