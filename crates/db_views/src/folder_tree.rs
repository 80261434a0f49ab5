use crate::structs::FolderTreeNode;
use std::collections::HashMap;
use workboard_db_schema::{newtypes::FolderId, source::folder::Folder};

impl FolderTreeNode {
  /// Assembles the folder rows of an account into its tree. Returns None when no
  /// root folder exists. Children are ordered by child_order, row id breaking ties.
  pub fn build(folders: Vec<Folder>) -> Option<Self> {
    let mut children_of: HashMap<Option<FolderId>, Vec<Folder>> = HashMap::new();
    for folder in folders {
      children_of.entry(folder.parent_id).or_default().push(folder);
    }
    let root = children_of.remove(&None)?.into_iter().next()?;
    Some(assemble(root, &mut children_of))
  }
}

// Buckets are removed as they are visited, so rows whose parents form a cycle are
// dropped instead of looping.
fn assemble(
  folder: Folder,
  children_of: &mut HashMap<Option<FolderId>, Vec<Folder>>,
) -> FolderTreeNode {
  let mut rows = children_of.remove(&Some(folder.id)).unwrap_or_default();
  rows.sort_by_key(|f| (f.child_order, f.id.0));
  FolderTreeNode {
    uid: folder.uid,
    name: folder.name,
    child_order: folder.child_order,
    children: rows
      .into_iter()
      .map(|f| assemble(f, children_of))
      .collect(),
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use crate::structs::FolderTreeNode;
  use chrono::Utc;
  use pretty_assertions::assert_eq;
  use uuid::Uuid;
  use workboard_db_schema::{
    newtypes::{AccountId, FolderId},
    source::folder::Folder,
  };

  fn folder(id: i32, name: &str, parent_id: Option<i32>, child_order: i32) -> Folder {
    Folder {
      id: FolderId(id),
      uid: Uuid::new_v4(),
      name: name.into(),
      account_id: AccountId(1),
      parent_id: parent_id.map(FolderId),
      child_order,
      deleted: false,
      published: Utc::now(),
      updated: None,
    }
  }

  #[test]
  fn test_build_tree() {
    let rows = vec![
      folder(1, "root", None, 0),
      folder(4, "zz archive", Some(1), 2),
      folder(2, "applicants", Some(1), 1),
      folder(3, "phone screens", Some(2), 1),
    ];

    let tree = FolderTreeNode::build(rows).unwrap();
    assert_eq!("root", tree.name);
    assert_eq!(
      vec!["applicants", "zz archive"],
      tree
        .children
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
    );
    assert_eq!("phone screens", tree.children[0].children[0].name);
    assert!(tree.children[1].children.is_empty());
  }

  #[test]
  fn test_build_tree_sibling_order_ties() {
    let rows = vec![
      folder(1, "root", None, 0),
      folder(3, "b", Some(1), 1),
      folder(2, "a", Some(1), 1),
    ];

    let tree = FolderTreeNode::build(rows).unwrap();
    // same child_order falls back to row id
    assert_eq!(
      vec!["a", "b"],
      tree
        .children
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
    );
  }

  #[test]
  fn test_build_tree_no_root() {
    assert!(FolderTreeNode::build(vec![]).is_none());
    assert!(FolderTreeNode::build(vec![folder(2, "orphan", Some(1), 0)]).is_none());
  }
}
