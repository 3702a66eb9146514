use crate::error::LocateError;
use crate::tree::{NodeId, TreeView};

/// Finds the row whose property column names `style_name`.
///
/// Rows are searched in display order and the first match wins.
pub fn locate<V: TreeView + ?Sized>(view: &V, style_name: &str) -> Result<NodeId, LocateError> {
    let store = view.data_source().ok_or(LocateError::NoDataSource)?;
    store
        .depth_first()
        .into_iter()
        .find(|&id| store.property(id).is_some_and(|p| p.name == style_name))
        .ok_or_else(|| LocateError::StyleNotFound(style_name.to_owned()))
}

pub fn find_node<V: TreeView + ?Sized>(view: &V, style_name: &str) -> Option<NodeId> {
    locate(view, style_name).ok()
}
