//! Navigation helpers for virtual machine pages.

use crate::domain::entities::Resource;
use crate::domain::navigator::Navigator;
use crate::domain::wizard::{ListTab, VmTab};
use crate::routes::RouteBuilder;
use regex::Regex;

/// Returns whether `pathname` shows the resource called `name`.
///
/// The name must be a whole path segment, so `vm1` does not match a page of
/// `vm10`.
pub fn is_viewing(name: &str, pathname: &str) -> bool {
    match Regex::new(&format!("/{}(/|$)", regex::escape(name))) {
        Ok(re) => re.is_match(pathname),
        Err(e) => {
            tracing::warn!(name, error = %e, "cannot build resource path pattern");
            false
        }
    }
}

/// Leaves the page of a resource that was just deleted.
///
/// When the current location shows `entity`, navigates to the virtual machine
/// list of its namespace (on `tab`, if given) and returns `true`. Otherwise
/// nothing happens and `false` is returned.
///
/// Must be called after the deletion has been acknowledged, or the location
/// check races against the page being torn down.
pub fn redirect_if_viewing_deleted(
    entity: &dyn Resource,
    tab: Option<ListTab>,
    navigator: &dyn Navigator,
    routes: &dyn RouteBuilder,
) -> bool {
    let Some(pathname) = navigator.current_pathname() else {
        return false;
    };

    if !is_viewing(entity.name(), &pathname) {
        return false;
    }

    let target = routes.list(entity.namespace(), tab.unwrap_or_default());
    tracing::info!(
        name = entity.name(),
        from = %pathname,
        to = %target,
        "redirecting away from deleted resource"
    );
    navigator.push(&target);
    true
}

/// Link to a tab of a virtual machine's page.
pub fn vm_tab_url(vm: &dyn Resource, tab: VmTab, routes: &dyn RouteBuilder) -> String {
    routes.vm_tab(vm.namespace(), vm.name(), tab)
}

/// Navigates to `tab_path` unless the current location already contains it.
///
/// Returns `true` when a navigation was issued.
pub fn redirect_to_tab(tab_path: &str, navigator: &dyn Navigator) -> bool {
    if navigator
        .current_pathname()
        .is_some_and(|current| current.contains(tab_path))
    {
        return false;
    }

    navigator.push(tab_path);
    true
}
