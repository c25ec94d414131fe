use vm_wizard_links::prelude::*;

#[test]
fn test_redirects_when_viewing_deleted_vm() {
    let history = MemoryHistory::at("/k8s/ns/foo/virtualmachines/vm1/details");
    let vm = ResourceRef::new("vm1", "foo");

    assert!(redirect_if_viewing_deleted(&vm, None, &history, &ConsoleRoutes));
    assert_eq!(history.pushed(), vec!["/k8s/ns/foo/virtualmachines/".to_string()]);
    assert_eq!(
        history.current_pathname().as_deref(),
        Some("/k8s/ns/foo/virtualmachines/")
    );
}

#[test]
fn test_prefix_collision_does_not_redirect() {
    let history = MemoryHistory::at("/k8s/ns/foo/virtualmachines/vm10/details");
    let vm = ResourceRef::new("vm1", "foo");

    assert!(!redirect_if_viewing_deleted(&vm, None, &history, &ConsoleRoutes));
    assert!(history.pushed().is_empty());
}

#[test]
fn test_redirect_on_exact_end_of_path() {
    let history = MemoryHistory::at("/k8s/ns/foo/virtualmachines/vm1");
    let vm = ResourceRef::new("vm1", "foo");

    assert!(redirect_if_viewing_deleted(
        &vm,
        Some(ListTab::VirtualMachines),
        &history,
        &ConsoleRoutes
    ));
}

#[test]
fn test_deleted_template_lands_on_templates_tab() {
    let history = MemoryHistory::at("/k8s/ns/foo/vmtemplates/rhel8-server/details");
    let template = Template::new("rhel8-server", "foo");

    assert!(redirect_if_viewing_deleted(
        &template,
        Some(ListTab::Templates),
        &history,
        &ConsoleRoutes
    ));
    assert_eq!(
        history.pushed(),
        vec!["/k8s/ns/foo/virtualmachines/templates".to_string()]
    );
}

#[test]
fn test_redirect_to_tab_is_idempotent() {
    let vm = ResourceRef::new("vm1", "foo");
    let history = MemoryHistory::at("/k8s/ns/foo/virtualmachines/vm1/details");
    let consoles = vm_tab_url(&vm, VmTab::Consoles, &ConsoleRoutes);

    assert!(redirect_to_tab(&consoles, &history));
    assert!(!redirect_to_tab(&consoles, &history));
    assert_eq!(history.pushed(), vec![consoles]);
}
