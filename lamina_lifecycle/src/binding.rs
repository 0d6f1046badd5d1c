// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use smallvec::SmallVec;

use lamina_decoration::DecorationContainer;
use lamina_states::{StateCollector, StateInput, StateTag, Stateful, TagSet};

use crate::hooks::{BindingEvent, HostHooks};
use crate::subscription::Subscription;

/// Per-attachment lifecycle coordinator.
///
/// A binding moves strictly between two states, uninstalled and
/// installed. [`install`](Self::install) subscribes only to what the
/// candidate decorations can actually use: focus tracking when some
/// candidate declares the `focused` tag, hover tracking when one
/// declares `hover`, an enabled-property listener when enabled or
/// disabled appear, and hierarchy plus sibling tracking always. The
/// collector is configured to match, so collected tag sets and live
/// subscriptions never disagree.
///
/// [`uninstall`](Self::uninstall) drops subscriptions in reverse
/// attachment order and clears all per-instance state. Both calls are
/// idempotent. Single-threaded by contract; the host must marshal
/// cross-thread mutations onto its UI thread before notifying.
#[derive(Debug, Default)]
pub struct StateBinding {
    collector: Option<StateCollector>,
    states: TagSet,
    subscriptions: SmallVec<[Subscription; 4]>,
    sections: Vec<StateBinding>,
    updates_allowed: bool,
}

impl StateBinding {
    /// Creates an uninstalled binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the binding is currently installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.collector.is_some()
    }

    /// The most recently collected tag set; empty when uninstalled.
    #[must_use]
    pub fn states(&self) -> &TagSet {
        &self.states
    }

    /// Enables or disables relayout/repaint requests.
    ///
    /// Cleared during teardown so that recursive notifications cannot
    /// schedule work against a component that is going away.
    pub fn set_updates_allowed(&mut self, allowed: bool) {
        self.updates_allowed = allowed;
    }

    /// Registers a child binding for a decorated sub-section.
    ///
    /// Section bindings are refreshed whenever this binding's states
    /// change, and dropped (releasing their subscriptions) on
    /// uninstall.
    pub fn add_section(&mut self, section: StateBinding) {
        self.sections.push(section);
    }

    /// The registered section bindings.
    #[must_use]
    pub fn sections(&self) -> &[StateBinding] {
        &self.sections
    }

    /// Installs the binding: collects the initial tag set and attaches
    /// the subscriptions the candidates call for.
    ///
    /// A second install on an installed binding is ignored.
    pub fn install(
        &mut self,
        hooks: &mut dyn HostHooks,
        candidates: &DecorationContainer,
        collector: StateCollector,
        input: &StateInput,
        contributors: &[&dyn Stateful],
    ) {
        if self.is_installed() {
            log::debug!("install on an installed binding ignored");
            return;
        }

        let track_focus = candidates.requires(&StateTag::FOCUSED);
        let track_hover = candidates.requires(&StateTag::HOVER);
        let collector = collector
            .with_focus_tracking(track_focus)
            .with_hover_tracking(track_hover);

        if track_focus {
            self.subscriptions.push(hooks.subscribe_focus());
        }
        if track_hover {
            self.subscriptions.push(hooks.subscribe_hover());
        }
        if candidates.requires(&StateTag::ENABLED) || candidates.requires(&StateTag::DISABLED) {
            self.subscriptions.push(hooks.subscribe_property("enabled"));
        }
        self.subscriptions.push(hooks.subscribe_hierarchy());
        self.subscriptions.push(hooks.subscribe_siblings());

        self.states = collector.collect(input, contributors);
        self.collector = Some(collector);
        self.updates_allowed = true;
        log::trace!("installed binding, initial states `{}`", self.states.cache_key());
    }

    /// Handles a tracked event: recollects tags and, when the list
    /// actually changed, refreshes section bindings and requests
    /// relayout plus repaint.
    ///
    /// Returns whether the tag set changed. Ignored while uninstalled.
    pub fn on_event(
        &mut self,
        hooks: &mut dyn HostHooks,
        event: BindingEvent,
        input: &StateInput,
        contributors: &[&dyn Stateful],
    ) -> bool {
        if !self.is_installed() {
            log::debug!("event `{event}` on an uninstalled binding ignored");
            return false;
        }
        let changed = self.refresh(input, contributors);
        if changed {
            log::trace!("event `{event}` changed states to `{}`", self.states.cache_key());
            if self.updates_allowed {
                hooks.request_relayout();
                hooks.request_repaint();
            }
        }
        changed
    }

    /// Uninstalls: detaches subscriptions in reverse attachment order
    /// and clears per-instance state.
    ///
    /// Uninstalling an uninstalled binding is a no-op.
    pub fn uninstall(&mut self) {
        if !self.is_installed() {
            log::debug!("uninstall on an uninstalled binding ignored");
            return;
        }
        self.updates_allowed = false;
        while let Some(subscription) = self.subscriptions.pop() {
            subscription.release();
        }
        self.sections.clear();
        self.states = TagSet::empty();
        self.collector = None;
        log::trace!("uninstalled binding");
    }

    /// Recollects tags for this binding and, on change, every section.
    fn refresh(&mut self, input: &StateInput, contributors: &[&dyn Stateful]) -> bool {
        let Some(collector) = &self.collector else {
            return false;
        };
        let next = collector.collect(input, contributors);
        if next == self.states {
            return false;
        }
        self.states = next;
        for section in &mut self.sections {
            section.refresh(input, contributors);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use lamina_decoration::Decoration;

    /// Records every hook interaction in order.
    #[derive(Default)]
    struct RecordingHooks {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingHooks {
        fn subscription(&self, label: &'static str) -> Subscription {
            let calls = Rc::clone(&self.calls);
            self.calls.borrow_mut().push(alloc::format!("attach:{label}"));
            Subscription::new(label, move || {
                calls.borrow_mut().push(alloc::format!("detach:{label}"));
            })
        }

        fn take(&self) -> Vec<String> {
            core::mem::take(&mut *self.calls.borrow_mut())
        }
    }

    impl HostHooks for RecordingHooks {
        fn subscribe_focus(&mut self) -> Subscription {
            self.subscription("focus")
        }

        fn subscribe_hover(&mut self) -> Subscription {
            self.subscription("hover")
        }

        fn subscribe_hierarchy(&mut self) -> Subscription {
            self.subscription("hierarchy")
        }

        fn subscribe_siblings(&mut self) -> Subscription {
            self.subscription("siblings")
        }

        fn subscribe_property(&mut self, name: &str) -> Subscription {
            assert_eq!(name, "enabled");
            self.subscription("property")
        }

        fn request_relayout(&mut self) {
            self.calls.borrow_mut().push("relayout".into());
        }

        fn request_repaint(&mut self) {
            self.calls.borrow_mut().push("repaint".into());
        }
    }

    fn collector() -> StateCollector {
        StateCollector::new(StateTag::new_static("linux"))
    }

    fn candidates(tags: &[StateTag]) -> DecorationContainer {
        let mut container = DecorationContainer::new();
        container.push(Decoration::new(TagSet::empty()));
        container.push(Decoration::new(TagSet::from_tags(tags.iter().cloned())));
        container
    }

    #[test]
    fn subscribes_only_to_declared_tags() {
        let mut hooks = RecordingHooks::default();
        let mut binding = StateBinding::new();
        let container = candidates(&[StateTag::HOVER]);
        binding.install(&mut hooks, &container, collector(), &StateInput::default(), &[]);

        // Hover is declared; focus is not. Hierarchy and sibling
        // tracking always attach.
        assert_eq!(
            hooks.take(),
            ["attach:hover", "attach:hierarchy", "attach:siblings"]
        );
        assert!(binding.is_installed());
        assert!(binding.states().contains(&StateTag::ENABLED));
    }

    #[test]
    fn enabled_tag_attaches_property_listener() {
        let mut hooks = RecordingHooks::default();
        let mut binding = StateBinding::new();
        let container = candidates(&[StateTag::DISABLED, StateTag::FOCUSED]);
        binding.install(&mut hooks, &container, collector(), &StateInput::default(), &[]);
        assert_eq!(
            hooks.take(),
            ["attach:focus", "attach:property", "attach:hierarchy", "attach:siblings"]
        );
    }

    #[test]
    fn uninstall_detaches_in_reverse_order() {
        let mut hooks = RecordingHooks::default();
        let mut binding = StateBinding::new();
        let container = candidates(&[StateTag::FOCUSED, StateTag::HOVER]);
        binding.install(&mut hooks, &container, collector(), &StateInput::default(), &[]);
        hooks.take();

        binding.uninstall();
        assert_eq!(
            hooks.take(),
            ["detach:siblings", "detach:hierarchy", "detach:hover", "detach:focus"]
        );
        assert!(!binding.is_installed());
        assert!(binding.states().is_empty());
    }

    #[test]
    fn install_and_uninstall_are_idempotent() {
        let mut hooks = RecordingHooks::default();
        let mut binding = StateBinding::new();
        let container = candidates(&[StateTag::HOVER]);
        binding.install(&mut hooks, &container, collector(), &StateInput::default(), &[]);
        hooks.take();

        // Re-install attaches nothing.
        binding.install(&mut hooks, &container, collector(), &StateInput::default(), &[]);
        assert!(hooks.take().is_empty());

        binding.uninstall();
        hooks.take();
        binding.uninstall();
        assert!(hooks.take().is_empty());
    }

    #[test]
    fn unchanged_states_request_nothing() {
        let mut hooks = RecordingHooks::default();
        let mut binding = StateBinding::new();
        let container = candidates(&[StateTag::FOCUSED]);
        let input = StateInput::default();
        binding.install(&mut hooks, &container, collector(), &input, &[]);
        hooks.take();

        let changed = binding.on_event(&mut hooks, BindingEvent::HierarchyChanged, &input, &[]);
        assert!(!changed);
        assert!(hooks.take().is_empty());
    }

    #[test]
    fn changed_states_request_relayout_then_repaint() {
        let mut hooks = RecordingHooks::default();
        let mut binding = StateBinding::new();
        let container = candidates(&[StateTag::FOCUSED]);
        binding.install(&mut hooks, &container, collector(), &StateInput::default(), &[]);
        hooks.take();

        let focused = StateInput {
            focused: true,
            ..StateInput::default()
        };
        let changed = binding.on_event(&mut hooks, BindingEvent::FocusGained, &focused, &[]);
        assert!(changed);
        assert!(binding.states().contains(&StateTag::FOCUSED));
        assert_eq!(hooks.take(), ["relayout", "repaint"]);
    }

    #[test]
    fn updates_blocked_still_record_new_states() {
        let mut hooks = RecordingHooks::default();
        let mut binding = StateBinding::new();
        let container = candidates(&[StateTag::FOCUSED]);
        binding.install(&mut hooks, &container, collector(), &StateInput::default(), &[]);
        hooks.take();
        binding.set_updates_allowed(false);

        let focused = StateInput {
            focused: true,
            ..StateInput::default()
        };
        let changed = binding.on_event(&mut hooks, BindingEvent::FocusGained, &focused, &[]);
        assert!(changed);
        assert!(hooks.take().is_empty());
    }

    #[test]
    fn sections_follow_the_parent() {
        let mut hooks = RecordingHooks::default();
        let mut parent = StateBinding::new();
        let container = candidates(&[StateTag::FOCUSED]);
        parent.install(&mut hooks, &container, collector(), &StateInput::default(), &[]);

        let mut section = StateBinding::new();
        let section_container = candidates(&[]);
        section.install(
            &mut hooks,
            &section_container,
            collector(),
            &StateInput::default(),
            &[],
        );
        parent.add_section(section);
        hooks.take();

        let focused = StateInput {
            focused: true,
            ..StateInput::default()
        };
        parent.on_event(&mut hooks, BindingEvent::FocusGained, &focused, &[]);
        // The parent tracks focus; the section's collector does not, so
        // its tag set stays put while the parent's gains `focused`.
        assert!(parent.states().contains(&StateTag::FOCUSED));
        assert!(!parent.sections()[0].states().contains(&StateTag::FOCUSED));
    }

    #[test]
    fn events_on_uninstalled_bindings_are_ignored() {
        let mut hooks = RecordingHooks::default();
        let mut binding = StateBinding::new();
        let changed = binding.on_event(
            &mut hooks,
            BindingEvent::StatesChanged,
            &StateInput::default(),
            &[],
        );
        assert!(!changed);
        assert!(hooks.take().is_empty());
    }
}
