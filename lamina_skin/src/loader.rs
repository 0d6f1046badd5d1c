// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptor loading: include splicing and extends resolution.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use lamina_decoration::DecorationContainer;

use crate::descriptor::{
    IncludeDescriptor, PainterDescriptor, SkinDescriptor, StyleDescriptor, compile_decorations,
};
use crate::error::SkinError;
use crate::format::Format;
use crate::schema::{PropertySchema, PropertyTable};
use crate::skin::{ComponentStyle, PainterStyle, SkinInfo, SupportedSystems};

/// Loads skin descriptors into [`SkinInfo`].
///
/// Each call to [`load_path`](Self::load_path) runs inside its own load
/// session: the include stack and the "currently loading namespace" are
/// threaded explicitly through the recursion rather than held in shared
/// state, so loads are serialized by construction — nested includes
/// cannot interleave with one another or with a second load.
#[derive(Debug)]
pub struct SkinLoader<'s> {
    schema: &'s PropertySchema,
}

/// Per-load context: root directory for include fallback plus the stack
/// of files currently being processed (cycle detection).
#[derive(Debug)]
struct LoadSession {
    root_dir: PathBuf,
    include_stack: Vec<PathBuf>,
}

impl<'s> SkinLoader<'s> {
    /// Creates a loader validating against the given schema.
    #[must_use]
    pub fn new(schema: &'s PropertySchema) -> Self {
        Self { schema }
    }

    /// Loads a skin descriptor and every descriptor it includes.
    ///
    /// Include targets are spliced depth-first, before the including
    /// file's own styles, and before any `extends` resolution; a style
    /// may therefore extend one declared in an included fragment.
    pub fn load_path(&self, path: &Path) -> Result<SkinInfo, SkinError> {
        let descriptor: SkinDescriptor = Format::guess_and_read_path(path)?;
        let root_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let mut session = LoadSession {
            root_dir: root_dir.clone(),
            include_stack: vec![std::fs::canonicalize(path)?],
        };

        let mut flat: Vec<(String, StyleDescriptor)> = Vec::new();
        self.flatten(
            &mut session,
            &root_dir,
            &descriptor.namespace,
            &descriptor.includes,
            &descriptor.styles,
            &mut flat,
        )?;
        let styles = self.resolve_styles(flat)?;

        log::info!(
            "loaded skin `{}` from {}: {} style(s)",
            descriptor.id,
            path.display(),
            styles.len()
        );
        Ok(SkinInfo::new(
            descriptor.id,
            descriptor.name,
            descriptor.description,
            descriptor.author,
            SupportedSystems::parse(&descriptor.supported_systems),
            descriptor.namespace,
            descriptor.extends,
            styles,
        ))
    }

    /// Splices includes depth-first, then appends the file's own styles,
    /// tagging every style with the namespace in effect at that point.
    fn flatten(
        &self,
        session: &mut LoadSession,
        current_dir: &Path,
        namespace: &str,
        includes: &[IncludeDescriptor],
        styles: &[StyleDescriptor],
        out: &mut Vec<(String, StyleDescriptor)>,
    ) -> Result<(), SkinError> {
        for include in includes {
            let target = resolve_include_path(session, current_dir, &include.path)?;
            if session.include_stack.contains(&target) {
                return Err(SkinError::IncludeCycle { path: target });
            }

            let fragment: SkinDescriptor = Format::guess_and_read_path(&target)?;
            // The fragment's own namespace declaration beats the include
            // directive's override; both beat the enclosing namespace.
            let effective = if !fragment.namespace.is_empty() {
                fragment.namespace.clone()
            } else if let Some(ns) = &include.namespace {
                ns.clone()
            } else {
                namespace.to_owned()
            };

            session.include_stack.push(target.clone());
            let fragment_dir = target
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf();
            self.flatten(
                session,
                &fragment_dir,
                &effective,
                &fragment.includes,
                &fragment.styles,
                out,
            )?;
            session.include_stack.pop();
        }

        for style in styles {
            out.push((namespace.to_owned(), style.clone()));
        }
        Ok(())
    }

    /// Resolves extends chains over the flattened declaration list.
    fn resolve_styles(
        &self,
        flat: Vec<(String, StyleDescriptor)>,
    ) -> Result<Vec<ComponentStyle>, SkinError> {
        let mut resolved: Vec<ComponentStyle> = Vec::new();
        // (kind, id) -> index of the latest earlier declaration.
        let mut by_key: HashMap<(String, String), usize> = HashMap::new();

        for (namespace, descriptor) in flat {
            let style_id = descriptor.style_id().to_owned();

            self.schema.validate(
                &style_id,
                &descriptor.component,
                PropertyTable::Component,
                &descriptor.component_props,
            )?;
            self.schema.validate(
                &style_id,
                &descriptor.component,
                PropertyTable::Ui,
                &descriptor.ui_props,
            )?;

            let own_painters =
                self.expand_painters(&style_id, &descriptor.component, &namespace, &descriptor.painters)?;
            let own_decorations = compile_decorations(
                &style_id,
                &descriptor.decorations,
                descriptor.decorations_overwrite,
            )?;

            let style = match &descriptor.extends {
                None => {
                    let mut painters = own_painters;
                    normalize_base(&mut painters, None);
                    ComponentStyle {
                        component: descriptor.component.clone(),
                        id: style_id,
                        extends_id: None,
                        component_props: descriptor.component_props.clone(),
                        ui_props: descriptor.ui_props.clone(),
                        painters,
                        decorations: own_decorations,
                    }
                }
                Some(parent_id) => {
                    let key = (descriptor.component.clone(), parent_id.clone());
                    let parent = by_key
                        .get(&key)
                        .map(|&i| &resolved[i])
                        .ok_or_else(|| SkinError::UnresolvedExtends {
                            style: style_id.clone(),
                            extends: parent_id.clone(),
                        })?;
                    merge_into_parent(
                        parent,
                        style_id,
                        parent_id.clone(),
                        &descriptor,
                        own_painters,
                        &own_decorations,
                    )
                }
            };

            by_key.insert(
                (style.component.clone(), style.id.clone()),
                resolved.len(),
            );
            resolved.push(style);
        }
        Ok(resolved)
    }

    /// Expands painter alias lists and resolves abbreviated identifiers.
    ///
    /// The returned entries keep the author's explicit `base` marking;
    /// [`normalize_base`] reduces those markings to exactly one.
    fn expand_painters(
        &self,
        style_id: &str,
        kind: &str,
        namespace: &str,
        painters: &[PainterDescriptor],
    ) -> Result<Vec<PainterStyle>, SkinError> {
        let mut expanded = Vec::new();
        for descriptor in painters {
            self.schema
                .validate(style_id, kind, PropertyTable::Painter, &descriptor.props)?;
            let painter = resolve_painter_id(namespace, &descriptor.painter);
            let props = Rc::new(descriptor.props.clone());

            let mut ids = descriptor
                .ids
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .peekable();
            if ids.peek().is_none() {
                expanded.push(PainterStyle {
                    id: "base".to_owned(),
                    painter,
                    base: descriptor.base,
                    props,
                });
                continue;
            }
            for id in ids {
                expanded.push(PainterStyle {
                    id: id.to_owned(),
                    painter: painter.clone(),
                    base: descriptor.base,
                    props: Rc::clone(&props),
                });
            }
        }
        Ok(expanded)
    }
}

/// Merges a child declaration over its resolved parent.
fn merge_into_parent(
    parent: &ComponentStyle,
    style_id: String,
    parent_id: String,
    descriptor: &StyleDescriptor,
    own_painters: Vec<PainterStyle>,
    own_decorations: &DecorationContainer,
) -> ComponentStyle {
    let mut component_props = parent.component_props.clone();
    component_props.extend(descriptor.component_props.clone());
    let mut ui_props = parent.ui_props.clone();
    ui_props.extend(descriptor.ui_props.clone());

    let mut painters = parent.painters.clone();
    let mut child_base: Option<String> = None;
    for incoming in own_painters {
        if incoming.base && child_base.is_none() {
            child_base = Some(incoming.id.clone());
        }
        match painters.iter_mut().find(|p| p.id == incoming.id) {
            Some(existing) => {
                if !incoming.painter.is_empty() {
                    existing.painter = incoming.painter;
                }
                let mut props = (*existing.props).clone();
                props.extend((*incoming.props).clone());
                existing.props = Rc::new(props);
            }
            None => painters.push(incoming),
        }
    }
    normalize_base(&mut painters, child_base.as_deref());

    let mut decorations = parent.decorations.clone();
    decorations.merge(own_decorations);

    ComponentStyle {
        component: parent.component.clone(),
        id: style_id,
        extends_id: Some(parent_id),
        component_props,
        ui_props,
        painters,
        decorations,
    }
}

/// Ensures exactly one base painter when any painters exist.
///
/// Precedence: the preferred id (a child's explicit marking) if given,
/// else the first explicitly marked entry, else the first declared.
fn normalize_base(painters: &mut [PainterStyle], preferred: Option<&str>) {
    if painters.is_empty() {
        return;
    }
    let chosen = preferred
        .and_then(|id| painters.iter().position(|p| p.id == id))
        .or_else(|| painters.iter().position(|p| p.base))
        .unwrap_or(0);
    for (i, painter) in painters.iter_mut().enumerate() {
        painter.base = i == chosen;
    }
}

/// Qualifies an abbreviated painter identifier against the namespace.
fn resolve_painter_id(namespace: &str, painter: &str) -> String {
    if painter.is_empty() || painter.contains('.') || namespace.is_empty() {
        painter.to_owned()
    } else {
        format!("{namespace}.{painter}")
    }
}

/// Resolves an include target: relative to the including file first,
/// falling back to the root skin's directory.
fn resolve_include_path(
    session: &LoadSession,
    current_dir: &Path,
    target: &str,
) -> Result<PathBuf, SkinError> {
    let relative = current_dir.join(target);
    if relative.is_file() {
        return Ok(std::fs::canonicalize(relative)?);
    }
    let from_root = session.root_dir.join(target);
    if from_root.is_file() {
        return Ok(std::fs::canonicalize(from_root)?);
    }
    Err(SkinError::IncludeNotFound {
        path: PathBuf::from(target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PropertyValue;
    use crate::schema::PropertyKind;
    use lamina_states::{StateTag, TagSet};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

    /// Creates a fresh scratch directory and writes the given files.
    fn scratch(files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "lamina_skin_test_{}_{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&dir).unwrap();
        for (name, contents) in files {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }
        dir
    }

    fn button_schema() -> PropertySchema {
        PropertySchema::new()
            .component_field("button", "opaque", PropertyKind::Bool)
            .ui_field("button", "color", PropertyKind::Color)
            .painter_field("button", "round", PropertyKind::Float)
    }

    const BASE_SKIN: &str = r##"(
        id: "web",
        name: "Web",
        supported_systems: "all",
        namespace: "lamina.web",
        styles: [
            (
                component: "button",
                painters: [(ids: "base", painter: "FlatPainter", props: {"round": Float(2.0)})],
                ui_props: {"color": Str("#ff0000")},
                decorations: [
                    (states: [], backgrounds: [(color: "#e0e0e0")]),
                    (states: ["hover"], backgrounds: [(color: "#d0d8ff")]),
                ],
            ),
            (
                component: "button",
                id: "flat",
                extends: "default",
                ui_props: {"color": Str("#0000ff")},
            ),
        ],
    )"##;

    #[test]
    fn scenario_default_flat_and_bogus() {
        let dir = scratch(&[("skin.ron", BASE_SKIN)]);
        let schema = button_schema();
        let skin = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap();

        // "flat" extends "default": same painter, overridden color.
        let flat = skin.style("button", "flat").unwrap();
        assert_eq!(flat.base_painter().unwrap().painter, "lamina.web.FlatPainter");
        assert_eq!(
            flat.base_painter().unwrap().props["round"],
            PropertyValue::Float(2.0)
        );
        assert_eq!(flat.ui_props["color"], PropertyValue::Str("#0000ff".into()));
        assert_eq!(flat.extends_id.as_deref(), Some("default"));

        let default = skin.style("button", "default").unwrap();
        assert_eq!(default.ui_props["color"], PropertyValue::Str("#ff0000".into()));

        // Unknown id degrades to default, never errors.
        let bogus = skin.style("button", "bogus").unwrap();
        assert_eq!(bogus.id, "default");
    }

    #[test]
    fn extends_inherits_decorations() {
        let dir = scratch(&[("skin.ron", BASE_SKIN)]);
        let schema = button_schema();
        let skin = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap();

        let flat = skin.style("button", "flat").unwrap();
        assert_eq!(flat.decorations.len(), 2);
        assert!(flat.decorations.requires(&StateTag::HOVER));
        let hover = TagSet::from_tags([StateTag::HOVER]);
        assert!(flat.decorations.iter().any(|d| d.states() == &hover));
    }

    #[test]
    fn includes_splice_before_local_styles() {
        let fragment = r##"(
            styles: [
                (
                    component: "scrollbar",
                    painters: [(ids: "base", painter: "BarPainter")],
                ),
            ],
        )"##;
        let root = r##"(
            id: "web",
            namespace: "lamina.web",
            includes: [(path: "parts/scrollbar.ron")],
            styles: [
                (component: "scrollbar", id: "thin", extends: "default"),
            ],
        )"##;
        let dir = scratch(&[("skin.ron", root), ("parts/scrollbar.ron", fragment)]);
        let schema = PropertySchema::new();
        let skin = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap();

        // The local style extends one declared inside the include.
        let thin = skin.style("scrollbar", "thin").unwrap();
        // The fragment inherits the enclosing namespace.
        assert_eq!(thin.base_painter().unwrap().painter, "lamina.web.BarPainter");
    }

    #[test]
    fn include_namespace_override() {
        let fragment = r##"(
            styles: [(component: "label", painters: [(ids: "base", painter: "TextPainter")])],
        )"##;
        let root = r##"(
            id: "web",
            namespace: "lamina.web",
            includes: [(namespace: "vendor.pack", path: "labels.ron")],
        )"##;
        let dir = scratch(&[("skin.ron", root), ("labels.ron", fragment)]);
        let schema = PropertySchema::new();
        let skin = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap();
        assert_eq!(
            skin.style("label", "default").unwrap().base_painter().unwrap().painter,
            "vendor.pack.TextPainter"
        );
    }

    #[test]
    fn include_cycles_are_fatal() {
        let a = r#"(includes: [(path: "b.ron")])"#;
        let b = r#"(includes: [(path: "a.ron")])"#;
        let dir = scratch(&[("a.ron", a), ("b.ron", b)]);
        let schema = PropertySchema::new();
        let err = SkinLoader::new(&schema).load_path(&dir.join("a.ron")).unwrap_err();
        assert!(matches!(err, SkinError::IncludeCycle { .. }));
    }

    #[test]
    fn painter_aliases_share_one_property_map() {
        let source = r##"(
            id: "web",
            styles: [
                (
                    component: "scrollbar",
                    painters: [
                        (ids: "track, thumb", painter: "a.PartPainter"),
                        (ids: "base", painter: "a.BarPainter", base: true),
                    ],
                ),
            ],
        )"##;
        let dir = scratch(&[("skin.ron", source)]);
        let schema = PropertySchema::new();
        let skin = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap();

        let style = skin.style("scrollbar", "default").unwrap();
        assert_eq!(style.painters.len(), 3);
        let track = style.painter("track").unwrap();
        let thumb = style.painter("thumb").unwrap();
        assert!(Rc::ptr_eq(&track.props, &thumb.props));
        // Explicit marking beats declaration order.
        assert_eq!(style.base_painter().unwrap().id, "base");
    }

    #[test]
    fn first_painter_is_base_when_none_marked() {
        let source = r##"(
            id: "web",
            styles: [
                (
                    component: "pane",
                    painters: [
                        (ids: "border", painter: "a.BorderPainter"),
                        (ids: "fill", painter: "a.FillPainter"),
                    ],
                ),
            ],
        )"##;
        let dir = scratch(&[("skin.ron", source)]);
        let schema = PropertySchema::new();
        let skin = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap();
        assert_eq!(
            skin.style("pane", "default").unwrap().base_painter().unwrap().id,
            "border"
        );
    }

    #[test]
    fn unresolved_extends_is_fatal() {
        let source = r#"(
            id: "web",
            styles: [(component: "button", id: "flat", extends: "missing")],
        )"#;
        let dir = scratch(&[("skin.ron", source)]);
        let schema = PropertySchema::new();
        let err = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap_err();
        match err {
            SkinError::UnresolvedExtends { style, extends } => {
                assert_eq!(style, "flat");
                assert_eq!(extends, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extends_does_not_see_later_declarations() {
        // "extends" resolves against earlier declarations only.
        let source = r#"(
            id: "web",
            styles: [
                (component: "button", id: "flat", extends: "default"),
                (component: "button"),
            ],
        )"#;
        let dir = scratch(&[("skin.ron", source)]);
        let schema = PropertySchema::new();
        let err = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap_err();
        assert!(matches!(err, SkinError::UnresolvedExtends { .. }));
    }

    #[test]
    fn unknown_property_fails_the_whole_load() {
        let source = r#"(
            id: "web",
            styles: [
                (component: "button", component_props: {"glow": Bool(true)}),
            ],
        )"#;
        let dir = scratch(&[("skin.ron", source)]);
        let schema = button_schema();
        let err = SkinLoader::new(&schema).load_path(&dir.join("skin.ron")).unwrap_err();
        assert!(matches!(err, SkinError::UnknownProperty { .. }));
    }

    #[test]
    fn json_descriptors_load_end_to_end() {
        // JSON spells the tagged property values and tuple gradient
        // stops explicitly; everything downstream of parsing is shared
        // with RON.
        let source = r##"{
            "id": "web",
            "namespace": "lamina.web",
            "styles": [
                {
                    "component": "button",
                    "painters": [
                        {
                            "ids": "base",
                            "painter": "FlatPainter",
                            "props": {"round": {"Float": 2.0}}
                        }
                    ],
                    "ui_props": {"color": {"Str": "#ff0000"}},
                    "decorations": [
                        {
                            "states": [],
                            "backgrounds": [
                                {
                                    "gradient": {
                                        "angle": 0.0,
                                        "stops": [[0.0, "#ffffff"], [1.0, "#000000"]]
                                    }
                                }
                            ]
                        }
                    ]
                }
            ]
        }"##;
        let dir = scratch(&[("skin.json", source)]);
        let schema = button_schema();
        let skin = SkinLoader::new(&schema).load_path(&dir.join("skin.json")).unwrap();

        let style = skin.style("button", "default").unwrap();
        let base = style.base_painter().unwrap();
        assert_eq!(base.painter, "lamina.web.FlatPainter");
        assert_eq!(base.props["round"], PropertyValue::Float(2.0));
        assert_eq!(style.ui_props["color"], PropertyValue::Str("#ff0000".into()));

        let decoration = style.decorations.iter().next().unwrap();
        match decoration.backgrounds()[0].brush.as_ref().unwrap() {
            lamina_decoration::BrushSpec::Linear { stops, .. } => assert_eq!(stops.len(), 2),
            other => panic!("unexpected brush: {other:?}"),
        }
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = scratch(&[("skin.xml", "<skin/>")]);
        let schema = PropertySchema::new();
        let err = SkinLoader::new(&schema).load_path(&dir.join("skin.xml")).unwrap_err();
        assert!(matches!(err, SkinError::UnsupportedFormat(Format::Unknown)));
    }
}
