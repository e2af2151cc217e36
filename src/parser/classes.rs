//! Class, interface, and trait extraction.
//!
//! This module turns class-like declarations in the PHP AST into owned
//! [`ClassInfo`] values: the parent and used traits as written, the
//! declared properties with their docblocks and the source text of
//! their default values, and the declared methods with their modifiers.

use mago_span::{HasSpan, Span};
use mago_syntax::ast::*;

use crate::docblock;
use crate::types::*;

use super::{DocblockCtx, extract_visibility};

/// Extract the class-like declarations among `statements`, all declared
/// in `namespace`.
pub(crate) fn extract_classes_from_statements<'a>(
    statements: impl Iterator<Item = &'a Statement<'a>>,
    classes: &mut Vec<ClassInfo>,
    doc_ctx: &DocblockCtx<'a>,
    namespace: Option<&str>,
) {
    for statement in statements {
        match statement {
            Statement::Class(class) => {
                let parent_class = class
                    .extends
                    .as_ref()
                    .and_then(|ext| ext.types.first().map(|ident| ident.value().to_string()));

                let members = extract_class_like_members(class.members.iter(), doc_ctx, false);

                classes.push(ClassInfo {
                    kind: ClassLikeKind::Class,
                    name: class.name.value.to_string(),
                    namespace: namespace.map(str::to_string),
                    parent_class,
                    used_traits: members.used_traits,
                    properties: members.properties,
                    methods: members.methods,
                });
            }
            Statement::Interface(iface) => {
                // Interfaces may extend several interfaces; the first one
                // stands in as the parent for single-inheritance walks.
                let parent_class = iface
                    .extends
                    .as_ref()
                    .and_then(|ext| ext.types.first().map(|ident| ident.value().to_string()));

                let members = extract_class_like_members(iface.members.iter(), doc_ctx, true);

                classes.push(ClassInfo {
                    kind: ClassLikeKind::Interface,
                    name: iface.name.value.to_string(),
                    namespace: namespace.map(str::to_string),
                    parent_class,
                    used_traits: vec![],
                    properties: vec![],
                    methods: members.methods,
                });
            }
            Statement::Trait(trait_def) => {
                let members = extract_class_like_members(trait_def.members.iter(), doc_ctx, false);

                classes.push(ClassInfo {
                    kind: ClassLikeKind::Trait,
                    name: trait_def.name.value.to_string(),
                    namespace: namespace.map(str::to_string),
                    parent_class: None,
                    used_traits: members.used_traits,
                    properties: members.properties,
                    methods: members.methods,
                });
            }
            _ => {}
        }
    }
}

/// Members collected from one class-like body.
#[derive(Default)]
struct ExtractedMembers {
    properties: Vec<PropertyInfo>,
    methods: Vec<MethodInfo>,
    used_traits: Vec<String>,
}

/// Extract properties, methods, and used trait names from class-like
/// members.  Interface methods are implicitly abstract.
fn extract_class_like_members<'a>(
    members: impl Iterator<Item = &'a ClassLikeMember<'a>>,
    doc_ctx: &DocblockCtx<'a>,
    is_interface: bool,
) -> ExtractedMembers {
    let mut extracted = ExtractedMembers::default();

    for member in members {
        match member {
            ClassLikeMember::Method(method) => {
                let name = method.name.value.to_string();

                // Promoted constructor parameters are properties too.  Their
                // docblock is the one written directly above the parameter.
                if name.eq_ignore_ascii_case("__construct") {
                    for param in method.parameter_list.parameters.iter() {
                        if !param.is_promoted_property() {
                            continue;
                        }
                        let raw_name = param.variable.name.to_string();
                        extracted.properties.push(PropertyInfo {
                            name: raw_name.strip_prefix('$').unwrap_or(&raw_name).to_string(),
                            doc_comment: docblock::get_docblock_text_for_node(
                                doc_ctx.trivias,
                                doc_ctx.content,
                                param,
                            )
                            .map(str::to_string),
                            visibility: extract_visibility(param.modifiers.iter()),
                            is_static: false,
                            default_value: None,
                        });
                    }
                }

                extracted.methods.push(MethodInfo {
                    name,
                    visibility: extract_visibility(method.modifiers.iter()),
                    is_static: method.modifiers.iter().any(|m| m.is_static()),
                    is_abstract: is_interface || method.modifiers.contains_abstract(),
                    is_final: method.modifiers.contains_final(),
                });
            }
            ClassLikeMember::Property(property) => {
                let doc_comment =
                    docblock::get_docblock_text_for_node(doc_ctx.trivias, doc_ctx.content, member)
                        .map(str::to_string);
                let is_static = property.modifiers().iter().any(|m| m.is_static());
                let visibility = extract_visibility(property.modifiers().iter());

                for item in property_items(property) {
                    let raw_name = item.variable().name.to_string();
                    let default_value = match item {
                        PropertyItem::Concrete(concrete) => {
                            source_text(doc_ctx.content, concrete.value.span())
                        }
                        PropertyItem::Abstract(_) => None,
                    };
                    extracted.properties.push(PropertyInfo {
                        name: raw_name.strip_prefix('$').unwrap_or(&raw_name).to_string(),
                        doc_comment: doc_comment.clone(),
                        visibility,
                        is_static,
                        default_value,
                    });
                }
            }
            ClassLikeMember::TraitUse(trait_use) => {
                for trait_name in trait_use.trait_names.iter() {
                    extracted.used_traits.push(trait_name.value().to_string());
                }
            }
            _ => {}
        }
    }

    extracted
}

/// The items of a property declaration: every `$name [= value]` of a plain
/// declaration, or the single item of a hooked one.
fn property_items<'p, 'a>(property: &'p Property<'a>) -> Vec<&'p PropertyItem<'a>> {
    match property {
        Property::Plain(plain) => plain.items.iter().collect(),
        Property::Hooked(hooked) => vec![&hooked.item],
    }
}

/// The source text covered by `span`, trimmed.
fn source_text(content: &str, span: Span) -> Option<String> {
    content
        .get(span.start.offset as usize..span.end.offset as usize)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
