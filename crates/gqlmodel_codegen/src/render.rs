//! Type reference rendering.
//!
//! A reference is peeled iteratively into its list layers and the named type
//! at the bottom, then rebuilt inside out in the target's syntax.

use crate::target::TypeConverter;
use gqlmodel_schema::{TypeKind, TypeRef};
use thiserror::Error;

/// Deepest wrapper chain accepted before a reference is considered cyclic.
pub const MAX_TYPE_DEPTH: usize = 32;

/// Why a type reference could not be resolved to a named type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwrapError {
    #[error("type reference nests deeper than {} levels", MAX_TYPE_DEPTH)]
    TooDeep,
    #[error("{0} wrapper has no `ofType`")]
    MissingOfType(TypeKind),
    #[error("{0} reference has no name")]
    MissingName(TypeKind),
}

/// The named type at the bottom of a reference chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NamedBase<'a> {
    pub kind: TypeKind,
    pub name: &'a str,
    pub non_null: bool,
}

/// A reference split into list layers (outermost first) and its base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Unwrapped<'a> {
    /// One entry per `LIST`, recording whether that list was `NON_NULL`.
    pub lists: Vec<bool>,
    pub base: NamedBase<'a>,
}

pub(crate) fn unwrap(ty: &TypeRef) -> Result<Unwrapped<'_>, UnwrapError> {
    let mut current = ty;
    let mut non_null = false;
    let mut lists = Vec::new();

    for _ in 0..MAX_TYPE_DEPTH {
        match current.kind {
            TypeKind::NonNull => {
                non_null = true;
                current = current
                    .of_type
                    .as_deref()
                    .ok_or(UnwrapError::MissingOfType(current.kind))?;
            }
            TypeKind::List => {
                lists.push(non_null);
                non_null = false;
                current = current
                    .of_type
                    .as_deref()
                    .ok_or(UnwrapError::MissingOfType(current.kind))?;
            }
            kind => {
                let name = current
                    .name
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .ok_or(UnwrapError::MissingName(kind))?;
                return Ok(Unwrapped {
                    lists,
                    base: NamedBase {
                        kind,
                        name,
                        non_null,
                    },
                });
            }
        }
    }

    Err(UnwrapError::TooDeep)
}

/// Renders `ty` as a type expression of the converter's language.
///
/// With `always_boxed` a scalar takes its boxed form even when non-null.
pub(crate) fn render_type<C>(
    converter: &C,
    ty: &TypeRef,
    always_boxed: bool,
) -> Result<String, UnwrapError>
where
    C: TypeConverter + ?Sized,
{
    let unwrapped = unwrap(ty)?;
    let base = unwrapped.base;
    // List elements are generic arguments, so they always take the boxed form.
    let boxed = always_boxed || !unwrapped.lists.is_empty() || !base.non_null;

    let mut rendered = converter.convert_named(base.kind, base.name, boxed);
    for _ in &unwrapped.lists {
        rendered = converter.list_of(&rendered);
    }
    Ok(rendered)
}
