//! Mutation operations.
//!
//! Class-level operations edit the first matching declaration of the file's
//! declaration unit and ignore the rest. Add operations are idempotent and
//! remove operations do nothing when their target is absent.

mod array;
mod class;
mod config;
mod import;
mod method;

use pk_ir::{ClassKind, ClassLike};

pub use array::{AddToArray, RemoveFromArray};
pub use class::{AddInterface, AddTrait, RemoveInterface, RemoveTrait};
pub use config::SetConfigValue;
pub use import::{AddImport, RemoveImport};
pub use method::{AddMethod, RemoveMethod};

/// Class-level operations act on classes only: interfaces, traits and enums
/// declared before the class are skipped.
const CLASSES: &[ClassKind] = &[ClassKind::Class];

/// Latch that lets an operation claim the first declaration it visits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FirstDeclaration {
    taken: bool,
}

impl FirstDeclaration {
    /// `true` exactly once: for the first visited declaration of `kinds`.
    pub(crate) fn claim(&mut self, class: &ClassLike, kinds: &[ClassKind]) -> bool {
        if self.taken || !kinds.contains(&class.kind) {
            return false;
        }
        self.taken = true;
        true
    }
}
