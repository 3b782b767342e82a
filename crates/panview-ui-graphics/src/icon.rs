//! Icon handles.

use std::fmt;
use std::rc::Rc;

/// Opaque handle to an image asset, identified by name.
///
/// Icons are rendered as templates, tinted by whoever draws them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Icon {
    name: Rc<str>,
}

impl Icon {
    pub fn named(name: impl AsRef<str>) -> Self {
        Self {
            name: Rc::from(name.as_ref()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
