//! Turning declarations into SQL text.
//!
//! Everything here is compiled once, when a [`Dao`] is defined, and reused for
//! every call afterwards. Values are interpolated straight into the SQL text,
//! there is no parameter binding and (unless [`Quoting::Escaped`] is selected)
//! no escaping either.

crate::reexport!(quoting);
crate::reexport!(template);
crate::reexport!(compiler);
crate::reexport!(statement);
crate::reexport!(declaration);
crate::reexport!(args);
crate::reexport!(dao);

use crate::*;
use std::collections::HashMap;
