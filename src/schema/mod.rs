crate::reexport!(value);
crate::reexport!(field);
crate::reexport!(model);
crate::reexport!(instance);

use crate::*;
use std::collections::HashMap;

/// The primary key every data-access model is expected to carry.
pub const ID_FIELD: &str = "id";

/// dtype whose values get wrapped in single quotes wherever they are interpolated.
pub const TEXT_DTYPE: &str = "text";
