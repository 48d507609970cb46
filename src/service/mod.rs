crate::reexport!(row);
crate::reexport!(facade);

use crate::*;
