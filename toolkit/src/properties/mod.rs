//! свойства Unicode: карты значений, двоичные свойства, множества со строками,
//! имена значений и Script_Extensions

pub use maps::{general_category_to_mask, CodePointMapData, CodePointMapData16, CodePointMapData8};
pub use names::{
    GeneralCategoryNameToMaskMapper, PropertyEnumToValueNameMapper, PropertyValueNameToEnumMapper, PropertyValueNames,
};
pub use props::*;
pub use script::{ScriptExtensionsSet, ScriptWithExtensions, ScriptWithExtensionsBorrowed, ScriptWithExtensionsTables};
pub use sets::CodePointSetData;
pub use unicode_set::UnicodeSetData;

mod maps;
mod names;
mod props;
mod script;
mod sets;
mod unicode_set;
