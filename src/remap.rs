//! output identifier substitutions

use std::collections::HashMap;

/// Fixed code renames applied after a flag's alpha-2 code is derived and
/// before the output filename is built.
#[derive(Debug, Clone)]
pub struct RemapTable(HashMap<String, String>);

impl Default for RemapTable {
    fn default() -> Self {
        // SE is renamed to SW to match the AIS flag code, add other name
        // changes here
        [("SE", "SW")].into_iter().collect()
    }
}

impl RemapTable {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// The output code for `code`: the remapped value when the table has an
    /// entry for it, otherwise the code unchanged.
    pub fn apply<'a>(&'a self, code: &'a str) -> &'a str {
        self.0.get(code).map(String::as_str).unwrap_or(code)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RemapTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(from, to)| (from.to_owned(), to.to_owned()))
                .collect(),
        )
    }
}
