use std::fmt;

/// A resolved enum constant: the wire integer id plus the variant name the
/// schema maps it to. Ordering and equality are id-first, so values resolved
/// through the same descriptor compare consistently.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnumValue {
    pub id: i32,
    pub name: String,
}

impl EnumValue {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}
