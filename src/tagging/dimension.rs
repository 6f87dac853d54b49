use std::fmt;

/// One of the three acoustic axes a sample is tagged along.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Dimension {
    Pitch,
    Resonance,
    Weight,
}

impl Dimension {
    /// All dimensions in their fixed order. Combo filenames follow this order.
    pub const ALL: [Dimension; 3] = [Dimension::Pitch, Dimension::Resonance, Dimension::Weight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Pitch => "Pitch",
            Dimension::Resonance => "Resonance",
            Dimension::Weight => "Weight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dim| dim.as_str() == name)
    }

    /// The two dimensions other than `self`, in fixed order.
    pub fn others(&self) -> impl Iterator<Item = Dimension> + '_ {
        Self::ALL.into_iter().filter(move |dim| dim != self)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
