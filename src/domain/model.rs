use std::fmt;

/// A single astronaut: full name and the spacecraft they are currently on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    pub name: String,
    pub craft: String,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, craft: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            craft: craft.into(),
        }
    }
}

impl fmt::Display for CrewMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.craft)
    }
}

/// A spacecraft and its crew, in the order the source listed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Craft {
    pub name: String,
    pub crew: Vec<CrewMember>,
}

impl Craft {
    pub fn new(name: impl Into<String>, crew: Vec<CrewMember>) -> Self {
        Self {
            name: name.into(),
            crew,
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

impl fmt::Display for Craft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} crew ({}):", self.name, self.crew.len())?;
        for (i, member) in self.crew.iter().enumerate() {
            if i == 0 {
                write!(f, " {}", member)?;
            } else {
                write!(f, ", {}", member)?;
            }
        }
        Ok(())
    }
}
