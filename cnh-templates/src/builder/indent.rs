//! Indentation configuration for generated source.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Two or four spaces; other widths render as two.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 2-space indentation, what Nuxt starters use.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(4) => "    ",
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "  ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
    }
}
