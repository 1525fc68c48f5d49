use std::fmt;

/// Coarse shape guess from chain length alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    CompactSpherical,
    MediumWithDomains,
    ElongatedMultidomain,
}

impl ShapeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeCategory::CompactSpherical => "Compact/Spherical",
            ShapeCategory::MediumWithDomains => "Medium, possibly with domains",
            ShapeCategory::ElongatedMultidomain => "Probably elongated/multidomain",
        }
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_shape(length: usize) -> ShapeCategory {
    match length {
        0..=99 => ShapeCategory::CompactSpherical,
        100..=299 => ShapeCategory::MediumWithDomains,
        _ => ShapeCategory::ElongatedMultidomain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_thresholds() {
        assert_eq!(classify_shape(0), ShapeCategory::CompactSpherical);
        assert_eq!(classify_shape(99), ShapeCategory::CompactSpherical);
        assert_eq!(classify_shape(100), ShapeCategory::MediumWithDomains);
        assert_eq!(classify_shape(299), ShapeCategory::MediumWithDomains);
        assert_eq!(classify_shape(300), ShapeCategory::ElongatedMultidomain);
    }

    #[test]
    fn test_shape_labels() {
        assert_eq!(ShapeCategory::CompactSpherical.to_string(), "Compact/Spherical");
        assert_eq!(
            ShapeCategory::ElongatedMultidomain.label(),
            "Probably elongated/multidomain"
        );
    }
}
